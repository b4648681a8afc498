use std::sync::Arc;

use cihui_ai::Tutor;
use cihui_core::hunter::{self, HuntReport, QuestOutcome};
use cihui_types::{AppEvent, HuntView, Word};
use kanal::AsyncSender;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::state::AppState;

/// Kick off character recognition for a captured image. The result comes
/// back through the loopback channel as `HuntFragments`, keeping the
/// event loop free while the request is in flight.
pub async fn recognize(
    tutor: Option<&Arc<dyn Tutor>>,
    image_base64: String,
    loopback_tx: &AsyncSender<AppEvent>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(tutor) = tutor else {
        ui_tx
            .send(AppEvent::ShowMessage(
                "AI recognition is not configured".to_string(),
            ))
            .await?;
        return Ok(());
    };

    let tutor = tutor.clone();
    let tx = loopback_tx.clone();
    let ui = ui_tx.clone();
    tokio::spawn(async move {
        match tutor.recognize(&image_base64).await {
            Ok(fragments) => {
                tracing::debug!("recognized {} fragments", fragments.len());
                let _ = tx.send(AppEvent::HuntFragments(fragments)).await;
            }
            Err(e) => {
                tracing::warn!("recognition failed: {e}");
                let _ = ui
                    .send(AppEvent::ShowMessage(
                        "recognition failed, try again".to_string(),
                    ))
                    .await;
            }
        }
    });
    Ok(())
}

/// Match recognized fragments against the word list. With a quest active
/// the fragments answer the quest; otherwise this is open exploration.
pub async fn fragments(
    state: &Arc<AppState>,
    tutor: Option<&Arc<dyn Tutor>>,
    quest: &mut Option<Word>,
    fragments: &[String],
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let pool = state.index.read().await.all().to_vec();

    if let Some(target) = quest.clone() {
        let view = match hunter::quest(&target, fragments, &pool) {
            QuestOutcome::Done => {
                *quest = None;
                request_culture_tip(tutor, &target, ui_tx);
                HuntView::QuestDone(target)
            }
            QuestOutcome::WrongWord(found) => HuntView::WrongWord {
                found,
                wanted: target,
            },
            QuestOutcome::Missed => HuntView::QuestMissed(target),
            QuestOutcome::NothingDetected => HuntView::NothingDetected,
        };
        ui_tx.send(AppEvent::ShowHunt(view)).await?;
        return Ok(());
    }

    let view = match hunter::explore(fragments, &pool) {
        HuntReport::Found(word) => {
            request_culture_tip(tutor, &word, ui_tx);
            HuntView::Found(word)
        }
        HuntReport::NotInList => HuntView::NotInList,
        HuntReport::NothingDetected => HuntView::NothingDetected,
    };
    ui_tx.send(AppEvent::ShowHunt(view)).await?;
    Ok(())
}

/// Assign a random word from the current list as the hunting target.
/// Replaces any quest already active.
pub async fn new_quest(
    state: &Arc<AppState>,
    quest: &mut Option<Word>,
    rng: &mut StdRng,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let picked = state.index.read().await.all().choose(rng).cloned();
    match picked {
        Some(word) => {
            tracing::info!("quest: {}", word.headword);
            *quest = Some(word.clone());
            ui_tx.send(AppEvent::QuestAssigned(word)).await?;
        }
        None => {
            ui_tx
                .send(AppEvent::ShowMessage("no words to hunt yet".to_string()))
                .await?;
        }
    }
    Ok(())
}

/// Fire-and-forget enrichment after a successful find. A failed tip never
/// invalidates the match itself.
fn request_culture_tip(tutor: Option<&Arc<dyn Tutor>>, word: &Word, ui_tx: &AsyncSender<AppEvent>) {
    let Some(tutor) = tutor else {
        return;
    };
    let tutor = tutor.clone();
    let word = word.clone();
    let ui = ui_tx.clone();
    tokio::spawn(async move {
        match tutor.culture_tip(&word).await {
            Ok(tip) => {
                let _ = ui
                    .send(AppEvent::ShowMessage(format!(
                        "{} / {} ({})",
                        tip.tip, tip.pinyin, tip.translation
                    )))
                    .await;
            }
            Err(e) => tracing::warn!("culture tip failed: {e}"),
        }
    });
}
