use std::sync::Arc;
use std::time::Duration;

use cihui_ai::{HttpTutor, Tutor};
use cihui_core::WordIndex;
use cihui_source::{PushAction, WordSourceClient};
use cihui_types::{AppEvent, NuanceView, SessionSize, Word};
use kanal::{AsyncReceiver, AsyncSender};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::state::AppState;

pub mod hunting;
pub mod practice;

use practice::ActiveSession;

/// App's main loop: single consumer of the UI-to-app channel, sole owner
/// of the running practice session and the active quest. Timer tasks
/// self-send through `loopback_tx`.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (source, tutor) = {
        let config = state.config.read().await;
        let source = WordSourceClient::new(
            config.network.word_api_url.clone(),
            Duration::from_secs(config.network.request_timeout_secs),
        );
        let tutor: Option<Arc<dyn Tutor>> = if config.ai.enabled && !config.ai.api_key.is_empty() {
            Some(Arc::new(HttpTutor::new(
                config.ai.api_key.clone(),
                config.ai.api_url.clone(),
            )))
        } else {
            tracing::warn!("AI tutor disabled, explanation and hunting degrade");
            None
        };
        (source, tutor)
    };

    let mut practice: Option<ActiveSession> = None;
    let mut quest: Option<Word> = None;
    let mut rng = StdRng::from_entropy();

    tracing::info!("event loop started");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("event: {:?}", std::mem::discriminant(&event));

        handle_event(
            &state,
            &source,
            tutor.as_ref(),
            &mut practice,
            &mut quest,
            &mut rng,
            &loopback_tx,
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_event(
    state: &Arc<AppState>,
    source: &WordSourceClient,
    tutor: Option<&Arc<dyn Tutor>>,
    practice: &mut Option<ActiveSession>,
    quest: &mut Option<Word>,
    rng: &mut StdRng,
    loopback_tx: &AsyncSender<AppEvent>,
    ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ReloadWords => {
            let words = source.fetch_words_or_empty().await;
            let count = words.len();
            *state.index.write().await = WordIndex::new(words);
            ui_tx.send(AppEvent::WordsLoaded(count)).await?;
            if count == 0 {
                ui_tx
                    .send(AppEvent::ShowMessage("no data".to_string()))
                    .await?;
            }
        }
        AppEvent::SearchText(term) => {
            let results = state.index.read().await.search_all(&term);
            ui_tx.send(AppEvent::ShowSearchResults(results)).await?;
        }

        AppEvent::StartPractice { level, mode, size } => {
            // Count(0) means "whatever the configured default is"
            let size = match size {
                SessionSize::Count(0) => {
                    SessionSize::Count(state.config.read().await.practice.default_session_size)
                }
                other => other,
            };
            practice::start(state, practice, level, mode, size, rng, loopback_tx, ui_tx).await?;
        }
        AppEvent::SelectOption(index) => {
            practice::select_option(practice, index, loopback_tx, ui_tx).await?;
        }
        AppEvent::SubmitWritten(text) => {
            practice::submit_written(practice, &text, loopback_tx, ui_tx).await?;
        }
        AppEvent::FlipCard(index) => {
            practice::flip_card(practice, index, loopback_tx, ui_tx).await?;
        }
        AppEvent::AdvanceRound => practice::advance_round(practice, ui_tx).await?,
        AppEvent::ResolvePair => practice::resolve_pair(practice, ui_tx).await?,
        AppEvent::SecondTick => practice::second_tick(practice, ui_tx).await?,
        AppEvent::AbortPractice => {
            // discard outright, no in-flight round is resumed
            if let Some(session) = practice.take() {
                session.cancel.cancel();
            }
        }

        AppEvent::HuntImage(image) => {
            hunting::recognize(tutor, image, loopback_tx, ui_tx).await?;
        }
        AppEvent::HuntFragments(fragments) => {
            hunting::fragments(state, tutor, quest, &fragments, ui_tx).await?;
        }
        AppEvent::NewQuest => hunting::new_quest(state, quest, rng, ui_tx).await?,
        AppEvent::ExplainWord(word) => explain(tutor, word, ui_tx).await?,

        AppEvent::ToggleFavorite(id) => {
            let mut favorites = state.favorites.write().await;
            match favorites.toggle(&id) {
                Ok(now_favorite) => {
                    tracing::debug!(%id, favorite = now_favorite, "favorite toggled");
                    ui_tx
                        .send(AppEvent::FavoritesChanged(favorites.ids()))
                        .await?;
                }
                Err(e) => {
                    tracing::warn!("favorite toggle failed: {e}");
                    ui_tx
                        .send(AppEvent::ShowMessage(format!("could not save favorite: {e}")))
                        .await?;
                }
            }
        }
        AppEvent::AddWord(word) => push(source, PushAction::Add, word),
        AppEvent::DeleteWord(word) => push(source, PushAction::Delete, word),

        other => {
            // app-to-UI events never loop back here
            tracing::debug!("ignoring event: {:?}", std::mem::discriminant(&other));
        }
    }

    Ok(())
}

/// Word nuance explanation, fire-and-forget: a pending request never
/// blocks round progression, and a failure leaves the affordance
/// re-triggerable instead of faking an answer.
async fn explain(
    tutor: Option<&Arc<dyn Tutor>>,
    word: Word,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(tutor) = tutor else {
        ui_tx
            .send(AppEvent::ShowMessage("AI tutor is not configured".to_string()))
            .await?;
        return Ok(());
    };

    let tutor = tutor.clone();
    let ui_tx = ui_tx.clone();
    tokio::spawn(async move {
        match tutor.explain(&word).await {
            Ok(nuance) => {
                let view = NuanceView {
                    headword: word.headword.clone(),
                    summary: nuance.summary,
                    examples: nuance
                        .examples
                        .into_iter()
                        .map(|e| (e.hanzi, e.pinyin, e.meaning))
                        .collect(),
                };
                let _ = ui_tx.send(AppEvent::ShowNuance(view)).await;
            }
            Err(e) => {
                tracing::warn!("explanation failed: {e}");
                let _ = ui_tx
                    .send(AppEvent::ShowMessage("tutor unavailable, try again".to_string()))
                    .await;
            }
        }
    });
    Ok(())
}

/// Best-effort word sync; the response is not awaited by anyone.
fn push(source: &WordSourceClient, action: PushAction, word: Word) {
    let source = source.clone();
    tokio::spawn(async move {
        if let Err(e) = source.push_word(action, &word).await {
            tracing::warn!("word push failed: {e}");
        }
    });
}
