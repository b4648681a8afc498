use cihui_types::{AppEvent, HuntView};
use kanal::AsyncReceiver;

/// Placeholder presentation consumer. Rendering is out of scope here; a
/// real front end replaces this loop and reads the same channel.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::WordsLoaded(count) => tracing::info!("[UI] {count} words loaded"),
            AppEvent::ShowSearchResults(words) => {
                tracing::info!("[UI] {} search results", words.len())
            }
            AppEvent::ShowRound(round) => {
                tracing::info!(
                    "[UI] round {} prompt {:?} options {:?}",
                    round.round_number,
                    round.prompt,
                    round.options
                )
            }
            AppEvent::ShowCards(cards) => tracing::info!("[UI] {} cards", cards.len()),
            AppEvent::AnswerFeedback { correct, answer } => {
                tracing::info!("[UI] answer {answer:?} correct={correct}")
            }
            AppEvent::Countdown(secs) => tracing::debug!("[UI] {secs}s left"),
            AppEvent::SessionFinished(result) => tracing::info!(
                "[UI] finished: {}/{:?}, {} mastered, {} to review",
                result.score,
                result.total,
                result.mastered.len(),
                result.needs_review.len()
            ),
            AppEvent::QuestAssigned(word) => {
                tracing::info!("[UI] quest: find {}", word.headword)
            }
            AppEvent::ShowHunt(view) => match view {
                HuntView::Found(word) => tracing::info!("[UI] found {}", word.headword),
                HuntView::QuestDone(word) => {
                    tracing::info!("[UI] quest complete: {}", word.headword)
                }
                other => tracing::info!("[UI] hunt: {other:?}"),
            },
            AppEvent::ShowNuance(nuance) => {
                tracing::info!("[UI] nuance for {}: {}", nuance.headword, nuance.summary)
            }
            AppEvent::FavoritesChanged(ids) => tracing::info!("[UI] {} favorites", ids.len()),
            AppEvent::ShowMessage(message) => tracing::info!("[UI] {message}"),
            other => tracing::debug!("[UI] unhandled event: {:?}", std::mem::discriminant(&other)),
        }
    }
    Ok(())
}
