use std::sync::Arc;
use std::time::Duration;

use cihui_core::engine::{
    ChoiceEngine, FlipOutcome, MatchEngine, Phase, Prompt, WriteEngine,
};
use cihui_core::session::build_session;
use cihui_types::{AppEvent, CardView, Level, PracticeMode, RoundView, SessionSize, Word};
use kanal::AsyncSender;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub enum ActiveGame {
    Choice(ChoiceEngine<StdRng>),
    Match(MatchEngine),
    Write(WriteEngine),
}

/// One running practice session plus the token all of its timers hang
/// off. Cancelling the token kills pending advance timers and the Speed
/// Challenge countdown along with the session.
pub struct ActiveSession {
    pub game: ActiveGame,
    pub cancel: CancellationToken,
}

#[allow(clippy::too_many_arguments)]
pub async fn start(
    state: &Arc<AppState>,
    practice: &mut Option<ActiveSession>,
    level: Option<Level>,
    mode: PracticeMode,
    size: SessionSize,
    rng: &mut StdRng,
    loopback_tx: &AsyncSender<AppEvent>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // a fresh start always discards whatever was running
    if let Some(old) = practice.take() {
        old.cancel.cancel();
    }

    let pool = {
        let index = state.index.read().await;
        match level {
            Some(level) => index.level(level),
            None => index.all().to_vec(),
        }
    };

    let session = match build_session(&pool, mode, size, rng) {
        Ok(session) => session,
        Err(e) => {
            tracing::info!("cannot start {mode:?}: {e}");
            ui_tx.send(AppEvent::ShowMessage(e.to_string())).await?;
            return Ok(());
        }
    };
    tracing::info!("starting {mode:?} with {} words", session.words.len());

    let cancel = CancellationToken::new();
    let game = match mode {
        PracticeMode::Match => {
            let engine = MatchEngine::new(session, rng);
            ui_tx.send(AppEvent::ShowCards(cards_view(&engine))).await?;
            ActiveGame::Match(engine)
        }
        PracticeMode::Write => {
            let engine = WriteEngine::new(session);
            if let Some(view) = write_view(&engine) {
                ui_tx.send(AppEvent::ShowRound(view)).await?;
            }
            ActiveGame::Write(engine)
        }
        _ => {
            let engine = ChoiceEngine::new(session, pool, StdRng::from_rng(&mut *rng)?);
            if mode == PracticeMode::Speed {
                spawn_countdown(loopback_tx, &cancel);
            }
            if let Some(view) = choice_view(&engine) {
                ui_tx.send(AppEvent::ShowRound(view)).await?;
            }
            ActiveGame::Choice(engine)
        }
    };

    *practice = Some(ActiveSession { game, cancel });
    Ok(())
}

pub async fn select_option(
    practice: &mut Option<ActiveSession>,
    index: usize,
    loopback_tx: &AsyncSender<AppEvent>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(session) = practice.as_mut() else {
        return Ok(());
    };
    let ActiveGame::Choice(engine) = &mut session.game else {
        return Ok(());
    };

    let Some(target) = engine.round().map(|r| r.target.clone()) else {
        return Ok(());
    };
    let Some(answered) = engine.answer(index) else {
        return Ok(());
    };

    let answer = reveal_answer(engine.mode(), &target);
    ui_tx
        .send(AppEvent::AnswerFeedback {
            correct: answered.correct,
            answer,
        })
        .await?;

    match answered.delay {
        Some(delay) => schedule(loopback_tx, &session.cancel, delay, AppEvent::AdvanceRound),
        None => {
            // Speed Challenge already produced the next round
            if let Some(view) = choice_view(engine) {
                ui_tx.send(AppEvent::ShowRound(view)).await?;
            }
        }
    }
    Ok(())
}

pub async fn submit_written(
    practice: &mut Option<ActiveSession>,
    input: &str,
    loopback_tx: &AsyncSender<AppEvent>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(session) = practice.as_mut() else {
        return Ok(());
    };
    let ActiveGame::Write(engine) = &mut session.game else {
        return Ok(());
    };

    let Some(target) = engine.current().cloned() else {
        return Ok(());
    };
    let Some(answered) = engine.answer(input) else {
        return Ok(());
    };

    ui_tx
        .send(AppEvent::AnswerFeedback {
            correct: answered.correct,
            answer: reveal_answer(PracticeMode::Write, &target),
        })
        .await?;
    if let Some(delay) = answered.delay {
        schedule(loopback_tx, &session.cancel, delay, AppEvent::AdvanceRound);
    }
    Ok(())
}

pub async fn flip_card(
    practice: &mut Option<ActiveSession>,
    index: usize,
    loopback_tx: &AsyncSender<AppEvent>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(session) = practice.as_mut() else {
        return Ok(());
    };
    let ActiveGame::Match(engine) = &mut session.game else {
        return Ok(());
    };

    match engine.flip(index) {
        FlipOutcome::Ignored => {}
        FlipOutcome::Revealed => {
            ui_tx.send(AppEvent::ShowCards(cards_view(engine))).await?;
        }
        FlipOutcome::Pair { matched, delay } => {
            ui_tx.send(AppEvent::ShowCards(cards_view(engine))).await?;
            tracing::debug!(matched, "pair pending");
            schedule(loopback_tx, &session.cancel, delay, AppEvent::ResolvePair);
        }
    }
    Ok(())
}

/// Advance timer fired for a non-Speed round.
pub async fn advance_round(
    practice: &mut Option<ActiveSession>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let finished = {
        let Some(session) = practice.as_mut() else {
            return Ok(());
        };
        match &mut session.game {
            ActiveGame::Choice(engine) => {
                if engine.advance() == Phase::Running {
                    if let Some(view) = choice_view(engine) {
                        ui_tx.send(AppEvent::ShowRound(view)).await?;
                    }
                    false
                } else {
                    true
                }
            }
            ActiveGame::Write(engine) => {
                if engine.advance() == Phase::Running {
                    if let Some(view) = write_view(engine) {
                        ui_tx.send(AppEvent::ShowRound(view)).await?;
                    }
                    false
                } else {
                    true
                }
            }
            ActiveGame::Match(_) => false,
        }
    };

    if finished {
        finish(practice, ui_tx).await?;
    }
    Ok(())
}

/// Pair timer fired: settle the two pending cards.
pub async fn resolve_pair(
    practice: &mut Option<ActiveSession>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let finished = {
        let Some(session) = practice.as_mut() else {
            return Ok(());
        };
        let ActiveGame::Match(engine) = &mut session.game else {
            return Ok(());
        };
        let phase = engine.resolve();
        ui_tx.send(AppEvent::ShowCards(cards_view(engine))).await?;
        phase == Phase::Finished
    };

    if finished {
        finish(practice, ui_tx).await?;
    }
    Ok(())
}

/// One second of the Speed Challenge clock.
pub async fn second_tick(
    practice: &mut Option<ActiveSession>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let finished = {
        let Some(session) = practice.as_mut() else {
            return Ok(());
        };
        let ActiveGame::Choice(engine) = &mut session.game else {
            return Ok(());
        };
        match engine.tick() {
            Phase::Finished => true,
            Phase::Running => {
                if let Some(secs) = engine.remaining_secs() {
                    ui_tx.send(AppEvent::Countdown(secs)).await?;
                }
                false
            }
        }
    };

    if finished {
        finish(practice, ui_tx).await?;
    }
    Ok(())
}

async fn finish(
    practice: &mut Option<ActiveSession>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(ActiveSession { game, cancel }) = practice.take() else {
        return Ok(());
    };
    cancel.cancel();
    let result = match game {
        ActiveGame::Choice(engine) => engine.into_result(),
        ActiveGame::Match(engine) => engine.into_result(),
        ActiveGame::Write(engine) => engine.into_result(),
    };
    tracing::info!(score = result.score, "session finished");
    ui_tx.send(AppEvent::SessionFinished(result)).await?;
    Ok(())
}

/// What to show next to the correct/incorrect verdict: the meaning for
/// meaning-recall modes, the headword for recognition modes.
fn reveal_answer(mode: PracticeMode, target: &Word) -> String {
    match mode {
        PracticeMode::Quiz | PracticeMode::Speed | PracticeMode::Write => target
            .preferred_meanings()
            .first()
            .cloned()
            .unwrap_or_else(|| target.headword.clone()),
        _ => target.headword.clone(),
    }
}

fn choice_view(engine: &ChoiceEngine<StdRng>) -> Option<RoundView> {
    let round = engine.round()?;
    let (prompt, hint) = match &round.prompt {
        Prompt::Headword(headword) => (headword.clone(), None),
        Prompt::Romanization { pinyin, hint } => (pinyin.clone(), Some(hint.clone())),
        Prompt::ClozeSentence(sentence) => (sentence.clone(), None),
    };
    Some(RoundView {
        prompt,
        hint,
        options: round.options.iter().map(|o| o.label.clone()).collect(),
        round_number: engine.rounds_played() + 1,
        total: engine.total(),
        remaining_secs: engine.remaining_secs(),
    })
}

fn write_view(engine: &WriteEngine) -> Option<RoundView> {
    let word = engine.current()?;
    Some(RoundView {
        prompt: word.headword.clone(),
        hint: Some(word.romanization.clone()),
        options: Vec::new(),
        round_number: engine.round_number(),
        total: Some(engine.total()),
        remaining_secs: None,
    })
}

fn cards_view(engine: &MatchEngine) -> Vec<CardView> {
    engine
        .cards()
        .iter()
        .map(|card| CardView {
            label: card.face.label().to_string(),
            face_up: card.face_up,
            matched: card.matched,
        })
        .collect()
}

/// Deliver `event` back to the loop after `delay`, unless the session is
/// torn down first.
fn schedule(
    loopback_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
    delay: Duration,
    event: AppEvent,
) {
    let tx = loopback_tx.clone();
    let cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(delay) => {
                let _ = tx.send(event).await;
            }
        }
    });
}

/// The one-second pulse driving the Speed Challenge clock. Tied to the
/// session token, so an abandoned session receives no stray ticks.
fn spawn_countdown(loopback_tx: &AsyncSender<AppEvent>, cancel: &CancellationToken) {
    let tx = loopback_tx.clone();
    let cancel = cancel.clone();
    tokio::spawn(async move {
        let mut pulse = tokio::time::interval(Duration::from_secs(1));
        pulse.tick().await; // the first tick is immediate
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = pulse.tick() => {
                    if tx.send(AppEvent::SecondTick).await.is_err() {
                        break;
                    }
                }
            }
        }
    });
}
