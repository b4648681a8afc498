use serde::{Deserialize, Serialize};

use crate::types::{Level, PracticeMode, SessionResult, SessionSize, Word};

/// Events flowing between the UI surface and the app core, both directions,
/// over the app's kanal channels.
#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI -> app
    ReloadWords,
    SearchText(String),
    StartPractice {
        level: Option<Level>,
        mode: PracticeMode,
        size: SessionSize,
    },
    SelectOption(usize),
    SubmitWritten(String),
    FlipCard(usize),
    AbortPractice,
    HuntImage(String),
    HuntFragments(Vec<String>),
    NewQuest,
    ExplainWord(Word),
    ToggleFavorite(String),
    AddWord(Word),
    DeleteWord(Word),

    // timer-driven, self-sent by the app
    AdvanceRound,
    ResolvePair,
    SecondTick,

    // app -> UI
    WordsLoaded(usize),
    ShowSearchResults(Vec<Word>),
    ShowRound(RoundView),
    ShowCards(Vec<CardView>),
    AnswerFeedback { correct: bool, answer: String },
    Countdown(u32),
    SessionFinished(SessionResult),
    QuestAssigned(Word),
    ShowHunt(HuntView),
    ShowNuance(NuanceView),
    FavoritesChanged(Vec<String>),
    ShowMessage(String),
}

/// Presentation-ready AI word explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuanceView {
    pub headword: String,
    pub summary: String,
    /// (hanzi, pinyin, meaning) triples.
    pub examples: Vec<(String, String, String)>,
}

/// Presentation-ready snapshot of one choice or write round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundView {
    pub prompt: String,
    pub hint: Option<String>,
    pub options: Vec<String>,
    pub round_number: u32,
    pub total: Option<u32>,
    pub remaining_secs: Option<u32>,
}

/// Presentation-ready snapshot of one match-grid card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub label: String,
    pub face_up: bool,
    pub matched: bool,
}

/// Outcome of one camera hunt pass.
#[derive(Debug, Clone)]
pub enum HuntView {
    NothingDetected,
    NotInList,
    Found(Word),
    QuestDone(Word),
    WrongWord { found: Word, wanted: Word },
    QuestMissed(Word),
}
