use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiter between multiple example sentences in [`Word::example_text`].
pub const EXAMPLE_DELIMITER: char = '|';

/// HSK tier. Levels 7, 8 and 9 share one combined band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    SevenToNine,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::One,
        Level::Two,
        Level::Three,
        Level::Four,
        Level::Five,
        Level::Six,
        Level::SevenToNine,
    ];

    /// Parse a numeric level, folding 7/8/9 into the combined band.
    pub fn from_number(n: u64) -> Option<Level> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            4 => Some(Level::Four),
            5 => Some(Level::Five),
            6 => Some(Level::Six),
            7..=9 => Some(Level::SevenToNine),
            _ => None,
        }
    }

    /// Parse a level label such as `"3"`, `"HSK3"` or `"7-9"`.
    pub fn parse(s: &str) -> Option<Level> {
        let s = s.trim().trim_start_matches("HSK").trim();
        if s == "7-9" {
            return Some(Level::SevenToNine);
        }
        s.parse::<u64>().ok().and_then(Level::from_number)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::One => "1",
            Level::Two => "2",
            Level::Three => "3",
            Level::Four => "4",
            Level::Five => "5",
            Level::Six => "6",
            Level::SevenToNine => "7-9",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vocabulary entry. Immutable once loaded from the word source;
/// only the external favorites set changes over a session's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Opaque stable id. Empty when the source row carried none, in which
    /// case the word cannot be favorited or reliably deduplicated.
    pub id: String,
    /// Simplified glyph form.
    pub headword: String,
    /// Pinyin, usually with tone diacritics.
    pub romanization: String,
    pub level: Level,
    /// Primary-language meanings. Never empty for a loaded word.
    pub meanings: Vec<String>,
    pub traditional: Option<String>,
    pub part_of_speech: Option<String>,
    /// Secondary-language meanings, preferred for display when present.
    pub secondary_meanings: Vec<String>,
    /// Zero or more example sentences joined by [`EXAMPLE_DELIMITER`].
    pub example_text: Option<String>,
}

impl Word {
    /// The meaning list quizzes draw from: secondary meanings when present,
    /// primary meanings otherwise.
    pub fn preferred_meanings(&self) -> &[String] {
        if self.secondary_meanings.is_empty() {
            &self.meanings
        } else {
            &self.secondary_meanings
        }
    }

    /// The first example segment, but only if it contains the headword
    /// itself. Sentence-Fill eligibility hangs on this.
    pub fn usable_example(&self) -> Option<&str> {
        let first = self
            .example_text
            .as_deref()?
            .split(EXAMPLE_DELIMITER)
            .next()?
            .trim();
        if !first.is_empty() && first.contains(self.headword.as_str()) {
            Some(first)
        } else {
            None
        }
    }
}

/// The six practice modes the session engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PracticeMode {
    Quiz,
    Speed,
    Match,
    Write,
    Pinyin,
    SentenceFill,
}

impl PracticeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeMode::Quiz => "quiz",
            PracticeMode::Speed => "speed",
            PracticeMode::Match => "match",
            PracticeMode::Write => "write",
            PracticeMode::Pinyin => "pinyin",
            PracticeMode::SentenceFill => "sentence-fill",
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested practice set size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionSize {
    Count(usize),
    All,
}

/// Post-session report handed back once an engine reaches its terminal
/// state. Both word lists are deduplicated by id, independently; a word
/// answered both ways across repeated rounds appears in both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub score: u32,
    /// None for uncapped modes (Speed Challenge).
    pub total: Option<u32>,
    pub mastered: Vec<Word>,
    pub needs_review: Vec<Word>,
}
