use cihui_types::{Level, Word};


pub fn word(id: &str, headword: &str, pinyin: &str, meanings: &[&str]) -> Word {
    Word {
        id: id.to_string(),
        headword: headword.to_string(),
        romanization: pinyin.to_string(),
        level: Level::One,
        meanings: meanings.iter().map(|m| m.to_string()).collect(),
        traditional: None,
        part_of_speech: None,
        secondary_meanings: Vec::new(),
        example_text: None,
    }
}

/// `n` words with pairwise distinct meanings, enough for any option set.
pub fn pool(n: usize) -> Vec<Word> {
    (0..n)
        .map(|i| {
            let meaning = format!("meaning {i}");
            word(
                &format!("w{i}"),
                &format!("词{i}"),
                &format!("cí {i}"),
                &[meaning.as_str()],
            )
        })
        .collect()
}

pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("cihui-test-{}-{name}.json", std::process::id()))
}
