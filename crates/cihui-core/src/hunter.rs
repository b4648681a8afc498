use cihui_types::Word;

/// CJK Unified Ideographs; everything outside the block is stripped
/// before matching recognized text against the pool.
fn is_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

/// The "clean form" hunting matches on: ideographs only.
pub fn clean(text: &str) -> String {
    text.chars().filter(|c| is_ideograph(*c)).collect()
}

/// Outcome of an open-exploration pass over recognized fragments.
/// `NothingDetected` and `NotInList` are both retryable.
#[derive(Debug, Clone)]
pub enum HuntReport {
    NothingDetected,
    NotInList,
    Found(Word),
}

/// Open exploration: the first word whose clean headword or clean
/// traditional form exactly equals a clean fragment wins; failing that,
/// the first word whose clean headword (two ideographs or more) is a
/// substring of some fragment. Search order is fragment order, then pool
/// order.
pub fn explore(fragments: &[String], pool: &[Word]) -> HuntReport {
    let clean_fragments: Vec<String> = fragments
        .iter()
        .map(|f| clean(f))
        .filter(|f| !f.is_empty())
        .collect();
    if clean_fragments.is_empty() {
        return HuntReport::NothingDetected;
    }

    for fragment in &clean_fragments {
        for word in pool {
            let head = clean(&word.headword);
            if !head.is_empty() && head == *fragment {
                return HuntReport::Found(word.clone());
            }
            if let Some(traditional) = &word.traditional {
                let traditional = clean(traditional);
                if !traditional.is_empty() && traditional == *fragment {
                    return HuntReport::Found(word.clone());
                }
            }
        }
    }

    for fragment in &clean_fragments {
        for word in pool {
            let head = clean(&word.headword);
            if head.chars().count() >= 2 && fragment.contains(&head) {
                return HuntReport::Found(word.clone());
            }
        }
    }

    HuntReport::NotInList
}

#[derive(Debug, Clone)]
pub enum QuestOutcome {
    NothingDetected,
    /// The target headword was spotted; the quest is complete.
    Done,
    /// A different pool word was spotted. Feedback only; no state effect,
    /// the quest stays active.
    WrongWord(Word),
    Missed,
}

/// Targeted quest: success when some clean fragment equals or contains
/// the clean target headword. On failure the pool is checked once more
/// purely to phrase a "found X, but needed Y" message.
pub fn quest(target: &Word, fragments: &[String], pool: &[Word]) -> QuestOutcome {
    let clean_fragments: Vec<String> = fragments
        .iter()
        .map(|f| clean(f))
        .filter(|f| !f.is_empty())
        .collect();
    if clean_fragments.is_empty() {
        return QuestOutcome::NothingDetected;
    }

    let wanted = clean(&target.headword);
    if !wanted.is_empty()
        && clean_fragments
            .iter()
            .any(|f| f == &wanted || f.contains(&wanted))
    {
        return QuestOutcome::Done;
    }

    match explore(fragments, pool) {
        HuntReport::Found(word) if word.id != target.id => QuestOutcome::WrongWord(word),
        _ => QuestOutcome::Missed,
    }
}
