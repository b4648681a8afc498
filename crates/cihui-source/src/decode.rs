use cihui_types::{Level, Word};
use serde_json::Value;

/// Map the word-source payload to the canonical `Word` list.
///
/// The payload is accepted as a bare array or `{ "data": [...] }`, and
/// every attribute tolerates a handful of alternate field names so that
/// spreadsheet column renames do not break loading. All the fallback
/// logic lives here; consumers only ever see `Word`.
pub fn decode_payload(value: &Value) -> Vec<Word> {
    let Some(items) = value
        .as_array()
        .or_else(|| value.get("data").and_then(Value::as_array))
    else {
        tracing::warn!("word payload is neither an array nor {{data: [...]}}");
        return Vec::new();
    };

    items.iter().filter_map(decode_word).collect()
}

fn decode_word(item: &Value) -> Option<Word> {
    let headword = text(item, &["simplified", "hanzi", "word", "headword"])?;
    let level = level(item)?;

    let romanization = text(item, &["pinyin", "romanization", "pronunciation"]).unwrap_or_default();
    let id = text(item, &["id", "_id", "key"]).unwrap_or_default();
    let traditional = text(item, &["traditional", "trad"]);
    let part_of_speech = text(item, &["pos", "part_of_speech", "partOfSpeech"]);
    let example_text = text(item, &["example", "examples", "sentence"]);

    let mut meanings = list(item, &["english", "meaning", "meanings", "definition"]);
    let secondary_meanings = list(item, &["indonesian", "secondary", "meaning_id"]);

    // primary meanings may be missing entirely; fall back to the secondary
    // list so the word is still usable, otherwise drop the row
    if meanings.is_empty() {
        meanings = secondary_meanings.clone();
    }
    if meanings.is_empty() {
        tracing::debug!(%headword, "dropping word without any meaning");
        return None;
    }

    Some(Word {
        id,
        headword,
        romanization,
        level,
        meanings,
        traditional,
        part_of_speech,
        secondary_meanings,
        example_text,
    })
}

/// First non-empty string under any of the given keys.
fn text(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        item.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Level from `level`/`hsk`, numeric or string; 7, 8 and 9 collapse into
/// the combined "7-9" band.
fn level(item: &Value) -> Option<Level> {
    let raw = item.get("level").or_else(|| item.get("hsk"))?;
    match raw {
        Value::Number(n) => n.as_u64().and_then(Level::from_number),
        Value::String(s) => Level::parse(s),
        _ => None,
    }
}

/// Split a meanings cell on `|`, `;` or `,`, dropping empties.
fn list(item: &Value, keys: &[&str]) -> Vec<String> {
    let Some(raw) = text(item, keys) else {
        return Vec::new();
    };
    raw.split(['|', ';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
