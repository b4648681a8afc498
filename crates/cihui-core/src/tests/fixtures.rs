use cihui_types::{Level, Word};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

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

/// Eight HSK-1-ish words covering the shapes the engines care about:
/// multiple meanings, secondary meanings, a traditional form, usable and
/// unusable examples.
pub fn pool() -> Vec<Word> {
    let mut nihao = word("w1", "你好", "nǐ hǎo", &["hello", "hi"]);
    nihao.example_text = Some("你好，世界！|再见".to_string());

    let mut kafei = word("w2", "咖啡", "kā fēi", &["coffee"]);
    kafei.example_text = Some("请喝咖啡吧".to_string());

    let cha = word("w3", "茶", "chá", &["tea"]);

    let mut shui = word("w4", "水", "shuǐ", &["water"]);
    shui.secondary_meanings = vec!["air".to_string()];

    let mut laoshi = word("w5", "老师", "lǎo shī", &["teacher"]);
    laoshi.traditional = Some("老師".to_string());

    let mut xuesheng = word("w6", "学生", "xué shēng", &["student"]);
    xuesheng.example_text = Some("我是学生。".to_string());

    // example does not contain its own headword
    let mut pingguo = word("w7", "苹果", "píng guǒ", &["apple"]);
    pingguo.example_text = Some("我喜欢吃香蕉。".to_string());

    let pengyou = word("w8", "朋友", "péng you", &["friend"]);

    vec![
        nihao, kafei, cha, shui, laoshi, xuesheng, pingguo, pengyou,
    ]
}

/// Four words, each with an example containing its own headword, for
/// Sentence-Fill sessions.
pub fn cloze_pool() -> Vec<Word> {
    let mut words = Vec::new();
    for (id, head, pinyin, meaning, example) in [
        ("c1", "你好", "nǐ hǎo", "hello", "你好，世界！"),
        ("c2", "咖啡", "kā fēi", "coffee", "请喝咖啡吧"),
        ("c3", "学生", "xué shēng", "student", "我是学生。"),
        ("c4", "老师", "lǎo shī", "teacher", "她是我的老师。"),
    ] {
        let mut w = word(id, head, pinyin, &[meaning]);
        w.example_text = Some(example.to_string());
        words.push(w);
    }
    words
}
