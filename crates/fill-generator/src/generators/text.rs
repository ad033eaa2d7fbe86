//! Lorem and language generators.

use super::pick;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::Fake;
use rand::Rng;

/// Upper bound (exclusive) of sentences in a generated paragraph.
pub const MAX_LOREM_PARAGRAPH: usize = 10;

/// Upper bound (exclusive) of words in a generated sentence.
pub const MAX_LOREM_SENTENCE: usize = 15;

const LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Dutch", "nl"),
    ("Swedish", "sv"),
    ("Polish", "pl"),
    ("Russian", "ru"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Chinese", "zh"),
    ("Hindi", "hi"),
    ("Arabic", "ar"),
    ("Turkish", "tr"),
    ("Indonesian", "id"),
];

const PROGRAMMING_LANGUAGES: &[&str] = &[
    "Rust", "Go", "C", "C++", "Java", "Kotlin", "Scala", "Python", "Ruby", "JavaScript",
    "TypeScript", "PHP", "Swift", "Haskell", "Elixir", "Erlang", "Clojure", "OCaml", "Zig",
];

pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    let value = match key {
        "lang" => LANGUAGES[rng.random_range(0..LANGUAGES.len())].0.to_string(),
        "lang_abbr" => LANGUAGES[rng.random_range(0..LANGUAGES.len())].1.to_string(),
        "lang_programming" => pick(rng, PROGRAMMING_LANGUAGES),
        "lorem_paragraph" => Paragraph(1..MAX_LOREM_PARAGRAPH).fake_with_rng(rng),
        "lorem_sentence" => Sentence(1..MAX_LOREM_SENTENCE).fake_with_rng(rng),
        "lorem_word" => Word().fake_with_rng(rng),
        _ => return None,
    };
    Some(value)
}
