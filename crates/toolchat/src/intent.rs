//! Intent classification and city extraction heuristics.
//!
//! Both are keyword heuristics behind small pure functions, so they can be
//! swapped or unit-tested independently of the orchestration logic. They are
//! best-effort: false positives and negatives are expected and acceptable.

/// What a question is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Weather,
    Time,
    General,
}

/// Substrings that mark a question as a weather request.
const WEATHER_KEYWORDS: [&str; 5] = ["weather", "temperature", "rain", "sunny", "cloudy"];

/// Substrings that mark a question as a date/time request. Only consulted
/// when no weather keyword matched.
const TIME_KEYWORDS: [&str; 4] = ["time", "date", "today", "what's the time"];

/// Trigger words scanned in this order, regardless of where they appear in
/// the sentence.
const TRIGGER_WORDS: [&str; 3] = ["in", "for", "at"];

/// Classify a question by keyword membership.
///
/// Total and deterministic; an empty string is `General`.
pub fn classify(question: &str) -> Intent {
    let lower = question.to_lowercase();

    if WEATHER_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Intent::Weather
    } else if TIME_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Intent::Time
    } else {
        Intent::General
    }
}

/// Best-effort city extraction.
///
/// Trigger words are tried in `TRIGGER_WORDS` order, not sentence order, and
/// everything after the first match is joined title-cased — trailing words
/// that are not part of the city name come along. With no trigger present,
/// falls back to the first original-text token longer than two characters
/// that starts with an uppercase letter, returned verbatim.
pub fn extract_city(question: &str) -> Option<String> {
    let cleaned = strip_punctuation(&question.to_lowercase());
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    for trigger in TRIGGER_WORDS {
        if let Some(pos) = words.iter().position(|w| *w == trigger) {
            let rest = &words[pos + 1..];
            if !rest.is_empty() {
                return Some(
                    rest.iter()
                        .map(|w| capitalize(w))
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
        }
    }

    // No usable trigger: look for a word capitalized in the original text.
    for word in question.split_whitespace() {
        let clean = strip_punctuation(word);
        let mut chars = clean.chars();
        if let Some(first) = chars.next() {
            if first.is_uppercase() && clean.chars().count() > 2 {
                return Some(clean);
            }
        }
    }

    None
}

/// Drop everything except word characters and whitespace.
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Uppercase the first letter of an already-lowercased word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
