//! Flags canonical arguments that look like two entities joined by a conjunction.
//!
//! The CAS is split at Unicode word boundaries. A response is flagged when a
//! configured marker phrase appears strictly inside it (some token on either
//! side) and is separated from its neighbours by whitespace, so `rebels and
//! soldiers` is flagged while `AT&T` and `and the rest` are not.

use eal_qa::AnswerKey;
use unicode_segmentation::UnicodeSegmentation;

use crate::warning::{Warning, WarningKind, WarningMap};

/// Marker phrases used when no configuration overrides them.
pub const DEFAULT_CONJUNCTION_MARKERS: &[&str] =
    &["and", "or", "&", "as well as", "along with", "together with"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    lower: String,
    spaced_before: bool,
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut spaced_before = false;
    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            spaced_before = true;
            continue;
        }
        tokens.push(Token {
            lower: segment.to_lowercase(),
            spaced_before,
        });
        spaced_before = false;
    }
    tokens
}

/// Conjunction heuristic over CAS strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjunctionRule {
    /// Original marker text paired with its lowercase tokens.
    markers: Vec<(String, Vec<String>)>,
}

impl ConjunctionRule {
    pub fn new<S: AsRef<str>>(markers: impl IntoIterator<Item = S>) -> Self {
        let markers = markers
            .into_iter()
            .filter_map(|marker| {
                let marker = marker.as_ref().trim();
                let tokens: Vec<String> = tokenize(marker).into_iter().map(|t| t.lower).collect();
                (!tokens.is_empty()).then(|| (marker.to_string(), tokens))
            })
            .collect();
        Self { markers }
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(|(m, _)| m.as_str())
    }

    /// Markers found joining two phrases inside `cas`, in marker order.
    pub fn find_markers(&self, cas: &str) -> Vec<&str> {
        let tokens = tokenize(cas);
        self.markers
            .iter()
            .filter(|(_, marker)| {
                let k = marker.len();
                (1..tokens.len()).any(|i| {
                    i + k < tokens.len()
                        && tokens[i].spaced_before
                        && tokens[i + k].spaced_before
                        && tokens[i..i + k]
                            .iter()
                            .zip(marker)
                            .all(|(token, word)| token.lower == *word)
                })
            })
            .map(|(original, _)| original.as_str())
            .collect()
    }

    pub fn apply_warning(&self, answer_key: &AnswerKey) -> WarningMap {
        let mut warnings = WarningMap::new();
        for response in answer_key.responses() {
            let cas = &response.canonical_argument().string;
            let found = self.find_markers(cas);
            if found.is_empty() {
                continue;
            }
            let quoted: Vec<String> = found.iter().map(|m| format!("\"{}\"", m)).collect();
            warnings.add(
                response,
                Warning::new(
                    WarningKind::Conjunction,
                    format!(
                        "CAS \"{}\" joins phrases with {}; it may cover more than one entity",
                        cas,
                        quoted.join(", ")
                    ),
                ),
            );
        }
        warnings
    }
}

impl Default for ConjunctionRule {
    fn default() -> Self {
        Self::new(DEFAULT_CONJUNCTION_MARKERS.iter().copied())
    }
}
