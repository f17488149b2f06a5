use super::random::{RandomSource, ThreadRandom};
use crate::types::{HumanizeOptions, Tone};
use std::sync::Arc;

/// Rule-based sentence rewriter used when the remote path gives nothing back.
///
/// Never fails. Every tone except [`Tone::Default`] is deterministic.
#[derive(Clone)]
pub struct FallbackTransformer {
    random: Arc<dyn RandomSource>,
}

impl FallbackTransformer {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn transform(&self, text: &str, options: &HumanizeOptions) -> String {
        let tone = options.tone_or_default();
        split_sentences(text)
            .into_iter()
            .map(|sentence| self.rewrite_sentence(sentence, tone))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn rewrite_sentence(&self, sentence: &str, tone: Tone) -> String {
        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            return sentence.to_string();
        }
        match tone {
            Tone::Academic => format!("It has been observed that {}", trimmed.to_lowercase()),
            Tone::Casual => format!("So basically, {}", trimmed.to_lowercase()),
            Tone::Creative => format!("Imagine this: {}", trimmed),
            Tone::Formal => format!("It should be noted that {}", trimmed.to_lowercase()),
            Tone::Friendly => format!("You know, {}", trimmed.to_lowercase()),
            Tone::Professional => {
                format!("We would like to point out that {}", trimmed.to_lowercase())
            }
            Tone::Default => {
                let r = self.random.next_unit();
                if r > 0.7 {
                    format!("{}, actually.", trimmed)
                } else if r > 0.4 {
                    format!("I believe that {}", trimmed.to_lowercase())
                } else {
                    sentence.to_string()
                }
            }
        }
    }
}

impl Default for FallbackTransformer {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}

impl std::fmt::Debug for FallbackTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackTransformer").finish_non_exhaustive()
    }
}

/// Split after `.`, `!` or `?` when followed by whitespace.
///
/// The terminator stays with its sentence and the whole whitespace run is
/// dropped. Always yields at least one piece, even for empty input.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, ch)) = iter.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            pieces.push(&text[start..idx]);
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = iter.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                iter.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }
    pieces.push(&text[start..]);
    pieces
}
