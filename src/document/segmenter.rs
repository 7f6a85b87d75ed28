//! Sentence and word segmentation.
//!
//! Sentences end at `.`, `!` or `?` (plus any trailing closing quotes or
//! brackets) when followed by whitespace or the end of the text. A period
//! ending a known abbreviation or a single-letter initial does not end a
//! sentence, and neither does "No." before a number ("No. 5"). The pronoun
//! and numeral "I" is never an initial. This is a heuristic, not a grammar.

use serde::Serialize;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
    "fig", "approx", "dept", "est", "e.g", "i.e", "a.m", "p.m",
];

/// A sentence and the words it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text, terminal punctuation included.
    pub text: String,
    /// Byte offset of `text` in the source.
    pub offset: usize,
    /// Index of this sentence's first word across the whole source.
    pub word_start: usize,
    pub words: Vec<String>,
}

impl Sentence {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Lazy sentence iterator over a borrowed text.
///
/// A clone resumes from the same position; call [`sentences`] again to restart.
/// Fragments holding no words (for example a stray "...") are skipped.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    cursor: usize,
    words_seen: usize,
}

pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences {
        text,
        cursor: 0,
        words_seen: 0,
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        while self.cursor < self.text.len() {
            let rest = &self.text[self.cursor..];
            let end = sentence_boundary(rest);
            let raw = &rest[..end];
            let start = self.cursor;
            self.cursor += end;

            let trimmed = raw.trim();
            let words = split_words(trimmed);
            if words.is_empty() {
                continue;
            }

            let leading = raw.len() - raw.trim_start().len();
            let word_start = self.words_seen;
            self.words_seen += words.len();

            return Some(Sentence {
                text: trimmed.to_string(),
                offset: start + leading,
                word_start,
                words,
            });
        }
        None
    }
}

/// Split a fragment into words on whitespace, stripping surrounding
/// punctuation but keeping internal hyphens and apostrophes.
pub fn split_words(text: &str) -> Vec<String> {
    words(text).map(str::to_string).collect()
}

/// Borrowing variant of [`split_words`].
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

/// Lowercased words of a fragment, the normal form used for matching.
pub fn normalized_words(text: &str) -> Vec<String> {
    words(text).map(str::to_lowercase).collect()
}

/// Byte length of the first sentence in `rest`.
fn sentence_boundary(rest: &str) -> usize {
    let mut chars = rest.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        let mut end = i + c.len_utf8();
        let mut lone_period = c == '.';
        while let Some(&(j, next)) = chars.peek() {
            if is_terminal(next) {
                lone_period = false;
            } else if !is_closing(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }

        match chars.peek() {
            None => return end,
            Some(&(_, next)) if next.is_whitespace() => {
                let token = last_token(&rest[..i]);
                if lone_period && (is_abbreviation(token) || is_numero(token, &rest[end..])) {
                    continue;
                }
                return end;
            }
            // "3.14", "example.com"
            Some(_) => continue,
        }
    }

    rest.len()
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

fn last_token(s: &str) -> &str {
    s.rsplit(char::is_whitespace).next().unwrap_or_default()
}

fn is_abbreviation(token: &str) -> bool {
    let token = token.trim_start_matches(|c: char| !c.is_alphanumeric());
    if token.is_empty() {
        return false;
    }

    let mut chars = token.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        // Single-letter initial, "J. R. Tolkien", but not "World War I."
        return first.is_uppercase() && first != 'I';
    }

    // Dotted forms such as "U.S"
    if token.contains('.') && token.split('.').all(|part| part.chars().count() == 1) {
        return true;
    }

    let lower = token.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// "No." abbreviating "number", recognized only before a digit.
fn is_numero(token: &str, after: &str) -> bool {
    token.trim_start_matches(|c: char| !c.is_alphanumeric()) == "No"
        && after.trim_start().starts_with(|c: char| c.is_ascii_digit())
}
