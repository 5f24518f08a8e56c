//! Text tokenization
//!
//! Splits raw text into sentences, word tokens, and paragraphs. The sentence
//! scanner handles terminal punctuation runs, attached closing quotes, a
//! small abbreviation table, and number-internal periods. It aims for
//! statistics-grade segmentation, not linguistic perfection.

use crate::domain::tables;

/// Tokenized view of the combined input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedText {
    /// Sentences in document order, trimmed
    pub sentences: Vec<String>,
    /// Word tokens in document order
    pub words: Vec<String>,
    /// Non-empty paragraphs split on blank lines, trimmed
    pub paragraphs: Vec<String>,
}

/// Tokenize text into sentences, words, and paragraphs
pub fn tokenize(text: &str) -> TokenizedText {
    TokenizedText {
        sentences: split_sentences(text),
        words: split_words(text),
        paragraphs: split_paragraphs(text),
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | '»' | ')' | ']')
}

/// Split text into sentences
///
/// A run of terminal punctuation closes a sentence when followed by
/// whitespace or end of input. Trailing closing quotes and brackets attach
/// to the sentence. A period is suppressed after a known abbreviation, and
/// an ellipsis is suppressed before a lowercase continuation. Any trailing
/// unterminated fragment counts as a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminal(chars[i]) {
            i += 1;
            continue;
        }

        // Consume the terminal run, then any attached closers.
        let run_start = i;
        let mut end = i;
        while end < chars.len() && is_terminal(chars[end]) {
            end += 1;
        }
        let run_len = end - run_start;
        while end < chars.len() && is_closer(chars[end]) {
            end += 1;
        }

        if is_boundary(&chars, run_start, run_len, end) {
            push_trimmed(&mut sentences, &chars[start..end]);
            start = end;
        }
        i = end;
    }

    if start < chars.len() {
        push_trimmed(&mut sentences, &chars[start..]);
    }

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, chars: &[char]) {
    let sentence: String = chars.iter().collect();
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn is_boundary(chars: &[char], run_start: usize, run_len: usize, end: usize) -> bool {
    // "U.S.A", "3.14", "example.com": no whitespace after the run.
    if end < chars.len() && !chars[end].is_whitespace() {
        return false;
    }

    let run_char = chars[run_start];
    let is_ellipsis = run_char == '…' || (run_char == '.' && run_len >= 3);

    if is_ellipsis {
        // "he paused... and went on" continues the sentence.
        return match next_non_whitespace(chars, end) {
            Some(c) => !c.is_lowercase(),
            None => true,
        };
    }

    if run_char == '.' && run_len == 1 && preceded_by_abbreviation(chars, run_start) {
        return false;
    }

    true
}

fn next_non_whitespace(chars: &[char], from: usize) -> Option<char> {
    chars[from..].iter().copied().find(|c| !c.is_whitespace())
}

fn preceded_by_abbreviation(chars: &[char], dot: usize) -> bool {
    let mut begin = dot;
    while begin > 0 {
        let c = chars[begin - 1];
        if c.is_alphabetic() || c == '.' {
            begin -= 1;
        } else {
            break;
        }
    }
    if begin == dot {
        return false;
    }
    let word: String = chars[begin..dot]
        .iter()
        .collect::<String>()
        .trim_end_matches('.')
        .to_lowercase();
    // Dotted acronyms ("U.S.A") carry their own periods.
    word.contains('.') || tables::is_abbreviation(&word)
}

/// Split text into word tokens
///
/// A token is a maximal alphanumeric run; apostrophes and hyphens join a
/// token when flanked by alphanumeric characters ("wasn't", "well-known").
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if matches!(c, '\'' | '’' | '-')
            && !current.is_empty()
            && chars.peek().is_some_and(|n| n.is_alphanumeric())
        {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Split text into non-empty paragraphs on blank-line boundaries
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Whether a token consists entirely of alphabetic characters
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Lowercased alphabetic tokens, in order
pub fn lowercase_alphabetic(words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|w| is_alphabetic(w))
        .map(|w| w.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_vec(text: &str) -> Vec<String> {
        split_sentences(text)
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        let sentences = sentence_vec("This is great! This is also great! However, it wasn't perfect.");
        assert_eq!(
            sentences,
            vec![
                "This is great!",
                "This is also great!",
                "However, it wasn't perfect."
            ]
        );
    }

    #[test]
    fn keeps_abbreviations_together() {
        let sentences = sentence_vec("Dr. Smith arrived late. Everyone noticed.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith arrived late.", "Everyone noticed."]
        );
    }

    #[test]
    fn keeps_decimals_and_acronyms_together() {
        let sentences = sentence_vec("Pi is 3.14 here. The U.S.A. team won.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Pi is 3.14 here.");
    }

    #[test]
    fn attaches_closing_quotes() {
        let sentences = sentence_vec("He said \"stop.\" Then he left.");
        assert_eq!(sentences, vec!["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn ellipsis_continues_before_lowercase() {
        let sentences = sentence_vec("He paused... and went on. Done.");
        assert_eq!(sentences, vec!["He paused... and went on.", "Done."]);
    }

    #[test]
    fn ellipsis_breaks_before_uppercase() {
        let sentences = sentence_vec("He paused... Then silence.");
        assert_eq!(sentences, vec!["He paused...", "Then silence."]);
    }

    #[test]
    fn trailing_fragment_is_a_sentence() {
        let sentences = sentence_vec("Complete sentence. And a trailing fragment");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "And a trailing fragment");
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(sentence_vec("").is_empty());
        assert!(sentence_vec("   \n\n  ").is_empty());
    }

    #[test]
    fn words_keep_contractions_and_hyphens() {
        let words = split_words("It wasn't a well-known fact — truly.");
        assert_eq!(
            words,
            vec!["It", "wasn't", "a", "well-known", "fact", "truly"]
        );
    }

    #[test]
    fn words_drop_dangling_punctuation() {
        let words = split_words("wait - no, stop-");
        assert_eq!(words, vec!["wait", "no", "stop"]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paragraphs = split_paragraphs("First one.\n\nSecond one.\n\n\n\nThird.");
        assert_eq!(paragraphs, vec!["First one.", "Second one.", "Third."]);
    }

    #[test]
    fn alphabetic_filter() {
        assert!(is_alphabetic("word"));
        assert!(!is_alphabetic("wasn't"));
        assert!(!is_alphabetic("42"));
        assert!(!is_alphabetic(""));
    }

    #[test]
    fn lowercase_alphabetic_filters_and_lowers() {
        let words: Vec<String> = ["The", "cat", "isn't", "42", "HERE"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(lowercase_alphabetic(&words), vec!["the", "cat", "here"]);
    }
}
