use std::borrow::Borrow;
use std::fmt;

/// A normalized word: leading and trailing ASCII punctuation stripped,
/// ASCII letters lowercased, at least one ASCII alphanumeric character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize one whitespace-free word into a [`Token`].
///
/// Returns `None` when the word holds no ASCII alphanumeric character.
/// Interior punctuation is kept verbatim (`"Don't!"` becomes `"don't"`).
pub fn normalize_word(word: &str) -> Option<Token> {
    let trimmed = word.trim_matches(|c: char| c.is_ascii_punctuation());
    if !trimmed.bytes().any(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some(Token(trimmed.to_ascii_lowercase()))
}

/// Split text into raw words on ASCII whitespace, vertical tab included.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|w| !w.is_empty())
}

fn is_word_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

#[cfg(test)]
mod tests {
    use super::split_words;

    #[test]
    fn splits_on_every_ascii_space_kind() {
        let words: Vec<_> = split_words(" a\tb\nc\r\nd\x0be\x0cf  ").collect();
        assert_eq!(words, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(split_words("").count(), 0);
        assert_eq!(split_words(" \n\t ").count(), 0);
    }
}
