//! Selecting, concatenating and rewriting text readings.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::Error;
use crate::model::TextEquiv;

/// How to pick the canonical reading among several [`TextEquiv`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStrategy {
    /// Prefer the reading with index 1 when several exist
    #[default]
    Index1,
}

impl TextStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextStrategy::Index1 => "index1",
        }
    }
}

impl fmt::Display for TextStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TextStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index1" => Ok(TextStrategy::Index1),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// The canonical text of an element, trimmed.
///
/// With [`TextStrategy::Index1`], a reading with index 1 wins whenever
/// the element carries more than one reading; otherwise the first
/// reading is taken. Elements without readings yield the empty string.
pub fn select_text(equivs: &[TextEquiv], strategy: TextStrategy) -> &str {
    match strategy {
        TextStrategy::Index1 => {
            if equivs.is_empty() {
                return "";
            }
            if equivs.len() > 1 {
                if let Some(preferred) = equivs.iter().find(|e| e.index == Some(1)) {
                    return preferred.unicode.trim();
                }
            }
            equivs[0].unicode.trim()
        }
    }
}

/// Overwrite the canonical text of an element.
///
/// The reading with index 1 is rewritten if present, the first reading
/// otherwise; an element without readings gains a new unindexed one.
pub fn set_text(equivs: &mut Vec<TextEquiv>, text: &str, strategy: TextStrategy) {
    let text = text.trim();
    match strategy {
        TextStrategy::Index1 => {
            if let Some(preferred) = equivs.iter_mut().find(|e| e.index == Some(1)) {
                preferred.unicode = text.to_string();
            } else if let Some(first) = equivs.first_mut() {
                first.unicode = text.to_string();
            } else {
                equivs.push(TextEquiv::new(text));
            }
        }
    }
}

/// Join the canonical texts of the children with a delimiter, trimming
/// the result.
pub fn concatenate<'a>(
    children: impl IntoIterator<Item = &'a [TextEquiv]>,
    delimiter: &str,
    strategy: TextStrategy,
) -> String {
    let parts: Vec<&str> = children
        .into_iter()
        .map(|equivs| select_text(equivs, strategy))
        .collect();
    parts.join(delimiter).trim().to_string()
}

/// Whether two strings are equal once all whitespace is removed.
pub fn compare_without_whitespace(a: &str, b: &str) -> bool {
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(a, "") == whitespace.replace_all(b, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_text_empty() {
        assert_eq!(select_text(&[], TextStrategy::Index1), "");
    }

    #[test]
    fn test_select_text_single_reading() {
        let equivs = vec![TextEquiv::new("  hello ")];
        assert_eq!(select_text(&equivs, TextStrategy::Index1), "hello");
    }

    #[test]
    fn test_select_text_prefers_index_one() {
        let equivs = vec![
            TextEquiv::indexed(2, "second"),
            TextEquiv::indexed(1, "first"),
        ];
        assert_eq!(select_text(&equivs, TextStrategy::Index1), "first");
    }

    #[test]
    fn test_select_text_lone_reading_wins_regardless_of_index() {
        let equivs = vec![TextEquiv::indexed(2, "only")];
        assert_eq!(select_text(&equivs, TextStrategy::Index1), "only");
    }

    #[test]
    fn test_set_text_rewrites_preferred_reading() {
        let mut equivs = vec![
            TextEquiv::indexed(2, "second"),
            TextEquiv::indexed(1, "first"),
        ];
        set_text(&mut equivs, "repaired", TextStrategy::Index1);
        assert_eq!(equivs[0].unicode, "second");
        assert_eq!(equivs[1].unicode, "repaired");
    }

    #[test]
    fn test_set_text_falls_back_to_first_reading() {
        let mut equivs = vec![TextEquiv::new("old")];
        set_text(&mut equivs, " new ", TextStrategy::Index1);
        assert_eq!(equivs[0].unicode, "new");
    }

    #[test]
    fn test_set_text_appends_when_no_readings() {
        let mut equivs = Vec::new();
        set_text(&mut equivs, "fresh", TextStrategy::Index1);
        assert_eq!(equivs.len(), 1);
        assert_eq!(equivs[0].unicode, "fresh");
        assert_eq!(equivs[0].index, None);
    }

    #[test]
    fn test_concatenate_words_and_glyphs() {
        let foo = vec![TextEquiv::new("foo")];
        let bar = vec![TextEquiv::new("bar")];
        let joined = concatenate(
            [foo.as_slice(), bar.as_slice()],
            " ",
            TextStrategy::Index1,
        );
        assert_eq!(joined, "foo bar");

        let f = vec![TextEquiv::new("f")];
        let o = vec![TextEquiv::new("o")];
        let glued = concatenate([f.as_slice(), o.as_slice()], "", TextStrategy::Index1);
        assert_eq!(glued, "fo");
    }

    #[test]
    fn test_concatenate_trims_the_result() {
        let foo = vec![TextEquiv::new("foo")];
        let empty: Vec<TextEquiv> = Vec::new();
        let joined = concatenate(
            [foo.as_slice(), empty.as_slice()],
            "\n",
            TextStrategy::Index1,
        );
        assert_eq!(joined, "foo");
    }

    #[test]
    fn test_compare_without_whitespace() {
        assert!(compare_without_whitespace("fo o", "foo"));
        assert!(compare_without_whitespace("foo\nbar", "foo bar"));
        assert!(!compare_without_whitespace("foo", "bar"));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("index1".parse::<TextStrategy>().unwrap(), TextStrategy::Index1);
        assert!("bogus".parse::<TextStrategy>().is_err());
        assert_eq!(TextStrategy::Index1.to_string(), "index1");
    }
}
