//! Tab labels and keyboard-accelerator markers.
//!
//! A label like `"Dataset &A"` displays as `"Dataset A"` and assigns `A` as
//! the tab's accelerator key (pressed together with the accelerator
//! modifier, Alt by default). `&&` produces a literal ampersand.

use std::fmt;

/// Display text for one tab, with an optional accelerator key.
///
/// Construction scans the input for a single `&` marker: the first `&`
/// followed by a character other than `&` is stripped and the following
/// character becomes the accelerator key. `&&` is an escaped literal `&`.
/// Markers after the first honored one are kept as literal characters, as
/// is a lone trailing `&`. Parsing never fails; unmarked labels simply
/// have no key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    text: String,
    key: Option<char>,
    key_pos: Option<usize>,
}

impl TabLabel {
    /// Parse `raw`, extracting an accelerator marker if present.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        let mut text = String::with_capacity(raw.len());
        let mut key = None;
        let mut key_pos = None;
        let mut nchars = 0usize;

        let mut chars = raw.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '&' && key.is_none() {
                match chars.peek() {
                    Some('&') => {
                        // Escaped literal ampersand.
                        chars.next();
                        text.push('&');
                        nchars += 1;
                    }
                    Some(&next) => {
                        chars.next();
                        key = Some(next);
                        key_pos = Some(nchars);
                        text.push(next);
                        nchars += 1;
                    }
                    None => {
                        // Trailing marker with nothing to mark.
                        text.push('&');
                        nchars += 1;
                    }
                }
            } else {
                text.push(c);
                nchars += 1;
            }
        }

        Self {
            text,
            key,
            key_pos,
        }
    }

    /// Use `text` verbatim, without scanning for accelerator markers.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            key: None,
            key_pos: None,
        }
    }

    /// The display text, with the accelerator marker stripped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The accelerator key, if the label carried a marker.
    pub fn key(&self) -> Option<char> {
        self.key
    }

    /// Character offset of the accelerator key within [`text`](Self::text),
    /// used to underline it in the tab strip.
    pub fn key_pos(&self) -> Option<usize> {
        self.key_pos
    }

    /// Case-insensitive test whether `c` activates this tab.
    pub fn matches_key(&self, c: char) -> bool {
        self.key
            .map(|k| k.eq_ignore_ascii_case(&c))
            .unwrap_or(false)
    }
}

impl fmt::Display for TabLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for TabLabel {
    fn from(raw: &str) -> Self {
        TabLabel::new(raw)
    }
}

impl From<String> for TabLabel {
    fn from(raw: String) -> Self {
        TabLabel::new(raw)
    }
}

impl From<&String> for TabLabel {
    fn from(raw: &String) -> Self {
        TabLabel::new(raw.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_extracts_key_and_position() {
        let l = TabLabel::new("Dataset &A");
        assert_eq!(l.text(), "Dataset A");
        assert_eq!(l.key(), Some('A'));
        assert_eq!(l.key_pos(), Some(8));
    }

    #[test]
    fn unmarked_label_has_no_key() {
        let l = TabLabel::new("Plain");
        assert_eq!(l.text(), "Plain");
        assert_eq!(l.key(), None);
        assert_eq!(l.key_pos(), None);
    }

    #[test]
    fn double_ampersand_is_literal() {
        let l = TabLabel::new("Fish && Chips");
        assert_eq!(l.text(), "Fish & Chips");
        assert_eq!(l.key(), None);
    }

    #[test]
    fn only_first_marker_is_honored() {
        let l = TabLabel::new("&X and &Y");
        assert_eq!(l.text(), "X and &Y");
        assert_eq!(l.key(), Some('X'));
        assert_eq!(l.key_pos(), Some(0));
    }

    #[test]
    fn trailing_marker_is_literal() {
        let l = TabLabel::new("Odd&");
        assert_eq!(l.text(), "Odd&");
        assert_eq!(l.key(), None);
    }

    #[test]
    fn plain_skips_parsing() {
        let l = TabLabel::plain("R&D");
        assert_eq!(l.text(), "R&D");
        assert_eq!(l.key(), None);
    }

    #[test]
    fn key_match_is_case_insensitive() {
        let l = TabLabel::new("Marker &h");
        assert!(l.matches_key('h'));
        assert!(l.matches_key('H'));
        assert!(!l.matches_key('m'));
    }
}
