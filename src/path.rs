//! Addressing: selectors and focus paths.
//!
//! A [`Selector`] names one child within a group, either by position or by
//! label. A [`FocusPath`] is the canonical, fully-resolved coordinate of a
//! leaf panel: one child index per tree level. Builder callbacks receive
//! the `FocusPath` of the panel they are filling so they can look up which
//! dataset to draw.

use std::fmt;

use crate::label::TabLabel;

/// Addresses one child of a tab group, by insertion index or by label.
///
/// Label selectors are matched against the *display* text (accelerator
/// markers are stripped on both sides, so `"&A"` selects a tab labeled
/// `"A"`). Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Index(usize),
    Label(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(i) => write!(f, "[{i}]"),
            Selector::Label(l) => write!(f, "'{l}'"),
        }
    }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Selector::Index(i)
    }
}

impl From<&str> for Selector {
    fn from(label: &str) -> Self {
        Selector::Label(label.to_owned())
    }
}

impl From<String> for Selector {
    fn from(label: String) -> Self {
        Selector::Label(label)
    }
}

impl From<&String> for Selector {
    fn from(label: &String) -> Self {
        Selector::Label(label.clone())
    }
}

impl From<&TabLabel> for Selector {
    fn from(label: &TabLabel) -> Self {
        Selector::Label(label.text().to_owned())
    }
}

/// Join selectors for error messages and logs.
pub(crate) fn join_selectors(segments: &[Selector]) -> String {
    if segments.is_empty() {
        return "(root)".to_owned();
    }
    segments
        .iter()
        .map(Selector::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical coordinates of one leaf panel: a child index per tree level.
///
/// The path length equals the depth of the branch it descends; the final
/// index lands on a leaf panel. Paths are produced by the tree when tabs
/// are added or focused and are handed to builder callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FocusPath(Vec<usize>);

impl FocusPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The per-level child indices, root first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index at `level`, if the path reaches that deep.
    pub fn level(&self, level: usize) -> Option<usize> {
        self.0.get(level).copied()
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for FocusPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        for (level, index) in self.0.iter().enumerate() {
            if level > 0 {
                write!(f, "/")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl From<Vec<usize>> for FocusPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for FocusPath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl AsRef<[usize]> for FocusPath {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl std::ops::Index<usize> for FocusPath {
    type Output = usize;

    fn index(&self, level: usize) -> &usize {
        &self.0[level]
    }
}

impl<'a> IntoIterator for &'a FocusPath {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
