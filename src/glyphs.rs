//! Localized tile labels.

use std::borrow::Cow;

/// A table of characters which are rewritten before an equation is split and
/// tokenized, letting tiles be labelled with local glyphs (e.g. `×` or `÷`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyphs {
    substitutions: Vec<(char, char)>,
}

impl Glyphs {
    /// A table which doesn't rewrite anything.
    pub fn none() -> Self {
        Glyphs {
            substitutions: Vec::new(),
        }
    }

    pub fn with(mut self, glyph: char, replacement: char) -> Self {
        self.push(glyph, replacement);
        self
    }

    /// Add a substitution, replacing any existing one for `glyph`.
    pub fn push(&mut self, glyph: char, replacement: char) {
        self.substitutions.retain(|(g, _)| *g != glyph);
        self.substitutions.push((glyph, replacement));
    }

    pub fn lookup(&self, glyph: char) -> Option<char> {
        self.substitutions
            .iter()
            .find(|(g, _)| *g == glyph)
            .map(|(_, replacement)| *replacement)
    }

    /// Rewrite every known glyph in `text`.
    pub fn substitute<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.chars().any(|c| self.lookup(c).is_some()) {
            return Cow::Borrowed(text);
        }

        let rewritten = text
            .chars()
            .map(|c| self.lookup(c).unwrap_or(c))
            .collect();

        Cow::Owned(rewritten)
    }
}

impl Default for Glyphs {
    /// The labels used by the game's tile sets.
    fn default() -> Self {
        Glyphs::none()
            .with('x', '*')
            .with('X', '*')
            .with('×', '*')
            .with('÷', '/')
    }
}
