//! Structural text units and the chunker that locates them.
//!
//! A [`UnitChunker`] enumerates every unit of a kind in one pass and hands
//! back a [`UnitMap`]; ordinal lookups then run against the map instead of
//! rescanning the text per unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::{Span, UnitIdx};

/// A structural unit of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextUnit {
	Character,
	Word,
	Line,
	Item,
	Column,
	Row,
	Sentence,
	Paragraph,
}

impl TextUnit {
	/// Singular display name, as used in chunk descriptions.
	pub fn name(self) -> &'static str {
		match self {
			Self::Character => "character",
			Self::Word => "word",
			Self::Line => "line",
			Self::Item => "item",
			Self::Column => "column",
			Self::Row => "row",
			Self::Sentence => "sentence",
			Self::Paragraph => "paragraph",
		}
	}

	/// Returns the text that separates two consecutive units of this kind,
	/// or `None` when the unit kind has no single separator and therefore
	/// cannot be grown with filler.
	pub fn filler(self, delimiters: &Delimiters) -> Option<String> {
		match self {
			Self::Line => Some(delimiters.line_ending.clone()),
			Self::Item => Some(delimiters.item.to_string()),
			Self::Column => Some(delimiters.column.to_string()),
			Self::Row => Some(delimiters.row.to_string()),
			Self::Character | Self::Word | Self::Sentence | Self::Paragraph => None,
		}
	}
}

impl fmt::Display for TextUnit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Separator configuration consumed by the chunker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
	pub item: char,
	pub column: char,
	pub row: char,
	/// Text inserted when lines are synthesized. Any break is recognized
	/// when reading, regardless of this setting.
	pub line_ending: String,
}

impl Default for Delimiters {
	fn default() -> Self {
		Self {
			item: ',',
			column: '\u{FFF0}',
			row: '\u{FFF1}',
			line_ending: "\n".to_string(),
		}
	}
}

/// Every unit of one kind in a text, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitMap {
	spans: Vec<Span>,
	len: usize,
}

impl UnitMap {
	/// Builds a map from unit spans over a text of `len` characters.
	pub fn new(spans: Vec<Span>, len: usize) -> Self {
		debug_assert!(spans.iter().all(|s| s.end <= len));
		Self { spans, len }
	}

	/// Number of units.
	pub fn count(&self) -> usize {
		self.spans.len()
	}

	pub fn spans(&self) -> &[Span] {
		&self.spans
	}

	/// Character offset where the 1-based unit `n` starts.
	///
	/// Units before the first map to 0, units past the last to the text length.
	pub fn start_of(&self, n: i64) -> UnitIdx {
		if n < 1 {
			return 0;
		}
		self.spans.get((n - 1) as usize).map_or(self.len, |s| s.start)
	}

	/// Character offset where the 1-based unit `n` ends.
	pub fn end_of(&self, n: i64) -> UnitIdx {
		if n < 1 {
			return 0;
		}
		self.spans.get((n - 1) as usize).map_or(self.len, |s| s.end)
	}
}

/// Locates structural units in text.
pub trait UnitChunker {
	/// Enumerates every `unit` in `text`.
	fn map(&self, text: &[char], unit: TextUnit, delimiters: &Delimiters) -> UnitMap;
}

/// The standard chunker: delimiter-separated items, line breaks, whitespace
/// words, punctuation-terminated sentences and break-separated paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedChunker;

impl UnitChunker for DelimitedChunker {
	fn map(&self, text: &[char], unit: TextUnit, delimiters: &Delimiters) -> UnitMap {
		let spans = match unit {
			TextUnit::Character => (0..text.len()).map(|i| Span::new(i, i + 1)).collect(),
			TextUnit::Item => separated(text, |t, i| (t[i] == delimiters.item).then_some(1)),
			TextUnit::Column => separated(text, |t, i| (t[i] == delimiters.column).then_some(1)),
			TextUnit::Row => separated(text, |t, i| (t[i] == delimiters.row).then_some(1)),
			TextUnit::Line => separated(text, line_break_at),
			TextUnit::Word => runs(text, |c| !is_white(c)),
			TextUnit::Paragraph => runs(text, |c| !is_break(c)),
			TextUnit::Sentence => sentences(text),
		};
		UnitMap::new(spans, text.len())
	}
}

/// Splits on separators located by `sep_at`, which returns the separator
/// width when one starts at `i`. A trailing separator does not open a unit,
/// and empty text has no units.
fn separated(text: &[char], sep_at: impl Fn(&[char], usize) -> Option<usize>) -> Vec<Span> {
	let mut spans = Vec::new();
	if text.is_empty() {
		return spans;
	}
	let mut start = 0;
	let mut i = 0;
	while i < text.len() {
		if let Some(width) = sep_at(text, i) {
			spans.push(Span::new(start, i));
			i += width;
			start = i;
		} else {
			i += 1;
		}
	}
	if start < text.len() {
		spans.push(Span::new(start, text.len()));
	}
	spans
}

fn line_break_at(text: &[char], i: usize) -> Option<usize> {
	match text[i] {
		'\r' if text.get(i + 1) == Some(&'\n') => Some(2),
		'\r' | '\n' | '\u{2028}' | '\u{2029}' => Some(1),
		_ => None,
	}
}

/// Maximal runs of characters matching `inside`.
fn runs(text: &[char], inside: impl Fn(char) -> bool) -> Vec<Span> {
	let mut spans = Vec::new();
	let mut i = 0;
	while i < text.len() {
		if !inside(text[i]) {
			i += 1;
			continue;
		}
		let start = i;
		while i < text.len() && inside(text[i]) {
			i += 1;
		}
		spans.push(Span::new(start, i));
	}
	spans
}

fn sentences(text: &[char]) -> Vec<Span> {
	let mut spans = Vec::new();
	let mut i = 0;
	while i < text.len() && is_white(text[i]) {
		i += 1;
	}
	while i < text.len() {
		let start = i;
		while i < text.len() && !matches!(text[i], '.' | '!' | '?') {
			i += 1;
		}
		while i < text.len() && !is_white(text[i]) {
			i += 1;
		}
		spans.push(Span::new(start, i));
		while i < text.len() && is_white(text[i]) {
			i += 1;
		}
	}
	spans
}

fn is_white(c: char) -> bool {
	c <= ' ' || ('\u{7F}'..='\u{A0}').contains(&c) || c.is_whitespace()
}

fn is_break(c: char) -> bool {
	matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests;
