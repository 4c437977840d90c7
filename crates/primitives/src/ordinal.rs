//! Ordinal addressing and resolution.
//!
//! Ordinals are 1-based from the start of a container, or negative and
//! counted from the end (`-1` is the last unit). Resolution maps them onto
//! zero-based, half-open unit ranges *without* clamping: callers decide
//! whether an out-of-range result means "grow" or "clamp to empty".

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::span::Span;

/// A requested unit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
	/// A 1-based index, or a negative index counted from the end.
	Index(i64),
	/// The unit halfway through the container.
	Middle,
	/// A unit picked at random at resolution time.
	Any,
}

impl From<i64> for Ordinal {
	fn from(index: i64) -> Self {
		Self::Index(index)
	}
}

impl fmt::Display for Ordinal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(i) => write!(f, "{i}"),
			Self::Middle => f.write_str("middle"),
			Self::Any => f.write_str("any"),
		}
	}
}

/// Error returned when text cannot be read as an ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an ordinal: {0:?}")]
pub struct InvalidOrdinal(pub String);

impl FromStr for Ordinal {
	type Err = InvalidOrdinal;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.eq_ignore_ascii_case("middle") || trimmed.eq_ignore_ascii_case("mid") {
			return Ok(Self::Middle);
		}
		if trimmed.eq_ignore_ascii_case("any") {
			return Ok(Self::Any);
		}
		trimmed
			.parse::<i64>()
			.map(Self::Index)
			.map_err(|_| InvalidOrdinal(s.to_string()))
	}
}

/// Source of randomness for [`Ordinal::Any`].
pub trait IndexChooser {
	/// Returns an index in `[0, count)`. Only called with `count > 0`.
	fn choose(&self, count: usize) -> usize;
}

/// A resolved, zero-based, half-open unit range that has not been clamped.
///
/// `start` may be negative and `end` may exceed the unit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitRange {
	pub start: i64,
	pub end: i64,
}

impl UnitRange {
	pub fn new(start: i64, end: i64) -> Self {
		Self { start, end }
	}

	/// Moves both ends right by `by` units (used after filler is prepended).
	pub fn shifted(self, by: i64) -> Self {
		Self::new(self.start.saturating_add(by), self.end.saturating_add(by))
	}

	/// Clamps into `[0, count]`, collapsing an inverted range to empty.
	pub fn clamp(self, count: usize) -> Span {
		Span::clamped(self.start, self.end, count)
	}

	/// Number of units that survive clamping against `count`.
	pub fn clamped_len(self, count: usize) -> usize {
		self.clamp(count).len()
	}
}

/// Maps a single ordinal onto a zero-based index against `count` units.
///
/// Positive `k` maps to `k - 1`, negative `k` to `count + k`. Nothing is
/// clamped.
#[inline]
pub fn resolve_index(count: i64, ordinal: i64) -> i64 {
	if ordinal < 0 { count.saturating_add(ordinal) } else { ordinal - 1 }
}

/// Resolves a `start..=end` ordinal request against `count` units.
///
/// `count` is signed because some addressing schemes (fixed-width fields)
/// resolve against `len - width + 1`, which can drop below zero. A single
/// random pick is shared by both ends, so `any` through `any` is one unit.
pub fn resolve(count: i64, start: Ordinal, end: Ordinal, chooser: &dyn IndexChooser) -> UnitRange {
	let needs_pick = matches!(start, Ordinal::Any) || matches!(end, Ordinal::Any);
	let picked = if needs_pick && count > 0 {
		chooser.choose(count as usize) as i64
	} else {
		0
	};
	let index = |ordinal: Ordinal| match ordinal {
		Ordinal::Index(k) => resolve_index(count, k),
		Ordinal::Middle => count.max(0) / 2,
		Ordinal::Any => picked,
	};
	UnitRange::new(index(start), index(end) + 1)
}
