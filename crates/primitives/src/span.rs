/// A position in a container, measured in native units (characters for
/// text, elements for lists, bytes for binaries).
pub type UnitIdx = usize;

/// A half-open `[start, end)` window over a container's native units.
///
/// Spans are always normalized: `start <= end`. Constructors that receive
/// an inverted pair collapse it to an empty span at `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
	/// First unit inside the span.
	pub start: UnitIdx,
	/// First unit after the span.
	pub end: UnitIdx,
}

impl Span {
	/// Creates a span, collapsing an inverted pair to an empty span at `start`.
	pub fn new(start: UnitIdx, end: UnitIdx) -> Self {
		Self {
			start,
			end: end.max(start),
		}
	}

	/// Creates an empty span at `pos`.
	pub fn point(pos: UnitIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Clamps possibly negative, possibly oversized signed offsets into `[0, len]`.
	pub fn clamped(start: i64, end: i64, len: usize) -> Self {
		let clamp = |v: i64| v.clamp(0, len as i64) as UnitIdx;
		Self::new(clamp(start), clamp(end))
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns the standard range form for slicing.
	#[inline]
	pub fn range(&self) -> std::ops::Range<UnitIdx> {
		self.start..self.end
	}

	/// Re-expresses `inner`, given relative to this span, in this span's
	/// coordinate space. The result never leaves `self`.
	pub fn narrow(&self, inner: Span) -> Span {
		let map = |rel: UnitIdx| self.start.saturating_add(rel).min(self.end);
		Span::new(map(inner.start), map(inner.end))
	}

	/// Returns this span moved right by `by` units.
	pub fn shifted(&self, by: usize) -> Span {
		Span::new(self.start + by, self.end + by)
	}
}

impl From<std::ops::Range<UnitIdx>> for Span {
	fn from(range: std::ops::Range<UnitIdx>) -> Self {
		Self::new(range.start, range.end)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_span_basics() {
		let s = Span::new(3, 7);
		assert_eq!(s.len(), 4);
		assert!(!s.is_empty());
		assert_eq!(s.range(), 3..7);
	}

	#[test]
	fn test_inverted_span_collapses() {
		let s = Span::new(7, 3);
		assert_eq!(s, Span::point(7));
		assert!(s.is_empty());
	}

	#[test]
	fn test_clamped_negative_and_oversized() {
		assert_eq!(Span::clamped(-4, 2, 10), Span::new(0, 2));
		assert_eq!(Span::clamped(8, 40, 10), Span::new(8, 10));
		assert_eq!(Span::clamped(12, 14, 10), Span::point(10));
		// inverted after clamping
		assert_eq!(Span::clamped(5, -1, 10), Span::point(5));
	}

	#[test]
	fn test_narrow_stays_inside() {
		let outer = Span::new(10, 20);
		assert_eq!(outer.narrow(Span::new(2, 5)), Span::new(12, 15));
		assert_eq!(outer.narrow(Span::new(8, 40)), Span::new(18, 20));
		assert_eq!(outer.narrow(Span::point(99)), Span::point(20));
	}

	#[test]
	fn test_shifted() {
		assert_eq!(Span::new(1, 3).shifted(2), Span::new(3, 5));
	}
}
