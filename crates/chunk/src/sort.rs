//! Sorting that leaves the text between units in place.
//!
//! The parent content is split into `tween, unit, tween, ..., unit, tween`.
//! Only the unit slots are permuted; each tween stays where it was.

use xom_data::{Comparator, Value};
use xom_primitives::Span;

/// Stable permutation of `keys` under `cmp`: `order[slot]` is the index of
/// the key that ends up in `slot`.
pub(crate) fn stable_order(keys: &[Value], cmp: &Comparator<'_>) -> Vec<usize> {
	let mut order: Vec<usize> = (0..keys.len()).collect();
	order.sort_by(|&a, &b| cmp(&keys[a], &keys[b]));
	order
}

/// Pieces covering the whole content of length `len`, with the unit spans
/// in `units` (in position order, non-empty) permuted by `order`.
pub(crate) fn skeleton_pieces(units: &[Span], order: &[usize], len: usize) -> Vec<Span> {
	debug_assert_eq!(units.len(), order.len());
	let mut pieces = Vec::with_capacity(units.len() * 2 + 1);
	pieces.push(Span::new(0, units[0].start));
	for (slot, &src) in order.iter().enumerate() {
		pieces.push(units[src]);
		let tween_end = units.get(slot + 1).map_or(len, |next| next.start);
		pieces.push(Span::new(units[slot].end, tween_end));
	}
	pieces.retain(|piece| !piece.is_empty());
	pieces
}
