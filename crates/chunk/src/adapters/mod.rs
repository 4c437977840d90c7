//! Per-domain unit adapters for the engine.

mod bytes;
mod field;
mod list;
mod text;

pub(crate) use bytes::Bytes;
pub(crate) use field::Field;
pub(crate) use list::Elements;
pub(crate) use text::TextUnits;
use xom_data::Placement;
use xom_primitives::Span;

/// Splices `payload` into `items` relative to `span`.
fn splice_vec<T: Clone>(items: &[T], span: Span, placement: Placement, payload: &[T]) -> Vec<T> {
	let (left, right) = match placement {
		Placement::Into => (span.start, span.end),
		Placement::Before => (span.start, span.start),
		Placement::After => (span.end, span.end),
	};
	let mut out = Vec::with_capacity(items.len() + payload.len());
	out.extend_from_slice(&items[..left]);
	out.extend_from_slice(payload);
	out.extend_from_slice(&items[right..]);
	out
}

fn assemble_vec<T: Clone>(items: &[T], pieces: &[Span]) -> Vec<T> {
	pieces.iter().flat_map(|piece| items[piece.range()].iter().cloned()).collect()
}

/// One span per native position.
fn native_units(len: usize) -> Vec<Span> {
	(0..len).map(|i| Span::new(i, i + 1)).collect()
}
