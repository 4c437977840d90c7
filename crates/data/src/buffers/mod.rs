//! Containers with native range operations.

mod bytes;
mod list;
mod text;

pub use bytes::ByteBuffer;
pub use list::ListBuffer;
pub use text::TextBuffer;
use xom_primitives::Span;

use crate::container::Placement;

/// Clamps a span into a buffer of `len` units.
fn clamp(span: Span, len: usize) -> Span {
	Span::new(span.start.min(len), span.end.min(len))
}

/// Writes `incoming` relative to `span` in place.
fn splice<T>(items: &mut Vec<T>, span: Span, placement: Placement, incoming: Vec<T>) {
	let span = clamp(span, items.len());
	let replaced = match placement {
		Placement::Into => span.range(),
		Placement::Before => span.start..span.start,
		Placement::After => span.end..span.end,
	};
	items.splice(replaced, incoming);
}

/// Concatenates `pieces` of `items` in order.
fn rearranged<T: Clone>(items: &[T], pieces: &[Span]) -> Vec<T> {
	pieces
		.iter()
		.flat_map(|piece| items[clamp(*piece, items.len()).range()].iter().cloned())
		.collect()
}
