//! Sub-range operations a nested chunk routes through its parent chunk.
//!
//! Spans arrive relative to the chunk's own content and are narrowed into
//! the parent's coordinates; nothing here grows the parent.

use xom_data::{ChunkError, Comparator, Container, Placement, Result, Value};
use xom_primitives::Span;

use super::{Request, UnitAdapter, apply_pieces, window};
use crate::sort;

pub(crate) fn read<A: UnitAdapter>(a: &A, parent: &dyn Container, req: &Request<'_>, span: Span) -> Result<Value> {
	let (snap, window) = window(a, parent, req)?;
	let inner = window.span.narrow(span);
	if parent.can_get_range(A::DOMAIN) {
		parent.get_range(A::DOMAIN, inner)
	} else {
		Ok(a.slice(&snap, inner))
	}
}

pub(crate) fn write<A: UnitAdapter>(
	a: &A,
	parent: &mut dyn Container,
	req: &Request<'_>,
	span: Span,
	placement: Placement,
	payload: Value,
) -> Result<()> {
	let native = parent.can_put_range(A::DOMAIN);
	if !native && !parent.can_put_contents() {
		return Err(ChunkError::not_permitted("put into", parent.describe()));
	}
	let (snap, window) = window(a, parent, req)?;
	let inner = window.span.narrow(span);
	if native {
		parent.put_range(A::DOMAIN, inner, placement, payload)
	} else {
		let spliced = a.splice(&snap, inner, placement, payload)?;
		parent.put_contents(Placement::Into, spliced)
	}
}

pub(crate) fn delete<A: UnitAdapter>(a: &A, parent: &mut dyn Container, req: &Request<'_>, span: Span) -> Result<()> {
	let native = parent.can_delete_range(A::DOMAIN);
	if !native && !parent.can_put_contents() {
		return Err(ChunkError::not_permitted("delete", parent.describe()));
	}
	let (snap, window) = window(a, parent, req)?;
	let inner = window.span.narrow(span);
	if inner.is_empty() {
		return Ok(());
	}
	if native {
		parent.delete_range(A::DOMAIN, inner)
	} else {
		let spliced = a.splice(&snap, inner, Placement::Into, A::DOMAIN.empty())?;
		parent.put_contents(Placement::Into, spliced)
	}
}

/// Sorts native units inside `span`. Only meaningful for domains whose
/// units are native positions.
pub(crate) fn sort<A: UnitAdapter>(
	a: &A,
	parent: &mut dyn Container,
	req: &Request<'_>,
	span: Span,
	cmp: &Comparator<'_>,
) -> Result<()> {
	let (snap, window) = window(a, parent, req)?;
	let inner = window.span.narrow(span);
	if inner.is_empty() {
		return Ok(());
	}
	if parent.can_sort_range(A::DOMAIN) {
		return parent.sort_range(A::DOMAIN, inner, cmp);
	}
	let units: Vec<Span> = inner.range().map(|i| Span::new(i, i + 1)).collect();
	let keys: Vec<Value> = units.iter().map(|unit| a.unit_value(&snap, *unit)).collect();
	let order = sort::stable_order(&keys, cmp);
	let pieces = sort::skeleton_pieces(&units, &order, a.native_len(&snap));
	apply_pieces(a, parent, &snap, &pieces)
}

/// Rearranges the chunk's content; `pieces` are relative to it.
pub(crate) fn rearrange<A: UnitAdapter>(
	a: &A,
	parent: &mut dyn Container,
	req: &Request<'_>,
	pieces: &[Span],
) -> Result<()> {
	let (snap, window) = window(a, parent, req)?;
	let mut all = Vec::with_capacity(pieces.len() + 2);
	all.push(Span::new(0, window.span.start));
	all.extend(pieces.iter().map(|piece| window.span.narrow(*piece)));
	all.push(Span::new(window.span.end, a.native_len(&snap)));
	all.retain(|piece| !piece.is_empty());
	apply_pieces(a, parent, &snap, &all)
}
