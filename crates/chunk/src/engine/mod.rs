//! The generic chunk engine.
//!
//! Every operation re-reads the parent, resolves the ordinals against its
//! current unit count, and then either calls the parent's native range
//! capability for the adapter's domain or splices the whole content and
//! writes it back. Per-domain behaviour lives behind [`UnitAdapter`].

pub(crate) mod within;

use xom_data::{ChunkError, Comparator, Container, Context, Domain, Placement, Result, Value};
use xom_primitives::{Ordinal, Span, UnitRange, resolve};

use crate::sort;

/// The ordinals of one chunk plus the context they resolve in.
#[derive(Clone, Copy)]
pub(crate) struct Request<'c> {
	pub start: Ordinal,
	pub end: Ordinal,
	pub ctx: &'c Context,
}

impl Request<'_> {
	pub fn is_singular(&self) -> bool {
		self.start == self.end
	}
}

/// Native offsets of a resolved chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
	pub span: Span,
	/// End of the range removed by a delete. Text deletes run to the start
	/// of the next unit so the trailing delimiter goes too.
	pub delete_end: usize,
}

impl Window {
	pub fn new(span: Span) -> Self {
		Self {
			span,
			delete_end: span.end,
		}
	}

	pub fn delete_span(&self) -> Span {
		Span::new(self.span.start, self.delete_end)
	}
}

/// Per-domain behaviour of the engine.
///
/// Ranges are expressed in "growth space": structural units for text and
/// native positions for everything else.
pub(crate) trait UnitAdapter {
	/// Materialized parent content.
	type Snapshot;

	const DOMAIN: Domain;

	/// Units map one-to-one onto native positions, so a parent's native
	/// range sort applies directly.
	const NATIVE_UNITS: bool;

	fn materialize(&self, content: Value) -> Result<Self::Snapshot>;

	/// Number of units ordinals resolve against.
	fn count(&self, snap: &Self::Snapshot) -> i64;

	/// Number of native positions in the snapshot.
	fn native_len(&self, snap: &Self::Snapshot) -> usize;

	/// Maps the request onto a growth-space range.
	fn resolve(&self, snap: &Self::Snapshot, req: &Request<'_>) -> UnitRange {
		resolve(self.count(snap), req.start, req.end, req.ctx)
	}

	/// Count that growth shortfalls are measured against.
	fn growth_count(&self, snap: &Self::Snapshot) -> i64 {
		self.count(snap)
	}

	/// Filler units needed past the end before writing at `range`.
	fn append_shortfall(&self, placement: Placement, range: UnitRange, count: i64) -> i64 {
		match placement {
			Placement::Into => range.start.saturating_add(1).max(range.end).saturating_sub(count),
			Placement::Before => range.start.saturating_sub(count),
			Placement::After => range.end.saturating_sub(count),
		}
	}

	/// Filler units needed in front of the start before writing at `range`.
	fn prepend_shortfall(&self, placement: Placement, range: UnitRange, count: i64) -> i64 {
		let _ = count;
		match placement {
			Placement::Into => range.start.min(range.end - 1).saturating_neg(),
			Placement::Before => range.start.saturating_neg(),
			Placement::After => range.end.saturating_neg(),
		}
	}

	/// Whether this kind ever grows its parent.
	fn grows(&self) -> bool {
		true
	}

	/// `n` units of neutral filler, or `None` if this kind never grows.
	fn filler(&self, n: usize) -> Option<Value>;

	/// Applies committed filler to the local snapshot.
	fn grow(&self, snap: &mut Self::Snapshot, filler: &Value, front: bool) -> Result<()>;

	/// Clamped native window of a growth-space range.
	fn locate(&self, snap: &Self::Snapshot, range: UnitRange) -> Window;

	/// Native slice as a value of the domain.
	fn slice(&self, snap: &Self::Snapshot, span: Span) -> Value;

	/// Final shape of a read.
	fn finish_read(&self, value: Value, singular: bool) -> Value {
		let _ = singular;
		value
	}

	/// Reads the window, through the parent's native range read if it has one.
	fn read(&self, parent: &dyn Container, snap: &Self::Snapshot, range: UnitRange) -> Result<Value> {
		let window = self.locate(snap, range);
		if parent.can_get_range(Self::DOMAIN) {
			trace_path("chunk.read.native", parent, Self::DOMAIN, window.span);
			parent.get_range(Self::DOMAIN, window.span)
		} else {
			trace_path("chunk.read.fallback", parent, Self::DOMAIN, window.span);
			Ok(self.slice(snap, window.span))
		}
	}

	/// Converts an incoming value into the domain. Runs before any mutation.
	fn payload(&self, value: &Value) -> Result<Value>;

	/// Whole new content with `payload` written relative to `span`.
	fn splice(&self, snap: &Self::Snapshot, span: Span, placement: Placement, payload: Value) -> Result<Value>;

	/// Native spans of every unit, in order.
	fn units(&self, snap: &Self::Snapshot) -> Result<Vec<Span>>;

	/// A single unit as handed to comparators.
	fn unit_value(&self, snap: &Self::Snapshot, span: Span) -> Value;

	/// Concatenates `pieces` of the snapshot.
	fn assemble(&self, snap: &Self::Snapshot, pieces: &[Span]) -> Value;
}

fn trace_path(event: &'static str, parent: &dyn Container, domain: Domain, span: Span) {
	tracing::trace!(
		parent = %parent.describe(),
		%domain,
		start = span.start,
		end = span.end,
		"{event}"
	);
}

pub(crate) fn contents(parent: &dyn Container) -> Result<Value> {
	if !parent.can_get_contents() {
		return Err(ChunkError::unsupported("reading", parent.describe()));
	}
	parent.get_contents()
}

/// Materializes the parent and resolves the request without growth.
pub(crate) fn window<A: UnitAdapter>(
	a: &A,
	parent: &dyn Container,
	req: &Request<'_>,
) -> Result<(A::Snapshot, Window)> {
	let snap = a.materialize(contents(parent)?)?;
	let range = a.resolve(&snap, req);
	let window = a.locate(&snap, range);
	Ok((snap, window))
}

pub(crate) fn read<A: UnitAdapter>(a: &A, parent: &dyn Container, req: &Request<'_>) -> Result<Value> {
	let snap = a.materialize(contents(parent)?)?;
	let range = a.resolve(&snap, req);
	let value = a.read(parent, &snap, range)?;
	Ok(a.finish_read(value, req.is_singular()))
}

/// Resolved units left after clamping.
pub(crate) fn number<A: UnitAdapter>(a: &A, parent: &dyn Container, req: &Request<'_>) -> Result<usize> {
	let snap = a.materialize(contents(parent)?)?;
	let count = a.count(&snap);
	let range = resolve(count, req.start, req.end, req.ctx);
	Ok(range.clamped_len(count.max(0) as usize))
}

pub(crate) fn write<A: UnitAdapter>(
	a: &A,
	parent: &mut dyn Container,
	req: &Request<'_>,
	placement: Placement,
	value: &Value,
) -> Result<()> {
	let native = parent.can_put_range(A::DOMAIN);
	if !native && !parent.can_put_contents() {
		return Err(ChunkError::not_permitted("put into", parent.describe()));
	}
	let payload = a.payload(value)?;
	let mut snap = a.materialize(contents(parent)?)?;
	let range = a.resolve(&snap, req);
	let range = grow(a, parent, &mut snap, range, placement)?;
	let window = a.locate(&snap, range);
	if native {
		trace_path("chunk.write.native", parent, A::DOMAIN, window.span);
		parent.put_range(A::DOMAIN, window.span, placement, payload)
	} else {
		trace_path("chunk.write.fallback", parent, A::DOMAIN, window.span);
		let spliced = a.splice(&snap, window.span, placement, payload)?;
		parent.put_contents(Placement::Into, spliced)
	}
}

/// Commits filler so that `range` lands inside the parent, returning the
/// range shifted past any prepended filler.
fn grow<A: UnitAdapter>(
	a: &A,
	parent: &mut dyn Container,
	snap: &mut A::Snapshot,
	range: UnitRange,
	placement: Placement,
) -> Result<UnitRange> {
	let append = a.append_shortfall(placement, range, a.growth_count(snap));
	if append > 0
		&& a.grows()
		&& let Some(filler) = a.filler(growth_units(append)?)
	{
		tracing::debug!(parent = %parent.describe(), units = append, "chunk.grow.append");
		let end = a.native_len(snap);
		commit(parent, A::DOMAIN, Span::point(end), Placement::After, filler.clone())?;
		a.grow(snap, &filler, false)?;
	}

	let prepend = a.prepend_shortfall(placement, range, a.growth_count(snap));
	if prepend > 0
		&& a.grows()
		&& let Some(filler) = a.filler(growth_units(prepend)?)
	{
		tracing::debug!(parent = %parent.describe(), units = prepend, "chunk.grow.prepend");
		commit(parent, A::DOMAIN, Span::point(0), Placement::Before, filler.clone())?;
		a.grow(snap, &filler, true)?;
		return Ok(range.shifted(prepend));
	}
	Ok(range)
}

/// Filler units one write may commit.
pub(crate) const GROWTH_LIMIT: i64 = u32::MAX as i64;

fn growth_units(n: i64) -> Result<usize> {
	if n > GROWTH_LIMIT {
		return Err(ChunkError::MalformedRange(format!("growing by {n} units")));
	}
	Ok(n as usize)
}

fn commit(parent: &mut dyn Container, domain: Domain, at: Span, placement: Placement, filler: Value) -> Result<()> {
	if parent.can_put_contents() {
		parent.put_contents(placement, filler)
	} else {
		parent.put_range(domain, at, Placement::Into, filler)
	}
}

pub(crate) fn delete<A: UnitAdapter>(a: &A, parent: &mut dyn Container, req: &Request<'_>) -> Result<()> {
	let native = parent.can_delete_range(A::DOMAIN);
	if !native && !parent.can_put_contents() {
		return Err(ChunkError::not_permitted("delete", parent.describe()));
	}
	let (snap, window) = window(a, parent, req)?;
	let span = window.delete_span();
	if span.is_empty() {
		return Ok(());
	}
	if native {
		trace_path("chunk.delete.native", parent, A::DOMAIN, span);
		parent.delete_range(A::DOMAIN, span)
	} else {
		trace_path("chunk.delete.fallback", parent, A::DOMAIN, span);
		let spliced = a.splice(&snap, span, Placement::Into, A::DOMAIN.empty())?;
		parent.put_contents(Placement::Into, spliced)
	}
}

pub(crate) fn sort<A: UnitAdapter>(
	a: &A,
	parent: &mut dyn Container,
	req: &Request<'_>,
	cmp: &Comparator<'_>,
) -> Result<()> {
	let domain = A::DOMAIN;
	let native = A::NATIVE_UNITS && parent.can_sort_range(domain);
	if !native && !parent.can_rearrange(domain) && !parent.can_put_contents() {
		return Err(ChunkError::not_permitted("sort", parent.describe()));
	}
	let snap = a.materialize(contents(parent)?)?;
	let units = a.units(&snap)?;
	let selected = a.resolve(&snap, req).clamp(units.len());
	if selected.is_empty() {
		return Ok(());
	}
	let chosen = &units[selected.range()];
	let span = Span::new(chosen[0].start, chosen[chosen.len() - 1].end);
	if native {
		trace_path("chunk.sort.native", parent, domain, span);
		return parent.sort_range(domain, span, cmp);
	}

	let keys: Vec<Value> = chosen.iter().map(|unit| a.unit_value(&snap, *unit)).collect();
	let order = sort::stable_order(&keys, cmp);
	let pieces = sort::skeleton_pieces(chosen, &order, a.native_len(&snap));
	trace_path("chunk.sort.skeleton", parent, domain, span);
	apply_pieces(a, parent, &snap, &pieces)
}

/// Replaces the parent's content with `pieces` of its snapshot, natively if
/// the parent can rearrange.
pub(crate) fn apply_pieces<A: UnitAdapter>(
	a: &A,
	parent: &mut dyn Container,
	snap: &A::Snapshot,
	pieces: &[Span],
) -> Result<()> {
	if parent.can_rearrange(A::DOMAIN) {
		tracing::trace!(parent = %parent.describe(), pieces = pieces.len(), "chunk.rearrange.native");
		parent.rearrange(A::DOMAIN, pieces)
	} else if parent.can_put_contents() {
		tracing::trace!(parent = %parent.describe(), pieces = pieces.len(), "chunk.rearrange.fallback");
		parent.put_contents(Placement::Into, a.assemble(snap, pieces))
	} else {
		Err(ChunkError::not_permitted("rearrange", parent.describe()))
	}
}
