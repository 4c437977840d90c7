use xom_data::{Context, Domain, Placement, Result, Value};
use xom_primitives::{Span, TextUnit, UnitMap, UnitRange};

use crate::engine::{UnitAdapter, Window};

/// Structural text units located by the context's chunker.
pub(crate) struct TextUnits<'c> {
	unit: TextUnit,
	ctx: &'c Context,
}

impl<'c> TextUnits<'c> {
	pub fn new(unit: TextUnit, ctx: &'c Context) -> Self {
		Self { unit, ctx }
	}

	fn snapshot(&self, chars: Vec<char>) -> TextSnapshot {
		let map = self.ctx.chunker().map(&chars, self.unit, self.ctx.delimiters());
		TextSnapshot { chars, map }
	}
}

pub(crate) struct TextSnapshot {
	chars: Vec<char>,
	map: UnitMap,
}

impl TextSnapshot {
	fn text(&self, span: Span) -> String {
		self.chars[span.range()].iter().collect()
	}
}

impl UnitAdapter for TextUnits<'_> {
	type Snapshot = TextSnapshot;

	const DOMAIN: Domain = Domain::Text;
	const NATIVE_UNITS: bool = false;

	fn materialize(&self, content: Value) -> Result<TextSnapshot> {
		let text = match content {
			Value::String(s) => s,
			other => other.to_text(self.ctx.item_delimiter()),
		};
		Ok(self.snapshot(text.chars().collect()))
	}

	fn count(&self, snap: &TextSnapshot) -> i64 {
		snap.map.count() as i64
	}

	fn native_len(&self, snap: &TextSnapshot) -> usize {
		snap.chars.len()
	}

	/// A unit past the end only exists once the separator in front of it
	/// does, so writing before unit `n + 1` of `n` still takes one. Empty
	/// text already holds one (empty) unit's worth of room.
	fn append_shortfall(&self, placement: Placement, range: UnitRange, count: i64) -> i64 {
		let n = match placement {
			Placement::Into => range.start.saturating_add(1).max(range.end).saturating_sub(count),
			Placement::Before => range.start.saturating_add(1).saturating_sub(count),
			Placement::After => range.end.saturating_sub(count),
		};
		if n > 0 && count == 0 { n - 1 } else { n }
	}

	fn prepend_shortfall(&self, placement: Placement, range: UnitRange, count: i64) -> i64 {
		let n = match placement {
			Placement::Into => range.start.min(range.end - 1).saturating_neg(),
			Placement::Before => range.start.saturating_neg(),
			Placement::After => 1i64.saturating_sub(range.end),
		};
		if n > 0 && count == 0 { n - 1 } else { n }
	}

	fn grows(&self) -> bool {
		self.unit.filler(self.ctx.delimiters()).is_some()
	}

	fn filler(&self, n: usize) -> Option<Value> {
		self.unit
			.filler(self.ctx.delimiters())
			.map(|sep| Value::String(sep.repeat(n)))
	}

	fn grow(&self, snap: &mut TextSnapshot, filler: &Value, front: bool) -> Result<()> {
		let filler = filler.as_str()?;
		let mut chars = std::mem::take(&mut snap.chars);
		if front {
			chars.splice(0..0, filler.chars());
		} else {
			chars.extend(filler.chars());
		}
		*snap = self.snapshot(chars);
		Ok(())
	}

	fn locate(&self, snap: &TextSnapshot, range: UnitRange) -> Window {
		let start = snap.map.start_of(range.start.saturating_add(1));
		let end = snap.map.end_of(range.end).max(start);
		let delete_end = snap.map.start_of(range.end.saturating_add(1)).max(start);
		Window {
			span: Span::new(start, end),
			delete_end,
		}
	}

	fn slice(&self, snap: &TextSnapshot, span: Span) -> Value {
		Value::String(snap.text(span))
	}

	fn payload(&self, value: &Value) -> Result<Value> {
		Ok(match value {
			Value::String(s) => Value::String(s.clone()),
			other => Value::String(other.to_text(self.ctx.item_delimiter())),
		})
	}

	fn splice(&self, snap: &TextSnapshot, span: Span, placement: Placement, payload: Value) -> Result<Value> {
		let payload = payload.as_str()?;
		let (left, right) = match placement {
			Placement::Into => (span.start, span.end),
			Placement::Before => (span.start, span.start),
			Placement::After => (span.end, span.end),
		};
		let mut out = String::with_capacity(snap.chars.len() + payload.len());
		out.extend(&snap.chars[..left]);
		out.push_str(payload);
		out.extend(&snap.chars[right..]);
		Ok(Value::String(out))
	}

	fn units(&self, snap: &TextSnapshot) -> Result<Vec<Span>> {
		Ok(snap.map.spans().to_vec())
	}

	fn unit_value(&self, snap: &TextSnapshot, span: Span) -> Value {
		Value::String(snap.text(span))
	}

	fn assemble(&self, snap: &TextSnapshot, pieces: &[Span]) -> Value {
		Value::String(pieces.iter().flat_map(|piece| &snap.chars[piece.range()]).collect())
	}
}
