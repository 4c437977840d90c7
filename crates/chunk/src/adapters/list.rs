use xom_data::{Domain, Placement, Result, Value};
use xom_primitives::{Span, UnitRange};

use super::{assemble_vec, native_units, splice_vec};
use crate::engine::{UnitAdapter, Window};

/// List elements.
pub(crate) struct Elements;

impl UnitAdapter for Elements {
	type Snapshot = Vec<Value>;

	const DOMAIN: Domain = Domain::List;
	const NATIVE_UNITS: bool = true;

	fn materialize(&self, content: Value) -> Result<Vec<Value>> {
		Ok(match content {
			Value::List(items) => items,
			other => other.to_list(),
		})
	}

	fn count(&self, snap: &Vec<Value>) -> i64 {
		snap.len() as i64
	}

	fn native_len(&self, snap: &Vec<Value>) -> usize {
		snap.len()
	}

	fn filler(&self, n: usize) -> Option<Value> {
		Some(Value::List(vec![Value::Empty; n]))
	}

	fn grow(&self, snap: &mut Vec<Value>, filler: &Value, front: bool) -> Result<()> {
		let filler = filler.as_list()?;
		if front {
			snap.splice(0..0, filler.iter().cloned());
		} else {
			snap.extend_from_slice(filler);
		}
		Ok(())
	}

	fn locate(&self, snap: &Vec<Value>, range: UnitRange) -> Window {
		Window::new(range.clamp(snap.len()))
	}

	fn slice(&self, snap: &Vec<Value>, span: Span) -> Value {
		Value::List(snap[span.range()].to_vec())
	}

	/// A single element reads as itself; an out-of-range one as empty.
	fn finish_read(&self, value: Value, singular: bool) -> Value {
		match value {
			Value::List(mut items) if singular => items.pop().unwrap_or_default(),
			other => other,
		}
	}

	fn payload(&self, value: &Value) -> Result<Value> {
		Ok(Value::List(value.to_list()))
	}

	fn splice(&self, snap: &Vec<Value>, span: Span, placement: Placement, payload: Value) -> Result<Value> {
		Ok(Value::List(splice_vec(snap, span, placement, payload.as_list()?)))
	}

	fn units(&self, snap: &Vec<Value>) -> Result<Vec<Span>> {
		Ok(native_units(snap.len()))
	}

	fn unit_value(&self, snap: &Vec<Value>, span: Span) -> Value {
		snap[span.start].clone()
	}

	fn assemble(&self, snap: &Vec<Value>, pieces: &[Span]) -> Value {
		Value::List(assemble_vec(snap, pieces))
	}
}
