use xom_data::{ChunkError, Domain, Placement, Result, Value};
use xom_primitives::{Span, UnitRange};

use super::{assemble_vec, native_units, splice_vec};
use crate::engine::{UnitAdapter, Window};

/// Single bytes.
pub(crate) struct Bytes;

impl UnitAdapter for Bytes {
	type Snapshot = Vec<u8>;

	const DOMAIN: Domain = Domain::Binary;
	const NATIVE_UNITS: bool = true;

	fn materialize(&self, content: Value) -> Result<Vec<u8>> {
		match content {
			Value::Binary(bytes) => Ok(bytes),
			other => other.to_binary(),
		}
	}

	fn count(&self, snap: &Vec<u8>) -> i64 {
		snap.len() as i64
	}

	fn native_len(&self, snap: &Vec<u8>) -> usize {
		snap.len()
	}

	fn filler(&self, n: usize) -> Option<Value> {
		Some(Value::Binary(vec![0; n]))
	}

	fn grow(&self, snap: &mut Vec<u8>, filler: &Value, front: bool) -> Result<()> {
		grow_bytes(snap, filler, front)
	}

	fn locate(&self, snap: &Vec<u8>, range: UnitRange) -> Window {
		Window::new(range.clamp(snap.len()))
	}

	fn slice(&self, snap: &Vec<u8>, span: Span) -> Value {
		Value::Binary(snap[span.range()].to_vec())
	}

	/// Binaries pass through, strings parse as hex and small integers
	/// become one byte.
	fn payload(&self, value: &Value) -> Result<Value> {
		match value {
			Value::Integer(i) => u8::try_from(*i)
				.map(|b| Value::Binary(vec![b]))
				.map_err(|_| ChunkError::mismatch("byte", value.get_type())),
			other => other.to_binary().map(Value::Binary),
		}
	}

	fn splice(&self, snap: &Vec<u8>, span: Span, placement: Placement, payload: Value) -> Result<Value> {
		Ok(Value::Binary(splice_vec(snap, span, placement, payload.as_binary()?)))
	}

	fn units(&self, snap: &Vec<u8>) -> Result<Vec<Span>> {
		Ok(native_units(snap.len()))
	}

	fn unit_value(&self, snap: &Vec<u8>, span: Span) -> Value {
		Value::Binary(snap[span.range()].to_vec())
	}

	fn assemble(&self, snap: &Vec<u8>, pieces: &[Span]) -> Value {
		Value::Binary(assemble_vec(snap, pieces))
	}
}

pub(super) fn grow_bytes(snap: &mut Vec<u8>, filler: &Value, front: bool) -> Result<()> {
	let filler = filler.as_binary()?;
	if front {
		snap.splice(0..0, filler.iter().copied());
	} else {
		snap.extend_from_slice(filler);
	}
	Ok(())
}
