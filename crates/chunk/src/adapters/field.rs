use xom_data::{ChunkError, Container, Context, Domain, Placement, Result, Value, ValueType};
use xom_primitives::{FieldLayout, FieldType, FieldValue, Span, UnitRange, resolve};

use super::bytes::grow_bytes;
use super::splice_vec;
use crate::engine::{Request, UnitAdapter, Window};

/// A fixed-width numeric field.
///
/// Ordinals address field start positions: with `n` bytes and width `w`
/// there are `n - w + 1` of them, so `-1` is the last whole field. Ranges
/// live in byte space as `[start, start + w)`.
pub(crate) struct Field {
	ty: FieldType,
	layout: FieldLayout,
}

impl Field {
	pub fn new(ty: FieldType, signed: Option<bool>, ctx: &Context) -> Self {
		let options = ctx.options();
		let signed = signed.unwrap_or(!options.unsigned);
		Self {
			ty,
			layout: ty.layout(signed, options.little_endian),
		}
	}

	fn width(&self) -> i64 {
		self.layout.width as i64
	}

	/// The field's bytes from `start`, zero padded wherever it leaves the data.
	fn padded(&self, snap: &[u8], start: i64) -> Vec<u8> {
		(0..self.width())
			.map(|k| {
				start
					.checked_add(k)
					.and_then(|i| usize::try_from(i).ok())
					.and_then(|i| snap.get(i))
					.copied()
					.unwrap_or(0)
			})
			.collect()
	}

	fn decode(&self, bytes: &[u8]) -> Value {
		match self.layout.decode(bytes) {
			FieldValue::Integer(i) => Value::Integer(i),
			FieldValue::Float(f) => Value::Number(f),
		}
	}
}

impl UnitAdapter for Field {
	type Snapshot = Vec<u8>;

	const DOMAIN: Domain = Domain::Binary;
	const NATIVE_UNITS: bool = false;

	fn materialize(&self, content: Value) -> Result<Vec<u8>> {
		match content {
			Value::Binary(bytes) => Ok(bytes),
			other => other.to_binary(),
		}
	}

	fn count(&self, snap: &Vec<u8>) -> i64 {
		snap.len() as i64 - self.width() + 1
	}

	fn native_len(&self, snap: &Vec<u8>) -> usize {
		snap.len()
	}

	fn resolve(&self, snap: &Vec<u8>, req: &Request<'_>) -> UnitRange {
		let start = resolve(self.count(snap), req.start, req.start, req.ctx).start;
		UnitRange::new(start, start.saturating_add(self.width()))
	}

	fn growth_count(&self, snap: &Vec<u8>) -> i64 {
		snap.len() as i64
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

	/// Decodes the field, padding with zeros instead of growing the parent.
	fn read(&self, parent: &dyn Container, snap: &Vec<u8>, range: UnitRange) -> Result<Value> {
		let inside = range.start >= 0 && range.end <= snap.len() as i64;
		let bytes = if inside && parent.can_get_range(Self::DOMAIN) {
			let span = range.clamp(snap.len());
			tracing::trace!(parent = %parent.describe(), start = span.start, end = span.end, "chunk.field.read.native");
			parent.get_range(Self::DOMAIN, span)?.to_binary()?
		} else {
			tracing::trace!(parent = %parent.describe(), start = range.start, end = range.end, "chunk.field.read.padded");
			self.padded(snap, range.start)
		};
		Ok(self.decode(&bytes))
	}

	/// Numbers encode per the layout; binaries pass through unchanged.
	fn payload(&self, value: &Value) -> Result<Value> {
		let bytes = match value {
			Value::Binary(bytes) => return Ok(Value::Binary(bytes.clone())),
			Value::Integer(i) => self.layout.encode_integer(*i),
			Value::Number(n) => self.layout.encode_float(*n),
			Value::String(s) => {
				let s = s.trim();
				if let Ok(i) = s.parse::<i64>() {
					self.layout.encode_integer(i)
				} else if let Ok(n) = s.parse::<f64>() {
					self.layout.encode_float(n)
				} else {
					return Err(ChunkError::mismatch(self.ty.name(), ValueType::String));
				}
			}
			other => return Err(ChunkError::mismatch(self.ty.name(), other.get_type())),
		};
		Ok(Value::Binary(bytes.to_vec()))
	}

	fn splice(&self, snap: &Vec<u8>, span: Span, placement: Placement, payload: Value) -> Result<Value> {
		Ok(Value::Binary(splice_vec(snap, span, placement, payload.as_binary()?)))
	}

	fn units(&self, _snap: &Vec<u8>) -> Result<Vec<Span>> {
		Err(ChunkError::unsupported("sorting", format!("a {} chunk", self.ty)))
	}

	fn unit_value(&self, snap: &Vec<u8>, span: Span) -> Value {
		self.decode(&snap[span.range()])
	}

	fn assemble(&self, snap: &Vec<u8>, pieces: &[Span]) -> Value {
		Value::Binary(super::assemble_vec(snap, pieces))
	}
}
