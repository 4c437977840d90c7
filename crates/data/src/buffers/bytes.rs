use xom_primitives::Span;

use super::{clamp, rearranged, splice};
use crate::container::{Comparator, Container, Domain, Placement};
use crate::error::{ChunkError, Result};
use crate::value::Value;

/// A byte string with native byte range operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
	name: String,
	bytes: Vec<u8>,
}

impl ByteBuffer {
	pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			name: name.into(),
			bytes: bytes.into(),
		}
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	fn check(&self, domain: Domain) -> Result<()> {
		match domain {
			Domain::Binary => Ok(()),
			other => Err(ChunkError::unsupported(format!("{other} ranges"), self.describe())),
		}
	}
}

impl Container for ByteBuffer {
	fn describe(&self) -> String {
		self.name.clone()
	}

	fn can_get_contents(&self) -> bool {
		true
	}

	fn get_contents(&self) -> Result<Value> {
		Ok(Value::Binary(self.bytes.clone()))
	}

	fn can_put_contents(&self) -> bool {
		true
	}

	fn put_contents(&mut self, placement: Placement, value: Value) -> Result<()> {
		let incoming = value.to_binary()?;
		let all = Span::new(0, self.bytes.len());
		splice(&mut self.bytes, all, placement, incoming);
		Ok(())
	}

	fn can_delete(&self) -> bool {
		true
	}

	fn delete(&mut self) -> Result<()> {
		self.bytes.clear();
		Ok(())
	}

	fn can_get_range(&self, domain: Domain) -> bool {
		domain == Domain::Binary
	}

	fn get_range(&self, domain: Domain, span: Span) -> Result<Value> {
		self.check(domain)?;
		Ok(Value::Binary(self.bytes[clamp(span, self.bytes.len()).range()].to_vec()))
	}

	fn can_put_range(&self, domain: Domain) -> bool {
		domain == Domain::Binary
	}

	fn put_range(&mut self, domain: Domain, span: Span, placement: Placement, value: Value) -> Result<()> {
		self.check(domain)?;
		let incoming = value.as_binary()?.to_vec();
		splice(&mut self.bytes, span, placement, incoming);
		Ok(())
	}

	fn can_delete_range(&self, domain: Domain) -> bool {
		domain == Domain::Binary
	}

	fn delete_range(&mut self, domain: Domain, span: Span) -> Result<()> {
		self.check(domain)?;
		self.bytes.drain(clamp(span, self.bytes.len()).range());
		Ok(())
	}

	fn can_sort_range(&self, domain: Domain) -> bool {
		domain == Domain::Binary
	}

	fn sort_range(&mut self, domain: Domain, span: Span, cmp: &Comparator<'_>) -> Result<()> {
		self.check(domain)?;
		let span = clamp(span, self.bytes.len());
		tracing::trace!(buffer = %self.name, start = span.start, end = span.end, "buffer.binary.sort");
		let byte = |b: &u8| Value::Binary(vec![*b]);
		self.bytes[span.range()].sort_by(|a, b| cmp(&byte(a), &byte(b)));
		Ok(())
	}

	fn can_rearrange(&self, domain: Domain) -> bool {
		domain == Domain::Binary
	}

	fn rearrange(&mut self, domain: Domain, pieces: &[Span]) -> Result<()> {
		self.check(domain)?;
		self.bytes = rearranged(&self.bytes, pieces);
		Ok(())
	}

	fn can_get_property(&self, name: &str) -> bool {
		name == "name"
	}

	fn get_property(&self, name: &str) -> Result<Value> {
		match name {
			"name" => Ok(Value::string(&self.name)),
			_ => Err(ChunkError::unsupported(format!("property {name}"), self.describe())),
		}
	}
}
