use ropey::Rope;
use xom_primitives::Span;

use super::clamp;
use crate::container::{Container, Domain, Placement};
use crate::error::{ChunkError, Result};
use crate::value::Value;

/// Rope-backed text with native character range operations.
///
/// Spans are character indices, matching [`Rope::len_chars`].
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
	name: String,
	text: Rope,
}

impl TextBuffer {
	pub fn new(name: impl Into<String>, text: &str) -> Self {
		Self {
			name: name.into(),
			text: Rope::from_str(text),
		}
	}

	pub fn text(&self) -> String {
		self.text.to_string()
	}

	fn check(&self, domain: Domain) -> Result<()> {
		match domain {
			Domain::Text => Ok(()),
			other => Err(ChunkError::unsupported(format!("{other} ranges"), self.describe())),
		}
	}

	fn span(&self, span: Span) -> Span {
		clamp(span, self.text.len_chars())
	}
}

impl Container for TextBuffer {
	fn describe(&self) -> String {
		self.name.clone()
	}

	fn can_get_contents(&self) -> bool {
		true
	}

	fn get_contents(&self) -> Result<Value> {
		Ok(Value::String(self.text()))
	}

	fn can_put_contents(&self) -> bool {
		true
	}

	fn put_contents(&mut self, placement: Placement, value: Value) -> Result<()> {
		let incoming = value.to_string();
		match placement {
			Placement::Into => self.text = Rope::from_str(&incoming),
			Placement::Before => self.text.insert(0, &incoming),
			Placement::After => self.text.insert(self.text.len_chars(), &incoming),
		}
		Ok(())
	}

	fn can_delete(&self) -> bool {
		true
	}

	fn delete(&mut self) -> Result<()> {
		self.text = Rope::new();
		Ok(())
	}

	fn can_get_range(&self, domain: Domain) -> bool {
		domain == Domain::Text
	}

	fn get_range(&self, domain: Domain, span: Span) -> Result<Value> {
		self.check(domain)?;
		Ok(Value::String(self.text.slice(self.span(span).range()).to_string()))
	}

	fn can_put_range(&self, domain: Domain) -> bool {
		domain == Domain::Text
	}

	fn put_range(&mut self, domain: Domain, span: Span, placement: Placement, value: Value) -> Result<()> {
		self.check(domain)?;
		let incoming = value.as_str()?;
		let span = self.span(span);
		match placement {
			Placement::Into => {
				self.text.remove(span.range());
				self.text.insert(span.start, incoming);
			}
			Placement::Before => self.text.insert(span.start, incoming),
			Placement::After => self.text.insert(span.end, incoming),
		}
		Ok(())
	}

	fn can_delete_range(&self, domain: Domain) -> bool {
		domain == Domain::Text
	}

	fn delete_range(&mut self, domain: Domain, span: Span) -> Result<()> {
		self.check(domain)?;
		let span = self.span(span);
		self.text.remove(span.range());
		Ok(())
	}

	fn can_rearrange(&self, domain: Domain) -> bool {
		domain == Domain::Text
	}

	fn rearrange(&mut self, domain: Domain, pieces: &[Span]) -> Result<()> {
		self.check(domain)?;
		tracing::trace!(buffer = %self.name, pieces = pieces.len(), "buffer.text.rearrange");
		let mut out = String::with_capacity(self.text.len_bytes());
		for piece in pieces {
			for chunk in self.text.slice(self.span(*piece).range()).chunks() {
				out.push_str(chunk);
			}
		}
		self.text = Rope::from(out);
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
