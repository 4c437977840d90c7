//! The container capability protocol.
//!
//! Every addressable value implements [`Container`]. Capabilities come in
//! `can_x`/`x` pairs: callers query `can_x` first and pick a fallback when it
//! is false. The defaults describe a container that supports nothing, so an
//! implementation only overrides what it natively offers.

use std::cmp::Ordering;
use std::fmt;

use xom_primitives::Span;

use crate::error::{ChunkError, Result};
use crate::value::Value;

/// The element domain of a range operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
	/// Characters.
	Text,
	/// List elements.
	List,
	/// Bytes.
	Binary,
}

impl Domain {
	/// An empty value of this domain.
	pub fn empty(self) -> Value {
		match self {
			Self::Text => Value::String(String::new()),
			Self::List => Value::List(Vec::new()),
			Self::Binary => Value::Binary(Vec::new()),
		}
	}
}

impl fmt::Display for Domain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Text => "text",
			Self::List => "list",
			Self::Binary => "binary",
		})
	}
}

/// Where a write lands relative to its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Placement {
	/// Replace the target.
	#[default]
	Into,
	/// Insert in front of the target.
	Before,
	/// Insert behind the target.
	After,
}

impl fmt::Display for Placement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Into => "into",
			Self::Before => "before",
			Self::After => "after",
		})
	}
}

/// Ordering used by sorts. Text units arrive as strings, list elements as
/// themselves and bytes as one-byte binaries.
pub type Comparator<'c> = dyn Fn(&Value, &Value) -> Ordering + 'c;

/// An addressable runtime value.
///
/// Range operations take spans in the container's native units for the
/// given domain. Values handed to `put_range` are already converted to that
/// domain (a string for text, a list for lists, a binary for bytes).
pub trait Container {
	/// Short human-readable description, also used for structural equality
	/// of chunk views.
	fn describe(&self) -> String;

	fn can_get_contents(&self) -> bool {
		false
	}

	fn get_contents(&self) -> Result<Value> {
		Err(ChunkError::unsupported("reading", self.describe()))
	}

	fn can_put_contents(&self) -> bool {
		false
	}

	/// Replaces, prepends to or appends to the whole content.
	fn put_contents(&mut self, placement: Placement, value: Value) -> Result<()> {
		let _ = (placement, value);
		Err(ChunkError::not_permitted("put into", self.describe()))
	}

	fn can_delete(&self) -> bool {
		false
	}

	fn delete(&mut self) -> Result<()> {
		Err(ChunkError::not_permitted("delete", self.describe()))
	}

	fn can_get_range(&self, domain: Domain) -> bool {
		let _ = domain;
		false
	}

	fn get_range(&self, domain: Domain, span: Span) -> Result<Value> {
		let _ = span;
		Err(ChunkError::unsupported(format!("{domain} range reads"), self.describe()))
	}

	fn can_put_range(&self, domain: Domain) -> bool {
		let _ = domain;
		false
	}

	fn put_range(&mut self, domain: Domain, span: Span, placement: Placement, value: Value) -> Result<()> {
		let _ = (domain, span, placement, value);
		Err(ChunkError::not_permitted("put into", self.describe()))
	}

	fn can_delete_range(&self, domain: Domain) -> bool {
		let _ = domain;
		false
	}

	fn delete_range(&mut self, domain: Domain, span: Span) -> Result<()> {
		let _ = (domain, span);
		Err(ChunkError::not_permitted("delete from", self.describe()))
	}

	fn can_sort_range(&self, domain: Domain) -> bool {
		let _ = domain;
		false
	}

	/// Stable-sorts the units inside `span`.
	fn sort_range(&mut self, domain: Domain, span: Span, cmp: &Comparator<'_>) -> Result<()> {
		let _ = (domain, span, cmp);
		Err(ChunkError::not_permitted("sort", self.describe()))
	}

	fn can_rearrange(&self, domain: Domain) -> bool {
		let _ = domain;
		false
	}

	/// Replaces the whole content with the concatenation of `pieces`, each a
	/// span of the current content. Pieces may arrive in any order.
	fn rearrange(&mut self, domain: Domain, pieces: &[Span]) -> Result<()> {
		let _ = (domain, pieces);
		Err(ChunkError::not_permitted("rearrange", self.describe()))
	}

	fn can_get_range_property(&self, domain: Domain, name: &str) -> bool {
		let _ = (domain, name);
		false
	}

	fn get_range_property(&self, domain: Domain, span: Span, name: &str) -> Result<Value> {
		let _ = (domain, span);
		Err(ChunkError::unsupported(format!("property {name}"), self.describe()))
	}

	fn can_set_range_property(&self, domain: Domain, name: &str) -> bool {
		let _ = (domain, name);
		false
	}

	fn set_range_property(&mut self, domain: Domain, span: Span, name: &str, value: Value) -> Result<()> {
		let _ = (domain, span, value);
		Err(ChunkError::unsupported(format!("setting property {name}"), self.describe()))
	}

	fn can_get_property(&self, name: &str) -> bool {
		let _ = name;
		false
	}

	fn get_property(&self, name: &str) -> Result<Value> {
		Err(ChunkError::unsupported(format!("property {name}"), self.describe()))
	}

	fn can_set_property(&self, name: &str) -> bool {
		let _ = name;
		false
	}

	fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
		let _ = value;
		Err(ChunkError::unsupported(format!("setting property {name}"), self.describe()))
	}
}

/// Writes `value` as a literal that no other value shares: strings quoted,
/// elements bracketed, numbers always with a fraction.
fn write_literal(out: &mut String, value: &Value) -> fmt::Result {
	use std::fmt::Write as _;

	match value {
		Value::Empty => out.write_str("empty"),
		Value::Boolean(b) => write!(out, "{b}"),
		Value::Integer(i) => write!(out, "{i}"),
		Value::Number(n) => write!(out, "{n:?}"),
		Value::String(s) => write!(out, "{s:?}"),
		Value::List(items) => {
			out.write_char('[')?;
			for (i, item) in items.iter().enumerate() {
				if i > 0 {
					out.write_str(", ")?;
				}
				write_literal(out, item)?;
			}
			out.write_char(']')
		}
		Value::Binary(bytes) => {
			out.write_str("<")?;
			for b in bytes {
				write!(out, "{b:02X}")?;
			}
			out.write_str(">")
		}
	}
}

/// A literal is a read-only container.
impl Container for Value {
	fn describe(&self) -> String {
		let mut out = String::new();
		let _ = write_literal(&mut out, self);
		out
	}

	fn can_get_contents(&self) -> bool {
		true
	}

	fn get_contents(&self) -> Result<Value> {
		Ok(self.clone())
	}
}
