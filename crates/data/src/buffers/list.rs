use xom_primitives::Span;

use super::{clamp, rearranged, splice};
use crate::container::{Comparator, Container, Domain, Placement};
use crate::error::{ChunkError, Result};
use crate::value::Value;

/// A list with native element range operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBuffer {
	name: String,
	items: Vec<Value>,
}

impl ListBuffer {
	pub fn new(name: impl Into<String>, items: impl IntoIterator<Item = Value>) -> Self {
		Self {
			name: name.into(),
			items: items.into_iter().collect(),
		}
	}

	pub fn items(&self) -> &[Value] {
		&self.items
	}

	fn check(&self, domain: Domain) -> Result<()> {
		match domain {
			Domain::List => Ok(()),
			other => Err(ChunkError::unsupported(format!("{other} ranges"), self.describe())),
		}
	}
}

impl Container for ListBuffer {
	fn describe(&self) -> String {
		self.name.clone()
	}

	fn can_get_contents(&self) -> bool {
		true
	}

	fn get_contents(&self) -> Result<Value> {
		Ok(Value::List(self.items.clone()))
	}

	fn can_put_contents(&self) -> bool {
		true
	}

	fn put_contents(&mut self, placement: Placement, value: Value) -> Result<()> {
		let incoming = value.to_list();
		let all = Span::new(0, self.items.len());
		splice(&mut self.items, all, placement, incoming);
		Ok(())
	}

	fn can_delete(&self) -> bool {
		true
	}

	fn delete(&mut self) -> Result<()> {
		self.items.clear();
		Ok(())
	}

	fn can_get_range(&self, domain: Domain) -> bool {
		domain == Domain::List
	}

	fn get_range(&self, domain: Domain, span: Span) -> Result<Value> {
		self.check(domain)?;
		Ok(Value::List(self.items[clamp(span, self.items.len()).range()].to_vec()))
	}

	fn can_put_range(&self, domain: Domain) -> bool {
		domain == Domain::List
	}

	fn put_range(&mut self, domain: Domain, span: Span, placement: Placement, value: Value) -> Result<()> {
		self.check(domain)?;
		let incoming = value.as_list()?.to_vec();
		splice(&mut self.items, span, placement, incoming);
		Ok(())
	}

	fn can_delete_range(&self, domain: Domain) -> bool {
		domain == Domain::List
	}

	fn delete_range(&mut self, domain: Domain, span: Span) -> Result<()> {
		self.check(domain)?;
		self.items.drain(clamp(span, self.items.len()).range());
		Ok(())
	}

	fn can_sort_range(&self, domain: Domain) -> bool {
		domain == Domain::List
	}

	fn sort_range(&mut self, domain: Domain, span: Span, cmp: &Comparator<'_>) -> Result<()> {
		self.check(domain)?;
		let span = clamp(span, self.items.len());
		tracing::trace!(buffer = %self.name, start = span.start, end = span.end, "buffer.list.sort");
		self.items[span.range()].sort_by(|a, b| cmp(a, b));
		Ok(())
	}

	fn can_rearrange(&self, domain: Domain) -> bool {
		domain == Domain::List
	}

	fn rearrange(&mut self, domain: Domain, pieces: &[Span]) -> Result<()> {
		self.check(domain)?;
		self.items = rearranged(&self.items, pieces);
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
