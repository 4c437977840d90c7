//! Chunk views.

use std::fmt;

use xom_data::{ChunkError, Comparator, Container, Context, Domain, Placement, Result, Value};
use xom_primitives::{Ordinal, Span};

use crate::adapters::{Bytes, Elements, Field, TextUnits};
use crate::engine::{self, Request, within};
use crate::kind::ChunkKind;

/// Property computed by the chunk itself rather than delegated.
pub const NUMBER_PROPERTY: &str = "number";

/// Binds the adapter for a chunk kind and evaluates `$body` with it.
macro_rules! with_adapter {
	($kind:expr, $ctx:expr, |$a:ident| $body:expr) => {
		match $kind {
			ChunkKind::Text(unit) => {
				let $a = TextUnits::new(unit, $ctx);
				$body
			}
			ChunkKind::Element => {
				let $a = Elements;
				$body
			}
			ChunkKind::Byte => {
				let $a = Bytes;
				$body
			}
			ChunkKind::Field { ty, signed } => {
				let $a = Field::new(ty, signed, $ctx);
				$body
			}
		}
	};
}

/// A live view of a sub-range of its parent.
///
/// A chunk holds no copy of the content. Every operation re-reads the
/// parent and resolves the ordinals against what is there now. The parent
/// stays mutably borrowed for the chunk's lifetime, and may itself be a
/// chunk.
pub struct Chunk<'a> {
	parent: &'a mut dyn Container,
	ctx: &'a Context,
	kind: ChunkKind,
	start: Ordinal,
	end: Ordinal,
}

impl<'a> Chunk<'a> {
	/// A chunk spanning `start` through `end`, inclusive.
	pub fn new(
		parent: &'a mut dyn Container,
		ctx: &'a Context,
		kind: ChunkKind,
		start: impl Into<Ordinal>,
		end: impl Into<Ordinal>,
	) -> Self {
		Self {
			parent,
			ctx,
			kind,
			start: start.into(),
			end: end.into(),
		}
	}

	/// A singular chunk.
	pub fn at(parent: &'a mut dyn Container, ctx: &'a Context, kind: ChunkKind, at: impl Into<Ordinal>) -> Self {
		let at = at.into();
		Self::new(parent, ctx, kind, at, at)
	}

	pub fn kind(&self) -> ChunkKind {
		self.kind
	}

	pub fn start(&self) -> Ordinal {
		self.start
	}

	pub fn end(&self) -> Ordinal {
		self.end
	}

	pub fn is_singular(&self) -> bool {
		self.start == self.end
	}

	fn request(&self) -> Request<'a> {
		Request {
			start: self.start,
			end: self.end,
			ctx: self.ctx,
		}
	}

	/// Reads the chunk. Singular element chunks yield the element itself;
	/// numeric fields yield the decoded number.
	pub fn get(&self) -> Result<Value> {
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| engine::read(&a, &*self.parent, &req))
	}

	/// Writes `value` into, before or after the chunk, growing the parent
	/// with filler when the chunk lies past its end.
	pub fn put(&mut self, placement: Placement, value: impl Into<Value>) -> Result<()> {
		let value = value.into();
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| engine::write(
			&a,
			&mut *self.parent,
			&req,
			placement,
			&value
		))
	}

	/// Reorders the units of the chunk, leaving whatever lies between them
	/// where it was.
	pub fn sort(&mut self, cmp: &Comparator<'_>) -> Result<()> {
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| engine::sort(&a, &mut *self.parent, &req, cmp))
	}

	/// Units the chunk covers after clamping.
	pub fn number(&self) -> Result<usize> {
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| engine::number(&a, &*self.parent, &req))
	}

	fn parent_span(&self) -> Result<Span> {
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| engine::window(&a, &*self.parent, &req)
			.map(|(_, window)| window.span))
	}

	/// Whether sub-ranges of this chunk's content map onto the parent's
	/// native positions. A single element reads as the element itself, so
	/// its content does not.
	fn serves(&self, domain: Domain) -> bool {
		self.kind.has_native_domain()
			&& domain == self.kind.domain()
			&& !(self.kind == ChunkKind::Element && self.is_singular())
	}

	fn check_serves(&self, domain: Domain) -> Result<()> {
		if self.serves(domain) {
			Ok(())
		} else {
			Err(ChunkError::unsupported(format!("{domain} ranges"), self.describe()))
		}
	}

	fn writable(&self) -> bool {
		self.parent.can_put_range(self.kind.domain()) || self.parent.can_put_contents()
	}
}

impl Container for Chunk<'_> {
	fn describe(&self) -> String {
		let parent = self.parent.describe();
		if self.is_singular() {
			format!("{} {} of {parent}", self.kind, self.start)
		} else {
			format!("{}s {} to {} of {parent}", self.kind, self.start, self.end)
		}
	}

	fn can_get_contents(&self) -> bool {
		true
	}

	fn get_contents(&self) -> Result<Value> {
		self.get()
	}

	fn can_put_contents(&self) -> bool {
		self.writable()
	}

	fn put_contents(&mut self, placement: Placement, value: Value) -> Result<()> {
		self.put(placement, value)
	}

	fn can_delete(&self) -> bool {
		self.parent.can_delete_range(self.kind.domain()) || self.parent.can_put_contents()
	}

	fn delete(&mut self) -> Result<()> {
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| engine::delete(&a, &mut *self.parent, &req))
	}

	fn can_get_range(&self, domain: Domain) -> bool {
		self.serves(domain)
	}

	fn get_range(&self, domain: Domain, span: Span) -> Result<Value> {
		self.check_serves(domain)?;
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| within::read(&a, &*self.parent, &req, span))
	}

	fn can_put_range(&self, domain: Domain) -> bool {
		self.serves(domain) && self.writable()
	}

	fn put_range(&mut self, domain: Domain, span: Span, placement: Placement, value: Value) -> Result<()> {
		self.check_serves(domain)?;
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| within::write(
			&a,
			&mut *self.parent,
			&req,
			span,
			placement,
			value
		))
	}

	fn can_delete_range(&self, domain: Domain) -> bool {
		self.serves(domain) && self.can_delete()
	}

	fn delete_range(&mut self, domain: Domain, span: Span) -> Result<()> {
		self.check_serves(domain)?;
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| within::delete(&a, &mut *self.parent, &req, span))
	}

	fn can_sort_range(&self, domain: Domain) -> bool {
		self.serves(domain)
			&& domain != Domain::Text
			&& (self.parent.can_sort_range(domain) || self.parent.can_rearrange(domain) || self.parent.can_put_contents())
	}

	fn sort_range(&mut self, domain: Domain, span: Span, cmp: &Comparator<'_>) -> Result<()> {
		self.check_serves(domain)?;
		if domain == Domain::Text {
			return Err(ChunkError::unsupported("sorting characters", self.describe()));
		}
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| within::sort(
			&a,
			&mut *self.parent,
			&req,
			span,
			cmp
		))
	}

	fn can_rearrange(&self, domain: Domain) -> bool {
		self.serves(domain) && (self.parent.can_rearrange(domain) || self.parent.can_put_contents())
	}

	fn rearrange(&mut self, domain: Domain, pieces: &[Span]) -> Result<()> {
		self.check_serves(domain)?;
		let req = self.request();
		with_adapter!(self.kind, self.ctx, |a| within::rearrange(
			&a,
			&mut *self.parent,
			&req,
			pieces
		))
	}

	fn can_get_range_property(&self, domain: Domain, name: &str) -> bool {
		self.serves(domain) && self.parent.can_get_range_property(domain, name)
	}

	fn get_range_property(&self, domain: Domain, span: Span, name: &str) -> Result<Value> {
		self.check_serves(domain)?;
		let inner = self.parent_span()?.narrow(span);
		self.parent.get_range_property(domain, inner, name)
	}

	fn can_set_range_property(&self, domain: Domain, name: &str) -> bool {
		self.serves(domain) && self.parent.can_set_range_property(domain, name)
	}

	fn set_range_property(&mut self, domain: Domain, span: Span, name: &str, value: Value) -> Result<()> {
		self.check_serves(domain)?;
		let inner = self.parent_span()?.narrow(span);
		self.parent.set_range_property(domain, inner, name, value)
	}

	fn can_get_property(&self, name: &str) -> bool {
		name == NUMBER_PROPERTY
			|| self.parent.can_get_range_property(self.kind.domain(), name)
			|| self.parent.can_get_property(name)
	}

	/// `number` is computed here; other names go to the parent's
	/// range-scoped accessor, then to its unscoped one.
	fn get_property(&self, name: &str) -> Result<Value> {
		let domain = self.kind.domain();
		if name == NUMBER_PROPERTY {
			Ok(Value::Integer(self.number()? as i64))
		} else if self.parent.can_get_range_property(domain, name) {
			let span = self.parent_span()?;
			self.parent.get_range_property(domain, span, name)
		} else if self.parent.can_get_property(name) {
			self.parent.get_property(name)
		} else {
			Err(ChunkError::unsupported(format!("property {name}"), self.describe()))
		}
	}

	fn can_set_property(&self, name: &str) -> bool {
		name != NUMBER_PROPERTY
			&& (self.parent.can_set_range_property(self.kind.domain(), name) || self.parent.can_set_property(name))
	}

	fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
		let domain = self.kind.domain();
		if name == NUMBER_PROPERTY {
			Err(ChunkError::not_permitted("set the number of", self.describe()))
		} else if self.parent.can_set_range_property(domain, name) {
			let span = self.parent_span()?;
			self.parent.set_range_property(domain, span, name, value)
		} else if self.parent.can_set_property(name) {
			self.parent.set_property(name, value)
		} else {
			Err(ChunkError::unsupported(format!("setting property {name}"), self.describe()))
		}
	}
}

/// Chunks are equal when they address the same units of equally described
/// parents.
impl PartialEq for Chunk<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.kind == other.kind
			&& self.start == other.start
			&& self.end == other.end
			&& self.parent.describe() == other.parent.describe()
	}
}

impl fmt::Debug for Chunk<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Chunk")
			.field("parent", &self.parent.describe())
			.field("kind", &self.kind)
			.field("start", &self.start)
			.field("end", &self.end)
			.finish()
	}
}
