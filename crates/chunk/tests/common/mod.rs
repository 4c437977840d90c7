//! Shared helpers for chunk integration tests.

#![allow(dead_code)]

use std::cmp::Ordering;

use pretty_assertions as _;
use proptest as _;
use rstest as _;
use tracing as _;
use xom_chunk::{Chunk, ChunkKind};
use xom_data::{Container, Context, Value};
use xom_primitives::{ChunkOptions, TextUnit};

/// A reproducible context with default options.
pub fn context() -> Context {
	context_with(ChunkOptions::default())
}

pub fn context_with(options: ChunkOptions) -> Context {
	let _ = tracing_subscriber::fmt::try_init();
	Context::with_seed(options, 0x5eed)
}

pub const ITEM: ChunkKind = ChunkKind::Text(TextUnit::Item);
pub const LINE: ChunkKind = ChunkKind::Text(TextUnit::Line);
pub const WORD: ChunkKind = ChunkKind::Text(TextUnit::Word);

/// Reads `kind` `at` of `parent`.
pub fn read(parent: &mut dyn Container, ctx: &Context, kind: ChunkKind, at: i64) -> Value {
	Chunk::at(parent, ctx, kind, at).get().expect("chunk read")
}

pub fn by_text(a: &Value, b: &Value) -> Ordering {
	a.to_string().cmp(&b.to_string())
}

pub fn by_number(a: &Value, b: &Value) -> Ordering {
	let n = |v: &Value| v.to_string().parse::<f64>().unwrap_or(f64::NAN);
	n(a).total_cmp(&n(b))
}
