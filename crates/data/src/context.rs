//! Per-execution state consulted by chunk operations.

use std::cell::RefCell;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xom_primitives::{ChunkOptions, DelimitedChunker, Delimiters, IndexChooser, UnitChunker};

/// Options, unit chunker and random source for one execution.
///
/// The random source sits behind a `RefCell`, so a context is confined to a
/// single thread.
pub struct Context {
	options: ChunkOptions,
	delimiters: Delimiters,
	chunker: Box<dyn UnitChunker>,
	rng: RefCell<StdRng>,
}

impl Context {
	/// Creates a context seeded from the operating system.
	pub fn new(options: ChunkOptions) -> Self {
		Self::with_rng(options, StdRng::from_os_rng())
	}

	/// Creates a context whose `any` picks are reproducible.
	pub fn with_seed(options: ChunkOptions, seed: u64) -> Self {
		Self::with_rng(options, StdRng::seed_from_u64(seed))
	}

	fn with_rng(options: ChunkOptions, rng: StdRng) -> Self {
		Self {
			delimiters: options.delimiters(),
			options,
			chunker: Box::new(DelimitedChunker),
			rng: RefCell::new(rng),
		}
	}

	/// Replaces the unit chunker.
	pub fn with_chunker(mut self, chunker: impl UnitChunker + 'static) -> Self {
		self.chunker = Box::new(chunker);
		self
	}

	pub fn options(&self) -> &ChunkOptions {
		&self.options
	}

	pub fn delimiters(&self) -> &Delimiters {
		&self.delimiters
	}

	pub fn chunker(&self) -> &dyn UnitChunker {
		self.chunker.as_ref()
	}

	pub fn item_delimiter(&self) -> char {
		self.options.item_delimiter
	}
}

impl Default for Context {
	fn default() -> Self {
		Self::new(ChunkOptions::default())
	}
}

impl IndexChooser for Context {
	fn choose(&self, count: usize) -> usize {
		self.rng.borrow_mut().random_range(0..count)
	}
}

impl fmt::Debug for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Context").field("options", &self.options).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_seeded_picks_repeat() {
		let a = Context::with_seed(ChunkOptions::default(), 7);
		let b = Context::with_seed(ChunkOptions::default(), 7);
		let picks_a: Vec<_> = (0..16).map(|_| a.choose(10)).collect();
		let picks_b: Vec<_> = (0..16).map(|_| b.choose(10)).collect();
		assert_eq!(picks_a, picks_b);
		assert!(picks_a.iter().all(|&p| p < 10));
	}

	#[test]
	fn test_delimiters_track_options() {
		let options = ChunkOptions {
			item_delimiter: ';',
			..ChunkOptions::default()
		};
		let ctx = Context::new(options);
		assert_eq!(ctx.delimiters().item, ';');
		assert_eq!(ctx.item_delimiter(), ';');
	}
}
