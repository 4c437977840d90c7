//! Chunk views: live, addressable sub-ranges of text, lists and binaries.
//!
//! A [`Chunk`] reads and writes through its parent [`Container`], which may
//! itself be a chunk. Writes past the end grow the parent with neutral
//! filler; sorts permute units while keeping the text between them in
//! place.
//!
//! [`Container`]: xom_data::Container

mod adapters;
mod engine;
mod kind;
mod sort;
mod view;

pub use kind::ChunkKind;
pub use view::{Chunk, NUMBER_PROPERTY};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use tracing_subscriber as _;
