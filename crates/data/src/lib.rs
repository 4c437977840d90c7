//! Runtime values and the container capability protocol that chunk views
//! read and write through.

mod buffers;
/// The container capability protocol.
pub mod container;
/// Per-execution state.
pub mod context;
/// Error taxonomy.
pub mod error;
mod value;
mod variable;

pub use buffers::{ByteBuffer, ListBuffer, TextBuffer};
pub use container::{Comparator, Container, Domain, Placement};
pub use context::Context;
pub use error::{ChunkError, Result};
pub use value::{Value, ValueType};
pub use variable::Variable;
