//! SGF game records: main-line parsing, projection to a [`GameRecord`],
//! point conversion and serialization.

mod convert;
mod coord;
mod error;
mod parser;
mod serialize;
pub mod types;

pub use convert::parse;
pub use coord::{sgf_to_vertex, vertex_to_sgf};
pub use error::SgfError;
pub use parser::parse_nodes;
pub use serialize::serialize;
pub use types::*;
