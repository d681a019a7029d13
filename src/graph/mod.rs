pub mod graph;
pub mod parse;

pub use graph::Graph;
pub use parse::{parse, Coloring};
