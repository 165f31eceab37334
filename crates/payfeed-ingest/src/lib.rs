pub mod header;
pub mod normalize;
pub mod parser;

pub use header::{normalize_cell, normalize_header};
pub use normalize::normalize_row;
pub use parser::{ParsedBatch, ParsedDetail, parse_batch, parse_batch_from_reader};
