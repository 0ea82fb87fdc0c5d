pub mod source;

pub use source::{GzLines, InputSource, decode_ignoring_invalid, open_lines};
