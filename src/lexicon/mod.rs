//! Label text pipeline: normalization, tokenization and stemming.

pub mod normalize;
pub mod stem;

pub use normalize::{normalize_case_style, token_set, tokenize};
pub use stem::stem;
