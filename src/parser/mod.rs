//! Plain-text manuscript parsing.

mod inline;
mod text;

pub use inline::InlineConverter;
pub use text::{parse_text, TextParser};
