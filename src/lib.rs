mod error;
mod file_reference;
mod input;
mod layout;

pub use error::FormatterError;
pub use file_reference::FileReference;
pub use input::{normalize_input, sanitize_hex_string, NormalizedInput};
pub use layout::{render, LayoutOptions};
