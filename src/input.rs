use crate::error::FormatterError;
use crate::file_reference::FileReference;

/// A user supplied token reduced to a clean hex string plus the file offset
/// it was extracted from (zero for literal input).
#[derive(Debug, PartialEq)]
pub struct NormalizedInput {
    pub hex_string: String,
    pub source_offset: usize,
}

impl NormalizedInput {
    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatterError> {
        hex::decode(&self.hex_string).map_err(|e| FormatterError::Decode(e.to_string()))
    }
}

/// Tokens made of hex digits, `x` and spaces are literals, anything else is
/// treated as a file reference.
fn is_hex_literal(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == 'x' || c == ' ')
}

/// Strip `0x` prefixes first so they do not leave a stray `0` behind, then
/// drop every remaining non hex character.
pub fn sanitize_hex_string(token: &str) -> String {
    token
        .replace("0x", "")
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect()
}

pub fn normalize_input(token: &str) -> Result<NormalizedInput, FormatterError> {
    if is_hex_literal(token) {
        Ok(NormalizedInput {
            hex_string: sanitize_hex_string(token),
            source_offset: 0,
        })
    } else {
        let reference = FileReference::parse(token)?;
        let bytes = reference.read_bytes()?;

        Ok(NormalizedInput {
            hex_string: hex::encode(&bytes),
            source_offset: reference.offset,
        })
    }
}
