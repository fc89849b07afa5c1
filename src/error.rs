use std::error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum FormatterError {
    Config(usize, usize), // row width, group size
    Decode(String),
    NotFound(PathBuf),
    Range {
        file_size: usize,
        offset: usize,
        length: usize,
    },
    Parse(String),
}

impl fmt::Display for FormatterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatterError::Config(row_width, group_size) => write!(
                f,
                "Row width {} must be a positive multiple of group size {}.",
                row_width, group_size
            ),
            FormatterError::Decode(message) => {
                write!(f, "Could not decode hex string: {}.", message)
            }
            FormatterError::NotFound(path) => {
                write!(f, "File '{}' does not exist or is not a file.", path.display())
            }
            FormatterError::Range {
                file_size,
                offset,
                length,
            } => write!(
                f,
                "Range 0x{:x}[0x{:x}] goes past file size 0x{:x}.",
                offset, length, file_size
            ),
            FormatterError::Parse(message) => write!(
                f,
                "Failed to parse file info '{}'. Did you specify the offset and length correctly?",
                message
            ),
        }
    }
}

impl error::Error for FormatterError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
