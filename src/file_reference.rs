use std::fs;
use std::path::PathBuf;

use pest::Parser;
use pest_derive::Parser;

use crate::error::FormatterError;

#[derive(Parser)]
#[grammar = "../rules.pest"]
struct RangeSuffixParser;

/// A `path[:offset][length]` reference to a byte range of a file. Offset and
/// length accept decimal or `0x` prefixed hexadecimal; a length of zero means
/// "to end of file".
#[derive(Debug, PartialEq)]
pub struct FileReference {
    pub path: PathBuf,
    pub offset: usize,
    pub length: usize,
}

impl FileReference {
    /// The path is everything up to the last colon, so a malformed suffix is
    /// an error rather than a silent part of the path.
    pub fn parse(token: &str) -> Result<Self, FormatterError> {
        let (path, suffix) = match token.rsplit_once(':') {
            None => (token, ""),
            Some((path, suffix)) => (path, suffix),
        };

        let pairs = RangeSuffixParser::parse(Rule::range_suffix, suffix)
            .map_err(|_| FormatterError::Parse(token.to_string()))?
            .next()
            .expect("a successful parse shall yield a range_suffix pair")
            .into_inner();

        let mut offset = 0;
        let mut length = 0;

        for pair in pairs {
            match pair.as_rule() {
                Rule::offset => offset = parse_number(pair.as_str())?,
                Rule::length => length = parse_number(pair.as_str())?,
                Rule::EOI => (),
                _ => panic!("Unexpected pair '{pair:?}'. offset or length expected."),
            }
        }

        Ok(Self {
            path: PathBuf::from(path),
            offset,
            length,
        })
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>, FormatterError> {
        if !self.path.is_file() {
            return Err(FormatterError::NotFound(self.path.clone()));
        }

        let data = fs::read(&self.path).map_err(|_| FormatterError::NotFound(self.path.clone()))?;

        // offset + length may not fit in usize, which still means past EOF
        let end_past_eof = self
            .offset
            .checked_add(self.length)
            .map_or(true, |end| end > data.len());

        if self.offset > data.len() || end_past_eof {
            return Err(FormatterError::Range {
                file_size: data.len(),
                offset: self.offset,
                length: self.length,
            });
        }

        let stop = if self.length == 0 {
            data.len()
        } else {
            self.offset + self.length
        };

        Ok(data[self.offset..stop].to_vec())
    }
}

fn parse_number(text: &str) -> Result<usize, FormatterError> {
    let parsed = match text.strip_prefix("0x") {
        Some(digits) => usize::from_str_radix(digits, 16),
        None => text.parse(),
    };

    parsed.map_err(|_| FormatterError::Parse(text.to_string()))
}


#[cfg(test)]
mod read_tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with_bytes(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();

        file
    }

    #[test]
    fn test_read_whole_file() {
        let file = file_with_bytes(&[0xde, 0xad, 0xbe, 0xef]);
        let reference = FileReference {
            path: file.path().to_path_buf(),
            offset: 0,
            length: 0,
        };

        assert_eq!(vec![0xde, 0xad, 0xbe, 0xef], reference.read_bytes().unwrap());
    }

    #[test]
    fn test_read_range() {
        let data: Vec<u8> = (0..32).collect();
        let file = file_with_bytes(&data);
        let reference = FileReference {
            path: file.path().to_path_buf(),
            offset: 16,
            length: 8,
        };

        assert_eq!(data[16..24].to_vec(), reference.read_bytes().unwrap());
    }

    #[test]
    fn test_read_from_offset_to_end() {
        let data: Vec<u8> = (0..32).collect();
        let file = file_with_bytes(&data);
        let reference = FileReference {
            path: file.path().to_path_buf(),
            offset: 24,
            length: 0,
        };

        assert_eq!(data[24..].to_vec(), reference.read_bytes().unwrap());
    }

    #[test]
    fn test_offset_past_file_size() {
        let file = file_with_bytes(&[0x00; 8]);
        let reference = FileReference {
            path: file.path().to_path_buf(),
            offset: 9,
            length: 0,
        };

        assert!(matches!(
            reference.read_bytes().unwrap_err(),
            FormatterError::Range { file_size: 8, .. }
        ));
    }

    #[test]
    fn test_length_past_file_size() {
        // 23 bytes cannot serve the range 0x10[8]
        let file = file_with_bytes(&[0x00; 23]);
        let reference = FileReference {
            path: file.path().to_path_buf(),
            offset: 16,
            length: 8,
        };

        assert!(matches!(
            reference.read_bytes().unwrap_err(),
            FormatterError::Range { file_size: 23, .. }
        ));
    }

    #[test]
    fn test_huge_length_is_a_range_error() {
        let file = file_with_bytes(&[0x00; 8]);
        let reference = FileReference {
            path: file.path().to_path_buf(),
            offset: 1,
            length: usize::MAX,
        };

        assert!(matches!(
            reference.read_bytes().unwrap_err(),
            FormatterError::Range { file_size: 8, .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let reference = FileReference {
            path: PathBuf::from("/no/such/file.bin"),
            offset: 0,
            length: 0,
        };

        assert!(matches!(
            reference.read_bytes().unwrap_err(),
            FormatterError::NotFound(_)
        ));
    }
}
