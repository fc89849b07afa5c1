use crate::error::FormatterError;

/// change this number to change the indent size for the whole program
const INDENT_SIZE: usize = 4;

/// Formatting options for the layout engine, passed as one immutable value.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// bytes per group before a separator space is inserted
    pub group_size: usize,
    /// bytes per row, must be an exact multiple of `group_size`
    pub row_width: usize,
    /// number of 4 space indent units prefixed to every output line
    pub indent_level: usize,
    pub show_ascii: bool,
    pub show_offsets: bool,
    pub var_name: Option<String>,
    /// byte offset the sequence was extracted from, only used for display
    /// and default naming
    pub source_offset: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            group_size: 2,
            row_width: 16,
            indent_level: 0,
            show_ascii: false,
            show_offsets: false,
            var_name: None,
            source_offset: 0,
        }
    }
}

/// Lay out a byte sequence as a Python `bytes.fromhex(...)` call, one text
/// block with `row_width` bytes per quoted row.
pub fn render(bytes: &[u8], options: &LayoutOptions) -> Result<String, FormatterError> {
    if options.group_size == 0
        || options.row_width == 0
        || options.row_width % options.group_size != 0
    {
        return Err(FormatterError::Config(options.row_width, options.group_size));
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "{}bytes.fromhex(  # size: 0x{:x}({}) bytes",
        assignment_prefix(options),
        bytes.len(),
        bytes.len()
    ));

    let nibble_width = offset_nibble_width(bytes.len());
    let mut previous_length = 0;

    for (row_index, row) in bytes.chunks(options.row_width).enumerate() {
        let mut line = String::from("    \"");

        for (position, byte) in row.iter().enumerate() {
            if position != 0 && position % options.group_size == 0 {
                line.push(' ');
            }
            line.push_str(&format!("{:02x}", byte));
        }

        // pad against the previous line only, never against a global
        // maximum, so the first line is never lengthened
        while line.len() < previous_length {
            line.push(' ');
        }
        previous_length = line.len();
        line.push('"');

        if options.show_ascii || options.show_offsets {
            line.push_str("  # ");

            if options.show_ascii {
                for &byte in row {
                    line.push(if (0x20..0x7f).contains(&byte) {
                        byte as char
                    } else {
                        '.'
                    });
                }

                if options.show_offsets {
                    for _ in row.len()..options.row_width {
                        line.push(' ');
                    }
                    line.push_str(" | ");
                }
            }

            if options.show_offsets {
                let offset = row_index * options.row_width;
                line.push_str(&format!("0x{:0width$x}", offset, width = nibble_width));
            }
        }

        lines.push(line);
    }

    lines.push(")".to_string());

    let indent = " ".repeat(INDENT_SIZE * options.indent_level);

    Ok(lines
        .iter()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn assignment_prefix(options: &LayoutOptions) -> String {
    match &options.var_name {
        Some(name) if !name.is_empty() => format!("{} = ", name),
        Some(_) | None if options.source_offset != 0 => {
            format!("_0x{:x} = ", options.source_offset)
        }
        _ => String::new(),
    }
}

/// Display width of the offset column in nibbles: the smallest power of two
/// byte width able to represent the total byte count (1 byte minimum),
/// doubled for two nibbles per byte.
fn offset_nibble_width(byte_count: usize) -> usize {
    let bit_length = (usize::BITS - byte_count.leading_zeros()) as usize;
    let byte_width = usize::max(1, (bit_length + 7) / 8);

    byte_width.next_power_of_two() * 2
}
