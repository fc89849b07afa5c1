use anyhow::Result;
use clap::Parser;

use hex2bytes::{normalize_input, render, LayoutOptions};

/// Hex string to Python bytes literal converter
/// This program turns a hex encoded byte string, typed literally or extracted
/// from a byte range of a file, into a `bytes.fromhex(...)` call laid out in
/// fixed width rows.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// string of hex encoded bytes to convert or a file path + offset in the
    /// format file:offset[length]. length is optional
    hex_or_file: String,

    /// how many bytes per column
    #[arg(short = 'g', default_value_t = 2)]
    group_size: usize,

    /// how many bytes per row
    #[arg(short = 'w', default_value_t = 16)]
    row_width: usize,

    /// indent the output by NUM indentations
    #[arg(short = 'i', value_name = "NUM", default_value_t = 0)]
    indent_level: usize,

    /// display offsets at the end of each row
    #[arg(short = 'o')]
    offsets: bool,

    /// variable name to assign the bytes to
    #[arg(short = 'v')]
    var_name: Option<String>,

    /// display an ascii dump at the end of each row
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let parameters = CommandLineArguments::parse();
    let input = normalize_input(&parameters.hex_or_file)?;
    let bytes = input.to_bytes()?;
    let options = LayoutOptions {
        group_size: parameters.group_size,
        row_width: parameters.row_width,
        indent_level: parameters.indent_level,
        show_ascii: parameters.ascii,
        show_offsets: parameters.offsets,
        var_name: parameters.var_name,
        source_offset: input.source_offset,
    };

    println!("{}", render(&bytes, &options)?);

    Ok(())
}
