//! Turns a fixed-width color listing into the entries of `x11_colors.rs`.
//!
//! usage: `cargo run --bin create_colors -- color_names.txt > entries.txt`

use std::fs;

use anyhow::Context;
use zgraphics::parse_color_table_line;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "color_names.txt".to_string());
    let listing = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let mut count = 0;
    for row in listing.lines().filter_map(parse_color_table_line) {
        let c = row.color;
        println!(
            "    ({:?}, Color::rgb(0x{:02X}, 0x{:02X}, 0x{:02X})),",
            row.name, c.r, c.g, c.b
        );
        count += 1;
    }
    eprintln!("{count} colors from {path}");
    Ok(())
}
