// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pure text formatting used by the reporter.

/// Bytes shown per hex dump row
pub const DUMP_WIDTH: usize = 16;

/// Wrap every line of `src` in `color` ... `normal`.
///
/// Every emitted line ends with `\n`. Empty input yields nothing and a
/// trailing line break does not add an empty line.
pub fn colorize_lines(color: &str, normal: &str, src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 16);
    let mut rest = src;
    while !rest.is_empty() {
        let (line, tail) = match rest.find('\n') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        out.push_str(color);
        out.push_str(line);
        out.push_str(normal);
        out.push('\n');
        rest = tail;
    }
    out
}

/// Canonical hex dump: offset, hex bytes, printable ASCII.
///
/// ```text
/// 00000000  48 65 6c 6c 6f                                    |Hello|
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(DUMP_WIDTH).enumerate() {
        let hex = chunk
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        out.push_str(&format!(
            "{:08x}  {:<width$}  |{}|\n",
            row * DUMP_WIDTH,
            hex,
            ascii,
            width = DUMP_WIDTH * 3 - 1
        ));
    }
    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
