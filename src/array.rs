//! C array fragments for embedding binary data.
//!
//! ```text
//! static const uint8_t <name>_data[] = {
//! 0x00,0x01,...,0x0f,
//! 0x10,
//! };
//! ```
//!
//! Sixteen literals per line, every literal followed by a comma, no
//! newline after the closing `};`.

use crate::error::{Result, ToolError};
use std::fmt;

/// Number of literals on one line of the fragment
pub const BYTES_PER_LINE: usize = 16;

const PREFIX: &str = "static const uint8_t ";
const SUFFIX: &str = "_data[] = {";
const CLOSING: &str = "};";

/// Derive the array name from a file name: every `.` becomes `_`
pub fn array_identifier(file_name: &str) -> String {
    file_name.replace('.', "_")
}

/// Borrowed view of a fragment, rendered through `Display`
#[derive(Debug, Clone, Copy)]
pub struct HeaderFragment<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
}

impl<'a> HeaderFragment<'a> {
    pub fn new(name: &'a str, data: &'a [u8]) -> Self {
        Self { name, data }
    }
}

impl fmt::Display for HeaderFragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", PREFIX, self.name, SUFFIX)?;
        for (i, byte) in self.data.iter().enumerate() {
            if i > 0 && i % BYTES_PER_LINE == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{:#04x},", byte)?;
        }
        write!(f, "\n{}", CLOSING)
    }
}

/// Render a complete fragment as a string
pub fn render_header(name: &str, data: &[u8]) -> String {
    HeaderFragment::new(name, data).to_string()
}

/// Stream a fragment into a writer
pub fn write_header<W: std::io::Write>(out: &mut W, name: &str, data: &[u8]) -> Result<()> {
    write!(out, "{}", HeaderFragment::new(name, data))?;
    Ok(())
}

/// An array recovered from a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArray {
    /// Name without the `_data` suffix
    pub name: String,
    pub data: Vec<u8>,
}

/// Parse a fragment back into its name and bytes
///
/// Accepts any whitespace layout between literals and either hex case,
/// but every literal must be `0x` followed by exactly two digits.
pub fn parse_array_literal(text: &str) -> Result<ByteArray> {
    let rest = text
        .trim_start()
        .strip_prefix(PREFIX)
        .ok_or_else(|| ToolError::InvalidLiteral("missing declaration".into()))?;

    let (name, body) = rest
        .split_once(SUFFIX)
        .ok_or_else(|| ToolError::InvalidLiteral("missing array opening".into()))?;
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(ToolError::InvalidLiteral(format!("bad identifier {:?}", name)));
    }

    let (body, trailer) = body
        .split_once(CLOSING)
        .ok_or_else(|| ToolError::InvalidLiteral("missing closing brace".into()))?;
    if !trailer.trim().is_empty() {
        return Err(ToolError::InvalidLiteral("trailing text after array".into()));
    }

    let mut data = Vec::new();
    for token in body.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        data.push(parse_byte_literal(token)?);
    }

    Ok(ByteArray {
        name: name.to_string(),
        data,
    })
}

fn parse_byte_literal(token: &str) -> Result<u8> {
    let invalid = || ToolError::InvalidLiteral(format!("bad byte literal {:?}", token));
    let digits = token.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 2 {
        return Err(invalid());
    }
    let decoded = hex::decode(digits).map_err(|_| invalid())?;
    Ok(decoded[0])
}
