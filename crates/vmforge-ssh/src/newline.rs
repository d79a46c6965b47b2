// ABOUTME: Line-ending policy for rendered authorized_keys lines.
// ABOUTME: Closed enum mapping each convention to its byte suffix.

use std::fmt;

/// Line-ending convention appended to a formatted authorized_keys line.
///
/// `None` is useful when the caller embeds the line into a larger buffer,
/// `Unix` and `Windows` match the conventions of the guest OS the key is
/// being provisioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewLine {
    /// No trailing bytes.
    None,
    /// A single line feed (`\n`).
    Unix,
    /// Carriage return followed by line feed (`\r\n`).
    Windows,
}

impl NewLine {
    /// The byte suffix this convention appends to a line.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            NewLine::None => b"",
            NewLine::Unix => b"\n",
            NewLine::Windows => b"\r\n",
        }
    }
}

impl fmt::Display for NewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NewLine::None => "none",
            NewLine::Unix => "unix",
            NewLine::Windows => "windows",
        };
        f.write_str(name)
    }
}
