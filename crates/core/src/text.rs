//! In-memory strings and their terminators
//!
//! On disk a string is a `u16` length followed by raw bytes; no terminator is
//! stored. In memory, consumers scan strings up to a terminator byte. Two
//! conventions coexist: path-like names end at `0x00`, narrative text ends at
//! `0xFE` so that it can carry zero bytes.

/// Longest string that fits the `u16` length prefix
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// In-memory terminator convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// `0x00`, used for path-like names
    Nul,
    /// `0xFE`, used for narrative text
    Narrative,
}

impl Terminator {
    /// Terminator byte value
    pub fn byte(self) -> u8 {
        match self {
            Terminator::Nul => 0x00,
            Terminator::Narrative => 0xFE,
        }
    }

    /// Length of the logical string in `buf`
    ///
    /// Scans up to the first terminator byte; a buffer without one is taken
    /// whole.
    pub fn scan(self, buf: &[u8]) -> usize {
        let byte = self.byte();
        buf.iter().position(|&b| b == byte).unwrap_or(buf.len())
    }
}

/// Logical string content, terminator excluded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Text(Vec<u8>);

impl Text {
    /// Wrap logical bytes as-is
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Text(bytes.into())
    }

    /// Take the logical string out of a terminated buffer
    pub fn from_terminated(buf: &[u8], terminator: Terminator) -> Self {
        Text(buf[..terminator.scan(buf)].to_vec())
    }

    /// In-memory form with the terminator appended
    pub fn to_terminated(&self, terminator: Terminator) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() + 1);
        out.extend_from_slice(&self.0);
        out.push(terminator.byte());
        out
    }

    /// Logical bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into logical bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 view, for logs
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Text {
    fn from(bytes: Vec<u8>) -> Self {
        Text(bytes)
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
