//! Error types for sweph

use std::ffi::CStr;
use std::os::raw::c_char;

use thiserror::Error;

/// Result type for sweph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using sweph
#[derive(Error, Debug)]
pub enum Error {
    /// The native library reported a negative status; carries its message verbatim
    #[error("{0}")]
    Native(String),

    /// Input that cannot be marshalled across the C boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an Error from a native `serr` buffer after a failed call
    ///
    /// `operation` and `code` only show up when the library left the buffer empty.
    pub(crate) fn from_serr(serr: &[c_char], operation: &str, code: i32) -> Self {
        let message = message_from_buffer(serr);
        if message.is_empty() {
            Error::Native(format!("{operation} failed with status {code}"))
        } else {
            Error::Native(message)
        }
    }

    /// Whether this is a native computation failure
    pub fn is_native(&self) -> bool {
        matches!(self, Error::Native(_))
    }
}

/// Read a NUL-terminated string out of a fixed-size native buffer
pub(crate) fn message_from_buffer(buf: &[c_char]) -> String {
    if !buf.contains(&0) {
        // Unterminated buffer; never read past its end
        let bytes: Vec<u8> = buf.iter().map(|&c| c as u8).collect();
        return String::from_utf8_lossy(&bytes).into_owned();
    }
    // SAFETY: the buffer contains a NUL within its bounds.
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> Vec<c_char> {
        let mut buf = vec![0 as c_char; 32];
        for (slot, byte) in buf.iter_mut().zip(text.bytes()) {
            *slot = byte as c_char;
        }
        buf
    }

    #[test]
    fn test_native_message_is_verbatim() {
        let err = Error::from_serr(&buffer("illegal planet number -999."), "calculate_position", -1);
        assert!(err.is_native());
        assert_eq!(err.to_string(), "illegal planet number -999.");
    }

    #[test]
    fn test_empty_buffer_names_operation() {
        let err = Error::from_serr(&buffer(""), "rise_or_transit", -2);
        assert_eq!(err.to_string(), "rise_or_transit failed with status -2");
    }

    #[test]
    fn test_unterminated_buffer() {
        let buf = vec![b'x' as c_char; 8];
        assert_eq!(message_from_buffer(&buf), "xxxxxxxx");
    }
}
