use std::io;
use thiserror::Error;

/// Result type for WAR archive operations
pub type Result<T> = std::result::Result<T, WarError>;

/// Unified error type for all WAR archive operations
#[derive(Debug, Error)]
pub enum WarError {
    // Archive errors
    #[error("Invalid archive format: {0} (expected 24 or 25)")]
    InvalidFormat(u32),

    #[error("Unknown compression flag: {0:#04x}")]
    UnknownCompressionFlag(u8),

    // Entry access errors
    #[error("Entry index {index} out of range (archive has {count} entries)")]
    EntryOutOfRange { index: usize, count: usize },

    #[error("Entry {0} is an unused directory slot")]
    UnusedEntry(usize),

    #[error("Entry {index} is too short for a palette: {length} bytes")]
    PaletteTooShort { index: usize, length: usize },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WarError::InvalidFormat(1).to_string(),
            "Invalid archive format: 1 (expected 24 or 25)"
        );
        assert_eq!(
            WarError::UnknownCompressionFlag(0x40).to_string(),
            "Unknown compression flag: 0x40"
        );
        assert_eq!(
            WarError::EntryOutOfRange { index: 7, count: 3 }.to_string(),
            "Entry index 7 out of range (archive has 3 entries)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: WarError = io::Error::new(io::ErrorKind::UnexpectedEof, "short").into();
        assert!(matches!(err, WarError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
