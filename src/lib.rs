//! warlib: read-only access to WAR game data containers
//!
//! A WAR container is a flat little-endian file: a format code (24 for demo
//! data, 25 for the full game), an entry count, an archive type and a table
//! of entry offsets, followed by the entry payloads. Each payload is either
//! stored verbatim or compressed with a small LZ scheme over a 4096-byte
//! circular window.
//!
//! This library provides:
//! - Header validation and directory parsing with derived entry lengths
//! - On-demand entry decoding (raw and LZ-compressed)
//! - 6-bit to 8-bit palette conversion
//!
//! # Example
//!
//! ```no_run
//! use warlib::ArchiveReader;
//!
//! let archive = ArchiveReader::open("DATA.WAR")?;
//! for (index, entry) in archive.entries().iter().enumerate() {
//!     if entry.is_valid() {
//!         let data = archive.read_entry(index)?;
//!         println!("{index}: {} bytes", data.len());
//!     }
//! }
//! # Ok::<(), warlib::error::WarError>(())
//! ```

// Core modules
pub mod archive;
pub mod error;
pub mod palette;

// Re-export commonly used types
pub use archive::{
    decompress, ArchiveReader, CompressionMethod, Entry, EntryHeader, FileHeader, FormatVersion,
    HEADER_SIZE, UNUSED_SLOT, WINDOW_SIZE,
};
pub use error::{Result, WarError};
pub use palette::{convert_palette, PALETTE_SIZE};
