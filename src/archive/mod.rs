mod compression;
mod directory;
mod format;
mod reader;

pub use compression::{decompress, MAX_MATCH_LENGTH, MIN_MATCH_LENGTH, WINDOW_SIZE};
pub use directory::{read_directory, Entry};
pub use format::{
    CompressionMethod, EntryHeader, FileHeader, FormatVersion, DIRECTORY_ENTRY_SIZE,
    ENTRY_HEADER_SIZE, FLAG_COMPRESSED, FLAG_UNCOMPRESSED, FORMAT_DEMO, FORMAT_RETAIL,
    HEADER_SIZE, UNUSED_SLOT,
};
pub use reader::ArchiveReader;
