use crate::archive::compression::decompress;
use crate::archive::directory::{read_directory, Entry};
use crate::archive::format::{CompressionMethod, EntryHeader, FileHeader, FormatVersion};
use crate::error::{Result, WarError};
use crate::palette::{convert_palette, PALETTE_SIZE};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

/// Read-only view of a WAR container held entirely in memory.
///
/// The header and directory are parsed once when the reader is built and
/// never change afterwards. Entry payloads are decoded on demand and are not
/// cached, so every `read_entry` call returns a fresh owned buffer.
#[derive(Debug, Clone)]
pub struct ArchiveReader {
    path: Option<PathBuf>,
    data: Vec<u8>,
    header: FileHeader,
    entries: Vec<Entry>,
}

/// This is essentially our "API"; the public facing portion of our code.
impl ArchiveReader {
    /// Open an archive file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;

        let mut reader = Self::from_bytes(data)?;
        reader.path = Some(path.to_path_buf());
        Ok(reader)
    }

    /// Parse an archive already loaded into memory
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut cursor = Cursor::new(data.as_slice());

        let header = FileHeader::read_from(&mut cursor)?;
        let entries = read_directory(&mut cursor, header.entry_count, data.len())?;

        tracing::debug!(
            format = header.format.code(),
            entries = header.entry_count,
            archive_type = header.archive_type,
            size = data.len(),
            "opened WAR archive"
        );

        Ok(Self {
            path: None,
            data,
            header,
            entries,
        })
    }

    /// Path the archive was opened from, if it came from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get archive header information
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn format(&self) -> FormatVersion {
        self.header.format
    }

    /// True for demo containers (format 24)
    pub fn is_demo_data(&self) -> bool {
        self.header.format.is_demo()
    }

    pub fn archive_type(&self) -> u16 {
        self.header.archive_type
    }

    /// Get number of directory slots, including unused ones
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The full directory in declared order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Get entry information without reading data
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Total size of the archive in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Read the payload header of an entry without decoding it
    pub fn entry_header(&self, index: usize) -> Result<EntryHeader> {
        let mut cursor = self.payload_cursor(index)?;
        EntryHeader::read_from(&mut cursor)
    }

    /// Decode an entry into an owned buffer
    pub fn read_entry(&self, index: usize) -> Result<Vec<u8>> {
        let mut cursor = self.payload_cursor(index)?;
        let header = EntryHeader::read_from(&mut cursor)?;
        let length = header.uncompressed_length as usize;

        tracing::debug!(
            index,
            compression = ?header.compression,
            length,
            "reading entry"
        );

        let body = &cursor.get_ref()[cursor.position() as usize..];
        match header.compression {
            CompressionMethod::None => body
                .get(..length)
                .map(<[u8]>::to_vec)
                .ok_or_else(|| truncated(index, length, body.len())),
            CompressionMethod::Lz => decompress(body, length),
        }
    }

    /// Decode every used slot in directory order
    pub fn read_all(&self) -> impl Iterator<Item = (usize, Result<Vec<u8>>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_valid())
            .map(move |(index, _)| (index, self.read_entry(index)))
    }

    /// Decode an entry holding a 6-bit palette and scale it to 8 bits
    pub fn read_palette(&self, index: usize) -> Result<[u8; PALETTE_SIZE]> {
        let data = self.read_entry(index)?;
        let mut palette: [u8; PALETTE_SIZE] = data
            .get(..PALETTE_SIZE)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(WarError::PaletteTooShort {
                index,
                length: data.len(),
            })?;

        convert_palette(&mut palette);
        Ok(palette)
    }

    /// Cursor positioned at the start of an entry's payload header
    fn payload_cursor(&self, index: usize) -> Result<Cursor<&[u8]>> {
        let entry = self.entries.get(index).ok_or(WarError::EntryOutOfRange {
            index,
            count: self.entries.len(),
        })?;

        if !entry.is_valid() {
            return Err(WarError::UnusedEntry(index));
        }

        let mut cursor = Cursor::new(self.data.as_slice());
        cursor.set_position(u64::from(entry.position));
        Ok(cursor)
    }
}

fn truncated(index: usize, wanted: usize, available: usize) -> WarError {
    WarError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("entry {index} needs {wanted} bytes but only {available} remain"),
    ))
}
