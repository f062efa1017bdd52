use crate::error::{Result, WarError};
use std::io::Read;

/// Format code of the reduced demo release
pub const FORMAT_DEMO: u32 = 24;

/// Format code of the full release
pub const FORMAT_RETAIL: u32 = 25;

/// Fixed header size in bytes: format (4) + entry count (2) + archive type (2)
pub const HEADER_SIZE: usize = 8;

/// Size of one directory offset in bytes
pub const DIRECTORY_ENTRY_SIZE: usize = 4;

/// Directory offset marking an unused slot
pub const UNUSED_SLOT: u32 = 0xFFFF_FFFF;

/// Size of the per-entry payload header in bytes
pub const ENTRY_HEADER_SIZE: usize = 4;

/// Entry header flag: payload stored verbatim
pub const FLAG_UNCOMPRESSED: u8 = 0x00;

/// Entry header flag: payload LZ-compressed
pub const FLAG_COMPRESSED: u8 = 0x20;

/// Low 24 bits of the entry header hold the uncompressed length
const LENGTH_MASK: u32 = 0x00FF_FFFF;

/// Container version tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FormatVersion {
    /// Demo data (format 24)
    Demo = FORMAT_DEMO,
    /// Full game data (format 25)
    Retail = FORMAT_RETAIL,
}

impl FormatVersion {
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            FORMAT_DEMO => Ok(Self::Demo),
            FORMAT_RETAIL => Ok(Self::Retail),
            _ => Err(WarError::InvalidFormat(value)),
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_demo(self) -> bool {
        self == Self::Demo
    }
}

/// Compression methods an entry can be stored with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CompressionMethod {
    None = FLAG_UNCOMPRESSED,
    Lz = FLAG_COMPRESSED,
}

impl CompressionMethod {
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            FLAG_UNCOMPRESSED => Ok(Self::None),
            FLAG_COMPRESSED => Ok(Self::Lz),
            _ => Err(WarError::UnknownCompressionFlag(value)),
        }
    }
}

/// Archive header at the beginning of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub format: FormatVersion,
    pub entry_count: u16,
    pub archive_type: u16,
}

impl FileHeader {
    /// Read header from a reader
    ///
    /// The format code is validated before anything else is read, so an
    /// unrecognized container fails without touching the rest of the header.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let format = FormatVersion::from_u32(read_u32(&mut reader)?)?;
        let entry_count = read_u16(&mut reader)?;
        let archive_type = read_u16(&mut reader)?;

        Ok(Self {
            format,
            entry_count,
            archive_type,
        })
    }

    /// Offset of the first byte after the directory table
    pub fn payload_offset(&self) -> usize {
        HEADER_SIZE + self.entry_count as usize * DIRECTORY_ENTRY_SIZE
    }
}

/// Header stored in front of every entry payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHeader {
    pub compression: CompressionMethod,
    pub uncompressed_length: u32,
}

impl EntryHeader {
    /// Split a raw header word into flag and length, rejecting unknown flags
    pub fn from_u32(raw: u32) -> Result<Self> {
        let flag = (raw >> 24) as u8;
        let compression = CompressionMethod::from_u8(flag)?;

        Ok(Self {
            compression,
            uncompressed_length: raw & LENGTH_MASK,
        })
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        Self::from_u32(read_u32(&mut reader)?)
    }
}

// Helper functions for reading primitive types
pub(crate) fn read_u8<R: Read>(mut reader: R) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub(crate) fn read_u16<R: Read>(mut reader: R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

pub(crate) fn read_u32<R: Read>(mut reader: R) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}
