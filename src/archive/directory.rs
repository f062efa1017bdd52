use crate::archive::format::{read_u32, UNUSED_SLOT};
use crate::error::Result;
use std::io::Read;

/// One slot of the archive directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Byte offset of the entry header within the archive
    pub position: u32,
    /// Bytes between this entry and the next valid one (or end of archive)
    pub length: u32,
}

impl Entry {
    pub fn new(position: u32) -> Self {
        Self {
            position,
            length: 0,
        }
    }

    /// Unused slots carry the `UNUSED_SLOT` sentinel as their position
    pub fn is_valid(&self) -> bool {
        self.position != UNUSED_SLOT
    }
}

/// Read `count` directory offsets and derive each entry's stored length.
///
/// A valid entry's length runs up to the next valid entry in directory order.
/// The final slot always runs to `total_length`, even when it is unused, so an
/// unused final slot ends up with a wrapped length. Offsets are not checked
/// for ordering; out-of-order tables yield wrapped lengths as well.
pub fn read_directory<R: Read>(mut reader: R, count: u16, total_length: usize) -> Result<Vec<Entry>> {
    let count = count as usize;
    let mut entries = Vec::with_capacity(count);
    let mut last_valid: Option<usize> = None;

    for i in 0..count {
        let entry = Entry::new(read_u32(&mut reader)?);

        if entry.is_valid() {
            if let Some(prev) = last_valid {
                let prev_entry: &mut Entry = &mut entries[prev];
                prev_entry.length = entry.position.wrapping_sub(prev_entry.position);
                tracing::trace!(index = prev, length = prev_entry.length, "entry length derived");
            }
            last_valid = Some(i);
        }

        entries.push(entry);
    }

    if let Some(last) = entries.last_mut() {
        if !last.is_valid() {
            tracing::warn!(
                index = count - 1,
                "final directory slot is unused; its length wraps past the archive end"
            );
        }
        last.length = (total_length as u32).wrapping_sub(last.position);
    }

    Ok(entries)
}
