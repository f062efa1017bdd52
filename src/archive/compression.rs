//! Decoder for the container's LZ compression scheme.
//!
//! The stream is a sequence of groups: one control byte followed by up to
//! eight tokens. Control bits are consumed least-significant first. A clear
//! bit is a literal byte; a set bit is a little-endian word holding a 12-bit
//! window offset (low bits) and a run length minus 3 (high nibble).
//!
//! Back-references address a 4096-byte circular history window rather than
//! a distance from the output tail. Source and destination cursors advance
//! together through the same window, so a run may read bytes it wrote itself.

use crate::archive::format::{read_u16, read_u8};
use crate::error::Result;
use std::io::Cursor;

/// History window size (12-bit addressing)
pub const WINDOW_SIZE: usize = 4096;

/// Shortest back-reference run
pub const MIN_MATCH_LENGTH: usize = 3;

/// Longest back-reference run
pub const MAX_MATCH_LENGTH: usize = MIN_MATCH_LENGTH + 0x0F;

const WINDOW_MASK: usize = WINDOW_SIZE - 1;

/// Decompress `data` until exactly `target_length` bytes have been produced.
///
/// Trailing control bits and input past the last needed token are ignored.
/// Running out of input before `target_length` is reached is an
/// `UnexpectedEof` I/O error.
pub fn decompress(data: &[u8], target_length: usize) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(data);
    let mut window = [0u8; WINDOW_SIZE];
    let mut write_index = 0usize;
    let mut output = Vec::with_capacity(target_length);

    while output.len() < target_length {
        let mut flags = read_u8(&mut cursor)?;

        for _ in 0..8 {
            if flags & 1 == 0 {
                let byte = read_u8(&mut cursor)?;
                output.push(byte);
                window[write_index & WINDOW_MASK] = byte;
                write_index += 1;
            } else {
                let word = read_u16(&mut cursor)? as usize;
                let run = (word >> 12) + MIN_MATCH_LENGTH;
                let mut offset = word & WINDOW_MASK;

                for _ in 0..run {
                    let byte = window[offset & WINDOW_MASK];
                    output.push(byte);
                    window[write_index & WINDOW_MASK] = byte;
                    offset += 1;
                    write_index += 1;

                    if output.len() == target_length {
                        break;
                    }
                }
            }

            if output.len() == target_length {
                break;
            }
            flags >>= 1;
        }
    }

    tracing::trace!(
        consumed = cursor.position(),
        produced = output.len(),
        "lz decompression complete"
    );

    Ok(output)
}
