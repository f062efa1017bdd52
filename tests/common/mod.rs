//! Shared helpers for building WAR containers in tests.
//!
//! The library only reads containers, so these helpers include a minimal
//! greedy encoder for the LZ scheme to produce compressed fixtures.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const FORMAT_DEMO: u32 = 24;
pub const FORMAT_RETAIL: u32 = 25;
pub const UNUSED: u32 = 0xFFFF_FFFF;

const WINDOW_MASK: usize = 0x0FFF;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = 18;
const MAX_DISTANCE: usize = 4095;

/// How a fixture entry is stored
#[derive(Debug, Clone)]
pub enum Stored {
    Raw(Vec<u8>),
    Compressed(Vec<u8>),
    /// Header with an arbitrary flag byte and length, followed by `body`
    Custom { flag: u8, length: u32, body: Vec<u8> },
    Unused,
}

/// Helper: Build a container image from entries
pub fn build_archive(format: u32, archive_type: u16, entries: &[Stored]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&format.to_le_bytes());
    buf.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    buf.extend_from_slice(&archive_type.to_le_bytes());

    let payloads: Vec<Option<Vec<u8>>> = entries.iter().map(encode_entry).collect();

    let mut position = 8 + entries.len() * 4;
    for payload in &payloads {
        match payload {
            Some(bytes) => {
                buf.extend_from_slice(&(position as u32).to_le_bytes());
                position += bytes.len();
            }
            None => buf.extend_from_slice(&UNUSED.to_le_bytes()),
        }
    }
    for payload in payloads.iter().flatten() {
        buf.extend_from_slice(payload);
    }

    buf
}

/// Helper: Write a container image to a temporary file
pub fn write_temp(data: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(data).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

fn encode_entry(entry: &Stored) -> Option<Vec<u8>> {
    let (flag, length, body) = match entry {
        Stored::Raw(data) => (0x00, data.len() as u32, data.clone()),
        Stored::Compressed(data) => (0x20, data.len() as u32, compress(data)),
        Stored::Custom { flag, length, body } => (*flag, *length, body.clone()),
        Stored::Unused => return None,
    };

    let header = (u32::from(flag) << 24) | (length & 0x00FF_FFFF);
    let mut payload = header.to_le_bytes().to_vec();
    payload.extend_from_slice(&body);
    Some(payload)
}

enum Token {
    Literal(u8),
    Match { source: usize, length: usize },
}

/// Greedy encoder: longest match within the last 4095 bytes, overlap allowed
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let mut best_len = 0;
        let mut best_source = 0;

        for distance in 1..=pos.min(MAX_DISTANCE) {
            let source = pos - distance;
            let mut len = 0;
            while len < MAX_MATCH && pos + len < data.len() && data[source + len] == data[pos + len] {
                len += 1;
            }
            if len > best_len {
                best_len = len;
                best_source = source;
                if len == MAX_MATCH {
                    break;
                }
            }
        }

        if best_len >= MIN_MATCH {
            tokens.push(Token::Match {
                source: best_source,
                length: best_len,
            });
            pos += best_len;
        } else {
            tokens.push(Token::Literal(data[pos]));
            pos += 1;
        }
    }

    pack(&tokens)
}

fn pack(tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::new();

    for group in tokens.chunks(8) {
        let mut flags = 0u8;
        let mut body = Vec::new();

        for (bit, token) in group.iter().enumerate() {
            match token {
                Token::Literal(byte) => body.push(*byte),
                Token::Match { source, length } => {
                    flags |= 1 << bit;
                    let word = (((length - MIN_MATCH) << 12) | (source & WINDOW_MASK)) as u16;
                    body.extend_from_slice(&word.to_le_bytes());
                }
            }
        }

        out.push(flags);
        out.extend_from_slice(&body);
    }

    out
}
