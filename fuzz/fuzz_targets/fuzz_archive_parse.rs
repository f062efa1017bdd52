#![no_main]

use libfuzzer_sys::fuzz_target;
use warlib::{decompress, ArchiveReader};

fuzz_target!(|data: &[u8]| {
    // Raw LZ streams: any input must decode or fail, never panic
    let _ = decompress(data, data.len().min(1 << 16));

    // Try to parse the container - should never panic
    let reader = match ArchiveReader::from_bytes(data.to_vec()) {
        Ok(r) => r,
        Err(_) => return, // Expected for invalid data
    };

    // Try to read every slot, used or not - should never panic
    for index in 0..=reader.entry_count() {
        let _ = reader.entry_header(index);
        let _ = reader.read_entry(index);
        let _ = reader.read_palette(index);
    }
});
