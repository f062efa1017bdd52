//! Generate seed corpus for fuzzing

use std::fs;

/// Build a container image from prepared entry payloads (`None` = unused slot)
fn container(format: u32, payloads: &[Option<Vec<u8>>]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&format.to_le_bytes());
    buf.extend_from_slice(&(payloads.len() as u16).to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());

    let mut position = 8 + payloads.len() * 4;
    for payload in payloads {
        match payload {
            Some(bytes) => {
                buf.extend_from_slice(&(position as u32).to_le_bytes());
                position += bytes.len();
            }
            None => buf.extend_from_slice(&u32::MAX.to_le_bytes()),
        }
    }
    for payload in payloads.iter().flatten() {
        buf.extend_from_slice(payload);
    }
    buf
}

fn entry(flag: u8, length: u32, body: &[u8]) -> Option<Vec<u8>> {
    let mut payload = ((u32::from(flag) << 24) | length).to_le_bytes().to_vec();
    payload.extend_from_slice(body);
    Some(payload)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let corpus_dir = "fuzz/corpus/fuzz_archive_parse";
    fs::create_dir_all(corpus_dir)?;

    println!("Generating seed corpus...");

    let seeds: Vec<(&str, Vec<u8>)> = vec![
        // Empty directory
        ("seed_empty.war", container(25, &[])),
        // Single raw entry
        ("seed_single_raw.war", container(25, &[entry(0x00, 5, b"HELLO")])),
        // Compressed entry: "abc" then a 15-byte self-overlapping run
        (
            "seed_compressed.war",
            container(25, &[entry(0x20, 18, &[0b0000_1000, b'a', b'b', b'c', 0x00, 0xC0])]),
        ),
        // Demo format with unused slots on both ends
        (
            "seed_sparse_demo.war",
            container(24, &[None, entry(0x00, 3, b"mid"), None]),
        ),
        // Unknown compression flag
        ("seed_bad_flag.war", container(25, &[entry(0x40, 2, b"??")])),
        // Palette-sized raw entry
        ("seed_palette.war", container(25, &[entry(0x00, 768, &[0x3F; 768])])),
    ];

    for (name, data) in &seeds {
        let path = format!("{}/{}", corpus_dir, name);
        fs::write(&path, data)?;
        println!("✓ Generated: {}", path);
    }

    println!("\nGenerated {} seed files in {}", seeds.len(), corpus_dir);
    Ok(())
}
