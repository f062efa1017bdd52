/// Extract every entry of a WAR container into a directory
///
/// Run with: cargo run --example extract -- <archive.war> <output-dir>
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use warlib::{ArchiveReader, CompressionMethod};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(archive_path), Some(output_dir)) = (args.next(), args.next()) else {
        eprintln!("usage: extract <archive.war> <output-dir>");
        std::process::exit(2);
    };

    let reader = ArchiveReader::open(&archive_path)?;
    println!("=== {} ===", archive_path);
    println!(
        "   Format: {} ({}), type {}, {} slots",
        reader.format().code(),
        if reader.is_demo_data() { "demo" } else { "retail" },
        reader.archive_type(),
        reader.entry_count()
    );

    let output_dir = PathBuf::from(output_dir);
    fs::create_dir_all(&output_dir)?;

    let mut extracted = 0;
    for (index, result) in reader.read_all() {
        match result {
            Ok(data) => {
                let compressed = matches!(
                    reader.entry_header(index).map(|h| h.compression),
                    Ok(CompressionMethod::Lz)
                );
                let path = output_dir.join(format!("{:04}.bin", index));
                fs::write(&path, &data)?;
                println!(
                    "   ✓ {:4}: {:8} bytes{}",
                    index,
                    data.len(),
                    if compressed { " (lz)" } else { "" }
                );
                extracted += 1;
            }
            Err(e) => println!("   ✗ {:4}: {}", index, e),
        }
    }

    println!("\n✓ Extracted {} entries to {}", extracted, output_dir.display());
    Ok(())
}
