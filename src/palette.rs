/// Palette size in bytes: 256 RGB triplets
pub const PALETTE_SIZE: usize = 768;

/// Scale a 6-bit-per-channel palette to 8 bits per channel in place.
///
/// Each byte is shifted left by two; bits shifted past the top are dropped.
pub fn convert_palette(palette: &mut [u8; PALETTE_SIZE]) -> &mut [u8; PALETTE_SIZE] {
    for value in palette.iter_mut() {
        *value <<= 2;
    }
    palette
}
