use std::path::PathBuf;

use lib_tim::layer::format::{CLUT_LEN, IMAGE_HEADER_LEN, PIXEL_DATA_OFFSET};

/// Builds a minimal single-CLUT container: a 52-byte header carrying one
/// 16-colour table, the 12-byte image block header, then `pixel_bytes`
/// packed indices all set to `pixel`. The CLUT and image header bytes are
/// derived from `tag` so the two layers stay distinguishable in asserts.
pub fn build_container(tag: u8, pixel: u8, pixel_bytes: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(PIXEL_DATA_OFFSET + pixel_bytes);

    // File header: magic and 4bpp CLUT flags
    data.extend_from_slice(&[0x10, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00]);
    // CLUT block header: size (12 + 32), palette origin, colours, CLUT count
    data.extend_from_slice(&[0x2C, 0x00, 0x00, 0x00]);
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    data.extend_from_slice(&[16, 0]);
    data.extend_from_slice(&[1, 0]);
    // One 16-colour table
    data.extend_from_slice(&[tag; CLUT_LEN]);
    // Image block header
    data.extend_from_slice(&[tag.wrapping_add(1); IMAGE_HEADER_LEN]);

    data.resize(data.len() + pixel_bytes, pixel);

    assert_eq!(data.len(), PIXEL_DATA_OFFSET + pixel_bytes);
    data
}

/// Fresh path in the system temp directory, unique per process and name.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tim_merger_{}_{}", std::process::id(), name))
}
