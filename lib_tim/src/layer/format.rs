/// File header, CLUT block header and one 16-colour table.
pub const HEADER_LEN: usize = 52;

/// Image block header (origin and size fields, kept opaque).
pub const IMAGE_HEADER_LEN: usize = 12;

/// Bytes before the packed pixel indices.
pub const PIXEL_DATA_OFFSET: usize = HEADER_LEN + IMAGE_HEADER_LEN;

/// Byte offset of the CLUT block size field inside the header.
pub const CLUT_BLOCK_SIZE_OFFSET: usize = 8;

/// Byte offset of the CLUT count field inside the header.
pub const CLUT_COUNT_OFFSET: usize = 18;

/// Byte offset of the colour table inside the header.
pub const CLUT_OFFSET: usize = 20;

/// One 16-colour table, 2 bytes per colour.
pub const CLUT_LEN: usize = 32;

/// CLUT count declared by a merged file (two 16-colour tables).
pub const DUAL_CLUT_COUNT: u8 = 2;

/// Low byte of the little-endian CLUT block size for the two-palette
/// layout: a 12-byte block header plus two 16-colour tables,
/// 12 + 2 * 32 = 76 = 0x4C.
pub const DUAL_CLUT_BLOCK_SIZE: u8 = 0x4C;

/// A single-CLUT 4bpp file, split at the fixed offsets of the format.
#[derive(Debug)]
pub struct Layer {
    pub header: [u8; HEADER_LEN],
    pub image_header: [u8; IMAGE_HEADER_LEN],
    pub pixels: Vec<u8>,
}

impl Layer {
    pub fn new(
        header: [u8; HEADER_LEN],
        image_header: [u8; IMAGE_HEADER_LEN],
        pixels: Vec<u8>,
    ) -> Self {
        Self {
            header,
            image_header,
            pixels,
        }
    }

    /// The 16-colour lookup table embedded in the header.
    pub fn clut(&self) -> &[u8] {
        &self.header[CLUT_OFFSET..CLUT_OFFSET + CLUT_LEN]
    }

    /// Low byte of the CLUT count field.
    pub fn clut_count(&self) -> u8 {
        self.header[CLUT_COUNT_OFFSET]
    }
}
