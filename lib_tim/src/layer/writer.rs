use log::debug;

use super::format::{
    Layer, CLUT_BLOCK_SIZE_OFFSET, CLUT_COUNT_OFFSET, DUAL_CLUT_BLOCK_SIZE, DUAL_CLUT_COUNT,
    HEADER_LEN, IMAGE_HEADER_LEN,
};

/// Assembles the merged file contents: front header (patched to declare
/// both colour tables), the back layer's CLUT right after the front one,
/// the front image block header, then the recombined pixel indices.
pub fn assemble(front: &Layer, back_clut: &[u8], pixels: &[u8]) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(HEADER_LEN + back_clut.len() + IMAGE_HEADER_LEN + pixels.len());

    // Grow the CLUT block to cover both tables
    let mut header = front.header;
    header[CLUT_BLOCK_SIZE_OFFSET] = DUAL_CLUT_BLOCK_SIZE;
    header[CLUT_COUNT_OFFSET] = DUAL_CLUT_COUNT;
    out.extend_from_slice(&header);

    // Second colour table sits directly after the first
    out.extend_from_slice(back_clut);

    out.extend_from_slice(&front.image_header);
    out.extend_from_slice(pixels);

    debug!("assembled output: {} bytes", out.len());
    out
}
