use log::debug;
use std::io::{self, Read};

use super::format::{Layer, CLUT_COUNT_OFFSET, HEADER_LEN, IMAGE_HEADER_LEN};

/// Reads one layer file into its fixed-layout pieces.
///
/// Truncated input surfaces as `io::ErrorKind::UnexpectedEof` from the
/// header reads; no structural validation is applied beyond that.
pub fn parse_layer<R: Read>(mut reader: R) -> io::Result<Layer> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;
    debug!("header read, CLUT count field: {}", header[CLUT_COUNT_OFFSET]);

    let mut image_header = [0u8; IMAGE_HEADER_LEN];
    reader.read_exact(&mut image_header)?;

    let mut pixels = Vec::new();
    reader.read_to_end(&mut pixels)?;
    debug!(
        "pixel buffer read: {} bytes, {} packed indices",
        pixels.len(),
        pixels.len() * 2
    );

    Ok(Layer::new(header, image_header, pixels))
}
