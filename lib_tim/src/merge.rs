use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::layer::{assemble, parse_layer};
use crate::overlay;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("layer files have different sizes: {first} vs {second} bytes")]
    SizeMismatch { first: u64, second: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn open_input(path: &Path) -> Result<File, MergeError> {
    File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            MergeError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            MergeError::Io(err)
        }
    })
}

/// Merges two single-CLUT layer files into one dual-CLUT file at `dest`.
///
/// The destination is only created once both inputs have been read and the
/// pixel buffers recombined; a size mismatch or read failure leaves it
/// untouched. A failure while writing can still leave a partial file
/// behind, which is reported rather than masked.
///
/// # Errors
/// - `MergeError::NotFound` if either input path does not exist
/// - `MergeError::SizeMismatch` if the inputs differ in total length
/// - `MergeError::Io` on any read or write failure, truncated input
///   included
pub fn merge(layer1: &Path, layer2: &Path, dest: &Path) -> Result<(), MergeError> {
    let first = open_input(layer1)?;
    let second = open_input(layer2)?;

    // Equal totals also guarantee equal pixel buffer lengths, the fixed
    // prefix being the same size in both files
    let first_len = first.metadata()?.len();
    let second_len = second.metadata()?.len();
    if first_len != second_len {
        return Err(MergeError::SizeMismatch {
            first: first_len,
            second: second_len,
        });
    }
    debug!("both layers are {} bytes", first_len);

    let front = parse_layer(BufReader::new(first))?;
    let back = parse_layer(BufReader::new(second))?;

    for (layer, path) in [(&front, layer1), (&back, layer2)] {
        if layer.clut_count() != 1 {
            warn!(
                "{}: CLUT count field is {}, expected 1; merging anyway",
                path.display(),
                layer.clut_count()
            );
        }
    }

    let pixels = overlay::combine(&front.pixels, &back.pixels);

    let out = assemble(&front, back.clut(), &pixels);
    let mut file = File::create(dest)?;
    file.write_all(&out)?;

    info!(
        "merged {} and {} into {}",
        layer1.display(),
        layer2.display(),
        dest.display()
    );
    Ok(())
}
