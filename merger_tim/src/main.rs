use std::env;
use std::path::Path;
use std::process::ExitCode;

use lib_tim::constants::{FILE_EXT, FORMAT_NAME};
use lib_tim::merge;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum UsageError {
    #[error("the two layer files can't be the same")]
    IdenticalLayers,

    #[error("{0}: layer files must have a .tim extension")]
    WrongExtension(String),
}

fn usage() {
    println!("tim-merger {}", env!("CARGO_PKG_VERSION"));
    println!("Merges two 4bpp {} layers into one dual-palette file.", FORMAT_NAME);
    println!("USE: tim-merger <layer1.tim> <layer2.tim> <result.tim>");
}

fn has_format_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(FILE_EXT))
}

/// Checks the merge preconditions that don't require touching the files.
fn validate_layers(layer1: &str, layer2: &str) -> Result<(), UsageError> {
    if layer1 == layer2 {
        return Err(UsageError::IdenticalLayers);
    }
    for path in [layer1, layer2] {
        if !has_format_extension(path) {
            return Err(UsageError::WrongExtension(path.to_string()));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    lib_tim::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || (args.len() == 1 && args[0] == "-h") {
        usage();
        return ExitCode::SUCCESS;
    }
    if args.len() != 3 {
        eprintln!("ERROR: wrong number of parameters: {}", args.len());
        usage();
        return ExitCode::FAILURE;
    }

    if let Err(err) = validate_layers(&args[0], &args[1]) {
        eprintln!("ERROR: {}", err);
        return ExitCode::FAILURE;
    }

    match merge(
        Path::new(&args[0]),
        Path::new(&args[1]),
        Path::new(&args[2]),
    ) {
        Ok(()) => {
            println!("Merged file saved successfully to {}", args[2]);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ExitCode::FAILURE
        }
    }
}
