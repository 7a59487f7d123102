//! Command-line front end: selects compress/decompress and routes file names.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use icf::IcfError;

/// Compress a bitmap into the icf bitstream format, or decompress it back.
#[derive(Parser)]
#[command(name = "icf", version, about)]
struct Args {
    /// Compress `input` (a bitmap) into `output` (a packed bitstream).
    #[arg(short = 'c', long, conflicts_with = "decompress")]
    compress: bool,

    /// Decompress `input` (a packed bitstream) into `output` (a bitmap).
    #[arg(short = 'd', long, conflicts_with = "compress")]
    decompress: bool,

    input: PathBuf,
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if !args.compress && !args.decompress {
        log::error!("one of -c/--compress or -d/--decompress is required");
        return ExitCode::FAILURE;
    }

    let result = if args.compress {
        log::info!("compressing {} -> {}", args.input.display(), args.output.display());
        icf::compress_file(&args.input, &args.output)
    } else {
        log::info!("decompressing {} -> {}", args.input.display(), args.output.display());
        icf::decompress_file(&args.input, &args.output)
    };

    match result {
        Ok(()) => {
            log::info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &IcfError) -> ExitCode {
    let code = match error {
        IcfError::MissingPath => 2,
        IcfError::OpenFailure(_) => 3,
        IcfError::CreateFailure(_) => 4,
        IcfError::NotABitmap => 5,
        IcfError::AllocationFailure => 6,
        IcfError::MissingImage => 7,
        IcfError::IoError(_) => 8,
    };
    ExitCode::from(code)
}
