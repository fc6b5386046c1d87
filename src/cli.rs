use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use hashrle::{CodecOptions, CompressionReport, Error, Mode};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Required extension for files processed in place.
const REQUIRED_EXTENSION: &str = "txt";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "hashrle",
    version,
    about = "Run-length encode or decode a text file in place"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
pub struct Cli {
    /// Encode the file
    #[arg(short = 'e', long)]
    pub encode: bool,

    /// Decode the file
    #[arg(short = 'd', long)]
    pub decode: bool,

    /// Path to a .txt file, overwritten with the result
    pub path: PathBuf,

    /// Print the size report as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject non-ASCII content
    #[arg(long)]
    pub ascii: bool,

    /// Refuse to decode to more than this many characters
    #[arg(long, value_name = "CHARS")]
    pub max_len: Option<usize>,

    /// Suppress the size report
    #[arg(long)]
    pub silent: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.encode {
            Mode::Encode
        } else {
            Mode::Decode
        }
    }

    pub fn options(&self) -> CodecOptions {
        let options = CodecOptions::new().with_ascii_only(self.ascii);
        match self.max_len {
            Some(limit) => options.with_max_decoded_len(limit),
            None => options,
        }
    }
}

/// Rejects paths without the `.txt` extension before any I/O happens.
pub fn validate_path(path: &Path) -> hashrle::Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(REQUIRED_EXTENSION) => Ok(()),
        _ => Err(Error::config(&format!(
            "Invalid file path '{}' - path must end with the file extension '.{}'",
            path.display(),
            REQUIRED_EXTENSION
        ))),
    }
}

pub fn run(args: Cli) -> Result<()> {
    validate_path(&args.path)?;
    let mode = args.mode();
    let options = args.options();

    let input = fs::read_to_string(&args.path).with_context(|| {
        format!(
            "Error opening file '{}' - ensure the path is correct and the file is not in use",
            args.path.display()
        )
    })?;
    debug!("read {} bytes from {}", input.len(), args.path.display());

    let output = match mode {
        Mode::Encode => hashrle::encode_with_options(&input, &options),
        Mode::Decode => hashrle::decode_with_options(&input, &options),
    }
    .with_context(|| format!("Failed to process '{}'", args.path.display()))?;

    fs::write(&args.path, &output)
        .with_context(|| format!("Error writing file '{}'", args.path.display()))?;
    debug!("wrote {} bytes to {}", output.len(), args.path.display());

    if args.silent {
        return Ok(());
    }

    let report = CompressionReport::new(mode, input.len(), output.len());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
