use crate::config::{AbortHandle, CodecConfig, Method};
use crate::container::Header;
use crate::error::RleError;
use crate::paths;
use crate::pipeline;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Run-length encoding compressor and decompressor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compresses a file
    Compress {
        /// Input file to compress
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file name (default: <FILE>.rle)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// RLE method [a, b]
        #[arg(short, long, default_value = "b")]
        method: Method,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
    /// Decompresses a file
    Decompress {
        /// Input file to decompress
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file name (default: <FILE> without .rle)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
    /// Shows the header of a compressed file
    Info {
        /// Compressed file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();

    let abort = AbortHandle::new();
    let handler_abort = abort.clone();
    ctrlc::set_handler(move || handler_abort.abort())
        .map_err(|e| RleError::ConfigError(format!("Failed to set Ctrl-C handler: {}", e)))?;

    match cli.command {
        Commands::Compress { input, output, method, force, quiet } => {
            let output = resolve_output(&input, output.unwrap_or_else(|| paths::compress_output_for(&input)), force)?;
            println!("Compressing {} to {} using method {}...", input.display(), output.display(), method);

            let in_file = File::open(&input)?;
            let pb = progress_bar(in_file.metadata()?.len(), quiet)?;
            let mut out_file = BufWriter::new(File::create(&output)?);
            let config = CodecConfig::default().with_method(method).with_abort(abort);

            let start = Instant::now();
            let result = pipeline::encode_with(&config, pb.wrap_read(in_file), &mut out_file);
            pb.finish_and_clear();
            drop(out_file);
            let stats = result.map_err(|e| discard_output(&output, e))?;
            let duration = start.elapsed();

            println!("Compression successful!");
            println!("  Original Size:    {} bytes", stats.original_size);
            println!("  Compressed Size:  {} bytes", stats.compressed_size);
            println!("  Ratio:            {:.2}x", stats.ratio);
            println!("  Elapsed Time:     {:.2?}", duration);
        }
        Commands::Decompress { input, output, force, quiet } => {
            let output = resolve_output(&input, output.unwrap_or_else(|| paths::decompress_output_for(&input)), force)?;
            println!("Decompressing {} to {}...", input.display(), output.display());

            let in_file = File::open(&input)?;
            let pb = progress_bar(in_file.metadata()?.len(), quiet)?;
            let mut out_file = BufWriter::new(File::create(&output)?);

            let start = Instant::now();
            let result = pipeline::decode_with(Some(&abort), pb.wrap_read(in_file), &mut out_file);
            pb.finish_and_clear();
            drop(out_file);
            let report = result.map_err(|e| discard_output(&output, e))?;
            let duration = start.elapsed();

            println!("Decompression successful!");
            println!("  Method:           {}", report.method);
            println!("  Compressed at:    {}", describe_time(&report.header()));
            println!("  Restored Size:    {} bytes", report.decoded_size);
            println!("  Elapsed Time:     {:.2?}", duration);
        }
        Commands::Info { input } => {
            ensure_exists(&input)?;
            let header = pipeline::inspect(File::open(&input)?)?;
            let size = fs::metadata(&input)?.len();

            println!("{}", input.display());
            println!("  Method:           {}", header.method);
            println!("  Timestamp:        {}", header.timestamp);
            println!("  Compressed at:    {}", describe_time(&header));
            println!("  File Size:        {} bytes", size);
        }
    }

    Ok(())
}

fn ensure_exists(path: &Path) -> Result<(), RleError> {
    if path.exists() {
        Ok(())
    } else {
        Err(RleError::ConfigError(format!("File {} doesn't exist", path.display())))
    }
}

/// Checks the input and picks a free output path unless `force` is set.
fn resolve_output(input: &Path, output: PathBuf, force: bool) -> Result<PathBuf, RleError> {
    ensure_exists(input)?;
    if output == input {
        return Err(RleError::ConfigError(format!("Output {} would overwrite the input", output.display())));
    }
    if force || !output.exists() {
        return Ok(output);
    }
    let unique = paths::unique_path(&output);
    println!("{} exists, writing to {} instead", output.display(), unique.display());
    Ok(unique)
}

/// Removes a partially written output after a failed run.
fn discard_output(output: &Path, err: RleError) -> RleError {
    if let Err(e) = fs::remove_file(output) {
        warn!("could not remove partial output {}: {}", output.display(), e);
    }
    err
}

fn progress_bar(total: u64, quiet: bool) -> Result<ProgressBar, RleError> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        .map_err(|e| RleError::ConfigError(e.to_string()))?
        .progress_chars("#>-");
    pb.set_style(style);
    Ok(pb)
}

fn describe_time(header: &Header) -> String {
    match header.datetime() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{} (out of range)", header.timestamp),
    }
}
