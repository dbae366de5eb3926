//! lzw-cli - Command-line interface for the LZW codec
//!
//! A command-line tool for compressing and decompressing files in the Unix
//! compress(1) format.

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use lzw::{
    BitOrder, Compressor, DecodePolicy, Decompressor, Header, DEFAULT_MAX_CODE_SIZE,
    MAX_CODE_SIZE, MIN_CODE_SIZE,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lzw-cli")]
#[command(about = "A CLI tool for compress(1) style LZW compression and decompression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output compressed file
        output: PathBuf,

        /// Maximum code size in bits
        #[arg(
            short = 'b',
            long,
            default_value_t = DEFAULT_MAX_CODE_SIZE,
            value_parser = clap::value_parser!(u8).range((MIN_CODE_SIZE as i64)..=(MAX_CODE_SIZE as i64))
        )]
        max_bits: u8,

        /// Disable block mode (no dictionary resets)
        #[arg(short, long)]
        no_block: bool,

        /// Code packing order
        #[arg(long, value_enum, default_value_t = CliBitOrder::Lsb)]
        bit_order: CliBitOrder,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a compressed file
    Decompress {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Code packing order
        #[arg(long, value_enum, default_value_t = CliBitOrder::Lsb)]
        bit_order: CliBitOrder,

        /// Warn about corrupt codes instead of failing
        #[arg(long)]
        lenient: bool,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Get information about a compressed file
    Info {
        /// Compressed file to analyze
        input: PathBuf,

        /// Code packing order
        #[arg(long, value_enum, default_value_t = CliBitOrder::Lsb)]
        bit_order: CliBitOrder,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum CliBitOrder {
    /// Least significant bit first (compress(1) compatible)
    Lsb,
    /// Most significant bit first
    Msb,
}

impl From<CliBitOrder> for BitOrder {
    fn from(order: CliBitOrder) -> Self {
        match order {
            CliBitOrder::Lsb => BitOrder::LsbFirst,
            CliBitOrder::Msb => BitOrder::MsbFirst,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            max_bits,
            no_block,
            bit_order,
            force,
        } => match Compressor::new(!no_block, max_bits, bit_order.into()) {
            Ok(compressor) => {
                compress_file(&input, &output, &compressor, force, cli.verbose, cli.quiet)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Decompress {
            input,
            output,
            bit_order,
            lenient,
            force,
        } => {
            let policy = if lenient {
                DecodePolicy::Lenient
            } else {
                DecodePolicy::Strict
            };
            let decompressor = Decompressor::new(bit_order.into()).with_policy(policy);
            decompress_file(&input, &output, &decompressor, force, cli.verbose, cli.quiet)
        }
        Commands::Info { input, bit_order } => {
            show_file_info(&input, &Decompressor::new(bit_order.into()), cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check_paths(
    input: &PathBuf,
    output: &PathBuf,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }

    Ok(())
}

fn progress_bar(size: usize, quiet: bool, message: &'static str) -> Option<ProgressBar> {
    if quiet || size <= 1024 * 1024 {
        return None;
    }

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message);
    pb.inc(1);
    Some(pb)
}

fn compress_file(
    input: &PathBuf,
    output: &PathBuf,
    compressor: &Compressor,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Compressing '{}' to '{}'",
            input.display(),
            output.display()
        );
        println!(
            "Max bits: {}, Block mode: {}, Bit order: {}",
            compressor.max_code_size(),
            compressor.block_mode(),
            compressor.bit_order()
        );
    }

    let start_time = Instant::now();

    let input_data = fs::read(input)?;
    let input_size = input_data.len();

    if verbose {
        println!("Input size: {} bytes", input_size);
    }

    let progress = progress_bar(input_size, quiet, "Compressing...");

    let (compressed_data, stats) = compressor.compress_with_stats(&input_data);

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Compression complete");
    }

    fs::write(output, &compressed_data)?;

    let compression_time = start_time.elapsed();
    let output_size = compressed_data.len();
    let compression_ratio = if input_size == 0 {
        100.0
    } else {
        (output_size as f64 / input_size as f64) * 100.0
    };

    if !quiet {
        println!("✓ Compression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        println!("  Ratio:  {:.1}%", compression_ratio);
        println!("  Time:   {:.2?}", compression_time);

        if verbose {
            println!("  Codes:  {}", stats.codes);
            println!("  Resets: {}", stats.resets);
        }

        if compression_ratio > 100.0 {
            println!("  Note: File expanded during compression (common for small/random data)");
        }
    }

    Ok(())
}

fn decompress_file(
    input: &PathBuf,
    output: &PathBuf,
    decompressor: &Decompressor,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let compressed_data = fs::read(input)?;
    let input_size = compressed_data.len();

    if verbose {
        println!("Compressed size: {} bytes", input_size);
    }

    let progress = progress_bar(input_size, quiet, "Decompressing...");

    let (decompressed_data, stats) = decompressor
        .decompress_with_stats(&compressed_data)
        .map_err(|e| format!("Decompression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &decompressed_data)?;

    let decompression_time = start_time.elapsed();
    let output_size = decompressed_data.len();

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        if output_size > 0 {
            println!(
                "  Ratio:  {:.1}%",
                (input_size as f64 / output_size as f64) * 100.0
            );
        }
        println!("  Time:   {:.2?}", decompression_time);

        if verbose {
            println!("  Resets: {}", stats.resets);
        }
    }

    Ok(())
}

fn show_file_info(
    input: &PathBuf,
    decompressor: &Decompressor,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;
    let file_size = data.len();

    let header = Header::parse(&data)?;

    println!("LZW File Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", file_size);
    println!("  Max Code Size: {} bits", header.max_code_size);
    println!(
        "  Block Mode: {}",
        if header.block_mode { "on" } else { "off" }
    );

    if verbose {
        println!(
            "  Header bytes: {:02x} {:02x} {:02x}",
            data[0], data[1], data[2]
        );
    }

    match decompressor.decompress_with_stats(&data) {
        Ok((decompressed, stats)) => {
            let decompressed_size = decompressed.len();
            println!("  Decompressed Size: {} bytes", decompressed_size);
            if decompressed_size > 0 {
                let compression_ratio = (file_size as f64 / decompressed_size as f64) * 100.0;
                println!("  Compression Ratio: {:.1}%", compression_ratio);
            }
            println!("  Codes: {}", stats.codes);
            println!("  Resets: {}", stats.resets);
            println!("  Status: ✓ Valid LZW file");
        }
        Err(e) => {
            println!("  Status: ✗ Invalid or corrupted LZW file");
            if verbose {
                println!("  Error: {}", e);
            }
        }
    }

    Ok(())
}
