//! QOI Strategy Benchmark
//!
//! Encodes every PNG in a directory with each QOI strategy, writes the
//! streams to an output directory and prints one CSV line per stream so the
//! strategies can be compared on real images.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin qoi_bench -- <INPUT_DIR> <OUTPUT_DIR>
//! cargo run --release --bin qoi_bench -- images/ out/ --strategy run --strategy index --baseline
//! ```
//!
//! # Output
//!
//! ```text
//! strategy, name, size, path
//! qoi, kodim01, 651120, out/kodim01.qoi
//! run, kodim01, 1902233, out/kodim01.run.qoi
//! ```
//!
//! With `--baseline` an extra `zlib` line per image gives the size of the raw
//! pixels after zlib compression.
//!
//! Streams are tagged sRGB (colorspace 0) unless `--linear` is given. Other
//! QOI benchmark tools often tag everything linear; pass `--linear` to get
//! byte-identical headers when comparing against their output. The flag only
//! changes the header byte, never the encoded size.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use qoi_encodings::{EncodeError, ImageDesc, Strategy};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "qoi_bench", about = "Compare QOI encoding strategies on a directory of PNGs")]
struct Args {
    /// Directory containing the *.png inputs
    input_dir: PathBuf,

    /// Directory the encoded streams are written to (created if missing)
    output_dir: PathBuf,

    /// Strategy to run: qoi, run, diffluma or index. Repeatable; defaults to all
    #[arg(short, long = "strategy", value_name = "NAME")]
    strategies: Vec<Strategy>,

    /// Tag the streams as linear colorspace instead of sRGB
    #[arg(long)]
    linear: bool,

    /// Also report the zlib-compressed size of the raw pixels
    #[arg(long)]
    baseline: bool,
}

#[derive(Debug, Error)]
enum BenchError {
    #[error("no PNG images found in {0}")]
    NoImages(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("PNG decoding failed: {0}")]
    Png(#[from] png::DecodingError),

    #[error("unsupported PNG color type {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Raw 8-bit pixels decoded from a PNG.
struct RawImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

fn main() -> ExitCode {
    #[cfg(feature = "debug-logging")]
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("qoi_bench: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), BenchError> {
    let files = collect_pngs(&args.input_dir)?;
    if files.is_empty() {
        return Err(BenchError::NoImages(args.input_dir.clone()));
    }
    fs::create_dir_all(&args.output_dir)?;

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies.clone()
    };

    eprintln!("Processing {} images", files.len());
    println!("strategy, name, size, path");
    for path in &files {
        // A broken image should not abort the whole run
        if let Err(e) = process_png(path, args, &strategies) {
            eprintln!("{}: {e}", path.display());
        }
    }
    Ok(())
}

/// Lists `*.png` files in `dir`, sorted so runs are reproducible.
fn collect_pngs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn process_png(path: &Path, args: &Args, strategies: &[Strategy]) -> Result<(), BenchError> {
    let image = load_png(path)?;
    let mut desc = ImageDesc::new(image.width, image.height, image.channels, 0);
    if args.linear {
        desc = desc.linear();
    }
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    #[cfg(feature = "debug-logging")]
    log::info!(
        "{}: {}x{}, {} channels",
        path.display(),
        desc.width,
        desc.height,
        desc.channels
    );

    for &strategy in strategies {
        let encoded = strategy.encoder().encode(&image.pixels, &desc)?;
        let out_path = args
            .output_dir
            .join(format!("{name}{}", strategy.extension()));
        fs::write(&out_path, &encoded)?;
        println!(
            "{strategy}, {name}, {}, {}",
            encoded.len(),
            out_path.display()
        );
    }

    if args.baseline {
        println!("zlib, {name}, {}, -", zlib_size(&image.pixels)?);
    }
    Ok(())
}

/// Decodes a PNG into packed 8-bit RGB or RGBA.
fn load_png(path: &Path) -> Result<RawImage, BenchError> {
    let mut decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    // Palettes and low bit depths expand to 8-bit, 16-bit is stripped to 8-bit
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let (pixels, channels) = match info.color_type {
        png::ColorType::Rgb => (buf, 3),
        png::ColorType::Rgba => (buf, 4),
        png::ColorType::Grayscale => (buf.iter().flat_map(|&v| [v, v, v]).collect(), 3),
        png::ColorType::GrayscaleAlpha => (
            buf.chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
            4,
        ),
        other @ png::ColorType::Indexed => return Err(BenchError::UnsupportedColor(other)),
    };

    Ok(RawImage {
        pixels,
        width: info.width,
        height: info.height,
        channels,
    })
}

fn zlib_size(data: &[u8]) -> io::Result<usize> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?.len())
}
