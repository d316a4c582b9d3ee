use barcode25::tools::render::{render, RenderOptions};
use barcode25::tools::{load_mono, load_rgb, save_matrix};
use barcode25::{GrayScaleMethod, MonoThreshold, ScanEngine, Symbology};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "b25tool", version, about = "2-of-5 barcode tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the symbol on the first row containing a black pixel
    Decode {
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value = "industrial")]
        symbology: Symbology,
        /// Digits (Industrial) or digit pairs (Interleaved)
        #[arg(long, default_value_t = 1)]
        digits: i32,
        /// Grayscale method for the monochrome pass
        #[arg(long, default_value = "ntsc")]
        method: GrayScaleMethod,
        /// Gray level at or above which a pixel is white
        #[arg(long)]
        threshold: Option<u8>,
        /// Sample pixels as-is: only pure black counts as a bar
        #[arg(long)]
        raw: bool,
    },
    /// Draw a synthetic symbol to an image file
    Render {
        #[arg(long, default_value = "industrial")]
        symbology: Symbology,
        #[arg(long)]
        value: String,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 2)]
        narrow: usize,
        #[arg(long, default_value_t = 5)]
        wide: usize,
        #[arg(long, default_value_t = 10)]
        quiet_zone: usize,
        #[arg(long, default_value_t = 40)]
        height: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Decode {
            image,
            symbology,
            digits,
            method,
            threshold,
            raw,
        } => {
            let threshold = threshold.map(MonoThreshold).unwrap_or_default();
            decode_cmd(&image, symbology, digits, method, threshold, raw)
        }
        Command::Render {
            symbology,
            value,
            out,
            narrow,
            wide,
            quiet_zone,
            height,
        } => {
            let opts = RenderOptions {
                narrow,
                wide,
                quiet_zone,
                height,
            };
            render_cmd(symbology, &value, &out, &opts)
        }
    }
}

fn decode_cmd(
    path: &Path,
    symbology: Symbology,
    digits: i32,
    method: GrayScaleMethod,
    threshold: MonoThreshold,
    raw: bool,
) -> ExitCode {
    let engine = ScanEngine::new(symbology).with_digit_count(digits);
    let start = Instant::now();

    let result = if raw {
        load_rgb(path).map(|(pixels, width, height)| {
            let rgb = image::RgbImage::from_raw(width as u32, height as u32, pixels);
            rgb.and_then(|rgb| engine.decode(&rgb))
        })
    } else {
        load_mono(path, method, threshold).map(|mono| engine.decode(&mono))
    };

    match result {
        Ok(Some(value)) => {
            println!(
                "{}: {} ({} digits, {:.2} ms)",
                symbology,
                value,
                value.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!(
                "No {} symbol with {} digit group(s) found in {}",
                symbology,
                engine.digit_count().get(),
                path.display()
            );
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Failed to load image {}: {}", path.display(), err);
            ExitCode::FAILURE
        }
    }
}

fn render_cmd(symbology: Symbology, value: &str, out: &Path, opts: &RenderOptions) -> ExitCode {
    if opts.narrow == 0 || opts.wide <= opts.narrow || opts.quiet_zone == 0 {
        eprintln!("Need 0 < narrow < wide and a non-empty quiet zone");
        return ExitCode::FAILURE;
    }

    let Some(matrix) = render(symbology, value, opts) else {
        eprintln!("'{}' cannot be encoded as {}", value, symbology);
        return ExitCode::FAILURE;
    };

    match save_matrix(&matrix, out) {
        Ok(()) => {
            println!(
                "Wrote {} ({}x{})",
                out.display(),
                matrix.width(),
                matrix.height()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to write {}: {}", out.display(), err);
            ExitCode::FAILURE
        }
    }
}
