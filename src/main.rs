//! qrstamp CLI — generate QR code images from the command line.
//!
//! Usage:
//!   qrstamp basic <DATA> [-o FILE] [--size N] [--border N]
//!   qrstamp colored <DATA> [-o FILE] [--fill COLOR] [--back COLOR]
//!   qrstamp logo <DATA> <LOGO> [-o FILE]
//!   qrstamp demo [--dir DIR] [--logo LOGO]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use qrstamp::helper::{generate_basic, generate_colored, generate_with_logo};
use qrstamp::render::{to_console_string, DEFAULT_BORDER, DEFAULT_MODULE_SIZE};
use qrstamp::{EccLevel, EncodingRequest};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qrstamp",
    about = "Generate QR code images from text or URLs",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also print the code to the terminal
    #[arg(short, long, global = true)]
    preview: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Black-on-white code at error correction level L
    Basic {
        /// Text or URL to encode
        data: String,

        /// Output file; the extension picks the format
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixel size of one module
        #[arg(long, default_value_t = DEFAULT_MODULE_SIZE)]
        size: u32,

        /// Quiet zone width in modules
        #[arg(long, default_value_t = DEFAULT_BORDER)]
        border: u32,
    },

    /// Code with custom fill and background colors
    Colored {
        /// Text or URL to encode
        data: String,

        /// Output file; the extension picks the format
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Module color: a CSS name or hex value
        #[arg(long, default_value = "black")]
        fill: String,

        /// Background color: a CSS name or hex value
        #[arg(long, default_value = "white")]
        back: String,
    },

    /// Code at error correction level H with a centered logo
    Logo {
        /// Text or URL to encode
        data: String,

        /// Logo image
        logo: PathBuf,

        /// Output file; the extension picks the format
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a set of sample codes
    Demo {
        /// Directory to write the samples into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Logo for the logo sample; skipped when absent
        #[arg(long)]
        logo: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Basic {
            data,
            output,
            size,
            border,
        } => {
            preview(cli.preview, &data, EccLevel::Low)?;
            let output = output.as_deref().map(path_str).transpose()?;
            generate_basic(&data, output, Some(size), Some(border))?;
        }
        Commands::Colored {
            data,
            output,
            fill,
            back,
        } => {
            preview(cli.preview, &data, EccLevel::Low)?;
            let output = output.as_deref().map(path_str).transpose()?;
            generate_colored(&data, output, Some(&fill), Some(&back))?;
        }
        Commands::Logo { data, logo, output } => {
            preview(cli.preview, &data, EccLevel::High)?;
            let output = output.as_deref().map(path_str).transpose()?;
            generate_with_logo(&data, path_str(&logo)?, output)?;
        }
        Commands::Demo { dir, logo } => demo(&dir, logo.as_deref())?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn preview(enabled: bool, data: &str, ecc: EccLevel) -> anyhow::Result<()> {
    if enabled {
        let symbol = EncodingRequest::new(data, ecc).encode()?;
        println!("{}", to_console_string(&symbol, DEFAULT_BORDER));
    }
    Ok(())
}

fn path_str(path: &std::path::Path) -> anyhow::Result<&str> {
    path.to_str()
        .with_context(|| format!("path is not valid UTF-8: {}", path.display()))
}

fn demo(dir: &std::path::Path, logo: Option<&std::path::Path>) -> anyhow::Result<()> {
    let out = |name: &str| -> anyhow::Result<String> {
        Ok(path_str(&dir.join(name))?.to_string())
    };

    generate_basic(
        "Hello, World! 你好世界！",
        Some(out("basic_qr.png")?.as_str()),
        None,
        None,
    )?;
    tracing::info!("basic QR code done");

    generate_basic(
        "https://www.ikea.com.tw/zh/store/hsin-chuang/repair",
        Some(out("url_qr.png")?.as_str()),
        Some(8),
        None,
    )?;
    tracing::info!("URL QR code done");

    generate_colored(
        "彩色 QR Code 測試",
        Some(out("colored_qr.png")?.as_str()),
        Some("blue"),
        Some("yellow"),
    )?;
    tracing::info!("colored QR code done");

    if let Some(logo) = logo {
        generate_with_logo(
            "Logo QR Code",
            path_str(logo)?,
            Some(out("logo_qr.png")?.as_str()),
        )?;
        tracing::info!("logo QR code done");
    }

    Ok(())
}
