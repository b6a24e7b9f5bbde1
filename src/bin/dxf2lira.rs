//! dxf2lira command line tool
//!
//! Converts one ASCII DXF drawing into a LIRA input file.

use anyhow::{bail, Context};
use clap::Parser;
use dxf2lira::io::dxf::encoding_for_label;
use dxf2lira::io::json::{write_json_file, JSON_SUFFIX};
use dxf2lira::io::lira::{output_path, DEFAULT_SUFFIX};
use dxf2lira::registry::{DEFAULT_PRECISION, MAX_PRECISION};
use dxf2lira::DxfReaderConfiguration;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Convert an ASCII DXF drawing into a LIRA input file
#[derive(Parser, Debug)]
#[command(name = "dxf2lira")]
#[command(version, about, long_about = None)]
struct Cli {
    /// DXF drawing to convert
    input: PathBuf,

    /// Output file (default: input stem plus the suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suffix of the derived output name
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Fractional digits compared when merging points
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Code page of non UTF-8 text (ANSI_1251, koi8-r, ...)
    #[arg(long, value_name = "CODEPAGE")]
    encoding: Option<String>,

    /// Abort on the first malformed entity instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Also write the decoded model as JSON next to the output
    #[arg(long)]
    dump_json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if cli.precision > MAX_PRECISION {
        bail!("precision {} is above the maximum of {}", cli.precision, MAX_PRECISION);
    }

    let encoding = match cli.encoding.as_deref() {
        Some(label) => match encoding_for_label(label) {
            Some(encoding) => Some(encoding),
            None => bail!("unknown code page '{}'", label),
        },
        None => None,
    };

    let config = DxfReaderConfiguration {
        failsafe: !cli.strict,
        precision: cli.precision,
        encoding,
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| output_path(&cli.input, &cli.suffix));

    let model = dxf2lira::convert_file(&cli.input, &output, config)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    if !model.notifications.is_empty() {
        warn!(count = model.notifications.len(), "parts of the drawing were skipped");
    }

    info!(
        layers = model.layers().len(),
        points = model.point_count(),
        "wrote {}",
        output.display()
    );

    if cli.dump_json {
        let json = output_path(&cli.input, JSON_SUFFIX);
        write_json_file(&model, &json).with_context(|| format!("writing {}", json.display()))?;
        info!("wrote {}", json.display());
    }

    Ok(())
}
