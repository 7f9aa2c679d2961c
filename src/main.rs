use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use futures::{stream, StreamExt};
use gridscraper::{
    config::{CoordinateOrigin, MalformedRowPolicy, Options},
    decode_from_url, decode_html, fetch,
};
use serde::Serialize;
use std::{fs, path::PathBuf};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Fetch published coordinate tables and print the message they draw"
)]
struct Args {
    /// Document URLs to decode
    #[arg(required_unless_present = "html_file")]
    sources: Vec<String>,

    /// Decode a local HTML file instead of fetching
    #[arg(long, conflicts_with = "sources")]
    html_file: Option<PathBuf>,

    /// YAML options file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop rows with more than three cells instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Put y = 0 on the bottom line
    #[arg(long)]
    flip_y: bool,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Max documents fetched at once
    #[arg(long, default_value_t = 3)]
    concurrency: usize,
}

#[derive(Serialize)]
struct Decoded<'a> {
    source: &'a str,
    lines: &'a [String],
}

fn emit(format: Format, source: &str, lines: &[String], first: bool) -> Result<()> {
    match format {
        Format::Text => {
            if !first {
                println!();
            }
            for line in lines {
                println!("{}", line);
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string(&Decoded { source, lines })?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr, so stdout is just the grid) ──────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) options: file first, flags on top ─────────────────────────
    let mut opts = match &args.config {
        Some(path) => Options::from_yaml_file(path)?,
        None => Options::default(),
    };
    if args.skip_malformed {
        opts.decode.malformed_rows = MalformedRowPolicy::Skip;
    }
    if args.flip_y {
        opts.decode.origin = CoordinateOrigin::BottomLeft;
    }

    // ─── 3) local file ────────────────────────────────────────────────
    if let Some(path) = &args.html_file {
        let html =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let lines = decode_html(&html, &opts.decode)
            .with_context(|| format!("decoding {}", path.display()))?;
        return emit(args.format, &path.display().to_string(), &lines, true);
    }

    // ─── 4) fetch + decode, printed in argument order ─────────────────
    let client = fetch::build_client(&opts.fetch)?;
    info!(sources = args.sources.len(), "decoding");

    let mut results = stream::iter(&args.sources)
        .map(|src| {
            let client = &client;
            let opts = &opts;
            async move { (src, decode_from_url(client, src, opts).await) }
        })
        .buffered(args.concurrency.max(1));

    let mut failed = 0;
    let mut first = true;
    while let Some((src, res)) = results.next().await {
        match res {
            Ok(lines) => {
                emit(args.format, src, &lines, first)?;
                first = false;
            }
            Err(e) => {
                error!(source = %src, error = %e, "decode failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} sources failed to decode", failed, args.sources.len());
    }
    Ok(())
}
