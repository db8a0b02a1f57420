// File: crates/demo/src/main.rs
// Summary: Loads the four energy charts from a data directory and writes per-chart SVGs plus an HTML page.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use energy_charts::{theme, FileSource, Page, PageEvent, Size, Widget};
use tracing::{info, warn};

use crate::config::PageConfig;

const DEFAULT_VIEWPORT: Size = Size::new(1200.0, 900.0);

#[derive(Parser, Debug)]
#[command(name = "energy-dashboard")]
#[command(author, version, about = "Render the TV energy and spot price charts to SVG/HTML")]
struct Cli {
    /// Directory the `data/*.csv` paths are resolved against
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Where `{chart}.svg` and `index.html` are written
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// TOML page config; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset (light, dark)
    #[arg(long)]
    theme: Option<String>,

    /// Also write `{chart}.png` (needs the `raster` feature)
    #[arg(long)]
    png: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // -v overrides RUST_LOG; without it the environment decides.
    let level = match cli.verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    };
    let _ = energy_charts::init_tracing(level);

    let cfg = match &cli.config {
        Some(path) => PageConfig::load(path)?,
        None => PageConfig::default(),
    };

    let data_dir = cli.data_dir.clone().or(cfg.data_dir.clone()).unwrap_or_else(|| PathBuf::from("."));
    let out_dir = cli.out_dir.clone().or(cfg.out_dir.clone()).unwrap_or_else(|| PathBuf::from("target/out"));
    let theme = theme::find(cli.theme.as_deref().or(cfg.theme.as_deref()).unwrap_or("light"));
    let base = cfg.viewport.unwrap_or(DEFAULT_VIEWPORT);
    let viewport = Size::new(cli.width.unwrap_or(base.width), cli.height.unwrap_or(base.height));

    info!(data_dir = %data_dir.display(), theme = theme.name, width = viewport.width, "rendering dashboard");
    let mut page = Page::standard(theme, cfg.layout, viewport, Box::new(FileSource::new(&data_dir)));
    page.dispatch(PageEvent::Load);

    std::fs::create_dir_all(&out_dir).with_context(|| format!("failed to create '{}'", out_dir.display()))?;
    for chart in page.charts() {
        write_chart(chart.as_ref(), &out_dir)?;
    }

    let index = out_dir.join("index.html");
    std::fs::write(&index, page.to_html()).with_context(|| format!("failed to write '{}'", index.display()))?;
    println!("Wrote {}", index.display());

    if cli.png {
        write_pngs(&page, &out_dir)?;
    }
    Ok(())
}

fn write_chart(chart: &dyn Widget, out_dir: &Path) -> Result<()> {
    let container = chart.container();
    match container.svg() {
        Some(svg) => {
            let out = out_dir.join(format!("{}.svg", chart.label()));
            std::fs::write(&out, svg.to_string()).with_context(|| format!("failed to write '{}'", out.display()))?;
            println!("Wrote {}", out.display());
        }
        None => {
            let message = container.error_message().unwrap_or("not rendered");
            warn!(chart = chart.label(), %message, "no svg written");
            eprintln!("{}: {message}", container.selector());
        }
    }
    Ok(())
}

#[cfg(feature = "raster")]
fn write_pngs(page: &Page, out_dir: &Path) -> Result<()> {
    for chart in page.charts() {
        if let Some(svg) = chart.container().svg() {
            let out = out_dir.join(format!("{}.png", chart.label()));
            energy_charts::raster::write_png(svg, page.theme().background, &out)
                .with_context(|| format!("failed to rasterize '{}'", chart.label()))?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}

#[cfg(not(feature = "raster"))]
fn write_pngs(_page: &Page, _out_dir: &Path) -> Result<()> {
    anyhow::bail!("--png needs a build with `--features raster`")
}
