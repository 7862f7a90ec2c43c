use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cloture::analysis::EdgeMap;
use cloture::perception::grid::{load_grid, parse_grid, GridFormat};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cloture")]
#[command(about = "Compute the fence perimeter around the occupied cells of a grid")]
struct Cmd {
    /// Grid file (`-` for stdin)
    path: PathBuf,

    /// Input encoding; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Layers to print before the perimeter
    #[arg(long, value_enum, value_delimiter = ',')]
    show: Vec<LayerKind>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

impl From<Format> for GridFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => GridFormat::Json,
            Format::Text => GridFormat::Text,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayerKind {
    Map,
    Zones,
    Edges,
    Filled,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let format = cmd.format.map(GridFormat::from);
    let grid = if cmd.path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).context("cannot read stdin")?;
        parse_grid(&content, format.unwrap_or(GridFormat::Text))?
    } else {
        load_grid(&cmd.path, format)?
    };
    tracing::info!(path = %cmd.path.display(), height = grid.height(), width = grid.width(), occupied = grid.occupied_count(), "grid loaded");

    let map = EdgeMap::new(grid).context("fence analysis failed")?;

    if cmd.json {
        println!("{}", map.report().to_json()?);
        return Ok(());
    }

    for layer in &cmd.show {
        let (title, rendered) = match layer {
            LayerKind::Map => ("map", map.display_map()),
            LayerKind::Zones => ("zones", map.display_zones()),
            LayerKind::Edges => ("outer edges", map.display_outer_edges()),
            LayerKind::Filled => ("filled map", map.display_filled_map()),
        };
        println!("--- {} ---", title);
        println!("{}", rendered);
    }

    println!("zones: {} ({} outer, {} inner)", map.zone_count(), map.outer_zones().len(), map.inner_zones().len());
    println!("fences: {}", map.fence_count());
    println!("perimeter: {}", map.fence_perimeter());
    Ok(())
}
