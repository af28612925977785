//! BSP dungeon generator
//!
//! Generates a dungeon and prints it to stdout. Logs go to stderr.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dg_core::{Dungeon, DungeonRng, GeneratorConfig, RenderStyle, S_WALL};

/// Generate a room-and-corridor dungeon by binary space partitioning
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(short = 'W', long, default_value_t = 41)]
    width: usize,

    /// Map height in cells
    #[arg(short = 'H', long, default_value_t = 41)]
    height: usize,

    /// Seed for reproducible output (random if omitted)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// JSON file with room size constraints
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Glyph drawn for walls
    #[arg(long, default_value_t = S_WALL)]
    wall_glyph: char,

    /// Draw corridors with their own glyph instead of as room floor
    #[arg(long)]
    corridor_glyph: Option<char>,

    /// Print leaf, room and floor counts to stderr
    #[arg(long)]
    stats: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GeneratorConfig::from_json_str(&json)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    debug!(?config, "generator configuration");

    let mut rng = match args.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    info!(seed = rng.seed(), "generating {}x{} dungeon", args.width, args.height);
    if let Some(notice) = seed_notice(&args, &rng) {
        eprintln!("{notice}");
    }

    let dungeon = Dungeon::generate(args.width, args.height, &config, &mut rng)
        .with_context(|| format!("generating {}x{} dungeon", args.width, args.height))?;

    let mut style = match args.corridor_glyph {
        Some(glyph) => RenderStyle::distinct_corridors(glyph),
        None => RenderStyle::default(),
    };
    style.wall = args.wall_glyph;
    print!("{}", dungeon.render(&style));

    if args.stats {
        eprintln!("seed:   {}", rng.seed());
        eprintln!("leaves: {}", dungeon.leaf_count());
        eprintln!("rooms:  {}", dungeon.rooms().len());
        eprintln!("floor:  {}", dungeon.floor_count());
    }

    Ok(())
}

/// Line reporting a seed drawn from entropy, so the run can be replayed.
/// `--stats` reports the seed itself.
fn seed_notice(args: &Args, rng: &DungeonRng) -> Option<String> {
    (args.seed.is_none() && !args.stats).then(|| format!("seed: {}", rng.seed()))
}
