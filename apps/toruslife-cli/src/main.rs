use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use toruslife_autoplay::{AutoplayConfig, StopFlag, WriterSink};
use toruslife_kernel::World;
use toruslife_render::{BoxTextRenderer, Glyphs, JsonRenderer, Renderer};

#[derive(Parser)]
#[command(name = "toruslife", about = "Conway's Game of Life on a toroidal grid")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Animate a randomly seeded world until the limit or Ctrl-C
    Play {
        /// Grid side length (3..=100)
        #[arg(short, long, default_value = "20", allow_negative_numbers = true)]
        size: i64,
        /// Number of generations to show; unlimited when omitted
        #[arg(short, long, allow_negative_numbers = true)]
        generations: Option<i64>,
        /// Pause between generations in milliseconds
        #[arg(short, long, default_value = "200")]
        interval_ms: u64,
        /// RNG seed for a reproducible world
        #[arg(long)]
        seed: Option<u64>,
        /// Draw with ASCII instead of box-drawing glyphs
        #[arg(long)]
        ascii: bool,
    },
    /// Build an explicit world, advance it, print the result
    Step {
        /// Grid side length (3..=100)
        #[arg(short, long, allow_negative_numbers = true)]
        size: i64,
        /// Live cells as JSON, e.g. '[[2,1],[2,2],[2,3]]'
        #[arg(short, long)]
        cells: String,
        /// Generations to advance before printing
        #[arg(short, long, default_value = "1")]
        generations: u64,
        /// Print a JSON snapshot instead of the grid
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("toruslife v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", toruslife_common::crate_info());
            println!("render: {}", toruslife_render::crate_info());
            println!("autoplay: {}", toruslife_autoplay::crate_info());
        }
        Commands::Play {
            size,
            generations,
            interval_ms,
            seed,
            ascii,
        } => {
            let mut config = AutoplayConfig::from_raw(size, generations)?
                .with_interval(Duration::from_millis(interval_ms));
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let stop = StopFlag::new();
            let handler_flag = stop.clone();
            ctrlc::set_handler(move || handler_flag.stop())
                .context("installing Ctrl-C handler")?;

            let glyphs = if ascii { Glyphs::ascii() } else { Glyphs::default() };
            let renderer = BoxTextRenderer::new().with_glyphs(glyphs).with_header(true);
            let mut sink = WriterSink::new(io::stdout().lock()).clear_screen(true);

            let (world, stats) = toruslife_autoplay::play(&config, &renderer, &mut sink, &stop)?;
            tracing::info!(
                stopped = stats.stopped,
                avg_advance = ?stats.advance_avg,
                max_advance = ?stats.advance_max,
                "{}",
                world.summary()
            );
        }
        Commands::Step {
            size,
            cells,
            generations,
            json,
        } => {
            let cells: serde_json::Value =
                serde_json::from_str(&cells).context("parsing --cells as JSON")?;
            let mut world = World::from_value(&size.into(), Some(&cells))?;
            world.advance_by(generations);

            let mut out = io::stdout().lock();
            if json {
                writeln!(out, "{}", JsonRenderer.render(&world))?;
            } else {
                let renderer = BoxTextRenderer::new().with_header(true);
                write!(out, "{}", renderer.render(&world))?;
                writeln!(out, "{}", world.summary())?;
            }
        }
    }

    Ok(())
}
