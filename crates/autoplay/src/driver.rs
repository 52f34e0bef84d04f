use std::io;
use std::time::{Duration, Instant};

use toruslife_kernel::World;
use toruslife_render::Renderer;

use crate::{AdvanceTimer, AutoplayConfig, FrameSink, StopFlag};

/// Number of recent advances kept for timing statistics.
const TIMER_CAPACITY: usize = 64;

/// Errors from the autoplay loop. Configuration errors are caught earlier,
/// when the `AutoplayConfig` is built.
#[derive(Debug, thiserror::Error)]
pub enum AutoplayError {
    #[error("failed to emit frame: {0}")]
    Sink(#[from] io::Error),
}

/// What happened during an autoplay run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoplayStats {
    pub frames_rendered: u64,
    pub final_generation: u64,
    /// The loop ended on a stop request rather than the generation limit.
    pub stopped: bool,
    pub advance_avg: Duration,
    pub advance_max: Duration,
}

/// Drive `world` forward: render, emit, pause, advance.
///
/// Runs `config.generations` iterations, or until `stop` is set when no
/// limit is configured. `config.size` and `config.seed` are ignored here;
/// they only matter to [`play`].
pub fn run<R, S>(
    world: &mut World,
    config: &AutoplayConfig,
    renderer: &R,
    sink: &mut S,
    stop: &StopFlag,
) -> Result<AutoplayStats, AutoplayError>
where
    R: Renderer,
    R::Output: AsRef<str>,
    S: FrameSink,
{
    let _span = tracing::info_span!(
        "autoplay",
        size = world.size(),
        limit = ?config.generations
    )
    .entered();

    let mut timer = AdvanceTimer::new(TIMER_CAPACITY);
    let mut frames = 0u64;
    let mut stopped = false;

    loop {
        if config.generations.is_some_and(|limit| frames >= limit) {
            break;
        }
        if stop.is_stopped() {
            stopped = true;
            break;
        }

        let frame = renderer.render(world);
        sink.frame(frame.as_ref())?;
        frames += 1;

        if stop.wait(config.interval) {
            stopped = true;
            break;
        }

        let started = Instant::now();
        world.advance();
        timer.record(started.elapsed());
    }

    if stopped {
        tracing::debug!(generation = world.generation(), frames, "autoplay stopped");
    }

    let stats = AutoplayStats {
        frames_rendered: frames,
        final_generation: world.generation(),
        stopped,
        advance_avg: timer.average(),
        advance_max: timer.max(),
    };
    tracing::info!(
        frames = stats.frames_rendered,
        generation = stats.final_generation,
        population = world.population(),
        "autoplay finished"
    );
    Ok(stats)
}

/// Seed a world per `config` and autoplay it. Returns the final world with
/// the run statistics.
pub fn play<R, S>(
    config: &AutoplayConfig,
    renderer: &R,
    sink: &mut S,
    stop: &StopFlag,
) -> Result<(World, AutoplayStats), AutoplayError>
where
    R: Renderer,
    R::Output: AsRef<str>,
    S: FrameSink,
{
    let mut world = match config.seed {
        Some(seed) => World::with_seed(config.size, seed),
        None => World::random(config.size),
    };
    let stats = run(&mut world, config, renderer, sink, stop)?;
    Ok((world, stats))
}
