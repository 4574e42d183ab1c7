use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use mazewalker::{
    algo::{QTableAgent, QTableAgentConfig},
    maze,
    render::{Render, TextRenderer},
    sim::{SimState, Simulation},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const MAZE_WIDTH: usize = 21;
const MAZE_HEIGHT: usize = 21;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Animated canvas in the terminal
    Tui,
    /// Text dump, one step per Enter
    Text,
}

/// Maze Walker: watch a Q-learning robot find the center of a random maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Rendering mode, the terminal canvas when available if omitted
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Random seed for the maze and the robot
    #[arg(long)]
    seed: Option<u64>,

    /// Steps per second in tui mode
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut renderer = select_renderer(args.mode, args.fps)?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = maze::generate(MAZE_WIDTH, MAZE_HEIGHT, &mut rng);
    let agent = QTableAgent::new(QTableAgentConfig::default(), rng);
    let mut sim: Simulation = Simulation::new(grid, agent);

    let state = sim.run(renderer.as_mut())?;
    drop(renderer);

    match state {
        SimState::Reached => println!("Robot reached the goal!"),
        SimState::Running => println!("Stopped after {} steps.", sim.steps()),
    }

    Ok(())
}

/// Pick the renderer for `mode`, falling back to text when the canvas is unavailable
///
/// Also installs the matching log backend.
fn select_renderer(mode: Option<Mode>, fps: u32) -> Result<Box<dyn Render>> {
    #[cfg(feature = "viz")]
    if mode != Some(Mode::Text) {
        match mazewalker::viz::TuiRenderer::new(fps) {
            Ok(renderer) => {
                mazewalker::viz::init_logging(log::LevelFilter::Debug)?;
                return Ok(Box::new(renderer));
            }
            Err(e) => {
                init_text_logging()?;
                log::warn!("Error in tui mode: {e}. Falling back to text mode.");
                return Ok(text_renderer());
            }
        }
    }

    init_text_logging()?;
    #[cfg(not(feature = "viz"))]
    if mode == Some(Mode::Tui) {
        log::warn!("Built without the `viz` feature ({fps} fps ignored). Falling back to text mode.");
    }

    Ok(text_renderer())
}

fn text_renderer() -> Box<dyn Render> {
    println!("Running in text mode...");
    Box::new(TextRenderer::stdio())
}

/// Send log records to stderr
fn init_text_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}
