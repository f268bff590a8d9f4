use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use maze_dfs::config::{DEFAULT_DIMS, DEFAULT_SPEED, MIN_SPEED};
use maze_dfs::generators::{Activity, Backtracker, GeneratorState, Snapshot};
use maze_dfs::grids::Direction;
use maze_dfs::GeneratorConfig;

/// Headless driver: ticks the generator like a frame timer would and prints
/// the finished maze.
#[derive(Parser, Debug)]
#[command(name = "maze-dfs", version, about)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    cols: usize,

    /// seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// milliseconds between steps
    #[arg(long, default_value_t = DEFAULT_SPEED.as_millis() as u64)]
    speed: u64,

    /// lowest step interval in milliseconds that speed changes may reach
    #[arg(long, default_value_t = MIN_SPEED.as_millis() as u64)]
    min_speed: u64,

    /// tick as fast as possible instead of every `speed` ms
    #[arg(long)]
    instant: bool,

    /// print the in-progress maze every N steps (0 disables)
    #[arg(long, default_value_t = 0)]
    trace_every: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GeneratorConfig::with_dims(args.rows, args.cols)
        .default_speed(Duration::from_millis(args.speed))
        .min_speed(Duration::from_millis(args.min_speed));

    let mut generator = match args.seed {
        Some(seed) => Backtracker::seeded(config, seed),
        None => Backtracker::new(config),
    }
    .context("creating maze generator")?;

    generator.set_instant_finish(args.instant);
    generator.start().context("starting generation")?;
    log::info!(
        "generating {}x{} maze, tick {:?}",
        args.rows,
        args.cols,
        generator.tick_interval()
    );

    let mut steps = 0usize;
    loop {
        generator.step().context("stepping maze generation")?;
        steps += 1;

        if args.trace_every > 0 && steps % args.trace_every == 0 {
            println!("{}", render_text(&generator.snapshot()?)?);
        }

        if generator.take_completion() {
            break;
        }
        if generator.state() == GeneratorState::Running {
            std::thread::sleep(generator.tick_interval());
        }
    }

    log::info!("finished after {} steps", steps);
    println!("{}", render_text(&generator.snapshot()?)?);

    Ok(())
}

/// North is drawn at the top, so rows are printed from the last one down.
fn render_text(snapshot: &Snapshot) -> maze_dfs::Result<String> {
    let grid = snapshot.grid;
    let dims = grid.dims();
    let mut out = String::new();

    for row in (0..dims.rows).rev() {
        let mut top = String::new();
        let mut middle = String::new();
        for column in 0..dims.columns {
            let coord = (row, column);
            let cell = grid.cell(coord)?;

            top.push('+');
            top.push_str(if cell.walls.has(Direction::North) {
                "---"
            } else {
                "   "
            });

            middle.push(if cell.walls.has(Direction::West) { '|' } else { ' ' });
            middle.push_str(match snapshot.active {
                Some((active, Activity::Carving)) if active == coord => " @ ",
                Some((active, Activity::Backtracking)) if active == coord => " < ",
                _ if snapshot.on_path(coord) => " . ",
                _ if !cell.visited => "###",
                _ => "   ",
            });

            if column == dims.columns - 1 {
                top.push('+');
                middle.push(if cell.walls.has(Direction::East) { '|' } else { ' ' });
            }
        }
        out.push_str(&top);
        out.push('\n');
        out.push_str(&middle);
        out.push('\n');
    }

    for column in 0..dims.columns {
        let walls = grid.walls_of((0, column))?;
        out.push('+');
        out.push_str(if walls.has(Direction::South) { "---" } else { "   " });
    }
    out.push('+');

    Ok(out)
}
