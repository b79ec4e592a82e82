use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use liftpath::{plan, ElevatorId, Floor, Schedule, TimeStep};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "liftpath", about = "Plan elevator transfers over a fixed floor timetable")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan a route through a schedule file.
    Plan {
        /// Schedule file (JSON, see `liftpath demo` for the shape).
        schedule: PathBuf,
        /// Car the rider starts in.
        #[arg(long)]
        start: ElevatorId,
        /// Destination as FLOOR-TIME, e.g. `5-5` for floor 5 at time 5.
        #[arg(long)]
        dest: String,
    },
    /// Run the built-in demonstration scenarios.
    Demo,
}

/// On-disk schedule shape. A list rather than a map, since car order is
/// significant to the planner.
#[derive(Deserialize, Debug)]
struct ScheduleFile {
    elevators: Vec<CarEntry>,
}

#[derive(Deserialize, Debug)]
struct CarEntry {
    id: ElevatorId,
    floors: Vec<Floor>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            schedule,
            start,
            dest,
        } => run_plan(schedule, start, &dest)?,
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

fn run_plan(path: PathBuf, start: ElevatorId, dest: &str) -> Result<()> {
    let schedule = read_schedule_file(&path)
        .with_context(|| format!("failed to load schedule from {}", path.display()))?;
    let (floor, time) = parse_destination(dest)?;

    match plan(&schedule, start, floor, time)? {
        Some(route) => println!("{}", render_route(&route)),
        None => println!("no solution"),
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let four_cars = Schedule::builder()
        .car('A', vec![1, 4, 3, 2, 2])
        .car('B', vec![3, 3, 3, 4, 2])
        .car('C', vec![2, 2, 6, 6, 6])
        .car('D', vec![6, 1, 1, 4, 5])
        .build()?;
    let five_cars = Schedule::builder()
        .car('A', vec![1, 7, 7, 7, 5, 2, 1])
        .car('B', vec![2, 9, 6, 3, 9, 8, 3])
        .car('C', vec![9, 8, 7, 5, 5, 4, 5])
        .car('D', vec![2, 1, 3, 4, 8, 1, 2])
        .car('E', vec![8, 1, 5, 5, 6, 7, 7])
        .build()?;

    for (schedule, start, floor, time) in [(four_cars, 'A', 5, 5), (five_cars, 'B', 2, 6)] {
        println!("schedule:\n{schedule}");
        match plan(&schedule, start, floor, time)? {
            Some(route) => println!(
                "from {start}, floor {floor} at time {time}: {}\n",
                render_route(&route)
            ),
            None => println!("from {start}, floor {floor} at time {time}: no solution\n"),
        }
    }
    Ok(())
}

fn read_schedule_file(path: &Path) -> Result<Schedule> {
    let reader = BufReader::new(File::open(path)?);
    let file: ScheduleFile = serde_json::from_reader(reader).context("malformed schedule JSON")?;

    let mut builder = Schedule::builder();
    for entry in file.elevators {
        builder = builder.car(entry.id, entry.floors);
    }
    Ok(builder.build()?)
}

/// Split a `FLOOR-TIME` token, e.g. `"5-5"` into floor 5 at time 5.
fn parse_destination(dest: &str) -> Result<(Floor, TimeStep)> {
    let Some((floor, time)) = dest.split_once('-') else {
        bail!("destination '{dest}' is not of the form FLOOR-TIME");
    };
    let floor = floor
        .parse()
        .with_context(|| format!("bad floor in destination '{dest}'"))?;
    let time = time
        .parse()
        .with_context(|| format!("bad time in destination '{dest}'"))?;
    Ok((floor, time))
}

fn render_route(route: &[ElevatorId]) -> String {
    route.iter().collect()
}
