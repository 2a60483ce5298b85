use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use coordinate_systems::systems::{DirectionSystem, PositionSystem, VectorSystem};
use rotations::prelude::EulerAngles;
use std::path::{Path, PathBuf};
use tracing::Level;

mod batch;
mod errors;

use batch::{Batch, Job, matrix, triple};
use errors::ConvertErrors;

#[derive(Debug, Parser)]
#[command(version, about = "Convert coordinates and orientations", long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Decimal places printed
    #[arg(short, long, default_value_t = 6, global = true)]
    precision: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a position, e.g. `position cylindrical_polar rc 2 90 5`
    #[command(allow_negative_numbers = true)]
    Position {
        from: PositionSystem,
        to: PositionSystem,
        #[arg(num_args = 3, required = true)]
        value: Vec<f64>,
    },
    /// Convert a direction (Euler angles in degrees)
    #[command(allow_negative_numbers = true)]
    Direction {
        from: DirectionSystem,
        to: DirectionSystem,
        #[arg(num_args = 3, required = true)]
        value: Vec<f64>,
    },
    /// Convert a vector
    #[command(allow_negative_numbers = true)]
    Vector {
        from: VectorSystem,
        to: VectorSystem,
        #[arg(num_args = 3, required = true)]
        value: Vec<f64>,
    },
    /// Apply a cartesian increment to a position held in another system
    #[command(allow_negative_numbers = true)]
    Nudge {
        to: PositionSystem,
        #[arg(long, num_args = 3, required = true)]
        increment: Vec<f64>,
        #[arg(long, num_args = 3, required = true)]
        base: Vec<f64>,
    },
    /// Print the matrix for azimuth, elevation and roll in degrees
    #[command(allow_negative_numbers = true)]
    EulerMatrix {
        azimuth: f64,
        elevation: f64,
        roll: f64,
    },
    /// Print the Euler angles of a matrix given as nine values in row order
    #[command(allow_negative_numbers = true)]
    MatrixEuler {
        #[arg(num_args = 9, required = true)]
        values: Vec<f64>,
    },
    /// Print the rotation of `angle` degrees about x, y or z
    #[command(allow_negative_numbers = true)]
    Rotate { axis: char, angle: f64 },
    /// Run every job in a RON batch file
    Batch { file: PathBuf },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ConvertErrors> {
    let job = match cli.command {
        Commands::Position { from, to, value } => Job::Position {
            from,
            to,
            value: triple(&value)?.into(),
        },
        Commands::Direction { from, to, value } => Job::Direction {
            from,
            to,
            value: triple(&value)?.into(),
        },
        Commands::Vector { from, to, value } => Job::Vector {
            from,
            to,
            value: triple(&value)?.into(),
        },
        Commands::Nudge {
            to,
            increment,
            base,
        } => Job::PositionIncrement {
            from: PositionSystem::RectangularCartesian,
            to,
            increment: triple(&increment)?.into(),
            base: triple(&base)?.into(),
        },
        Commands::EulerMatrix {
            azimuth,
            elevation,
            roll,
        } => Job::EulerMatrix {
            angles: EulerAngles::new(azimuth, elevation, roll),
        },
        Commands::MatrixEuler { values } => {
            let m = matrix(&values)?.0;
            Job::MatrixEuler {
                rows: [
                    [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
                    [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
                    [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
                ],
            }
        }
        Commands::Rotate { axis, angle } => Job::Rotations {
            steps: vec![(angle, axis)],
        },
        Commands::Batch { file } => return run_batch(&file, cli.precision),
    };
    println!("{}", job.run()?.render(cli.precision));
    Ok(())
}

fn run_batch(file: &Path, precision: usize) -> Result<(), ConvertErrors> {
    let batch = Batch::load(file)?;
    tracing::info!(jobs = batch.jobs.len(), file = %file.display(), "batch loaded");

    let mut failures = 0;
    for (i, job) in batch.jobs.iter().enumerate() {
        println!("{} {:?}", format!("[{i}]").cyan(), job);
        match job.run() {
            Ok(output) => println!("{}", output.render(precision)),
            Err(e) => {
                failures += 1;
                tracing::debug!(job = i, error = %e, "job failed");
                eprintln!("{} {}", "error:".red(), e);
            }
        }
    }
    if failures > 0 {
        tracing::warn!(failures, "some batch jobs failed");
        return Err(ConvertErrors::BatchFailed {
            failures,
            total: batch.jobs.len(),
        });
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    coordinate_systems::initialize_conversion_tables();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_position_with_negative_values() {
        let cli = Cli::try_parse_from([
            "convert",
            "position",
            "rc",
            "spherical_polar",
            "-1",
            "2.5",
            "-3",
        ])
        .unwrap();
        match cli.command {
            Commands::Position { from, to, value } => {
                assert_eq!(from, PositionSystem::RectangularCartesian);
                assert_eq!(to, PositionSystem::SphericalPolar);
                assert_eq!(value, vec![-1.0, 2.5, -3.0]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_system_is_rejected() {
        assert!(Cli::try_parse_from(["convert", "position", "toroidal", "rc", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_wrong_value_count_is_rejected() {
        assert!(Cli::try_parse_from(["convert", "vector", "component", "sp", "1", "2"]).is_err());
    }

    #[test]
    fn test_nudge_uses_cartesian_increment() {
        let cli = Cli::try_parse_from([
            "convert",
            "nudge",
            "cylindrical_polar",
            "--increment",
            "0",
            "1",
            "0",
            "--base",
            "1",
            "0",
            "0",
        ])
        .unwrap();
        assert!(run(cli).is_ok());
    }

    fn write_batch(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("convert_{}_{name}.ron", std::process::id()));
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_batch_with_failed_jobs_is_an_error() {
        let path = write_batch(
            "failing",
            r#"(
                jobs: [
                    Rotations(steps: [(10.0, 'w')]),
                    Position(from: CylindricalPolar, to: RectangularCartesian, value: (2.0, 90.0, 5.0)),
                    PositionIncrement(
                        from: SphericalPolar,
                        to: CylindricalPolar,
                        increment: (0.0, 0.0, 0.0),
                        base: (1.0, 0.0, 0.0),
                    ),
                ],
            )"#,
        );
        let result = run_batch(&path, 3);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConvertErrors::BatchFailed {
                failures: 2,
                total: 3
            })
        ));
    }

    #[test]
    fn test_batch_without_failures_is_ok() {
        let path = write_batch(
            "passing",
            "(jobs: [EulerMatrix(angles: (azimuth: 10.0, elevation: 20.0, roll: 30.0))])",
        );
        let result = run_batch(&path, 3);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_batch_file_is_an_error() {
        let path = std::env::temp_dir().join("convert_no_such_batch_file.ron");
        assert!(matches!(run_batch(&path, 3), Err(ConvertErrors::Io(_))));
    }
}
