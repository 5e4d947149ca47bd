use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use solver24::puzzle::{DEFAULT_MAX, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN, PuzzleGenerator};
use solver24::solver::constants::{TARGET, TOLERANCE};
use solver24::survey::survey;
use solver24::utils::{parse_operand, quadruple_count};
use solver24::{AnswerVerdict, Solver24, SolverConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// The four puzzle numbers
#[derive(Args, Debug, Clone)]
pub struct PuzzleNumbers {
    #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
    pub a: f64,
    #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
    pub b: f64,
    #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
    pub c: f64,
    #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
    pub d: f64,
}

impl PuzzleNumbers {
    pub fn to_array(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print one expression over the four numbers that reaches the target
    Solve {
        #[command(flatten)]
        numbers: PuzzleNumbers,
    },
    /// Check an answer such as "(8 - 6) * (4 + 8)" against the four numbers
    Check {
        #[command(flatten)]
        numbers: PuzzleNumbers,
        /// Expression to check, using + - * / or + − × ÷
        #[arg(allow_hyphen_values = true)]
        answer: String,
    },
    /// Deal a random solvable puzzle
    Generate {
        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
        /// Smallest number that may be dealt
        #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
        min: i64,
        /// Largest number that may be dealt
        #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
        max: i64,
        /// Random draws before falling back to a known puzzle
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        attempts: usize,
        /// Also print a solution
        #[arg(long)]
        show_solution: bool,
    },
    /// List every distinct value the four numbers can reach
    Reachable {
        #[command(flatten)]
        numbers: PuzzleNumbers,
    },
    /// Classify every quadruple in a range as solvable or not
    Survey {
        #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
        max: i64,
        /// Only list quadruples without a solution
        #[arg(long)]
        unsolvable_only: bool,
    },
}

/// solver24 - Make 24 from four numbers with + − × ÷
#[derive(Parser, Debug)]
#[command(name = "solver24")]
#[command(about = "Decide whether four numbers can make 24, and show how")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Value the numbers must reach
    #[arg(long, global = true, default_value_t = TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Largest accepted distance from the target
    #[arg(long, global = true, default_value_t = TOLERANCE, allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Log level (default: warn)
    #[arg(short, long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub solver_config: SolverConfig,
    pub log_level: LogLevel,
}

/// Validate parsed arguments and turn them into a configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    if !args.target.is_finite() {
        bail!("Target must be a finite number, got {}", args.target);
    }
    if !args.tolerance.is_finite() || args.tolerance <= 0.0 {
        bail!(
            "Tolerance must be a positive number, got {}",
            args.tolerance
        );
    }

    match &args.command {
        Command::Generate {
            min, max, attempts, ..
        } => PuzzleGenerator::new()
            .with_range(*min, *max)
            .with_max_attempts(*attempts)
            .validate()
            .context("Invalid puzzle range")?,
        Command::Survey { min, max, .. } => {
            quadruple_count(*min, *max).context("Invalid survey range")?;
        }
        _ => {}
    }

    Ok(CliConfig {
        command: args.command,
        solver_config: SolverConfig::default()
            .with_target(args.target)
            .with_tolerance(args.tolerance),
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse()).context("Invalid arguments")
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn format_numbers(numbers: &[f64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute one command, writing its report to `out`
pub fn execute(command: &Command, solver: &Solver24, out: &mut impl Write) -> Result<()> {
    let target = solver.config().target;

    match command {
        Command::Solve { numbers } => {
            let numbers = numbers.to_array();
            info!(
                "Searching for an expression over {:?} that equals {}",
                numbers, target
            );
            match solver
                .get_solution(&numbers)
                .context("Failed to solve puzzle")?
            {
                Some(expr) => writeln!(out, "{}", expr)?,
                None => {
                    warn!("No matching expression found");
                    writeln!(out, "No solution.")?;
                }
            }
        }
        Command::Check { numbers, answer } => {
            let numbers = numbers.to_array();
            let verdict = solver
                .check_answer(&numbers, answer)
                .context("Could not check answer")?;
            match verdict {
                AnswerVerdict::Correct => writeln!(out, "Correct!")?,
                AnswerVerdict::WrongNumbers => writeln!(
                    out,
                    "Wrong: use each of {} exactly once.",
                    format_numbers(&numbers)
                )?,
                AnswerVerdict::WrongValue(value) => {
                    writeln!(out, "Wrong: {} = {}, not {}.", answer, value, target)?
                }
            }
        }
        Command::Generate {
            seed,
            min,
            max,
            attempts,
            show_solution,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let generator = PuzzleGenerator::new()
                .with_range(*min, *max)
                .with_max_attempts(*attempts);
            let puzzle = generator
                .generate(solver, &mut rng)
                .context("Failed to generate puzzle")?;
            writeln!(out, "{}", puzzle)?;

            if *show_solution {
                match solver.get_solution(&puzzle.numbers)? {
                    Some(expr) => writeln!(out, "Solution: {}", expr)?,
                    None => writeln!(out, "Solution: none")?,
                }
            }
        }
        Command::Reachable { numbers } => {
            let numbers = numbers.to_array();
            let values = solver
                .reachable_values(&numbers)
                .context("Failed to enumerate values")?;
            for operand in &values {
                writeln!(out, "{} = {}", operand.value, operand.expression)?;
            }
            info!("{} distinct values", values.len());
        }
        Command::Survey {
            min,
            max,
            unsolvable_only,
        } => {
            let entries = survey(solver, *min, *max).context("Survey failed")?;
            let solvable = entries.iter().filter(|e| e.is_solvable()).count();
            for entry in &entries {
                let numbers = entry.numbers.map(|n| n as f64);
                match &entry.witness {
                    Some(_) if *unsolvable_only => {}
                    Some(expr) => writeln!(out, "{}: {}", format_numbers(&numbers), expr)?,
                    None => writeln!(out, "{}: no solution", format_numbers(&numbers))?,
                }
            }
            writeln!(
                out,
                "{} of {} quadruples can make {}",
                solvable,
                entries.len(),
                target
            )?;
        }
    }

    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver24::with_config(config.solver_config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&config.command, &solver, &mut out)
}
