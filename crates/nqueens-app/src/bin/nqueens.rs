//! Command-line entry point for the N-Queens trace solver.
//!
//! # Usage
//!
//! Print the full trace for an 8×8 board as JSON:
//!
//! ```sh
//! nqueens 8 --pretty
//! ```
//!
//! Read a request from standard input, as the board viewer sends it:
//!
//! ```sh
//! echo '{"N": 6}' | nqueens --stdin
//! ```
//!
//! Step through every frame of the search:
//!
//! ```sh
//! nqueens 4 --format replay
//! ```
//!
//! Bound the work for large boards (sizes outside 4-12 need a wider range):
//!
//! ```sh
//! nqueens 30 --max-size 64 --max-steps 1000000 --timeout-ms 2000 --format summary
//! ```
//!
//! Set `RUST_LOG=debug` to see search progress.

use std::{
    io::{self, Read as _, Write as _},
    process::ExitCode,
    time::Duration,
};

use clap::{Parser, ValueEnum};
use nqueens_app::{
    RequestError, SolveSettings,
    dto::{ErrorDto, SolveRequestDto, SolveResponseDto},
    render::{StepFrame, SummaryView},
    service,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The response document: outcome plus every step.
    Json,
    /// Outcome, counters, and final board.
    Summary,
    /// Every step rendered as a board frame.
    Replay,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size N.
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        required_unless_present = "stdin",
        conflicts_with = "stdin"
    )]
    n: Option<i64>,

    /// Read a JSON request (`{"N": 8}`) from standard input.
    #[arg(long)]
    stdin: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Smallest accepted board size.
    #[arg(long, value_name = "N", default_value_t = 4)]
    min_size: usize,

    /// Largest accepted board size.
    #[arg(long, value_name = "N", default_value_t = 12)]
    max_size: usize,

    /// Abort once the trace reaches this many steps.
    #[arg(long, value_name = "COUNT")]
    max_steps: Option<usize>,

    /// Abort once the search runs this long.
    #[arg(long, value_name = "MILLIS")]
    timeout_ms: Option<u64>,
}

impl Args {
    fn settings(&self) -> SolveSettings {
        SolveSettings {
            size_range: self.min_size..=self.max_size,
            max_steps: self.max_steps,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("{_0}")]
    Request(#[from] RequestError),
    #[display("invalid JSON: {_0}")]
    Json(#[from] serde_json::Error),
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
}

impl AppError {
    fn exit_status(&self) -> u8 {
        match self {
            Self::Request(RequestError::Aborted { .. }) | Self::Io(_) => 1,
            Self::Request(_) | Self::Json(_) => 2,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("request failed: {error:?}");
            report_error(&args, &error);
            ExitCode::from(error.exit_status())
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let request = match args.n {
        Some(n) => SolveRequestDto { n },
        None => read_request()?,
    };
    let settings = args.settings();
    log::debug!("request: {request:?}, settings: {settings:?}");

    let result = service::run_request(request, &settings)?;

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Json => {
            write_json(&mut out, &SolveResponseDto::from(&result), args.pretty)?;
        }
        OutputFormat::Summary => writeln!(out, "{}", SummaryView(&result))?,
        OutputFormat::Replay => {
            let total = result.steps().len();
            for (index, step) in result.steps().iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", StepFrame { index, total, step })?;
            }
        }
    }
    Ok(())
}

fn read_request() -> Result<SolveRequestDto, AppError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(serde_json::from_str(&input)?)
}

fn write_json<W, T>(out: &mut W, value: &T, pretty: bool) -> Result<(), AppError>
where
    W: io::Write,
    T: serde::Serialize,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

impl OutputFormat {
    /// Errors are reported in-band as JSON only when the output is JSON.
    fn reports_errors_as_json(self) -> bool {
        self == Self::Json
    }
}

fn report_error(args: &Args, error: &AppError) {
    if args.format.reports_errors_as_json() {
        let dto = ErrorDto::from_error(error);
        let mut out = io::stdout().lock();
        if write_json(&mut out, &dto, args.pretty).is_ok() {
            return;
        }
    }
    eprintln!("error: {error}");
}

#[cfg(test)]
mod tests {
    use nqueens_core::InvalidBoardSize;

    use super::*;

    #[test]
    fn test_exit_status() {
        let aborted = AppError::from(RequestError::Aborted { steps: 10 });
        assert_eq!(aborted.exit_status(), 1);

        let out_of_range = AppError::from(RequestError::OutOfRange { n: 20, min: 4, max: 12 });
        assert_eq!(out_of_range.exit_status(), 2);

        let invalid = AppError::from(RequestError::from(InvalidBoardSize::Negative { value: -3 }));
        assert_eq!(invalid.exit_status(), 2);

        let json = serde_json::from_str::<SolveRequestDto>("{").unwrap_err();
        assert_eq!(AppError::from(json).exit_status(), 2);

        let io = AppError::from(io::Error::other("closed"));
        assert_eq!(io.exit_status(), 1);
    }

    #[test]
    fn test_failed_requests_exit_with_status() {
        let argv = ["nqueens", "30", "--max-size", "64", "--max-steps", "50"];
        let args = Args::try_parse_from(argv).unwrap();
        let error = run(&args).unwrap_err();
        assert!(matches!(error, AppError::Request(RequestError::Aborted { steps: 50 })));
        assert_eq!(error.exit_status(), 1);

        let args = Args::try_parse_from(["nqueens", "3"]).unwrap();
        assert_eq!(run(&args).unwrap_err().exit_status(), 2);
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["nqueens", "-3"]).unwrap();
        assert_eq!(args.n, Some(-3));
        assert!(!args.stdin);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.settings().size_range, 4..=12);

        let args = Args::try_parse_from(["nqueens", "--stdin", "-f", "replay"]).unwrap();
        assert_eq!(args.n, None);
        assert_eq!(args.format, OutputFormat::Replay);

        assert!(Args::try_parse_from(["nqueens", "--stdin", "8"]).is_err());
        assert!(Args::try_parse_from(["nqueens"]).is_err());
    }

    #[test]
    fn test_error_destination() {
        assert!(OutputFormat::Json.reports_errors_as_json());
        assert!(!OutputFormat::Summary.reports_errors_as_json());
        assert!(!OutputFormat::Replay.reports_errors_as_json());
    }
}
