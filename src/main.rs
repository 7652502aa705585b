use std::fs;

use clap::Parser;
use floatconv::{Width, get_report};
use tracing_subscriber::{EnvFilter, fmt};

/// floatconv converts loosely-typed values to `f32` and `f64` and shows how
/// each one was interpreted.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells floatconv to read a file of literals, one per line, instead of
    /// a literal.
    #[arg(short, long)]
    file: bool,

    /// The float width to convert to.
    #[arg(short, long, value_enum, default_value_t = Width::All)]
    width: Width,

    /// Verbosity level (-v, -vv, -vvv). `RUST_LOG` applies when absent.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt().with_env_filter(filter)
         .with_target(true)
         .with_level(true)
         .with_writer(std::io::stderr)
         .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match get_report(&source, args.width) {
        Ok(report) => {
            print!("{report}");
            if report.failures() > 0 {
                std::process::exit(2);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
