//! Rollbook Binary
//!
//! Runs the interactive student serialization shell on stdin/stdout.

use std::io;

use clap::Parser;
use rollbook::{Config, Shell, StudentArchive, SyncPolicy};
use tracing_subscriber::{fmt, EnvFilter};

/// Rollbook interactive shell
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Serialize and deserialize student records interactively")]
#[command(version)]
struct Args {
    /// Directory holding both data files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// File name for the single student
    #[arg(long, default_value = "student.ser")]
    student_file: String,

    /// File name for the roster of students
    #[arg(long, default_value = "students_multiple.ser")]
    roster_file: String,

    /// Skip fsync after writes
    #[arg(long)]
    no_sync: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Rollbook v{}", rollbook::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let sync_policy = if args.no_sync {
        SyncPolicy::Never
    } else {
        SyncPolicy::Always
    };

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .student_file(args.student_file)
        .roster_file(args.roster_file)
        .sync_policy(sync_policy)
        .build();

    let archive = match StudentArchive::open(config) {
        Ok(archive) => archive,
        Err(e) => {
            tracing::error!("Failed to open archive: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(archive, stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}
