use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use jpegdec_patch::commands::status::{TargetState, format_state};
use jpegdec_patch::config::PatchConfig;
use tracing::Level;

#[derive(Parser)]
#[command(name = "jpegdec-patch")]
#[command(about = "Patch the vendored JPEGDEC library before a PlatformIO build")]
#[command(version)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the JPEGDEC patches to every environment in .pio/libdeps
    Apply {
        /// PlatformIO project directory
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,
    },
    /// Show which patches each JPEGDEC copy carries, without modifying it
    Status {
        /// PlatformIO project directory
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Apply { project_dir } => {
            let config = PatchConfig::new(project_dir);
            // Warnings never fail the build, so the exit code stays 0.
            jpegdec_patch::commands::apply::run(&config, |event| println!("{}", event));
        }
        Commands::Status { project_dir } => {
            let config = PatchConfig::new(project_dir);
            match jpegdec_patch::commands::status::run(&config) {
                Ok(statuses) => {
                    if statuses.is_empty() {
                        println!("No JPEGDEC copies under {}", config.libdeps_dir().display());
                    }
                    for status in statuses {
                        println!("{}", status.file.display());
                        match status.state {
                            TargetState::Read { hash, patches } => {
                                println!("  sha256: {}", hash);
                                for (patch, state) in patches {
                                    println!("  {}: {}", patch.label, format_state(state));
                                }
                            }
                            TargetState::Unreadable(e) => {
                                println!("  {}", e);
                            }
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
    }
}
