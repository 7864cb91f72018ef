//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use my_profile::config::GlobalConfig;
use my_profile::output::OutputMode;

/// my-profile - Validated professional profiles
#[derive(Parser, Debug)]
#[command(
    name = "my-profile",
    version,
    about = "Validated professional profiles",
    long_about = "Build a professional profile from flags or a TOML file.\n\n\
                  Names, roles and locations must not be blank.\n\
                  Skills are trimmed, deduplicated ignoring case and sorted."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a one-line profile summary
    Summary(SummaryArgs),

    /// Normalize a list of skills
    Skills {
        /// Skills to normalize
        skills: Vec<String>,
    },

    /// Validate a profile file
    Check {
        /// Profile file (defaults to the configured path)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Write a starter profile file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'F', long)]
        force: bool,

        /// Profile file (defaults to the configured path)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Where the summary's profile comes from
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Profile file (used when --name is not given)
    #[arg(short, long, conflicts_with_all = ["name", "role", "skill", "location"])]
    pub file: Option<PathBuf>,

    /// Name
    #[arg(short, long, requires = "role")]
    pub name: Option<String>,

    /// Role
    #[arg(short, long, requires = "name")]
    pub role: Option<String>,

    /// Skill (repeatable)
    #[arg(short, long = "skill", requires = "name")]
    pub skill: Vec<String>,

    /// Location
    #[arg(short, long, requires = "name")]
    pub location: Option<String>,

    /// Also write the validated profile to this file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();
    let output_mode = config.output_mode(cli.json);

    match cli.command {
        Some(Command::Summary(args)) => commands::summary(args, &config, output_mode),
        Some(Command::Skills { skills }) => commands::skills(&skills, output_mode),
        Some(Command::Check { file }) => commands::check(file.as_deref(), &config, output_mode),
        Some(Command::Init { force, file }) => {
            commands::init(force, file.as_deref(), &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": my_profile::VERSION
                    })
                );
            } else {
                println!("my-profile v{}", my_profile::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": my_profile::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("my-profile v{}", my_profile::VERSION);
                println!("\nRun 'my-profile --help' for usage");
                println!("Run 'my-profile init' to get started");
            }
            Ok(())
        },
    }
}
