use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use biobalance::activity::ActivityLogger;
use biobalance::cli::{handle_profile_command, handle_theme_command};
use biobalance::config::{paths::VaultPaths, settings::Settings};
use biobalance::vault::{FixedPassphrase, PassphraseSource, TerminalPrompt};
use biobalance::VaultError;

#[derive(Parser)]
#[command(
    name = "biobalance",
    version,
    about = "Encrypted health profile storage for BioBalance",
    long_about = "Keeps your BioBalance health profile encrypted on this machine. \
                  Profiles are protected with a passphrase (PBKDF2 + AES-256-GCM) \
                  and can be exported to a file and imported elsewhere."
)]
struct Cli {
    /// Passphrase to use instead of prompting
    #[arg(long, global = true, env = "BIOBALANCE_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save, export, import and restore encrypted profiles
    #[command(subcommand)]
    Profile(biobalance::cli::ProfileCommands),

    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        command: Option<biobalance::cli::ThemeCommands>,
    },

    /// Show recent vault activity
    Activity {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        if let Some(vault_err) = err.downcast_ref::<VaultError>() {
            eprintln!("{}", vault_err.user_hint());
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = VaultPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let passphrases: Box<dyn PassphraseSource> = match cli.passphrase {
        Some(passphrase) => Box::new(FixedPassphrase::new(passphrase)),
        None => Box::new(TerminalPrompt),
    };

    match cli.command {
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&paths, &settings, passphrases, cmd)?;
        }
        Some(Commands::Theme { command }) => {
            let cmd = command.unwrap_or(biobalance::cli::ThemeCommands::Show);
            handle_theme_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Activity { limit }) => {
            let logger = ActivityLogger::new(paths.activity_log());
            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No activity recorded.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            println!("BioBalance Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Storage file:     {}", paths.storage_file().display());
            println!("Activity log:     {}", paths.activity_log().display());
            println!();
            println!("Settings:");
            println!("  Export file name:       {}", settings.export_file_name);
            println!("  Save imported profiles: {}", settings.save_imported_profiles);
            println!("  Activity log enabled:   {}", settings.activity_log_enabled);
        }
        None => {
            println!("BioBalance - encrypted health profile storage");
            println!();
            println!("Run 'biobalance --help' for usage information.");
        }
    }

    Ok(())
}
