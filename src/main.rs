use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use resume_righter::api::HttpBackend;
use resume_righter::config::{RighterPaths, Settings};
use resume_righter::wizard::WizardController;

#[derive(Parser)]
#[command(
    name = "resume-righter",
    version,
    about = "Tailor your resume to a job posting from the terminal",
    long_about = "Resume Righter walks you through uploading a resume, pointing \
                  at a job posting and adding any special considerations. Each \
                  input is checked by the Resume Righter service before the \
                  rewritten resume is downloaded."
)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Settings that can be overridden per run
#[derive(Args)]
struct Overrides {
    /// Root URL of the Resume Righter service
    #[arg(long, global = true, env = "RESUME_RIGHTER_BASE_URL")]
    base_url: Option<String>,

    /// Anti-forgery token to send instead of fetching one
    #[arg(long, global = true, env = "RESUME_RIGHTER_CSRF_TOKEN", hide_env_values = true)]
    csrf_token: Option<String>,

    /// Directory the rewritten resume is saved to
    #[arg(long, global = true, env = "RESUME_RIGHTER_DOWNLOAD_DIR")]
    download_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run the wizard with plain line prompts
    Console,

    /// Write the effective settings to the config file
    Init,

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RighterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_overrides(
        cli.overrides.base_url,
        cli.overrides.csrf_token,
        cli.overrides.download_dir,
    );

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            start_logging(&paths, &settings);
            let controller = WizardController::new(HttpBackend::new(&settings)?);
            let saved =
                resume_righter::tui::run_tui(controller, settings.download_dir()).await?;
            if let Some(path) = saved {
                println!("Rewritten resume saved to {}", path.display());
            }
        }
        Commands::Console => {
            start_logging(&paths, &settings);
            let controller = WizardController::new(HttpBackend::new(&settings)?);
            let stdin = io::stdin();
            resume_righter::console::run_console(
                controller,
                stdin.lock(),
                io::stdout(),
                settings.download_dir(),
            )
            .await?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Resume Righter Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Base URL:        {}", settings.base_url);
            println!(
                "  CSRF token:      {}",
                if settings.csrf_token.is_some() {
                    "(configured)"
                } else {
                    "(fetched from service)"
                }
            );
            println!("  Download dir:    {}", settings.download_dir().display());
            match settings.request_timeout() {
                Some(timeout) => println!("  Request timeout: {}s", timeout.as_secs()),
                None => println!("  Request timeout: none"),
            }
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

/// Logging is best effort; the wizard still runs without it
fn start_logging(paths: &RighterPaths, settings: &Settings) {
    if let Err(e) = resume_righter::logging::init(paths, settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}
