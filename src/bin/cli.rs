//! Mergington CLI
//!
//! Command-line front end for the activities service:
//! - List activities and participants
//! - Sign a student up
//! - Unregister a participant
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mergington::view::{
    local_store, ActivitiesPanel, LOADING_TEXT, LOAD_FAILURE_TEXT, NO_PARTICIPANTS_TEXT,
};
use mergington::{
    generate_default_config, ActivityCard, BannerKind, Config, HttpActivitiesClient, LoggingConfig,
    NoDelay, ParticipantsSection, UnregisterOutcome, ViewController, ViewState,
};

#[derive(Parser)]
#[command(name = "mergington")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and manage Mergington High School extracurricular activities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and MERGINGTON_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/mergington/config.toml, ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all activities with their participants
    List,

    /// Sign a student up for an activity
    Signup {
        /// Activity name, e.g. "Chess Club"
        activity: String,
        /// Student email
        email: String,
    },

    /// Remove a participant from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    init_logging(&config.logging);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let client = HttpActivitiesClient::new(&config.api)?;
    let store = local_store();
    let controller = ViewController::new(client, store.clone(), NoDelay);

    match cli.command {
        Commands::List => {
            controller.refresh().await;
            let failed = print_panel(&store.borrow());
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Signup { activity, email } => {
            controller.set_email(email);
            controller.select_activity(activity);

            let outcome = controller.submit_signup().await;
            let banner = store.borrow().banner().clone();
            match banner.kind {
                Some(BannerKind::Error) => {
                    eprintln!("{}", banner.message);
                }
                _ => println!("{}", banner.message),
            }
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }

        Commands::Unregister { activity, email } => {
            match controller.unregister(&activity, &email).await {
                UnregisterOutcome::Removed => {
                    println!("Unregistered {} from {}", email, activity);
                }
                UnregisterOutcome::Retained(e) => {
                    eprintln!("Failed to unregister {} from {}: {}", email, activity, e);
                    std::process::exit(1);
                }
                UnregisterOutcome::AlreadyPending => {
                    eprintln!("An unregister request for {} is already in flight", email);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("mergington={}", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Print the activities panel. Returns `true` if the load failed.
fn print_panel(state: &ViewState) -> bool {
    match state.panel() {
        ActivitiesPanel::Loading => {
            println!("{}", LOADING_TEXT);
            false
        }
        ActivitiesPanel::Failed => {
            eprintln!("{}", LOAD_FAILURE_TEXT);
            true
        }
        ActivitiesPanel::Loaded(cards) if cards.is_empty() => {
            println!("No activities available.");
            false
        }
        ActivitiesPanel::Loaded(cards) => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_card(card);
            }
            false
        }
    }
}

fn print_card(card: &ActivityCard) {
    println!("{}", card.name);
    println!("{}", "-".repeat(card.name.chars().count()));
    println!("{}", card.description);
    println!("Schedule:     {}", card.schedule);
    println!("Availability: {}", card.availability_text());
    println!("Participants:");
    match &card.participants {
        ParticipantsSection::Empty => println!("  {}", NO_PARTICIPANTS_TEXT),
        ParticipantsSection::Listed(names) => {
            for name in names {
                println!("  - {}", name);
            }
        }
    }
}
