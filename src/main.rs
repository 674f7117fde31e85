use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use preceptor::api::AccessTokenStore;
use preceptor::quiz::{Mood, QuizSelection};
use preceptor::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "preceptor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a quiz over one chapter
    Chapter {
        /// Chapter identifier
        chapter_id: String,
    },
    /// Start a quiz over a list of topics
    Topics {
        /// Topic identifiers
        #[arg(required = true)]
        topic_ids: Vec<String>,
    },
    /// Start a subject-wide quiz
    Subject {
        /// Subject identifier
        subject_id: String,
        /// Difficulty: easy, moderate or competitive
        #[arg(short, long)]
        mood: Option<Mood>,
        /// Submit through the AMC endpoint
        #[arg(long)]
        amc: bool,
    },
    /// Start a mock test
    Mock {
        /// Mock test identifier
        test_id: String,
    },
    /// Run a practice attempt from a local question file
    Practice {
        /// Path to a JSON question file
        #[arg(short, long)]
        file: String,
    },
    /// Store the question bank access token
    Login {
        /// Access token issued by the question bank
        token: String,
    },
    /// Forget the stored access token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "preceptor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let app = App::new(config.clone());

    match cli.command {
        Commands::Chapter { chapter_id } => {
            app.run_remote(QuizSelection::Chapter { chapter_id }).await?;
        }
        Commands::Topics { topic_ids } => {
            app.run_remote(QuizSelection::Topics { topic_ids }).await?;
        }
        Commands::Subject { subject_id, mood, amc } => {
            let mood = mood.unwrap_or(config.default_mood);
            app.run_remote(QuizSelection::Subject { subject_id, mood, amc }).await?;
        }
        Commands::Mock { test_id } => {
            app.run_remote(QuizSelection::MockTest { test_id }).await?;
        }
        Commands::Practice { file } => {
            app.run_practice(Path::new(&file)).await?;
        }
        Commands::Login { token } => {
            AccessTokenStore::set_token(&token)?;
            println!("Access token stored ({}).", AccessTokenStore::mask_token(&token));
        }
        Commands::Logout => {
            AccessTokenStore::clear_token()?;
            println!("Access token removed.");
        }
    }

    Ok(())
}
