//! Lingulu CLI
//!
//! Command-line front end for the Lingulu client core:
//! - Log in, register, or finish a Google sign-in
//! - Show the leaderboard for the stored session
//! - Inspect routes and session gating
//! - Generate a config file

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use lingulu::api::{ApiClient, ReqwestTransport};
use lingulu::auth::{
    complete_oauth, submit_login, submit_register, Authenticated, Credentials, OAuthFailure,
    Registration, SubmitError, ERROR_QUERY_KEY,
};
use lingulu::config::{generate_default_config, Config};
use lingulu::leaderboard::{self, Leaderboard};
use lingulu::routes::{Navigation, Route};
use lingulu::session::{FileSessionStore, SessionStore};

#[derive(Parser)]
#[command(name = "lingulu")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lingulu language-learning client")]
#[command(long_about = "Lingulu client for the command line.\nSign in, keep a session on disk, and check where you stand on the leaderboard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/lingulu/config.toml or ./lingulu.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file, overrides the config file
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with email and password
    Login {
        /// Account email
        email: String,
        /// Password
        password: String,
    },

    /// Create an account and log in
    Register {
        username: String,
        email: String,
        password: String,
        /// Password confirmation (default: same as password)
        #[arg(long)]
        confirm: Option<String>,
        /// Agree to the terms & privacy policy
        #[arg(long)]
        agree_terms: bool,
    },

    /// Print the URL that starts Google sign-in
    OauthUrl,

    /// Fetch the session left behind by a finished Google sign-in
    OauthComplete,

    /// Show the leaderboard
    Leaderboard,

    /// Show the stored session
    Whoami,

    /// Forget the stored session
    Logout,

    /// Resolve a client path to its route, applying session gating
    Route {
        /// Path such as /dashboard or /lessons/1/materials/2
        path: String,
    },

    /// Generate default configuration file
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
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Cannot load config {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(file) = &cli.session_file {
        config.session.file = file.clone();
    }

    lingulu::logging::init(&config.logging);

    let transport = ReqwestTransport::new(config.api.request_timeout())
        .context("Failed to build HTTP client")?;
    let client = ApiClient::new(transport, config.api.base_url.clone());
    let store = FileSessionStore::new(config.session.resolved_file());

    match cli.command {
        Commands::Login { email, password } => {
            let result = submit_login(&client, &store, &Credentials::new(email, password)).await;
            finish_submit(result, &config.api.base_url);
        }

        Commands::Register {
            username,
            email,
            password,
            confirm,
            agree_terms,
        } => {
            let registration = Registration {
                username,
                email,
                confirm_password: confirm.unwrap_or_else(|| password.clone()),
                password,
                agree_to_terms: agree_terms,
            };
            let result = submit_register(&client, &store, &registration).await;
            finish_submit(result, &config.api.base_url);
        }

        Commands::OauthUrl => {
            println!("{}", client.google_authorization_url());
        }

        Commands::OauthComplete => {
            let navigation = complete_oauth(&client, &store).await;
            match navigation
                .query_value(ERROR_QUERY_KEY)
                .and_then(OAuthFailure::from_code)
            {
                Some(failure) => {
                    eprintln!("{}", failure.message());
                    eprintln!("Next: {}", navigation);
                    std::process::exit(1);
                }
                None => {
                    let user = store.get().map(|s| s.user_id).unwrap_or_default();
                    println!("Signed in with Google as user {}", user);
                    println!("Next: {}", navigation);
                }
            }
        }

        Commands::Leaderboard => match leaderboard::load(&client, &store).await {
            Ok(board) => match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&board)?),
                _ => print_leaderboard(&board),
            },
            Err(e) => {
                eprintln!("Failed to load leaderboard: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Whoami => match store.get() {
            Some(session) => {
                println!("User ID:  {}", session.user_id);
                println!("Token:    {}", mask_token(&session.access_token));
                println!("Stored in {}", store.path().display());
            }
            None => {
                println!("Not signed in.");
                println!("Run `lingulu login <email> <password>` to start a session.");
            }
        },

        Commands::Logout => {
            store.clear().context("Failed to clear session")?;
            println!("Signed out.");
        }

        Commands::Route { path } => {
            let navigation = Navigation::parse(&path);
            let route = &navigation.route;
            println!("Route:    {:?}", route);
            println!("Path:     {}", route.path());
            println!("Session:  {}", if route.requires_session() { "required" } else { "public" });
            match route.gate(store.has_session()) {
                Some(redirect) => println!("Redirect: {}", redirect),
                None => println!("Redirect: none"),
            }
            if let Route::NotFound(_) = route {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, &content)?;
                println!("Config written to {}", path.display());
            } else {
                println!("{}", content);
            }
        }
    }

    Ok(())
}

fn finish_submit(result: Result<Authenticated, SubmitError>, api_url: &str) {
    match result {
        Ok(auth) => {
            println!("Signed in as user {}", auth.session.user_id);
            println!("Next: {}", auth.navigation);
        }
        Err(SubmitError::Invalid(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{:<16} {}", field, message);
            }
            std::process::exit(1);
        }
        Err(SubmitError::Unreachable) => {
            eprintln!("Cannot reach the Lingulu API at {}", api_url);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_leaderboard(board: &Leaderboard) {
    if board.entries.is_empty() {
        println!("No leaderboard data available");
        return;
    }

    println!("{:<6} {:<8} {:<24} {:>10}", "RANK", "", "NAME", "XP");
    println!("{}", "-".repeat(52));
    for entry in &board.entries {
        let podium = entry.podium().map(|p| p.as_str()).unwrap_or("");
        let marker = if board.is_current_user(entry) { "  <- you" } else { "" };
        println!(
            "{:<6} {:<8} {:<24} {:>10}{}",
            entry.rank, podium, entry.name, entry.xp, marker
        );
    }

    if let Some(me) = board.current_user.as_ref().filter(|me| me.shows_rank_banner()) {
        println!();
        println!("You are #{} with {} XP ({})", me.rank, me.xp, me.name);
    }
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(6).collect();
    if token.chars().count() > 6 {
        format!("{}...", visible)
    } else {
        visible
    }
}
