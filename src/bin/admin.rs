//! CLI administration tool for users-api.
//!
//! Validates users files and previews pages offline, using the same loader
//! and pagination rules as the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Validate the users file the service would load
//! cargo run --bin users-admin -- check
//!
//! # Print page 2 with 5 users per page, as the API would return it
//! cargo run --bin users-admin -- page --page 2 --size 5
//!
//! # Show a single user
//! cargo run --bin users-admin -- --file fixtures/users.json show 7
//! ```
//!
//! # Environment Variables
//!
//! - `USERS_FILE` (optional): default for `--file` (default: `users.json`)

use users_api::api::dto::users::{UserItem, UserListResponse};
use users_api::domain::collection::Collection;
use users_api::domain::entities::User;
use users_api::domain::pagination::{PageRequest, Paginator};
use users_api::infrastructure::loader::load_users;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing users-api data.
#[derive(Parser)]
#[command(name = "users-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the users JSON document
    #[arg(short, long, env = "USERS_FILE", default_value = "users.json", global = true)]
    file: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate the users file
    Check,

    /// Print one page exactly as `GET /api/users/` would return it
    Page {
        /// Page number (>= 1)
        #[arg(short, long)]
        page: Option<String>,

        /// Page size (1-100)
        #[arg(short, long)]
        size: Option<String>,
    },

    /// Show a single user by id
    Show {
        /// User id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check(&cli.file).await,
        Commands::Page { page, size } => {
            let users = load(&cli.file).await?;
            print_page(users, page.as_deref(), size.as_deref())
        }
        Commands::Show { id } => {
            let users = load(&cli.file).await?;
            show(&users, id)
        }
    }
}

async fn load(file: &str) -> Result<Collection<User>> {
    load_users(file)
        .await
        .with_context(|| format!("Failed to load users from {file}"))
}

/// Loads the file and prints a summary, or the first validation failure.
async fn check(file: &str) -> Result<()> {
    println!("{} {}", "Checking".bright_blue().bold(), file.cyan());
    println!();

    let users = match load_users(file).await {
        Ok(users) => users,
        Err(e) => {
            println!("{} {}", "Invalid:".red().bold(), e);
            anyhow::bail!("{file} failed validation");
        }
    };

    println!("{}", "Users file is valid".green().bold());
    println!("  Users: {}", users.len().to_string().bright_yellow());

    if let (Some(first), Some(last)) = (users.as_slice().first(), users.as_slice().last()) {
        println!(
            "  Ids:   {}..={}",
            first.id.to_string().bright_yellow(),
            last.id.to_string().bright_yellow()
        );
    }

    let request = PageRequest::default();
    let pages = Paginator::new(users).paginate(request).pages;
    println!(
        "  Pages: {} (at default size {})",
        pages.to_string().bright_yellow(),
        request.size()
    );

    Ok(())
}

/// Prints the page as pretty JSON.
fn print_page(users: Collection<User>, page: Option<&str>, size: Option<&str>) -> Result<()> {
    let request = match PageRequest::parse(page, size) {
        Ok(request) => request,
        Err(e) => {
            println!("{} {}", "Rejected:".red().bold(), e.requirement());
            anyhow::bail!("invalid `{}` parameter", e.parameter());
        }
    };

    let response = UserListResponse::from(Paginator::new(users).paginate(request));
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn show(users: &Collection<User>, id: i64) -> Result<()> {
    match users.get(id) {
        Some(user) => {
            println!("{}", user.full_name().bright_white().bold());
            println!("{}", serde_json::to_string_pretty(&UserItem::from(user.clone()))?);
            Ok(())
        }
        None => {
            println!("{} {}", "No user with id".red(), id.to_string().bright_yellow());
            anyhow::bail!("user {id} not found");
        }
    }
}
