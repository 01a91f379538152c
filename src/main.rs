//! CLI for the CMS admin record mappers.
//!
//! Reads, validates and writes records through the same mappers an admin
//! panel would use, without an HTTP layer in between.
//!
//! # Usage
//!
//! ```bash
//! # Show the rule table of a mapper (no database needed)
//! cms-admin fields article
//!
//! # Validate a submission without touching the database
//! cms-admin validate article --offline --file article.json
//!
//! # Full validation, including reference existence
//! cms-admin validate comment --file comment.json
//!
//! # Create, read, update and delete
//! echo '{"title": "Spring issue"}' | cms-admin create magazine
//! cms-admin show article 42
//! cms-admin update article 42 --partial --file patch.json
//! cms-admin delete comment 7 -y
//!
//! # Check database connection
//! cms-admin db check
//! ```
//!
//! Record output is pretty-printed JSON on stdout. Rejected submissions print
//! an `{"error": {code, message, details}}` body on stderr and exit with status 1.

use cms_admin::api::mapper::{self, Access, RecordMapper, WriteMode};
use cms_admin::config::{self, Config};
use cms_admin::domain::entities::{
    Article, Author, Billboard, Category, Comment, Contributor, Ebook, Entity, Magazine,
    Publication, Video,
};
use cms_admin::error::AppError;
use cms_admin::infrastructure::persistence::{self, PgEntity};
use cms_admin::{AppState, logging};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Confirm;
use serde::Serialize;
use serde_json::{Value, json};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for managing CMS records.
#[derive(Parser)]
#[command(name = "cms-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Record(RecordCommand),

    /// Print the field rules of an entity
    Fields { entity: EntityKind },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Commands operating on records of one entity.
#[derive(Subcommand)]
enum RecordCommand {
    /// List all records
    List { entity: EntityKind },

    /// Show one record
    Show { entity: EntityKind, id: i64 },

    /// Validate a submission without saving it
    Validate {
        entity: EntityKind,

        /// JSON file holding the submission (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Validate as a partial update (required fields may be omitted)
        #[arg(long)]
        partial: bool,

        /// Skip checks that need the database
        #[arg(long)]
        offline: bool,
    },

    /// Create a record
    Create {
        entity: EntityKind,

        /// JSON file holding the submission (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Update a record
    Update {
        entity: EntityKind,
        id: i64,

        /// JSON file holding the submission (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only write the submitted fields
        #[arg(long)]
        partial: bool,
    },

    /// Delete a record
    Delete {
        entity: EntityKind,
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

impl RecordCommand {
    fn entity(&self) -> EntityKind {
        match self {
            RecordCommand::List { entity }
            | RecordCommand::Show { entity, .. }
            | RecordCommand::Validate { entity, .. }
            | RecordCommand::Create { entity, .. }
            | RecordCommand::Update { entity, .. }
            | RecordCommand::Delete { entity, .. } => *entity,
        }
    }
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and record counts
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EntityKind {
    Article,
    Author,
    Billboard,
    Category,
    Comment,
    Contributor,
    Ebook,
    Magazine,
    Publication,
    Video,
}

/// Runs `$body` with `$m` bound to the entity type selected by `$kind`.
macro_rules! with_entity {
    ($kind:expr, |$m:ident| $body:expr) => {
        match $kind {
            EntityKind::Article => {
                type $m = Article;
                $body
            }
            EntityKind::Author => {
                type $m = Author;
                $body
            }
            EntityKind::Billboard => {
                type $m = Billboard;
                $body
            }
            EntityKind::Category => {
                type $m = Category;
                $body
            }
            EntityKind::Comment => {
                type $m = Comment;
                $body
            }
            EntityKind::Contributor => {
                type $m = Contributor;
                $body
            }
            EntityKind::Ebook => {
                type $m = Ebook;
                $body
            }
            EntityKind::Magazine => {
                type $m = Magazine;
                $body
            }
            EntityKind::Publication => {
                type $m = Publication;
                $body
            }
            EntityKind::Video => {
                type $m = Video;
                $body
            }
        }
    };
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    logging::init(&config);

    match cli.command {
        Commands::Record(command) => {
            with_entity!(command.entity(), |M| run_record_command::<M>(command, &config).await)
        }
        Commands::Fields { entity } => {
            with_entity!(entity, |M| print_fields::<M>());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Db { action } => handle_db_action(action, &config).await,
    }
}

/// Runs one record command for entity `M`.
///
/// Only `validate --offline` runs without a database connection.
async fn run_record_command<M>(command: RecordCommand, config: &Config) -> Result<ExitCode>
where
    M: RecordMapper + PgEntity,
    M::Record: for<'r> FromRow<'r, PgRow> + Unpin,
{
    let policy = config.read_only_policy();

    if let RecordCommand::Validate {
        file,
        partial,
        offline: true,
        ..
    } = &command
    {
        let payload = read_payload(file.as_deref())?;
        let result = mapper::validate::<M>(&payload, write_mode(*partial), policy)
            .map(|_| json!({ "valid": true }))
            .map_err(AppError::from);
        return render(result);
    }

    let pool = persistence::connect(config).await?;
    let state = AppState::new(Arc::new(pool), policy);
    let service = state.records::<M>();

    match command {
        RecordCommand::List { .. } => render(service.list().await),
        RecordCommand::Show { id, .. } => render(service.get(id).await),
        RecordCommand::Validate { file, partial, .. } => {
            let payload = read_payload(file.as_deref())?;
            let result = service
                .validate(&payload, write_mode(partial))
                .await
                .map(|_| json!({ "valid": true }));
            render(result)
        }
        RecordCommand::Create { file, .. } => {
            let payload = read_payload(file.as_deref())?;
            render(service.create(&payload).await)
        }
        RecordCommand::Update {
            id, file, partial, ..
        } => {
            let payload = read_payload(file.as_deref())?;
            render(service.update(id, &payload, partial).await)
        }
        RecordCommand::Delete { id, yes, .. } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete {} {}?", M::NAME, id))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    eprintln!("{}", "❌ Cancelled".red());
                    return Ok(ExitCode::SUCCESS);
                }
            }

            let result = service
                .delete(id)
                .await
                .map(|()| json!({ "deleted": true, "entity": M::NAME, "id": id }));
            render(result)
        }
    }
}

fn write_mode(partial: bool) -> WriteMode {
    if partial {
        WriteMode::Partial
    } else {
        WriteMode::Create
    }
}

/// Reads a JSON submission from `file`, or from stdin when no file is given.
fn read_payload(file: Option<&Path>) -> Result<Value> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin())
            .context("Failed to read submission from stdin")?,
    };

    serde_json::from_str(&raw).context("Submission is not valid JSON")
}

/// Prints a service result.
///
/// Client-side failures (rejected submissions, missing records, conflicts)
/// are printed and turn into a failing exit code; anything else propagates.
fn render<T: Serialize>(result: Result<T, AppError>) -> Result<ExitCode> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ (AppError::Validation { .. } | AppError::Conflict { .. })) => {
            eprintln!("{}", format!("❌ {e}").red().bold());
            eprintln!("{}", serde_json::to_string_pretty(&e.to_body())?.red());
            Ok(ExitCode::FAILURE)
        }
        Err(e @ AppError::NotFound { .. }) => {
            eprintln!("{}", format!("⚠️  {e}").yellow());
            eprintln!("{}", serde_json::to_string_pretty(&e.to_body())?.yellow());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints the rule table of mapper `M`.
///
/// # Output Format
///
/// ```text
/// 📋 article fields
///
///   Field                      Access      Type                   Null
///   ──────────────────────────────────────────────────────────────────
///   id                         read-only   integer                yes
///   author                     optional    reference(author)      yes
/// ```
fn print_fields<M: RecordMapper>() {
    println!("{}", format!("📋 {} fields", M::NAME).bright_blue().bold());
    println!();

    println!(
        "  {:<26} {:<11} {:<22} {}",
        "Field".bright_white().bold(),
        "Access".bright_white().bold(),
        "Type".bright_white().bold(),
        "Null".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for rule in M::FIELDS {
        let access = match rule.access {
            Access::ReadOnly => "read-only".bright_black(),
            Access::Required => "required".yellow(),
            Access::Optional => "optional".normal(),
        };
        let nullable = if rule.nullable { "yes" } else { "no" };

        println!(
            "  {:<26} {:<11} {:<22} {}",
            rule.name.cyan(),
            access,
            rule.kind.to_string(),
            nullable
        );
    }

    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<ExitCode> {
    match action {
        DbAction::Check => {
            config.print_summary();
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let pool = persistence::connect(config).await?;
            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            let pool = persistence::connect(config).await?;

            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await?;
            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            for kind in EntityKind::value_variants() {
                let (name, count) = with_entity!(*kind, |M| (M::NAME, count_rows::<M>(&pool).await?));
                println!(
                    "  {:<14} {}",
                    name,
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn count_rows<M: RecordMapper>(pool: &PgPool) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", M::TABLE);
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(count)
}
