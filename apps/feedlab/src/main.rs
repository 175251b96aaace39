use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feedlab_config::{FeedlabConfig, load_config};
use feedlab_demo::DemoContext;
use feedlab_engine::FeedEngine;
use feedlab_logging::{LogLevel, Logger};
use feedlab_store::{NewPost, SqliteDatabase, SqliteSession, Vote};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feedlab", version)]
#[command(about = "Post feed with stack snapshots, BST search and data-structure demos.", long_about = None)]
struct Cli {
    /// Config file (YAML, or JSON by extension).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// SQLite database. Overrides the config file and FEEDLAB_DATABASE.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Minimum level for log lines on stderr.
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the posts table if it does not exist.
    Init,
    /// Print the feed, newest post first.
    Feed,
    /// Print the lecture cards followed by the feed.
    Lectures,
    /// Search titles through a BST and titles/captions through the store.
    Search {
        keyword: String,
    },
    /// Create, vote on, edit or delete posts.
    Post {
        #[command(subcommand)]
        action: PostAction,
    },
    /// Run the interactive demos: one JSON request per stdin line, one JSON
    /// response per stdout line.
    Demo,
}

#[derive(Subcommand, Debug)]
enum PostAction {
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        caption: Option<String>,
        /// Defaults to "Anonymous".
        #[arg(long)]
        author: Option<String>,
        /// Defaults to "regular".
        #[arg(long)]
        post_type: Option<String>,
    },
    /// "up" upvotes; any other direction downvotes.
    Vote {
        id: i64,
        way: String,
    },
    /// Replace the caption; omitting --caption clears it.
    Edit {
        id: i64,
        #[arg(long)]
        caption: Option<String>,
    },
    Delete {
        id: i64,
    },
}

fn resolve_config(cli: &Cli) -> Result<FeedlabConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FeedlabConfig::default(),
    }
    .with_env_overrides();
    if let Some(db) = &cli.db {
        config.database = db.clone();
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn open_engine(db: &SqliteDatabase, logger: &Logger) -> Result<FeedEngine<SqliteSession>> {
    db.init_schema()?;
    Ok(FeedEngine::new(db.session()?, logger.clone()))
}

fn run_demo(logger: Logger) -> Result<()> {
    let ctx = DemoContext::new(logger);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("read demo request")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = ctx.handle_json(&line);
        let text = serde_json::to_string(&response).context("serialize demo response")?;
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let logger = Logger::new(config.logging.clone());
    let db = SqliteDatabase::new(&config.database);

    match cli.cmd {
        Command::Init => {
            db.init_schema()?;
            println!("initialized {}", db.path().display());
        }
        Command::Feed => {
            let engine = open_engine(&db, &logger)?;
            print_json(&engine.feed()?)?;
        }
        Command::Lectures => {
            let engine = open_engine(&db, &logger)?;
            print_json(&engine.lectures()?)?;
        }
        Command::Search { keyword } => {
            let engine = open_engine(&db, &logger)?;
            print_json(&engine.search(&keyword)?)?;
        }
        Command::Post { action } => {
            let mut engine = open_engine(&db, &logger)?;
            match action {
                PostAction::Create {
                    title,
                    caption,
                    author,
                    post_type,
                } => {
                    let id = engine.create_post(&NewPost {
                        title,
                        caption,
                        author,
                        post_type,
                    })?;
                    println!("created post {id}");
                }
                PostAction::Vote { id, way } => {
                    let vote = Vote::from_way(&way);
                    report(engine.vote(id, vote)?, &format!("{vote}voted"), id);
                }
                PostAction::Edit { id, caption } => {
                    report(engine.edit_caption(id, caption.as_deref())?, "edited", id);
                }
                PostAction::Delete { id } => {
                    report(engine.delete_post(id)?, "deleted", id);
                }
            }
        }
        Command::Demo => run_demo(logger)?,
    }

    Ok(())
}

fn report(changed: bool, verb: &str, id: i64) {
    if changed {
        println!("{verb} post {id}");
    } else {
        println!("no post {id}");
    }
}
