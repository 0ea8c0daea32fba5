mod sink;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use posts_core::{demo, DisplayResult, NewPost, Post, RequestExecutor};
use tracing::{debug, Level};

use sink::TerminalSink;

/// CRUD calls against a REST posts collection.
#[derive(Parser, Debug)]
#[command(name = "posts", version)]
struct Cli {
    /// Collection URL
    #[arg(long, env = "POSTS_API_URL", default_value = demo::DEFAULT_COLLECTION_URL)]
    url: String,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the collection
    List {
        /// Ask the server for at most this many posts
        #[arg(long, default_value_t = demo::DEFAULT_LIMIT, conflicts_with = "all")]
        limit: u32,

        /// Fetch without a limit
        #[arg(long)]
        all: bool,
    },
    /// Fetch one post
    Get {
        #[arg(default_value_t = demo::DEFAULT_RESOURCE_ID)]
        id: u64,
    },
    /// Create a post
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        user_id: Option<u64>,
    },
    /// Replace a post entirely
    Replace {
        #[arg(default_value_t = demo::DEFAULT_RESOURCE_ID)]
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        user_id: Option<u64>,
    },
    /// Delete a post
    Delete {
        #[arg(default_value_t = demo::DEFAULT_RESOURCE_ID)]
        id: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    debug!(url = %cli.url, "using collection");
    let exec = RequestExecutor::over_http(&cli.url, TerminalSink);
    let result = run(&exec, cli.command).await;

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run(
    exec: &RequestExecutor<posts_core::ReqwestTransport, TerminalSink>,
    command: Command,
) -> DisplayResult {
    match command {
        Command::List { limit, all } => {
            exec.fetch_collection(if all { None } else { Some(limit) }).await
        }
        Command::Get { id } => exec.fetch_resource(id).await,
        Command::Create {
            title,
            body,
            user_id,
        } => {
            let sample = demo::sample_new_post();
            let post = NewPost {
                title: title.unwrap_or(sample.title),
                body: body.unwrap_or(sample.body),
                user_id: user_id.unwrap_or(sample.user_id),
            };
            exec.create_resource(&post).await
        }
        Command::Replace {
            id,
            title,
            body,
            user_id,
        } => {
            let sample = demo::sample_replacement(id);
            let post = Post {
                id,
                title: title.unwrap_or(sample.title),
                body: body.unwrap_or(sample.body),
                user_id: user_id.or(sample.user_id),
            };
            exec.replace_resource(id, &post).await
        }
        Command::Delete { id } => exec.delete_resource(id).await,
    }
}
