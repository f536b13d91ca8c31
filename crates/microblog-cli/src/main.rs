//! microblog CLI: inspect friendship records
//!
//! Commands: friendship

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::Level;

use microblog_core::{Friendship, RawFriendship, Relation};

#[derive(Parser)]
#[command(name = "microblog")]
#[command(version)]
#[command(about = "Inspect microblog friendship records")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate a friendship and print it as JSON
    #[command(alias = "f")]
    Friendship(FriendshipArgs),
}

#[derive(clap::Args)]
struct FriendshipArgs {
    /// Id of the other account
    #[arg(long, allow_negative_numbers = true)]
    id: Option<i64>,
    /// Display name of the other account
    #[arg(long)]
    name: Option<String>,
    /// Handle of the other account
    #[arg(long)]
    screen_name: Option<String>,
    /// The other account follows you
    #[arg(long)]
    followed_by: bool,
    /// You follow the other account
    #[arg(long)]
    following: bool,
}

impl From<FriendshipArgs> for RawFriendship {
    fn from(args: FriendshipArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            screen_name: args.screen_name,
            followed_by: Some(args.followed_by),
            following: Some(args.following),
        }
    }
}

#[derive(Serialize)]
struct FriendshipReport<'a> {
    friendship: &'a Friendship,
    relation: Relation,
    mention: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_friendship(args: FriendshipArgs) -> anyhow::Result<()> {
    let friendship = RawFriendship::from(args)
        .build()
        .context("invalid friendship")?;
    tracing::debug!(id = friendship.id(), "friendship validated");

    let report = FriendshipReport {
        friendship: &friendship,
        relation: friendship.relation(),
        mention: friendship.mention(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Friendship(args)) => run_friendship(args),
        None => {
            println!(
                "microblog v{}: friendship record inspector",
                env!("CARGO_PKG_VERSION")
            );
            println!("Run `microblog --help` for usage.");
            Ok(())
        }
    }
}
