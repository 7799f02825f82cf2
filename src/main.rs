use clap::{Parser, Subcommand};
use std::path::PathBuf;

use whichpr::config::Config;
use whichpr::git::GitCli;
use whichpr::github::{api_base_uri, create_client, OctocrabSearch};
use whichpr::{CommitId, Error, Repository, Resolver};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the number of the pull request that introduced a commit
    Show {
        /// Commit hash, full or abbreviated (at least 7 characters)
        commit: String,
    },
    /// Open the pull request that introduced a commit in the browser
    Open {
        /// Commit hash, full or abbreviated (at least 7 characters)
        commit: String,
    },
    /// Print the version
    Version,
}

#[derive(Parser, Debug)]
#[command(name = "whichpr")]
#[command(about = "Find the pull request that introduced a commit", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/whichpr)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Git working directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn fail(message: &str, code: i32) -> ! {
    let use_colors = whichpr::output::should_use_colors();
    eprintln!("{}", whichpr::output::format_error(message, use_colors));
    std::process::exit(code);
}

fn exit_code(error: &Error) -> i32 {
    match error {
        Error::Remote(_) => EXIT_NETWORK,
        _ => EXIT_FAILURE,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (commit, open) = match cli.command {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Show { commit } => (commit, false),
        Commands::Open { commit } => (commit, true),
    };

    // Reject bad input before running git or touching the network
    let commit = match CommitId::new(commit) {
        Ok(c) => c,
        Err(e) => fail(&e.to_string(), EXIT_FAILURE),
    };

    // Install rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config: Config = match whichpr::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => fail(&format!("Config error: {:#}", e), EXIT_CONFIG),
    };

    let git = cli.repo.map(GitCli::in_dir).unwrap_or_default();
    let repository = match Repository::detect(&git) {
        Ok(r) => r,
        Err(e) => fail(&e.to_string(), EXIT_FAILURE),
    };

    let protocol = config.protocol(&repository.host).to_string();
    let token = whichpr::credentials::resolve_token(&config, &repository.host);
    let base_uri = api_base_uri(&repository.host, &protocol);
    let client = match create_client(token.as_deref(), base_uri.as_deref()) {
        Ok(c) => c,
        Err(e) => fail(&format!("{:#}", e), EXIT_NETWORK),
    };

    let resolver = Resolver::new(git, OctocrabSearch::new(client, token.is_some()), repository);
    let number = match resolver.resolve(commit.as_str()).await {
        Ok(n) => n,
        Err(e) => fail(&e.to_string(), exit_code(&e)),
    };

    if open {
        match whichpr::browser::open_pull_request(resolver.repository(), &protocol, number) {
            Ok(url) => println!("Opening PR #{} in browser: {}", number, url),
            Err(e) => fail(&format!("{:#}", e), EXIT_FAILURE),
        }
    } else {
        println!("{}", number);
    }

    std::process::exit(EXIT_SUCCESS);
}
