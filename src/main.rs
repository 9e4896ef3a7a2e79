use clap::{Parser, Subcommand};
use robots_gate::robots::{RobotsTxtSource, RobotsTxtView};
use robots_gate::{GateConfig, RobotsGate};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch robots.txt for each URL's origin and report whether the URL may be fetched
    Check {
        /// URLs to check
        #[arg(value_name = "URL", required = true)]
        urls: Vec<Url>,

        /// User-Agent header sent with robots.txt requests
        #[arg(long, default_value = robots_gate::gate::DEFAULT_USER_AGENT)]
        user_agent: String,

        /// Fetch robots.txt from this URL instead of each origin's /robots.txt
        #[arg(long, value_name = "URL")]
        robots_url: Option<Url>,

        /// Skip robots.txt entirely and allow every URL
        #[arg(long)]
        ignore_robots: bool,

        /// HTTP timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },

    /// Test paths against a local robots.txt file
    Test {
        /// robots.txt file to read
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Paths to test
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,
    },

    /// Print the directives parsed from a local robots.txt file
    Rules {
        /// robots.txt file to read
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
}

/// Returns whether every checked URL or path was allowed.
async fn main_impl(args: CommandLineArgs) -> anyhow::Result<bool> {
    match args.command {
        Command::Check {
            urls,
            user_agent,
            robots_url,
            ignore_robots,
            timeout_secs,
        } => {
            let config = GateConfig::new(
                user_agent,
                robots_url,
                !ignore_robots,
                Duration::from_secs(timeout_secs),
            );
            let gate = RobotsGate::new(config)?;

            let decisions = gate.check_all(&urls).await;
            for decision in &decisions {
                println!("{}", decision);
            }
            Ok(decisions.iter().all(|d| d.allowed()))
        }
        Command::Test { file, paths } => {
            let view = RobotsTxtView::new(RobotsTxtSource::from_file(&file)?);
            let matcher = view.matcher();

            let mut all_allowed = true;
            for path in &paths {
                let allowed = matcher.check_path(path);
                let verdict = if allowed { "allowed" } else { "denied" };
                match matcher.decisive_directive(path) {
                    Some(directive) => println!("{}\t{}\t{}", path, verdict, directive.pattern()),
                    None => println!("{}\t{}\t(no matching rule)", path, verdict),
                }
                all_allowed &= allowed;
            }
            Ok(all_allowed)
        }
        Command::Rules { file } => {
            let view = RobotsTxtView::new(RobotsTxtSource::from_file(&file)?);
            for directive in view.rule_set().directives() {
                let kind = if directive.is_allow() { "Allow" } else { "Disallow" };
                println!(
                    "{}\t{}\t{}",
                    kind,
                    directive.pattern(),
                    directive.normalized_path()
                );
            }
            Ok(true)
        }
    }
}

/// 0 when everything was allowed, 3 when something was denied, 1 on error.
fn exit_code(outcome: &anyhow::Result<bool>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 3,
        Err(_) => 1,
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let args = CommandLineArgs::parse();
    init_tracing(args.verbose);

    let outcome = main_impl(args).await;
    if let Err(e) = &outcome {
        eprintln!("Error: {}", e);
    }
    let code = exit_code(&outcome);
    if code != 0 {
        process::exit(code);
    }
}
