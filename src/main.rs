//! Domain Sweep - check word lists for available domain names

use clap::Parser;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain_sweep::{
    cli::Args,
    config::{self, ConfigPrompter, NonInteractive},
    credentials::{require_api_key, EnvCredentials},
    prompt::InquirePrompter,
    report::{self, ConsoleReporter},
    SweepError,
};

#[tokio::main]
async fn main() {
    // Initialize the library (.env must be loaded before flags read their env fallbacks)
    domain_sweep::init();

    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: &Args) -> Result<(), SweepError> {
    // Refuse to start without a key
    let api_key = require_api_key(&EnvCredentials::new())?;

    println!("🔎 Domain Sweep v{}", domain_sweep::VERSION);
    println!("═══════════════════════════════════");
    println!();

    let prompter: &dyn ConfigPrompter = if args.non_interactive {
        &NonInteractive
    } else {
        &InquirePrompter
    };
    let config = config::resolve(args, prompter)?;
    report::print_configuration(&config);

    let mut reporter = ConsoleReporter::new();
    let summary = domain_sweep::run_sweep(&config, &api_key, &mut reporter, report::print_word_stats).await?;

    if summary.counters.available_count > 0 {
        println!();
        println!(
            "🎉 {} available domain(s) appended to {}",
            summary.counters.available_count,
            config.output.display()
        );
    }

    Ok(())
}
