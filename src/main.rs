use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pwd_audit::{
    BreachConfig, DEFAULT_LENGTH, Denylist, EvaluationError, GenerationPolicy, check_breach_with,
    evaluate, generate, suggest_with,
};

#[derive(Debug, Parser)]
#[command(name = "pwd-audit", version)]
#[command(about = "Check password strength and breach exposure, or generate a secure password", long_about = None)]
struct Cli {
    /// Check whether the password appears in known data breaches
    #[arg(short, long, value_name = "PASSWORD")]
    breach: Option<OsString>,

    /// Rate the password and list improvements
    #[arg(short, long, value_name = "PASSWORD")]
    strength: Option<OsString>,

    /// Run the strength and breach checks on one password
    #[arg(short, long, value_name = "PASSWORD")]
    all: Option<OsString>,

    /// Generate a secure random password
    #[arg(short, long)]
    generate: bool,

    /// Length of the generated password (below 8 falls back to 16)
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Allow spaces in the generated password
    #[arg(long)]
    spaces: bool,

    /// File with extra common substrings to warn about, one per line
    #[arg(long, value_name = "FILE")]
    denylist: Option<PathBuf>,

    /// Network timeout for the breach check, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "pwd_audit=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let denylist = load_denylist(cli.denylist.as_deref());
    let config = BreachConfig::default().with_timeout(Duration::from_secs(cli.timeout));
    let policy = GenerationPolicy {
        length: cli.length,
        include_spaces: cli.spaces,
    };

    let interactive = cli.strength.is_none() && cli.breach.is_none() && cli.all.is_none() && !cli.generate;

    if let Some(password) = cli.strength.and_then(read_password) {
        report_strength(&password, &denylist);
    }

    if let Some(password) = cli.breach.and_then(read_password) {
        report_breach(&password, &config).await;
    }

    if let Some(password) = cli.all.and_then(read_password) {
        report_strength(&password, &denylist);
        report_breach(&password, &config).await;
    }

    if cli.generate {
        report_generated(policy, &denylist);
    }

    if interactive {
        run_menu(policy, &denylist, &config).await?;
    }

    Ok(())
}

fn load_denylist(path: Option<&Path>) -> Denylist {
    match path {
        Some(path) => Denylist::from_path(path).unwrap_or_else(|e| {
            eprintln!("Warning: {}; using the built-in denylist", e);
            Denylist::default()
        }),
        None => Denylist::default(),
    }
}

/// Converts a command-line argument, reporting non-Unicode input.
fn read_password(raw: OsString) -> Option<SecretString> {
    match raw.into_string() {
        Ok(text) => Some(SecretString::new(text.into())),
        Err(_) => {
            let err = EvaluationError::InvalidInput("argument is not valid Unicode".to_string());
            eprintln!("Error: {}", err);
            None
        }
    }
}

fn report_strength(password: &SecretString, denylist: &Denylist) {
    match evaluate(password) {
        Ok(result) => {
            println!("Password strength: {} ({}/6)", result.rating, result.score);
            print_list("Unmet criteria:", &result.unmet_criteria);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
    print_list("Suggestions:", &suggest_with(password, denylist));
}

async fn report_breach(password: &SecretString, config: &BreachConfig) {
    let result = check_breach_with(password, config).await;
    if result.breached {
        println!("Warning: this password has been found in {} data breaches!", result.detail);
    } else {
        println!("Breach check: {}", result.detail);
    }
}

fn report_generated(policy: GenerationPolicy, denylist: &Denylist) {
    let password = generate(policy);
    println!("Generated password: {}", password.expose_secret());
    report_strength(&password, denylist);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", title);
    for item in items {
        println!("  - {}", item);
    }
}

async fn run_menu(policy: GenerationPolicy, denylist: &Denylist, config: &BreachConfig) -> anyhow::Result<()> {
    let choice = prompt("Enter '1' to check a password, '2' to generate a secure password: ")?;

    match choice.trim() {
        "1" => {
            let line = prompt("Enter the password to check: ")?;
            let password = SecretString::new(line.trim().to_string().into());
            report_strength(&password, denylist);
            report_breach(&password, config).await;
        }
        "2" => report_generated(policy, denylist),
        _ => println!("Invalid choice! Please enter '1' or '2'."),
    }

    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
