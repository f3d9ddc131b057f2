//! k2suffix: CLI tool for querying a Public Suffix List.

use clap::{Args, Parser, Subcommand};
use k2suffix::{Error, ParseOptions, RuleStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "k2suffix")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Find registrable domains using the Public Suffix List", long_about = None)]
struct Cli {
    /// Suffix list file (public_suffix_list.dat, optionally gzip-compressed)
    #[arg(short, long)]
    list: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Query {
    /// Hostnames to look up
    #[arg(required = true)]
    names: Vec<String>,

    /// Ignore rules from the private section
    #[arg(long)]
    ignore_private: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split hostnames into trd, sld and tld
    Parse {
        #[command(flatten)]
        query: Query,

        /// Print one JSON object per name
        #[arg(long)]
        json: bool,
    },

    /// Print the registrable domain of each hostname
    Domain {
        #[command(flatten)]
        query: Query,
    },

    /// Check whether hostnames are valid domains
    Valid {
        #[command(flatten)]
        query: Query,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

/// Run a command; `Ok(false)` means at least one name did not parse.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let store = RuleStore::from_path(&cli.list)?;

    if cli.verbose {
        println!(
            "Loaded {} rules ({} ICANN, {} private) from {:?}",
            store.len(),
            store.icann_len(),
            store.private_len(),
            cli.list
        );
    }

    match cli.command {
        Commands::Parse { query, json } => parse_names(&store, &query, json),
        Commands::Domain { query } => {
            let mut all_ok = true;
            for name in &query.names {
                let domain = store.domain(name.as_str(), query.ignore_private);
                all_ok &= domain.is_some();
                println!("{}", domain.unwrap_or_default());
            }
            Ok(all_ok)
        }
        Commands::Valid { query } => {
            let options = ParseOptions::ignore_private(query.ignore_private);
            let mut all_ok = true;
            for name in &query.names {
                let valid = store.is_valid(name.as_str(), options);
                all_ok &= valid;
                println!("{}\t{}", name, valid);
            }
            Ok(all_ok)
        }
    }
}

fn parse_names(
    store: &RuleStore,
    query: &Query,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let options = ParseOptions::ignore_private(query.ignore_private);
    let mut all_ok = true;

    for name in &query.names {
        let result = store.parse(name.as_str(), options);
        if let Err(e) = &result {
            if !e.is_domain_error() {
                return Err(e.to_string().into());
            }
        }
        all_ok &= result.is_ok();

        if json {
            let value = match &result {
                Ok(parsed) => serde_json::json!({
                    "name": name,
                    "trd": parsed.trd(),
                    "sld": parsed.sld(),
                    "tld": parsed.tld(),
                    "domain": parsed.domain(),
                }),
                Err(e) => serde_json::json!({
                    "name": name,
                    "error": error_kind(e),
                    "message": e.to_string(),
                }),
            };
            println!("{}", serde_json::to_string(&value)?);
            continue;
        }

        match result {
            Ok(parsed) => println!(
                "{}\ttrd={}\tsld={}\ttld={}",
                name,
                parsed.trd().unwrap_or("-"),
                parsed.sld(),
                parsed.tld()
            ),
            Err(e) => println!("{}\t{}", name, e),
        }
    }

    Ok(all_ok)
}

fn error_kind(e: &Error) -> &'static str {
    match e {
        Error::DomainInvalid(_) => "domain_invalid",
        Error::DomainNotAllowed(_) => "domain_not_allowed",
        _ => "error",
    }
}
