//! CLI command definitions

use clap::{Parser, ValueEnum};
use maire_domain::Topology;
use std::path::PathBuf;

/// Output format for orchestration results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every step with its label
    Full,
    /// Only the summary and the final answer
    Summary,
    /// JSON output, including the ledger
    Json,
}

/// CLI arguments for maire
#[derive(Parser, Debug)]
#[command(name = "maire")]
#[command(author, version, about = "Multi-agent relay engine - run a prompt through a topology of LLM agents")]
#[command(long_about = r#"
maire sends a prompt through a set of agents arranged in a topology and
keeps a hash-chained ledger of every step.

Topologies:
  standard-chain   Agents answer one after another, each seeing the ledger
  double-helix     A forward pass and a reverse critique pass run concurrently
  star-topology    Every rotation of the agents runs as a relay arm, then the
                   anchor agent synthesizes the arms

Configuration files are loaded from (in priority order):
1. MAIRE_* environment variables
2. --config <path>     Explicit config file
3. ./maire.toml        Project-level config
4. ~/.config/maire/config.toml   Global config

Example:
  maire -a grok -a claude "Design a rate limiter"
  maire -t star-topology -a gpt -a llama -a mistral "Explain CRDTs"
  maire --serve --bind 0.0.0.0:8080
"#)]
pub struct Cli {
    /// The prompt to run (not required with --serve)
    pub prompt: Option<String>,

    /// Topology: standard-chain, double-helix or star-topology
    #[arg(short, long, default_value = "standard-chain", value_parser = parse_topology)]
    pub topology: Topology,

    /// Agents to run, in order (can be specified multiple times)
    #[arg(short, long = "agent", value_name = "AGENT")]
    pub agents: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Start the HTTP server instead of running a prompt
    #[arg(long)]
    pub serve: bool,

    /// Address for the HTTP server (overrides server.bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// List configured agents and whether they are available, then exit
    #[arg(long)]
    pub list_agents: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

// Unknown names fall back to the chain, as they do over HTTP
fn parse_topology(s: &str) -> Result<Topology, String> {
    Ok(Topology::from_identifier(s))
}
