//! CLI entrypoint for maire
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use maire_application::{AgentInvoker, NoProgress, ProgressNotifier, RunOrchestrationUseCase};
use maire_domain::{AgentId, OrchestrationRequest};
use maire_infrastructure::{BackendInvoker, ConfigLoader, FileConfig};
use maire_presentation::{
    Cli, ConsoleFormatter, MaireServer, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // === Dependency Injection ===
    let invoker = Arc::new(BackendInvoker::from_config(&config)?);
    let use_case = Arc::new(
        RunOrchestrationUseCase::new(Arc::clone(&invoker))
            .with_config(config.orchestration.clone()),
    );

    if cli.list_agents {
        print!("{}", ConsoleFormatter::format_agents(&invoker.available_agents()));
        return Ok(());
    }

    if cli.serve {
        let bind_addr = bind_addr(&cli, &config)?;
        info!("Starting maire server");
        MaireServer::new(bind_addr, use_case).serve().await?;
        return Ok(());
    }

    let prompt = match cli.prompt {
        Some(p) => p,
        None => bail!("A prompt is required. Use --serve to start the HTTP server."),
    };

    let agents = cli
        .agents
        .iter()
        .map(|a| AgentId::new(a.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let request = OrchestrationRequest::new(prompt.clone(), cli.topology, agents);

    info!("Running {} for {} agents", cli.topology, request.agents.len());

    let progress: Arc<dyn ProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };
    let result = use_case.execute_with_progress(request, progress).await?;

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&prompt, &result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}

fn bind_addr(cli: &Cli, config: &FileConfig) -> Result<SocketAddr> {
    match &cli.bind {
        Some(bind) => bind
            .parse()
            .with_context(|| format!("Invalid --bind address: {}", bind)),
        None => Ok(config.bind_addr()?),
    }
}
