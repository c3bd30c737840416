//! CLI entrypoint for Relationship Resolver
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser};
use resolver_application::{
    ControllerError, SessionController, SessionStore, Settlement, SummaryGateway,
};
use resolver_domain::SummarizationState;
use resolver_infrastructure::{
    ConfigLoader, FileConfig, FileSessionStore, HttpSummaryGateway, InMemorySessionStore,
};
use resolver_presentation::{Cli, Command, ConsoleFormatter, EventPresenter, OutputConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// What a command leaves behind once the event stream has been drained
struct Outcome {
    output: Option<String>,
    exit: ExitCode,
}

impl Outcome {
    fn done() -> Self {
        Self {
            output: None,
            exit: ExitCode::SUCCESS,
        }
    }

    fn print(output: String) -> Self {
        Self {
            output: Some(output),
            exit: ExitCode::SUCCESS,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    info!("Starting Relationship Resolver");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    debug!("Configuration: {:?}", config);

    let output_config = OutputConfig {
        color: config.output.color,
        show_progress: config.output.show_progress && !cli.quiet,
    };
    output_config.apply_color();

    // === Dependency Injection ===
    let store = build_store(&cli, &config)?;
    let gateway = Arc::new(HttpSummaryGateway::from_config(&config.service)?);
    info!("Summarization endpoint: {}", gateway.url());

    let (tx, rx) = mpsc::unbounded_channel();
    let presenter = tokio::spawn(EventPresenter::new(&output_config).run(rx));

    let mut controller = SessionController::new(store, gateway, config.service.to_behavior(), tx);
    let result = execute(command, &mut controller).await;

    // Dropping the controller closes the event channel
    drop(controller);
    presenter.await?;

    match result {
        Ok(outcome) => {
            if let Some(output) = outcome.output {
                println!("{}", output);
            }
            Ok(outcome.exit)
        }
        Err(e) => match e.downcast_ref::<ControllerError>() {
            Some(err) => {
                eprintln!("{}", ConsoleFormatter::error(err.kind(), &err.to_string()));
                Ok(ExitCode::FAILURE)
            }
            None => Err(e),
        },
    }
}

fn build_store(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn SessionStore>> {
    if cli.ephemeral {
        info!("Using in-memory storage");
        return Ok(Arc::new(
            InMemorySessionStore::new().with_quota(config.storage.quota_bytes),
        ));
    }

    let data_dir = config
        .storage
        .resolve_data_dir()
        .context("Could not determine a data directory; set storage.data_dir")?;
    info!("Using data directory {}", data_dir.display());
    Ok(Arc::new(
        FileSessionStore::new(data_dir).with_quota(config.storage.quota_bytes),
    ))
}

async fn execute<S, G>(command: Command, controller: &mut SessionController<S, G>) -> Result<Outcome>
where
    S: SessionStore + ?Sized + 'static,
    G: SummaryGateway + 'static,
{
    match command {
        Command::New => {
            controller.generate_code()?;
            Ok(Outcome::done())
        }
        Command::Join { code } => {
            controller.enter_code(&code)?;
            Ok(Outcome::done())
        }
        Command::Code => match controller.restore()? {
            Some(code) => {
                let ready = controller.is_ready()?;
                Ok(Outcome::print(format!(
                    "{}\n{}",
                    ConsoleFormatter::code(&code),
                    ConsoleFormatter::readiness(ready)
                )))
            }
            None => Ok(Outcome::print(ConsoleFormatter::no_code())),
        },
        Command::Submit { participant, text } => {
            controller.restore()?;
            controller.submit(participant, &text)?;
            Ok(Outcome::done())
        }
        Command::Show => {
            let Some(code) = controller.restore()? else {
                return Ok(Outcome::print(ConsoleFormatter::no_code()));
            };
            let statements = controller.statements()?;
            Ok(Outcome::print(ConsoleFormatter::statements(&code, &statements)))
        }
        Command::Summarize => {
            controller.restore()?;
            let (request_id, handle) = controller.trigger_summary()?;
            debug!("Waiting for summarization {}", request_id);

            let exit = match handle.await? {
                Settlement::Applied(SummarizationState::Success { .. }) => ExitCode::SUCCESS,
                Settlement::Applied(_) | Settlement::Discarded { .. } => ExitCode::FAILURE,
            };
            Ok(Outcome { output: None, exit })
        }
    }
}
