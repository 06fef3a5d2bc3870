//! QUILL CLI entry point.
//!
//! Wires the run together: parse arguments, load configuration, look up
//! papers (fail-open), drive the bounded conversation, assemble the report,
//! and persist it. Exit code 0 covers every best-effort degradation (empty
//! or failed search); fatal configuration, orchestration, and persistence
//! errors exit 1. On orchestration failure the partial report is written
//! before the error is raised.

use owo_colors::OwoColorize;
use quill::{
    agents::ConversationOrchestrator,
    cli::{output::Output, Cli},
    llm::Provider,
    report,
    research::ResearchCoordinator,
    types::{AppError, Completion, PaperResultSet, Result, SearchOutcome},
    utils::config::Config,
    PaperSearchClient, RoleInstructions,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    init_tracing(cli.verbose);

    // Configuration is resolved once, before any network activity; a missing
    // provider key fails here.
    let mut config = Config::from_env()?;
    if let Some(limit) = cli.limit {
        config.search.limit = limit;
    }
    if let Some(model) = cli.model {
        config.llm.model = model;
    }
    if let Some(path) = cli.output {
        config.report.output_path = path;
    }

    output.banner();
    output.kv("Query", &cli.query);
    output.kv("Model", &config.llm.model);
    output.kv("Report", &config.report.output_path.display().to_string());

    let search_client = PaperSearchClient::new(&config.search)?;
    let search_outcome = search_client.search(&cli.query).await;
    let papers = match &search_outcome {
        SearchOutcome::Results(set) if set.is_empty() => {
            output.warning("Search returned no matching papers");
            set.clone()
        }
        SearchOutcome::Results(set) => {
            output.info(&format!("Retrieved {} paper(s)", set.len()));
            set.clone()
        }
        SearchOutcome::Failed { reason } => {
            output.warning(&format!(
                "Paper lookup failed ({}); continuing without grounding",
                reason
            ));
            PaperResultSet::default()
        }
    };

    let llm = Provider::from_config(&config.llm).create_client()?;
    let coordinator =
        ResearchCoordinator::new(llm, RoleInstructions::default(), config.conversation.max_rounds);
    let conversation = coordinator.run(&cli.query, &papers).await?;

    // The report is written regardless of how the conversation ended, so
    // partial findings survive an orchestration failure.
    let document = report::assemble(
        &cli.query,
        &papers,
        &conversation.findings,
        &conversation.synthesis,
    );
    report::write_report(&config.report.output_path, &document)?;

    let destination = config.report.output_path.display();
    match conversation.completion {
        Completion::Done => {
            output.complete(&format!("Research report saved to {}", destination));
            Ok(())
        }
        Completion::ExhaustedRounds => Err(AppError::Orchestration(format!(
            "round budget ({}) exhausted before synthesis; partial report saved to {}",
            config.conversation.max_rounds, destination
        ))),
        Completion::Failed(reason) => Err(AppError::Orchestration(format!(
            "conversation failed ({}); partial report saved to {}",
            reason, destination
        ))),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "quill=debug" } else { "quill=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
