use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use conversation_mood_engine::{
    cli::{execute_command, Cli},
    collaborators::{LangbaseClassifier, LangbaseResponder},
    config::{Config, LogFormat},
    conversation::ConversationEngine,
    langbase::LangbaseClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(persona) = cli.persona {
        config.conversation.persona = persona;
    }

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Conversation mood engine starting..."
    );

    // Initialize Langbase client
    let langbase = match LangbaseClient::new(&config.langbase, config.request.clone()) {
        Ok(c) => {
            info!(base_url = %config.langbase.base_url, "Langbase client initialized");
            c
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize Langbase client");
            return Err(e.into());
        }
    };

    // Ensure required pipes exist (create if needed)
    info!("Ensuring required Langbase pipes exist...");
    if let Err(e) = langbase.ensure_pipes(&config.pipes).await {
        error!(error = %e, "Failed to ensure pipes exist");
        return Err(e.into());
    }

    let classifier = LangbaseClassifier::new(langbase.clone(), &config);
    let responder = LangbaseResponder::new(langbase, &config);
    let mut engine = ConversationEngine::new(classifier, responder, config.conversation);

    let result = execute_command(cli.command, &mut engine).await;

    print!("{}", result.output);
    if let Some(message) = result.error {
        error!(error = %message, "Command failed");
        eprintln!("Error: {}", message);
        std::process::exit(result.exit_code);
    }

    info!("Done");
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
