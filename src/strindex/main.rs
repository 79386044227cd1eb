use clap::Parser;
use strindex::analyze::analyze;
use strindex::api::StrindexApi;
use strindex::config::ServerConfig;
use strindex::nl::translate;
use strindex::server;
use strindex::store::memory::InMemoryStore;
use tracing::info;

mod args;
mod print;
use args::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(config) => handle_serve(config),
        Commands::Analyze { value, json } => handle_analyze(&value, json),
        Commands::Translate { query, json } => handle_translate(&query.join(" "), json),
    }
}

fn handle_serve(config: ServerConfig) -> anyhow::Result<()> {
    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    server::init_logging(&config.log_level);
    info!(host = %config.host, port = config.port, "Starting strindex server");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let app = server::create_app(StrindexApi::new(InMemoryStore::new()), config.clone());
        server::serve(app, &config).await
    })?;
    Ok(())
}

fn handle_analyze(value: &str, json: bool) -> anyhow::Result<()> {
    let props = analyze(value);
    if json {
        println!("{}", serde_json::to_string_pretty(&props)?);
    } else {
        print::print_properties(value, &props);
    }
    Ok(())
}

fn handle_translate(query: &str, json: bool) -> anyhow::Result<()> {
    let filter = translate(query)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&filter)?);
    } else {
        print::print_filter(query, &filter);
    }
    Ok(())
}
