use anuvad::application::resolve::resolve_text;
use anuvad::domain::model::{Origin, Resolution, TranslationRequest};
use anuvad::infrastructure::{config, storage};
use anuvad::interfaces::cli::Cli;
use anuvad::state::AppState;
use clap::Parser;
use colored::Colorize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            eprintln!("\nInterrupted, shutting down...");
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = config::load_config()?;

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle config commands before touching the database
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let config_path_clone = config_path.clone();
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor)
                    .arg(&config_path_clone)
                    .status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    let db_path = config::get_database_path(&config);
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db = storage::db::init_database(&db_path).await?;
    let state = AppState::new(db, config.clone())?;

    if cli.status {
        print_status(&state).await?;
        return Ok(());
    }

    if cli.text.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let text = cli.text.join(" ");
    let mut request = TranslationRequest::new(text, cli.to.unwrap_or(config.target_lang.clone()));
    if let Some(from) = cli.from {
        request.source_lang = from;
    } else {
        request.source_lang = config.source_lang.clone();
    }
    request.context = cli.context;

    let allow_remote = config.allow_remote && !cli.no_remote;
    let source_text = request.text.clone();

    // Remote translation can be slow; let ctrl-c interrupt it
    let resolution = tokio::select! {
        resolution = resolve_text(&state, request, allow_remote, cli.nocache) => resolution,
        _ = shutdown_rx => {
            eprintln!("Translation interrupted");
            return Ok(());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        print!(
            "{}",
            format_resolution(&source_text, &resolution, config.enable_emoji)
        );
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}

/// Render the source line, the resolved line, and an origin indicator.
fn format_resolution(source_text: &str, resolution: &Resolution, enable_emoji: bool) -> String {
    use std::fmt::Write;

    let origin_indicator = match &resolution.origin {
        Origin::Source => {
            if enable_emoji {
                "📄 [source]".to_string()
            } else {
                "[source]".to_string()
            }
        }
        Origin::Cache => {
            if enable_emoji {
                "💾 [cache]".to_string()
            } else {
                "[cache]".to_string()
            }
        }
        Origin::Phrase => {
            if enable_emoji {
                "📚 [phrase]".to_string()
            } else {
                "[phrase]".to_string()
            }
        }
        Origin::Remote(provider) => {
            if enable_emoji {
                format!("🌐 [remote {}]", provider)
            } else {
                format!("[remote {}]", provider)
            }
        }
    };

    let mut output = String::new();
    writeln!(output, "{}", source_text.bold()).ok();
    writeln!(
        output,
        "  {} {}   {}",
        "→".cyan(),
        resolution.text,
        origin_indicator.cyan()
    )
    .ok();
    output
}

async fn print_status(state: &AppState) -> anyhow::Result<()> {
    println!("{}", "anuvad Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = state.config.read().await;
    let db_path = config::get_database_path(&config);

    if db_path.exists() {
        let count = storage::db::count_entries(&state.db).await?;
        println!("Cache: {} ({} translations)", db_path.display(), count);

        let top = storage::db::top_entries(&state.db, 5).await?;
        if !top.is_empty() {
            println!("Most used:");
            for (source, translated, hits) in top {
                println!("  {} → {} ({} hits)", source, translated, hits);
            }
        }
    } else {
        println!("Cache: Not initialized");
    }

    println!("In-flight requests: {}", state.inflight.len());

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );

    if config.remote.endpoint.is_some() {
        println!("Remote translator: Configured ({})", config.remote.provider);
    } else {
        println!("Remote translator: Not configured");
    }

    Ok(())
}
