//! CLI entry point for `mailview`.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

use mailview::config::{self, Config};
use mailview::error::MailviewError;
use mailview::model::message::{DecodedMessage, MessageSource};
use mailview::model::plan::RenderPlan;
use mailview::parser::mime;
use mailview::parser::quote;
use mailview::render::select_render;

#[derive(Parser)]
#[command(name = "mailview", version, about = "Render raw email messages for display")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Message file to render
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Input format: raw (RFC 2822 text), json (pre-decoded bodies), auto
    #[arg(short = 'F', long, global = true, default_value = "auto")]
    format: String,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a message and print its render plan
    Render {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Decode a message and print the extracted bodies
    Decode {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Split a plain-text file into new content and quoted history
    Segment {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::load_config();

    // Configure logging: stderr + optional log file
    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    let format = cli.format.clone();

    match cli.command {
        Some(Commands::Render { path, json }) => cmd_render(&path, &format, json, &config),
        Some(Commands::Decode { path, json }) => cmd_decode(&path, &format, json),
        Some(Commands::Segment { path, json }) => cmd_segment(&path, json, &config),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
        None => {
            if let Some(path) = cli.file {
                cmd_render(&path, &format, false, &config)
            } else {
                eprintln!("No message file given. Try 'mailview --help'.");
                Ok(())
            }
        }
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Try to set up file logging
    let log_dir = config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "mailview.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mailview", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

/// Decode a message file and print the selected render plan.
fn cmd_render(path: &Path, format: &str, json: bool, config: &Config) -> anyhow::Result<()> {
    let source = load_source(path, format)?;
    let decoded = mime::decode_source(source);
    let plan = select_render(&decoded);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    match plan {
        RenderPlan::HtmlFrame { html } => {
            // The consumer is responsible for sandboxing this content
            println!("{html}");
        }
        RenderPlan::SegmentedText { split } => {
            println!("{}", split.main_text());
            if split.has_quote() {
                println!();
                println!("{}", config.display.quote_label);
                if config.display.show_quoted {
                    println!("{}", split.quoted_text());
                }
            }
        }
        RenderPlan::Unavailable => {
            println!("{}", config.display.unavailable_text);
        }
    }
    Ok(())
}

/// Decode a message file and print the extracted bodies.
fn cmd_decode(path: &Path, format: &str, json: bool) -> anyhow::Result<()> {
    let source = load_source(path, format)?;
    let decoded = mime::decode_source(source);

    if json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
        return Ok(());
    }

    match decoded.text_body.as_deref() {
        Some(text) => {
            println!("--- text/plain ---");
            println!("{text}");
        }
        None => println!("--- no text/plain part ---"),
    }
    match decoded.html_body.as_deref() {
        Some(html) => {
            println!("--- text/html ---");
            println!("{html}");
        }
        None => println!("--- no text/html part ---"),
    }
    Ok(())
}

/// Segment a plain-text file and print the split.
fn cmd_segment(path: &Path, json: bool, config: &Config) -> anyhow::Result<()> {
    if !path.exists() {
        return Err(MailviewError::FileNotFound(path.to_path_buf()).into());
    }
    let text =
        std::fs::read_to_string(path).map_err(|e| MailviewError::io(path.to_path_buf(), e))?;
    let split = quote::segment(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&split)?);
        return Ok(());
    }

    println!("{}", split.main_text());
    if split.has_quote() {
        println!();
        println!("{}", config.display.quote_label);
        println!("{}", split.quoted_text());
    }
    Ok(())
}

/// Read a message file as either raw RFC 2822 text or pre-decoded JSON.
///
/// With `auto`, files ending in `.json` are treated as pre-decoded and
/// everything else as raw.
fn load_source(path: &Path, format: &str) -> Result<MessageSource, MailviewError> {
    if !path.exists() {
        return Err(MailviewError::FileNotFound(path.to_path_buf()));
    }

    let contents =
        std::fs::read_to_string(path).map_err(|e| MailviewError::io(path.to_path_buf(), e))?;

    let as_json = match format {
        "json" => true,
        "raw" => false,
        "auto" => path.extension().is_some_and(|ext| ext == "json"),
        other => return Err(MailviewError::UnknownFormat(other.to_string())),
    };

    if as_json {
        let decoded: DecodedMessage =
            serde_json::from_str(&contents).map_err(|e| MailviewError::InvalidJson {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(MessageSource::PreDecoded(decoded))
    } else {
        Ok(MessageSource::Raw(contents))
    }
}
