//! Command-line interface components.

use crate::config::{FormatterConfig, OutputFormat};
use crate::error::FormatterError;
use crate::models::OrderCollection;
use crate::pipeline::submit;
use crate::render::render;
use crate::schema::SchemaVariant;
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "order-formatter")]
#[command(about = "Format pasted trade-order rows into an email-ready HTML table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Order line(s) to format (reads --input or stdin when omitted)
    #[arg(value_name = "LINE")]
    pub line: Option<String>,

    /// Read order lines from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Column layout of the pasted export
    #[arg(long, value_enum, default_value_t = SchemaVariant::Standard)]
    pub schema: SchemaVariant,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Render Done Quantity / Done Price headers without highlighting
    #[arg(long)]
    pub no_highlight: bool,

    /// Omit the settlement disclaimer from HTML output
    #[arg(long)]
    pub no_disclaimer: bool,

    /// Accumulate orders across several pasted blocks read from stdin
    #[arg(long, conflicts_with_all = ["line", "input"])]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the formatter configuration from command-line flags
    pub fn to_config(&self) -> FormatterConfig {
        let mut config = FormatterConfig::default()
            .with_schema(self.schema)
            .with_output_format(self.format);
        if self.no_highlight {
            config = config.without_highlight();
        }
        if self.no_disclaimer {
            config = config.without_disclaimer();
        }
        config
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("order_formatter={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run the command described by `args`
pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();
    debug!("Configuration: {:?}", config);

    if args.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        session::run_session(stdin.lock(), stdout.lock(), &config)?;
        return Ok(());
    }

    let text = input::read_submission(args)?;
    format_submission(&text, &config, std::io::stdout().lock(), std::io::stderr().lock())
}

/// Format one pasted submission, listing every error on `err` when it is rejected
pub fn format_submission<W: Write, E: Write>(
    text: &str,
    config: &FormatterConfig,
    mut out: W,
    mut err: E,
) -> anyhow::Result<()> {
    let mut collection = OrderCollection::new();
    if let Err(errors) = submit(&mut collection, text, config.schema) {
        writeln!(err, "{}", "Submission rejected:".bright_red().bold())?;
        for error in &errors {
            writeln!(err, "  - {}", error.red())?;
        }
        return Err(FormatterError::SubmissionRejected { errors }.into());
    }

    writeln!(out, "{}", render(collection.orders(), config)?)?;
    Ok(())
}

/// Acquisition of pasted text from the argument, a file or stdin
pub mod input {
    use super::*;
    use anyhow::{Context, Result};
    use std::io::Read;

    /// Read the submission text, preferring the positional line over `--input` over stdin
    pub fn read_submission(args: &Args) -> Result<String> {
        if let Some(line) = &args.line {
            return Ok(line.clone());
        }

        if let Some(path) = &args.input {
            if !path.exists() {
                return Err(FormatterError::InputNotFound { path: path.clone() }.into());
            }
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()));
        }

        read_from(std::io::stdin().lock()).context("Failed to read order lines from stdin")
    }

    pub fn read_from<R: Read>(mut reader: R) -> std::io::Result<String> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Interactive accumulation of orders across pasted blocks
///
/// A blank line submits the current block. `:clear` empties the
/// collection, `:show` prints it, and `:quit` or end of input prints the
/// final output.
pub mod session {
    use super::*;
    use anyhow::{Context, Result};
    use colored::*;
    use std::io::{BufRead, Write};

    pub const CLEAR_COMMAND: &str = ":clear";
    pub const SHOW_COMMAND: &str = ":show";
    pub const QUIT_COMMAND: &str = ":quit";

    pub fn run_session<R: BufRead, W: Write>(
        reader: R,
        mut writer: W,
        config: &FormatterConfig,
    ) -> Result<OrderCollection> {
        let mut collection = OrderCollection::new();
        let mut block = String::new();

        writeln!(
            writer,
            "{}",
            "Paste order lines, then an empty line to submit (:show, :clear, :quit)"
                .bright_green()
        )?;

        for line in reader.lines() {
            let line = line.context("Failed to read session input")?;
            match line.trim() {
                CLEAR_COMMAND => {
                    block.clear();
                    collection.clear();
                    writeln!(writer, "{}", "Cleared all orders".bright_yellow())?;
                }
                SHOW_COMMAND => {
                    writeln!(writer, "{}", render(collection.orders(), config)?)?;
                }
                QUIT_COMMAND => break,
                "" => submit_block(&mut block, &mut collection, &mut writer, config)?,
                _ => {
                    block.push_str(&line);
                    block.push('\n');
                }
            }
        }

        submit_block(&mut block, &mut collection, &mut writer, config)?;

        if !collection.is_empty() {
            writeln!(writer, "{}", render(collection.orders(), config)?)?;
        }
        Ok(collection)
    }

    fn submit_block<W: Write>(
        block: &mut String,
        collection: &mut OrderCollection,
        writer: &mut W,
        config: &FormatterConfig,
    ) -> Result<()> {
        if block.trim().is_empty() {
            block.clear();
            return Ok(());
        }

        match submit(collection, block, config.schema) {
            Ok(appended) => {
                writeln!(
                    writer,
                    "{} {} order(s), {} ready to copy",
                    "Added".bright_green(),
                    appended,
                    collection.len()
                )?;
            }
            Err(errors) => {
                writeln!(writer, "{}", "Submission rejected:".bright_red().bold())?;
                for error in errors {
                    writeln!(writer, "  - {}", error.red())?;
                }
            }
        }
        block.clear();
        Ok(())
    }
}
