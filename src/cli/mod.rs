//! Command-line interface module

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::conversion::{ConversionConfig, OutputFormat};
use crate::error::{ConvertError, ConvertResult};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "devconv")]
#[command(about = "Developer data-format utilities: CSV/JSON conversion and JSON/XML beautification")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Spaces per indentation level for JSON output (0-8, default: 2)
    #[arg(long, global = true)]
    pub indent: Option<u8>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// CLI subcommands, one per conversion
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert CSV input to pretty-printed JSON
    Csv2json {
        #[command(flatten)]
        io: IoArgs,

        /// Keep every field a string instead of inferring numbers,
        /// booleans and null
        #[arg(long)]
        raw_strings: bool,
    },
    /// Convert a JSON array of objects to CSV
    Json2csv {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Re-indent JSON text
    FmtJson {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Validate and re-indent XML text
    FmtXml {
        #[command(flatten)]
        io: IoArgs,
    },
}

impl Command {
    /// Format of the converted output, used for file extensions and
    /// download metadata.
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Command::Csv2json { .. } | Command::FmtJson { .. } => OutputFormat::Json,
            Command::Json2csv { .. } => OutputFormat::Csv,
            Command::FmtXml { .. } => OutputFormat::Xml,
        }
    }

    /// Extension of the files picked up in directory batch mode.
    pub fn input_extension(&self) -> &'static str {
        match self {
            Command::Csv2json { .. } => "csv",
            Command::Json2csv { .. } | Command::FmtJson { .. } => "json",
            Command::FmtXml { .. } => "xml",
        }
    }

    pub fn io(&self) -> &IoArgs {
        match self {
            Command::Csv2json { io, .. }
            | Command::Json2csv { io }
            | Command::FmtJson { io }
            | Command::FmtXml { io } => io,
        }
    }
}

/// Input/output options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
    /// Input text, file, or directory (default: stdin)
    #[arg()]
    pub input: Option<String>,

    /// Output file path (default: stdout); an existing directory gets the
    /// format's default filename
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read input from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConvertResult<Self> {
        let mut conversion_config =
            ConversionConfig::new().with_indent_size(args.indent.unwrap_or(2));
        if let Command::Csv2json { raw_strings, .. } = &args.command {
            conversion_config = conversion_config.with_infer_types(!raw_strings);
        }

        conversion_config
            .validate()
            .map_err(ConvertError::configuration)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    pub fn continue_on_error(&self) -> bool {
        self.args.command.io().continue_on_error
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        let io = self.args.command.io();
        if io.stdin {
            "standard input".to_string()
        } else if let Some(input) = &io.input {
            format!("'{}'", input)
        } else {
            "standard input".to_string()
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.command.io().output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Create a progress bar for batch file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", console::style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", console::style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", console::style("⚠").yellow(), message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConvertError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ConvertError::JsonParse { .. } => {
            eprintln!("\nTip: run the input through 'devconv fmt-json' to locate the syntax error");
        }
        ConvertError::NotAnArray | ConvertError::NonObjectItem => {
            eprintln!("\nTip: json2csv expects a top-level array of flat objects, e.g. [{{\"a\":1}}]");
        }
        _ => {}
    }

    eprintln!("\nTry 'devconv --help' for usage information.");
}
