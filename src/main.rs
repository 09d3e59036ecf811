use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use devconv::cli::path_mapping::{has_extension, map_input_to_output};
use devconv::cli::{handle_error, Args, CliConfig, CliUtils, Command};
use devconv::conversion::{csv_to_json, json_to_csv, ConversionConfig};
use devconv::formatter::{beautify_json, beautify_xml};
use devconv::parser::TextSource;
use devconv::ConvertResult;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    if config.is_verbose() {
        eprintln!(
            "Converting {} to {}",
            config.input_description(),
            config.output_description()
        );
    }

    if let Err(e) = run(&config) {
        handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: &CliConfig) -> ConvertResult<()> {
    let source = resolve_source(config.args.command.io());

    match &source {
        TextSource::Directory(dir) => convert_directory(dir, config),
        _ => convert_single(&source, config),
    }
}

/// Decide where the input text comes from. An existing path wins over a
/// literal; anything else is taken as raw input text.
fn resolve_source(io: &devconv::cli::IoArgs) -> TextSource {
    if io.stdin {
        return TextSource::Stdin;
    }
    match &io.input {
        None => TextSource::Stdin,
        Some(input) => {
            let path = PathBuf::from(input);
            if path.is_file() {
                TextSource::File(path)
            } else if path.is_dir() {
                TextSource::Directory(path)
            } else {
                TextSource::Literal(input.clone())
            }
        }
    }
}

fn convert_text(command: &Command, text: &str, config: &ConversionConfig) -> ConvertResult<String> {
    match command {
        Command::Csv2json { .. } => csv_to_json(text, config),
        Command::Json2csv { .. } => json_to_csv(text),
        Command::FmtJson { .. } => beautify_json(text, config),
        Command::FmtXml { .. } => beautify_xml(text),
    }
}

fn convert_single(source: &TextSource, config: &CliConfig) -> ConvertResult<()> {
    let text = source.read()?;
    let output = convert_text(&config.args.command, &text, &config.conversion_config)?;

    let format = config.args.command.output_format();
    match &config.args.command.io().output {
        Some(path) => {
            // An existing directory target gets the format's default
            // download filename
            let path = if path.is_dir() {
                path.join(format.default_file_name())
            } else {
                path.clone()
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &output)?;
            CliUtils::show_success(
                &format!("Converted to: {} ({})", path.display(), format.mime_type()),
                config.is_quiet(),
            );
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

fn convert_directory(input_dir: &Path, config: &CliConfig) -> ConvertResult<()> {
    let io = config.args.command.io();
    let output_dir = io.output.as_deref().ok_or_else(|| {
        devconv::ConvertError::configuration("Output directory required for directory conversion")
    })?;
    std::fs::create_dir_all(output_dir)?;

    let extension = config.args.command.input_extension();
    let files = find_input_files(input_dir, io.recursive, extension)?;

    if files.is_empty() {
        CliUtils::show_warning(
            &format!("No .{} files found in {}", extension, input_dir.display()),
            config.is_quiet(),
        );
        return Ok(());
    }

    if config.is_verbose() {
        eprintln!("Found {} .{} files", files.len(), extension);
    }

    let progress = if !config.is_quiet() && files.len() > 1 {
        Some(CliUtils::create_progress_bar(files.len() as u64))
    } else {
        None
    };

    let out_extension = config.args.command.output_format().extension();
    let mut failures = 0usize;

    for file in &files {
        let out_file = map_input_to_output(input_dir, file, output_dir, out_extension);
        if let Some(parent) = out_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let result = TextSource::File(file.clone())
            .read()
            .and_then(|text| convert_text(&config.args.command, &text, &config.conversion_config))
            .and_then(|output| {
                std::fs::write(&out_file, output)
                    .map_err(|e| devconv::ConvertError::io(e.to_string(), Some(out_file.clone())))
            });

        match result {
            Ok(()) => {
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
            Err(e) => {
                failures += 1;
                CliUtils::show_error(&format!("{}: {}", file.display(), e.user_message()));
                if !config.continue_on_error() {
                    return Err(e);
                }
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    CliUtils::show_success(
        &format!(
            "Converted {} of {} files into {}",
            files.len() - failures,
            files.len(),
            output_dir.display()
        ),
        config.is_quiet(),
    );

    Ok(())
}

fn find_input_files(dir: &Path, recursive: bool, extension: &str) -> ConvertResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    if recursive {
        for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
            let entry =
                entry.map_err(|e| devconv::ConvertError::io(e.to_string(), Some(dir.into())))?;
            let path = entry.path();
            if path.is_file() && has_extension(path, extension) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && has_extension(&path, extension) {
                files.push(path);
            }
        }
        files.sort();
    }

    Ok(files)
}
