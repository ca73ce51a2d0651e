use clap::Parser;
use dep_tree_diff::adapters::outbound::console::StderrProgressReporter;
use dep_tree_diff::adapters::outbound::filesystem::FileSystemReader;
use dep_tree_diff::application::dto::{DiffRequest, DiffStrategy, OutputFormat};
use dep_tree_diff::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_tree_diff::application::use_cases::CompareReportsUseCase;
use dep_tree_diff::cli::Args;
use dep_tree_diff::config::{self, DiffConfigFile};
use dep_tree_diff::dependency_diff::domain::{ParseMode, ParseOptions, DEFAULT_INDENT_UNIT};
use dep_tree_diff::dependency_diff::policies::InputThresholds;
use dep_tree_diff::shared::error::ExitCode;
use dep_tree_diff::shared::Result;
use std::io::IsTerminal;
use std::process;

/// CLI flags merged over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    strategy: DiffStrategy,
    format: OutputFormat,
    parse_options: ParseOptions,
    thresholds: InputThresholds,
    fail_on_changes: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config.as_ref())?;
    log::debug!("Effective settings: {:?}", settings);

    let use_case = CompareReportsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let request = DiffRequest::new(args.before.clone(), args.after.clone(), settings.strategy)
        .with_parse_options(settings.parse_options)
        .with_thresholds(settings.thresholds);
    let response = use_case.execute(request)?;

    let color = settings.format == OutputFormat::Text
        && args.output.is_none()
        && args.color.enabled(
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        );

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted = FormatterFactory::create(settings.format, color).format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted)?;

    if settings.fail_on_changes && response.has_changes() {
        return Ok(ExitCode::ChangesDetected);
    }
    Ok(ExitCode::Success)
}

fn load_config(args: &Args) -> Result<Option<DiffConfigFile>> {
    match &args.config {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

fn resolve_settings(args: &Args, config: Option<&DiffConfigFile>) -> Result<Settings> {
    let strategy = match args.mode {
        Some(mode) => mode,
        None => config
            .map(DiffConfigFile::strategy)
            .transpose()?
            .flatten()
            .unwrap_or_default(),
    };
    let format = match args.format {
        Some(format) => format,
        None => config
            .map(DiffConfigFile::output_format)
            .transpose()?
            .flatten()
            .unwrap_or_default(),
    };

    let strict = args
        .strict_override()
        .or_else(|| config.and_then(|c| c.strict))
        .unwrap_or(true);
    let mode = if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let indent_unit = args
        .indent_unit
        .or_else(|| config.and_then(|c| c.indent_unit))
        .unwrap_or(DEFAULT_INDENT_UNIT);

    Ok(Settings {
        strategy,
        format,
        parse_options: ParseOptions::new(mode, indent_unit)?,
        thresholds: config.and_then(|c| c.thresholds).unwrap_or_default(),
        fail_on_changes: args.exit_code || config.and_then(|c| c.fail_on_changes).unwrap_or(false),
    })
}
