use blogapi::application::{BuildOrchestrator, ListTagsService};
use blogapi::cli::{format_build_report, format_tag_list, Cli, Commands, SourceArgs};
use blogapi::error::BlogError;
use blogapi::infrastructure::{open_source, BuildConfig, FileSystemWriter};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else warnings only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "blogapi=debug"
        } else {
            "blogapi=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Config file and env vars, then CLI flags on top
fn load_config(args: &SourceArgs, output: Option<PathBuf>) -> Result<BuildConfig, BlogError> {
    let current_dir = std::env::current_dir()?;
    let mut config = BuildConfig::resolve(args.config.as_deref(), &current_dir)?;

    if let Some(env) = &args.environment {
        config.environment = env.clone();
    }
    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if let Some(output) = output {
        config.output_directory = output;
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<(), BlogError> {
    match cli.command {
        Commands::Build { source, output } => {
            let config = load_config(&source, output)?;
            let content = open_source(&config.input_path())?;
            let mut writer = FileSystemWriter::new(config.output_directory.clone());

            let orchestrator = BuildOrchestrator::new(config);
            let report = orchestrator.run(content.as_ref(), &mut writer)?;

            print!(
                "{}",
                format_build_report(
                    &report,
                    &orchestrator.config().environment,
                    &writer.blog_dir()
                )
            );
            Ok(())
        }
        Commands::Tags { source } => {
            let config = load_config(&source, None)?;
            let content = open_source(&config.input_path())?;

            let service = ListTagsService::new(BuildOrchestrator::new(config));
            let tags = service.execute(content.as_ref())?;

            let output = format_tag_list(&tags);
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
    }
}
