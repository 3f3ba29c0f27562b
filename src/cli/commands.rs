//! Command dispatch: wires CLI arguments to services.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{OutputFormat, STDIN_MARKER};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::Traversal;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::WriterSink;
use crate::infrastructure::InfraError;

const STDIN_ORIGIN: &str = "<stdin>";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given (try 'rstree --help')".to_string(),
        ));
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_show(cli),
            ConfigCommands::Path => config_path(cli),
            ConfigCommands::Init { force } => config_init(*force),
        },
        Commands::Tree { file, traversal } => {
            let container = build_container(cli)?;
            tree(&container, file.as_deref(), *traversal)
        }
        Commands::Words {
            file,
            output: output_path,
            format,
            pretty,
        } => {
            let container = build_container(cli)?;
            words(
                &container,
                file.as_deref(),
                output_path.as_deref(),
                *format,
                *pretty,
            )
        }
    }
}

fn local_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.config_dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidArgs(format!(
            "config directory does not exist: {}",
            dir.display()
        ))),
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().map_err(|e| InfraError::io("current directory", e).into()),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let dir = local_dir(cli)?;
    Ok(Settings::load(Some(dir.as_path()))?)
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = load_settings(cli)?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

/// `None` means stdin.
fn input_path(file: Option<&Path>) -> Option<&Path> {
    file.filter(|p| p.as_os_str() != STDIN_MARKER)
}

#[instrument(skip(container))]
fn tree(
    container: &ServiceContainer,
    file: Option<&Path>,
    traversal: Option<Traversal>,
) -> CliResult<()> {
    let traversal = traversal.unwrap_or(container.settings.tree.traversal);
    let tree = match input_path(file) {
        Some(path) => container.tree.load(path)?,
        None => {
            let content =
                io::read_to_string(io::stdin()).map_err(|e| InfraError::io("read stdin", e))?;
            container.tree.parse(&content, STDIN_ORIGIN)?
        }
    };

    let mut sink = WriterSink::stdout();
    let lines = container.tree.print(&tree, traversal, &mut sink)?;
    debug!("tree: printed {} lines ({})", lines, traversal);
    Ok(())
}

#[instrument(skip(container))]
fn words(
    container: &ServiceContainer,
    file: Option<&Path>,
    output_path: Option<&Path>,
    format: Option<OutputFormat>,
    pretty: bool,
) -> CliResult<()> {
    let settings = &container.settings.words;
    let format = format.unwrap_or(settings.format);
    let pretty = pretty || settings.pretty;

    let frequencies = match input_path(file) {
        Some(path) => container.words.vectorize(path)?,
        None => container
            .words
            .vectorize_reader(&mut io::stdin().lock(), STDIN_ORIGIN)?,
    };
    if frequencies.is_empty() {
        output::warning("no words found in input");
    }

    let json = container.words.to_json(&frequencies, format, pretty)?;
    match output_path {
        Some(path) => {
            container.words.write(path, &json)?;
            output::action("Wrote", &path.display());
        }
        None => output::info(&json),
    }
    Ok(())
}

fn config_show(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn config_path(cli: &Cli) -> CliResult<()> {
    let describe = |path: &Path| {
        let state = if path.exists() { "exists" } else { "missing" };
        format!("{} ({})", path.display(), state)
    };

    match global_config_path() {
        Some(path) => output::field("global", &describe(&path)),
        None => output::field("global", "unavailable (no home directory)"),
    }
    let dir = local_dir(cli)?;
    output::field("local", &describe(&local_config_path(&dir)));
    Ok(())
}

fn config_init(force: bool) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    let content = Settings::default().to_toml()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(&path, content)
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}
