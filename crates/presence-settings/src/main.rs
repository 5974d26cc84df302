//! presence-settings — inspect and edit stored presence settings.
//!
//! # Usage
//!
//! ```text
//! presence-settings [OPTIONS] <COMMAND>
//!
//! Commands:
//!   show   Print the settings as JSON
//!   get    Print one field
//!   set    Change one field and save
//!   reset  Delete the stored settings, restoring defaults
//!   path   Print where the settings are stored
//!
//! Options:
//!   --project <DIR>      Project directory [default: .]
//!   --config-dir <DIR>   Directory for application settings
//!                        [default: platform config directory]
//! ```
//!
//! Every command works on the project settings unless `--application` is
//! given.
//!
//! # Environment variable overrides
//!
//! | Variable               | Description                         |
//! |------------------------|-------------------------------------|
//! | `PRESENCE_PROJECT_DIR` | Project directory                   |
//! | `PRESENCE_CONFIG_DIR`  | Application settings directory      |
//! | `RUST_LOG`             | Log filter (default `warn`)         |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use presence_core::{
    render_json, render_json_pretty, ApplicationSettings, ProjectSettingsStorage, SettingsData,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use presence_settings::application::backend::SettingsBackend;
use presence_settings::application::edit_settings::{get_field, set_field};
use presence_settings::application::project_registry::ProjectRegistry;
use presence_settings::application::settings_storage::SettingsStorage;
use presence_settings::infrastructure::storage::paths::{
    application_settings_dir, project_settings_dir,
};
use presence_settings::infrastructure::storage::FileBackend;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit presence settings.
#[derive(Debug, Parser)]
#[command(name = "presence-settings", version)]
struct Cli {
    /// Project directory whose settings are used.
    #[arg(long, global = true, default_value = ".", env = "PRESENCE_PROJECT_DIR")]
    project: PathBuf,

    /// Directory holding the application settings.
    #[arg(long, global = true, env = "PRESENCE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the settings as JSON.
    Show {
        #[command(flatten)]
        target: Target,
        /// Indent the output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print one field, addressed by key (e.g. `description`, `file.details`).
    Get {
        #[command(flatten)]
        target: Target,
        key: String,
    },
    /// Change one field and save.  VALUE is JSON, or plain text.
    Set {
        #[command(flatten)]
        target: Target,
        key: String,
        value: String,
    },
    /// Delete the stored settings, restoring defaults.
    Reset {
        #[command(flatten)]
        target: Target,
    },
    /// Print where the settings are stored.
    Path {
        #[command(flatten)]
        target: Target,
    },
}

#[derive(Debug, Clone, Copy, Args)]
struct Target {
    /// Use the application settings instead of the project settings.
    #[arg(long)]
    application: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean JSON.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("parsed arguments: {cli:?}");

    match cli.command {
        Command::Show { target, pretty } if target.application => {
            let storage = open_application(cli.config_dir.as_deref())?;
            println!("{}", render(storage.state(), pretty)?);
        }
        Command::Show { pretty, .. } => {
            let mut registry = project_registry();
            let storage = registry
                .open(&cli.project)
                .context("failed to load project settings")?;
            println!("{}", render(storage.state(), pretty)?);
        }
        Command::Get { target, key } if target.application => {
            let storage = open_application(cli.config_dir.as_deref())?;
            println!("{}", get_field(storage.state(), &key)?);
        }
        Command::Get { key, .. } => {
            let mut registry = project_registry();
            let storage = registry
                .open(&cli.project)
                .context("failed to load project settings")?;
            println!("{}", get_field(storage.state(), &key)?);
        }
        Command::Set { target, key, value } if target.application => {
            let mut storage = open_application(cli.config_dir.as_deref())?;
            set_field(storage.state_mut(), &key, &value)?;
            storage
                .state()
                .validate()
                .with_context(|| format!("rejected value for {key}"))?;
            storage.save().context("failed to save application settings")?;
        }
        Command::Set { key, value, .. } => {
            let mut registry = project_registry();
            let storage = registry
                .open(&cli.project)
                .context("failed to load project settings")?;
            set_field(storage.state_mut(), &key, &value)?;
            storage
                .state()
                .validate()
                .with_context(|| format!("rejected value for {key}"))?;
            // Closing saves the modified project.
            registry
                .close(&cli.project)
                .context("failed to save project settings")?;
        }
        Command::Reset { target } if target.application => {
            let mut storage: SettingsStorage<ApplicationSettings> =
                SettingsStorage::new(application_backend(cli.config_dir.as_deref())?);
            storage.clear().context("failed to reset application settings")?;
        }
        Command::Reset { .. } => {
            // No load first: a malformed document is exactly what a reset should fix.
            project_storage(&cli.project)
                .clear()
                .context("failed to reset project settings")?;
        }
        Command::Path { target } if target.application => {
            let storage: SettingsStorage<ApplicationSettings> =
                SettingsStorage::new(application_backend(cli.config_dir.as_deref())?);
            println!("{}", storage.location());
        }
        Command::Path { .. } => {
            println!("{}", project_storage(&cli.project).location());
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn render<T: SettingsData>(state: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        render_json_pretty(state)?
    } else {
        render_json(state)?
    };
    Ok(json)
}

fn project_registry() -> ProjectRegistry {
    ProjectRegistry::new(|project: &Path| {
        Arc::new(FileBackend::new(project_settings_dir(project))) as Arc<dyn SettingsBackend>
    })
}

fn project_storage(project: &Path) -> SettingsStorage<ProjectSettingsStorage> {
    SettingsStorage::new(Arc::new(FileBackend::new(project_settings_dir(project))))
}

fn application_backend(config_dir: Option<&Path>) -> anyhow::Result<Arc<dyn SettingsBackend>> {
    let dir = match config_dir {
        Some(dir) => dir.to_path_buf(),
        None => application_settings_dir()?,
    };
    Ok(Arc::new(FileBackend::new(dir)))
}

fn open_application(
    config_dir: Option<&Path>,
) -> anyhow::Result<SettingsStorage<ApplicationSettings>> {
    let backend = application_backend(config_dir)?;
    SettingsStorage::open(backend).context("failed to load application settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_application_flag_parses_after_subcommand() {
        let cli = Cli::try_parse_from([
            "presence-settings",
            "--project",
            "/work/alpha",
            "set",
            "--application",
            "timeout_minutes",
            "10",
        ])
        .expect("parse");

        assert_eq!(cli.project, PathBuf::from("/work/alpha"));
        match cli.command {
            Command::Set { target, key, value } => {
                assert!(target.application);
                assert_eq!(key, "timeout_minutes");
                assert_eq!(value, "10");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
