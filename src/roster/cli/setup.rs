use super::args::Cli;
use directories::ProjectDirs;
use roster::api::RosterApi;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::store::fs::FileStore;
use std::io;
use std::path::{Path, PathBuf};

pub(crate) struct AppContext {
    pub config: RosterConfig,
    pub data_dir: PathBuf,
}

impl AppContext {
    /// Load the records file and hand back the store facade over it.
    pub fn open_api(&self, cli: &Cli) -> Result<RosterApi<FileStore>> {
        let path = records_path(cli, &self.config, &self.data_dir);
        tracing::debug!(
            "Using records file {} ({} programme policy)",
            path.display(),
            self.config.programme_policy
        );

        let store = FileStore::new(path).with_policy(self.config.programme_policy);
        RosterApi::open(store, self.config.programme_policy)
    }
}

pub(crate) fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::default().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub(crate) fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RosterError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine a data directory; pass --dir",
            ))
        })
}

/// Resolve the records file: `--file` wins, then the configured `data_file`.
pub(crate) fn records_path(cli: &Cli, config: &RosterConfig, data_dir: &Path) -> PathBuf {
    match &cli.file {
        Some(file) => file.clone(),
        None => config.data_path(data_dir),
    }
}

pub(crate) fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    let config = RosterConfig::load(&data_dir)?;
    Ok(AppContext { config, data_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn file_flag_overrides_config() {
        let cli = Cli::try_parse_from(["roster", "--file", "/tmp/other.txt"]).unwrap();
        let path = records_path(&cli, &RosterConfig::default(), Path::new("/data"));
        assert_eq!(path, PathBuf::from("/tmp/other.txt"));
    }

    #[test]
    fn default_file_lives_in_data_dir() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        let path = records_path(&cli, &RosterConfig::default(), Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/students.txt"));
    }

    #[test]
    fn open_api_loads_existing_records() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("students.txt"),
            "1001,Alice,Computing,2000-01-01,3.5\n",
        )
        .unwrap();
        let dir = temp.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["roster", "--dir", dir]).unwrap();

        let ctx = init_context(&cli).unwrap();
        assert_eq!(ctx.data_dir, temp.path());
        let api = ctx.open_api(&cli).unwrap();
        assert_eq!(api.records().len(), 1);
    }

    #[test]
    fn open_api_fails_on_malformed_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("students.txt"), "1001,Alice\n").unwrap();
        let dir = temp.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["roster", "--dir", dir]).unwrap();

        let ctx = init_context(&cli).unwrap();
        assert!(matches!(
            ctx.open_api(&cli),
            Err(RosterError::MalformedRecordLine { line: 1, .. })
        ));
    }
}
