use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use component_hint::application::LintSummary;
use component_hint::config::Config;
use component_hint::presentation::{
    create_lint_use_case, create_reporter, detect_capabilities, Cli, ReporterOptions,
};

/// Run one lint pass from the current directory.
pub fn run(cli: &Cli) -> Result<LintSummary> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let base_dir = cwd.canonicalize().unwrap_or(cwd);

    let config = load_config(cli, &base_dir)?.with_env_overrides();
    let config = cli.apply_to(config);
    debug!(?config, "effective configuration");

    let options = config.lint_options(&base_dir)?;

    let caps = detect_capabilities();
    let reporter = create_reporter(&ReporterOptions {
        kind: config.output.reporter,
        quiet: config.output.quiet,
        color: caps.use_color(config.output.color),
        unicode: caps.supports_unicode,
        base_dir: base_dir.clone(),
    });

    let report = create_lint_use_case().execute(&cli.paths, options, reporter.as_ref())?;
    Ok(report.summary)
}

fn load_config(cli: &Cli, base_dir: &Path) -> Result<Config> {
    let (config, warnings) = match &cli.config {
        Some(path) => Config::load_with_warnings(&resolve(base_dir, path))?,
        None => Config::load_or_default(base_dir)?,
    };
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(config)
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_config_file_is_read() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("custom.toml"),
            "[lint]\nrecursive = true\n",
        )
        .unwrap();

        let cli = Cli {
            config: Some(PathBuf::from("custom.toml")),
            ..Cli::default()
        };
        let config = load_config(&cli, dir.path()).unwrap();
        assert!(config.lint.recursive);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let cli = Cli {
            config: Some(PathBuf::from("nope.toml")),
            ..Cli::default()
        };
        assert!(load_config(&cli, dir.path()).is_err());
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let abs = std::env::temp_dir();
        assert_eq!(resolve(Path::new("/base"), &abs), abs);
        assert_eq!(
            resolve(Path::new("/base"), Path::new("c.toml")),
            PathBuf::from("/base/c.toml")
        );
    }
}
