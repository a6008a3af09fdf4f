//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Path list flags take colon separated values and may be repeated
//! - The camelCase spellings (`--depPaths`, `--lookupPaths`, `--ignorePaths`)
//!   are accepted as aliases
//! - Flags given here override environment variables and config files

use std::path::PathBuf;

use clap::Parser;

use crate::config::{split_path_list, ColorMode, Config, ReporterKind};

/// component-hint - lint a graph of component.json components
#[derive(Parser, Debug, Default)]
#[command(name = "component-hint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Component directories to check
    #[arg(value_name = "COMPONENT_PATH")]
    pub paths: Vec<PathBuf>,

    /// Recurse into resolved local and external dependencies
    #[arg(short, long)]
    pub recursive: bool,

    /// Colon separated dependency roots for external components
    #[arg(long = "dep-paths", alias = "depPaths", value_name = "PATHS")]
    pub dep_paths: Vec<String>,

    /// Colon separated roots probed to hint where a missing local dependency lives
    #[arg(long = "lookup-paths", alias = "lookupPaths", value_name = "PATHS")]
    pub lookup_paths: Vec<String>,

    /// Colon separated gitignore-style patterns of components to skip
    #[arg(long = "ignore-paths", alias = "ignorePaths", value_name = "PATTERNS")]
    pub ignore_paths: Vec<String>,

    /// Problems in third-party components are warnings and do not fail the run
    #[arg(long = "warn-on-deps")]
    pub warn_on_deps: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub reporter: Option<ReporterKind>,

    /// Colon separated scripts assumed when a manifest omits "scripts"
    #[arg(long = "default-scripts", value_name = "FILES")]
    pub default_scripts: Vec<String>,

    /// Only print errors
    #[arg(short, long, conflicts_with = "silent")]
    pub quiet: bool,

    /// Print nothing, report through the exit status only
    #[arg(short, long)]
    pub silent: bool,

    /// List requiring components in version conflicts (-vv for debug logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Read configuration from this file instead of discovering one
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layer command line flags over an already loaded configuration.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if self.recursive {
            config.lint.recursive = true;
        }
        if self.warn_on_deps {
            config.lint.warn_on_deps = true;
        }
        if !self.dep_paths.is_empty() {
            config.lint.dep_paths = split_all(&self.dep_paths)
                .into_iter()
                .map(PathBuf::from)
                .collect();
        }
        if !self.lookup_paths.is_empty() {
            config.lint.lookup_paths = split_all(&self.lookup_paths)
                .into_iter()
                .map(PathBuf::from)
                .collect();
        }
        if !self.ignore_paths.is_empty() {
            config.lint.ignore_paths = split_all(&self.ignore_paths);
        }
        if !self.default_scripts.is_empty() {
            config.lint.default_scripts = split_all(&self.default_scripts);
        }

        if let Some(reporter) = self.reporter {
            config.output.reporter = reporter;
        }
        if self.silent {
            config.output.reporter = ReporterKind::Null;
        }
        if self.quiet {
            config.output.quiet = true;
        }
        if self.verbose > 0 {
            config.output.verbose = true;
        }
        if let Some(color) = self.color {
            config.output.color = color;
        }

        config
    }
}

fn split_all(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|v| split_path_list(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("component-hint").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn parses_paths_and_flags() {
        let cli = parse(&["-r", "--warn-on-deps", "app", "lib"]);
        assert_eq!(cli.paths, vec![PathBuf::from("app"), PathBuf::from("lib")]);
        assert!(cli.recursive);
        assert!(cli.warn_on_deps);
    }

    #[test]
    fn path_lists_split_on_colons_and_repeat() {
        let cli = parse(&["--dep-paths", "a:b", "--depPaths=c", "--lookup-paths", "::x", "app"]);
        let config = cli.apply_to(Config::default());

        assert_eq!(
            config.lint.dep_paths,
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );
        assert_eq!(config.lint.lookup_paths, vec![PathBuf::from("x")]);
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.lint.dep_paths = vec![PathBuf::from("from-config")];
        config.output.reporter = ReporterKind::Json;

        let cli = parse(&["--reporter", "github", "--dep-paths", "cli", "app"]);
        let config = cli.apply_to(config);

        assert_eq!(config.lint.dep_paths, vec![PathBuf::from("cli")]);
        assert_eq!(config.output.reporter, ReporterKind::Github);
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = Config::default();
        config.lint.recursive = true;
        config.lint.ignore_paths = vec!["legacy".to_string()];

        let config = parse(&["app"]).apply_to(config);
        assert!(config.lint.recursive);
        assert_eq!(config.lint.ignore_paths, vec!["legacy"]);
    }

    #[test]
    fn silent_forces_null_reporter() {
        let config = parse(&["-s", "--reporter", "json", "app"]).apply_to(Config::default());
        assert_eq!(config.output.reporter, ReporterKind::Null);
    }

    #[test]
    fn quiet_and_silent_conflict() {
        let result = Cli::try_parse_from(["component-hint", "-q", "-s", "app"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = parse(&["-vv", "app"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.apply_to(Config::default()).output.verbose);
    }
}
