//! Command-line configuration
//!
//! [`Cli`] is what clap parses; [`Config`] is the validated result the binary
//! actually runs with.

use crate::codegen::GeneratorOptions;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "cpp2py", author, version, about = "Translate a small C++ subset into Python")]
pub struct Cli {
    /// C++ source file to translate
    pub input: PathBuf,

    /// Path the generated Python is written to
    pub output: PathBuf,

    /// Spaces per indentation level in the output
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Call main() from an `if __name__ == "__main__":` guard
    #[arg(long = "main-guard")]
    pub main_guard: bool,

    /// Show source and output side by side in a terminal viewer
    #[arg(long)]
    pub view: bool,

    /// More log output (-v info, -vv debug); RUST_LOG still takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("File '{0}' not found")]
    MissingInput(PathBuf),
    #[error("Indent width must be at least 1")]
    ZeroIndent,
}

/// Resolved configuration after CLI parsing.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub generator: GeneratorOptions,
    pub view: bool,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if !cli.input.exists() {
            return Err(ConfigError::MissingInput(cli.input.clone()));
        }
        if cli.indent == 0 {
            return Err(ConfigError::ZeroIndent);
        }

        Ok(Config {
            input: cli.input.clone(),
            output: cli.output.clone(),
            generator: GeneratorOptions {
                indent_width: cli.indent,
                emit_main_guard: cli.main_guard,
            },
            view: cli.view,
            log_level: cli.log_level(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> String {
        format!("{}/Cargo.toml", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cpp2py", manifest().as_str(), "out.py"]).unwrap();
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.generator, GeneratorOptions::default());
        assert_eq!(config.output, PathBuf::from("out.py"));
        assert!(!config.view);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "cpp2py",
            manifest().as_str(),
            "out.py",
            "--indent",
            "2",
            "--main-guard",
            "--view",
            "-vv",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.generator.indent_width, 2);
        assert!(config.generator.emit_main_guard);
        assert!(config.view);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_requires_both_paths() {
        assert!(Cli::try_parse_from(["cpp2py", "input.cpp"]).is_err());
    }

    #[test]
    fn test_missing_input() {
        let cli = Cli::try_parse_from(["cpp2py", "no/such/file.cpp", "out.py"]).unwrap();
        let err = Config::from_cli(&cli).unwrap_err();

        assert_eq!(err, ConfigError::MissingInput(PathBuf::from("no/such/file.cpp")));
    }

    #[test]
    fn test_zero_indent_rejected() {
        let manifest = manifest();
        let args = ["cpp2py", manifest.as_str(), "out.py", "--indent", "0"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(Config::from_cli(&cli).unwrap_err(), ConfigError::ZeroIndent);
    }
}
