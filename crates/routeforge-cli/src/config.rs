use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use routeforge::GenerateOptions;

/// File name of the optional project configuration.
pub const CONFIG_FILE: &str = "routeforge.toml";

/// Project configuration structure (routeforge.toml)
///
/// Every field is optional; command-line arguments always win over the
/// values found here.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerateConfig {
    #[serde(default)]
    pub routes_dir: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub watch: bool,
    #[serde(default)]
    pub deno: bool,
}

impl ProjectConfig {
    /// Parse project configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the configuration file if it exists; defaults otherwise
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Command-line inputs relevant to resolution.
pub struct CliArgs {
    pub routes_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub watch: bool,
    pub deno: bool,
}

/// Fully resolved invocation.
pub struct Resolved {
    pub options: GenerateOptions,
    pub watch: bool,
}

/// Merges CLI arguments with the optional project configuration.
///
/// Returns `None` when the routes directory or output file is supplied by
/// neither source; the caller reports the usage error.
pub fn resolve(cli: CliArgs, file: ProjectConfig) -> Option<Resolved> {
    let routes_dir = cli.routes_dir.or(file.generate.routes_dir)?;
    let output_file = cli.output_file.or(file.generate.output)?;

    Some(Resolved {
        options: GenerateOptions {
            routes_dir,
            output_file,
            deno: cli.deno || file.generate.deno,
        },
        watch: cli.watch || file.generate.watch,
    })
}
