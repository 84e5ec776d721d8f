//! Config schema and deserialization

use crate::output::resolve_path;
use crate::JsonPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Lint output read when nothing else is configured
pub const DEFAULT_JSONFILE: &str = "jsonOutput.json";
/// Directory the report is written to by default
pub const DEFAULT_OUTPUT_DIR: &str = "ng-lint-report";
/// Report file name used by default
pub const DEFAULT_FILENAME: &str = "report.html";

/// Root config structure for .lintreportrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Lint tool JSON output to read
    #[serde(default)]
    pub jsonfile: Option<String>,

    /// Directory the report is written to
    #[serde(default)]
    pub output: Option<String>,

    /// Report file name inside `output`
    #[serde(default)]
    pub filename: Option<String>,

    /// Custom HTML template containing `##placeholder##`
    #[serde(default)]
    pub template: Option<String>,

    /// Fail on malformed lint JSON instead of rendering an empty report
    #[serde(default)]
    pub strict: Option<bool>,

    /// File this config was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub jsonfile: Option<String>,
    pub output: Option<String>,
    pub filename: Option<String>,
    pub template: Option<String>,
    pub strict: bool,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    ///
    /// CLI paths resolve against `cwd`; config paths resolve against the
    /// directory holding the config file.
    pub fn merge_with_cli(self, cli: &CliOverrides, cwd: &Path) -> EffectiveConfig {
        let config_dir = self
            .source
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());

        let input = match locate(cli.jsonfile.as_ref(), self.jsonfile.as_ref(), cwd, &config_dir) {
            Some((v, _)) if v.trim().is_empty() => None,
            Some((v, base)) => Some(resolve_path(base, Path::new(v))),
            None => Some(cwd.join(DEFAULT_JSONFILE)),
        };

        let output_dir = match locate(cli.output.as_ref(), self.output.as_ref(), cwd, &config_dir) {
            Some((v, base)) => resolve_path(base, Path::new(v)),
            None => cwd.join(DEFAULT_OUTPUT_DIR),
        };

        let template = locate(cli.template.as_ref(), self.template.as_ref(), cwd, &config_dir)
            .filter(|(v, _)| !v.trim().is_empty())
            .map(|(v, base)| resolve_path(base, Path::new(v)));

        let file_name = cli
            .filename
            .clone()
            .or(self.filename)
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        let policy = if cli.strict || self.strict == Some(true) {
            JsonPolicy::Strict
        } else {
            JsonPolicy::Lenient
        };

        EffectiveConfig {
            input,
            output_dir,
            file_name,
            template,
            policy,
        }
    }
}

/// Pick the CLI value, else the config value, with the directory it is relative to.
fn locate<'a>(
    cli_value: Option<&'a String>,
    config_value: Option<&'a String>,
    cwd: &'a Path,
    config_dir: &'a Path,
) -> Option<(&'a str, &'a Path)> {
    match (cli_value, config_value) {
        (Some(v), _) => Some((v.as_str(), cwd)),
        (None, Some(v)) => Some((v.as_str(), config_dir)),
        (None, None) => None,
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// `None` when an empty input path was supplied
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub file_name: String,
    /// `None` selects the bundled template
    pub template: Option<PathBuf>,
    pub policy: JsonPolicy,
}
