use std::{
    fs, io,
    path::{Path, PathBuf},
};

use odestep_core::{IntegrationSpec, SpecError};
use odestep_report::Format;
use odestep_solvers::Method;
use serde::Deserialize;
use thiserror::Error;

use crate::preset::Preset;

/// Errors that can occur when loading or applying a [`RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no methods selected")]
    NoMethods,

    #[error("method `{0}` listed more than once")]
    DuplicateMethod(Method),

    #[error(transparent)]
    InvalidSpec(#[from] SpecError),
}

/// Settings for one demo run.
///
/// Every field has a default, so an empty file runs the decay problem with
/// Euler and midpoint and writes `odestep.dat`.
///
/// With `plot` set, a window compares the trajectories with the exact
/// solution. Setting `plot_errors` as well plots absolute errors on a log
/// scale instead.
///
/// ```toml
/// problem = "inverse-square"
/// steps = 200
/// methods = ["euler", "midpoint", "rk4"]
/// output = "inverse.csv"
/// format = "csv"
/// log_steps = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub problem: Preset,
    pub steps: Option<usize>,
    pub x0: Option<f64>,
    pub x_end: Option<f64>,
    pub y0: Option<f64>,
    pub methods: Vec<Method>,
    pub output: PathBuf,
    pub format: Format,
    pub plot: bool,
    pub plot_errors: bool,
    pub log_steps: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            problem: Preset::default(),
            steps: None,
            x0: None,
            x_end: None,
            y0: None,
            methods: vec![Method::Euler, Method::Midpoint],
            output: PathBuf::from("odestep.dat"),
            format: Format::default(),
            plot: false,
            plot_errors: false,
            log_steps: false,
        }
    }
}

impl RunConfig {
    /// Reads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML, unknown keys, presets or methods,
    /// or a method list that is empty or names a method twice.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }
        for (i, method) in config.methods.iter().enumerate() {
            if config.methods[..i].contains(method) {
                return Err(ConfigError::DuplicateMethod(*method));
            }
        }
        Ok(config)
    }

    /// Builds the integration request, applying overrides to the preset's defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting interval or step count is invalid.
    pub fn spec(&self) -> Result<IntegrationSpec, ConfigError> {
        let d = self.problem.defaults();
        let spec = IntegrationSpec::new(
            self.y0.unwrap_or(d.y0),
            self.steps.unwrap_or(d.steps),
            self.x0.unwrap_or(d.x0),
            self.x_end.unwrap_or(d.x_end),
        )?;
        Ok(spec)
    }
}
