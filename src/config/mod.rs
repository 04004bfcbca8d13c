//! Configuration management.
//!
//! [`AotOptions`] is the flag bag the build driver populates once, before
//! the AOT processor runs. It is constructed with defaults, merged with a
//! TOML options file and programmatic overrides during the configuration
//! phase, then read immutably during processing.

mod mode;

pub use mode::Mode;

use crate::properties::PropertyChecks;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Options driving the ahead-of-time processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AotOptions {
    /// Raw mode token, resolved through [`AotOptions::to_mode`]. Absent
    /// means [`Mode::Native`].
    pub mode: Option<String>,
    /// Log the decision path of the verifier.
    pub debug_verify: bool,
    /// Skip hints contributed by configuration that the build excluded.
    pub ignore_hints_on_excluded_config: bool,
    /// Strip configuration the analysis proves unused.
    pub remove_unused_config: bool,
    /// Fail the build when an import selector carries no hint.
    pub fail_on_missing_selector_hint: bool,
    /// Run the verifier over the generated sources.
    pub verify: bool,
    /// Drop YAML configuration support from the image.
    pub remove_yaml_support: bool,
    /// Drop JMX support from the image.
    pub remove_jmx_support: bool,
    /// Drop XML support from the image.
    pub remove_xml_support: bool,
    /// Drop expression-language support from the image.
    pub remove_spel_support: bool,
    /// Treat conditional properties without an explicit value as matching
    /// at build time.
    pub build_time_properties_match_if_missing: bool,
    /// Prefix patterns controlling build-time property resolution. Absent
    /// disables property checking entirely.
    pub build_time_properties_checks: Option<PropertyChecks>,
}

impl Default for AotOptions {
    fn default() -> Self {
        Self {
            mode: None,
            debug_verify: false,
            ignore_hints_on_excluded_config: true,
            remove_unused_config: true,
            fail_on_missing_selector_hint: true,
            verify: true,
            remove_yaml_support: false,
            remove_jmx_support: true,
            remove_xml_support: true,
            remove_spel_support: false,
            build_time_properties_match_if_missing: true,
            build_time_properties_checks: None,
        }
    }
}

impl AotOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the stored mode token to a typed [`Mode`].
    ///
    /// An absent token resolves to [`Mode::Native`]; anything else must
    /// exactly equal one of the accepted tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the token matches none
    /// of the accepted modes.
    pub fn to_mode(&self) -> Result<Mode> {
        let Some(token) = self.mode.as_deref() else {
            return Ok(Mode::Native);
        };
        Mode::parse(token).ok_or_else(|| {
            Error::InvalidConfiguration(format!(
                "{token} is not a valid mode, valid modes are: {}, {}, {}",
                Mode::Native,
                Mode::NativeAgent,
                Mode::NativeInit
            ))
        })
    }

    /// Returns true when build-time property checking is enabled.
    ///
    /// The feature is off when the pattern list is absent or empty.
    #[must_use]
    pub fn is_build_time_property_checking(&self) -> bool {
        self.build_time_properties_checks
            .as_ref()
            .is_some_and(PropertyChecks::is_enabled)
    }

    /// Determines whether the given property key should be resolved at
    /// build time.
    ///
    /// Delegates to [`PropertyChecks::check_at_build_time`]; returns false
    /// for every key while property checking is disabled.
    #[must_use]
    pub fn build_time_checkable_property(&self, key: &str) -> bool {
        self.build_time_properties_checks
            .as_ref()
            .is_some_and(|checks| checks.check_at_build_time(key))
    }

    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_options_file".to_string(),
            cause: e.to_string(),
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| Error::OperationFailed {
            operation: "parse_options_file".to_string(),
            cause: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded options file");
        Ok(Self::from_config_file(file))
    }

    /// Converts a [`ConfigFile`] to [`AotOptions`].
    ///
    /// Fields absent from the file keep their defaults.
    #[must_use]
    pub fn from_config_file(file: ConfigFile) -> Self {
        let mut options = Self::default();

        if let Some(mode) = file.mode {
            options.mode = Some(mode);
        }
        if let Some(v) = file.debug_verify {
            options.debug_verify = v;
        }
        if let Some(v) = file.ignore_hints_on_excluded_config {
            options.ignore_hints_on_excluded_config = v;
        }
        if let Some(v) = file.remove_unused_config {
            options.remove_unused_config = v;
        }
        if let Some(v) = file.fail_on_missing_selector_hint {
            options.fail_on_missing_selector_hint = v;
        }
        if let Some(v) = file.verify {
            options.verify = v;
        }
        if let Some(v) = file.remove_yaml_support {
            options.remove_yaml_support = v;
        }
        if let Some(v) = file.remove_jmx_support {
            options.remove_jmx_support = v;
        }
        if let Some(v) = file.remove_xml_support {
            options.remove_xml_support = v;
        }
        if let Some(v) = file.remove_spel_support {
            options.remove_spel_support = v;
        }
        if let Some(props) = file.build_time_properties {
            if let Some(v) = props.match_if_missing {
                options.build_time_properties_match_if_missing = v;
            }
            options.build_time_properties_checks = props.checks.map(PropertyChecks::new);
        }

        options
    }

    /// Sets the mode from a typed [`Mode`].
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode.as_str().to_string());
        self
    }

    /// Sets the build-time property check patterns.
    #[must_use]
    pub fn with_build_time_properties_checks<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_time_properties_checks = Some(PropertyChecks::new(patterns));
        self
    }
}

/// Options file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Mode token.
    pub mode: Option<String>,
    /// Debug verification.
    pub debug_verify: Option<bool>,
    /// Ignore hints on excluded configuration.
    pub ignore_hints_on_excluded_config: Option<bool>,
    /// Remove unused configuration.
    pub remove_unused_config: Option<bool>,
    /// Fail on missing selector hints.
    pub fail_on_missing_selector_hint: Option<bool>,
    /// Verification.
    pub verify: Option<bool>,
    /// Remove YAML support.
    pub remove_yaml_support: Option<bool>,
    /// Remove JMX support.
    pub remove_jmx_support: Option<bool>,
    /// Remove XML support.
    pub remove_xml_support: Option<bool>,
    /// Remove expression-language support.
    pub remove_spel_support: Option<bool>,
    /// Build-time property section.
    pub build_time_properties: Option<ConfigFileBuildTimeProperties>,
}

/// Build-time property section in the options file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileBuildTimeProperties {
    /// Match-if-missing flag.
    pub match_if_missing: Option<bool>,
    /// Ordered prefix patterns.
    pub checks: Option<Vec<String>>,
}
