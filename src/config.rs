use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub struct XcgenConfig {
    /// Maximum number of projects and targets linted at once.
    pub lint_concurrency: Option<usize>,
    /// Treat warnings as blocking.
    pub lint_strict: bool,
}

impl XcgenConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            lint_concurrency: raw_config.lint.concurrency,
            lint_strict: raw_config.lint.strict,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    lint: LintConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct LintConfig {
    concurrency: Option<usize>,
    #[serde(default)]
    strict: bool,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("XCGEN")
                    .separator("_")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn load_empty() {
        let env = HashMap::from([]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                lint: LintConfig {
                    concurrency: None,
                    strict: false
                }
            }
        )
    }

    #[test]
    fn load_environment() {
        let env = HashMap::from([
            ("XCGEN_LINT_CONCURRENCY".to_owned(), "4".to_owned()),
            ("XCGEN_LINT_STRICT".to_owned(), "true".to_owned()),
        ]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                lint: LintConfig {
                    concurrency: Some(4),
                    strict: true
                }
            }
        )
    }
}
