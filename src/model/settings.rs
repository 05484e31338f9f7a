use std::{
    collections::BTreeMap,
    fmt::Display,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use super::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    String(String),
    Array(Vec<String>),
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::String(s.to_string())
    }
}

pub type SettingsDictionary = BTreeMap<String, SettingValue>;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Debug,
    Release,
}

/// A named build configuration such as `Debug` or `Release`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Ord, PartialOrd)]
pub struct BuildConfiguration {
    pub name: String,
    pub variant: Variant,
}

impl BuildConfiguration {
    pub fn debug(name: impl Into<String>) -> Self {
        BuildConfiguration {
            name: name.into(),
            variant: Variant::Debug,
        }
    }

    pub fn release(name: impl Into<String>) -> Self {
        BuildConfiguration {
            name: name.into(),
            variant: Variant::Release,
        }
    }
}

impl Display for BuildConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub settings: SettingsDictionary,
    /// External `.xcconfig` file layered under `settings`.
    pub xcconfig: Option<PathBuf>,
}

impl Configuration {
    pub fn with_xcconfig(path: impl Into<PathBuf>) -> Self {
        Configuration {
            settings: SettingsDictionary::new(),
            xcconfig: Some(path.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSettings")]
pub struct Settings {
    pub base: SettingsDictionary,
    pub configurations: BTreeMap<BuildConfiguration, Option<Configuration>>,
}

impl Settings {
    pub fn new(
        base: SettingsDictionary,
        configurations: BTreeMap<BuildConfiguration, Option<Configuration>>,
    ) -> Self {
        Settings {
            base,
            configurations,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    base: SettingsDictionary,
    #[serde(default)]
    configurations: Vec<RawConfiguration>,
}

#[derive(Debug, Deserialize)]
struct RawConfiguration {
    name: String,
    variant: Variant,
    #[serde(default)]
    xcconfig: Option<PathBuf>,
    #[serde(default)]
    settings: Option<SettingsDictionary>,
}

impl TryFrom<RawSettings> for Settings {
    type Error = ParseError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let mut configurations = BTreeMap::new();
        for raw in raw.configurations {
            // Names must be unique across variants.
            if configurations
                .keys()
                .any(|existing: &BuildConfiguration| existing.name == raw.name)
            {
                return Err(ParseError::DuplicateConfiguration(raw.name));
            }
            let configuration = match (raw.xcconfig, raw.settings) {
                (None, None) => None,
                (xcconfig, settings) => Some(Configuration {
                    settings: settings.unwrap_or_default(),
                    xcconfig,
                }),
            };
            let build_configuration = BuildConfiguration {
                name: raw.name,
                variant: raw.variant,
            };
            configurations.insert(build_configuration, configuration);
        }
        Ok(Settings {
            base: raw.base,
            configurations,
        })
    }
}
