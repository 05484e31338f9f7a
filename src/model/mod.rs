pub mod graph;
pub mod manifest;
pub mod settings;

use std::{
    collections::BTreeSet,
    fmt::{Display, Write},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading manifest toml: {0}")]
    IO(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid platform `{0}`")]
    InvalidPlatform(String),
    #[error("Invalid linking mode `{0}`")]
    InvalidLinking(String),
    #[error("Duplicate configuration `{0}`")]
    DuplicateConfiguration(String),
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    MacOs,
    TvOs,
    WatchOs,
    VisionOs,
}

impl Platform {
    /// Name as it appears in diagnostics and build settings.
    pub fn case_value(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::MacOs => "macOS",
            Platform::TvOs => "tvOS",
            Platform::WatchOs => "watchOS",
            Platform::VisionOs => "visionOS",
        }
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.to_ascii_lowercase();
        match value.as_str() {
            "ios" => Ok(Platform::Ios),
            "macos" => Ok(Platform::MacOs),
            "tvos" => Ok(Platform::TvOs),
            "watchos" => Ok(Platform::WatchOs),
            "visionos" => Ok(Platform::VisionOs),
            _ => Err(ParseError::InvalidPlatform(value)),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.case_value())
    }
}

/// How a precompiled binary is linked into the product that depends on it.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Linking {
    Static,
    Dynamic,
}

impl FromStr for Linking {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "static" => Ok(Linking::Static),
            "dynamic" => Ok(Linking::Dynamic),
            _ => Err(ParseError::InvalidLinking(value.to_string())),
        }
    }
}

impl Display for Linking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Linking::Static => f.write_str("static"),
            Linking::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// Kind of build product a precompiled dependency contributes when linked.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Framework,
    StaticFramework,
    DynamicLibrary,
    StaticLibrary,
}

impl Product {
    pub fn framework(linking: Linking) -> Product {
        match linking {
            Linking::Static => Product::StaticFramework,
            Linking::Dynamic => Product::Framework,
        }
    }

    pub fn library(linking: Linking) -> Product {
        match linking {
            Linking::Static => Product::StaticLibrary,
            Linking::Dynamic => Product::DynamicLibrary,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Product::Framework => f.write_str("framework"),
            Product::StaticFramework => f.write_str("static framework"),
            Product::DynamicLibrary => f.write_str("dynamic library"),
            Product::StaticLibrary => f.write_str("static library"),
        }
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
#[allow(non_camel_case_types)]
pub enum Architecture {
    X86_64,
    I386,
    Arm64,
    Armv7,
    Armv7s,
    Armv7k,
    Arm64_32,
    Arm64e,
}

/// Whether a binary must be present at launch or may be weakly linked.
#[derive(Default, PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum BinaryStatus {
    #[default]
    Required,
    Optional,
}

#[derive(Default, PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum SdkStatus {
    #[default]
    Required,
    Optional,
}

/// Where an SDK lives: the platform SDK itself or the developer directory.
#[derive(Default, PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum SdkSource {
    #[default]
    System,
    Developer,
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFilter {
    Ios,
    MacOs,
    TvOs,
    #[serde(rename = "maccatalyst")]
    Catalyst,
    DriverKit,
    WatchOs,
    #[serde(rename = "xros")]
    VisionOs,
}

impl Display for PlatformFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlatformFilter::Ios => f.write_str("ios"),
            PlatformFilter::MacOs => f.write_str("macos"),
            PlatformFilter::TvOs => f.write_str("tvos"),
            PlatformFilter::Catalyst => f.write_str("maccatalyst"),
            PlatformFilter::DriverKit => f.write_str("driverkit"),
            PlatformFilter::WatchOs => f.write_str("watchos"),
            PlatformFilter::VisionOs => f.write_str("xros"),
        }
    }
}

pub type PlatformFilters = BTreeSet<PlatformFilter>;

/// Minimum OS version a target is built for, tied to one platform.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    Ios(String),
    MacOs(String),
    TvOs(String),
    WatchOs(String),
    VisionOs(String),
}

impl DeploymentTarget {
    pub fn platform(&self) -> Platform {
        match self {
            DeploymentTarget::Ios(_) => Platform::Ios,
            DeploymentTarget::MacOs(_) => Platform::MacOs,
            DeploymentTarget::TvOs(_) => Platform::TvOs,
            DeploymentTarget::WatchOs(_) => Platform::WatchOs,
            DeploymentTarget::VisionOs(_) => Platform::VisionOs,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            DeploymentTarget::Ios(version)
            | DeploymentTarget::MacOs(version)
            | DeploymentTarget::TvOs(version)
            | DeploymentTarget::WatchOs(version)
            | DeploymentTarget::VisionOs(version) => version,
        }
    }
}

impl Display for DeploymentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.platform().case_value())?;
        f.write_char(' ')?;
        f.write_str(self.version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn product_follows_linking() {
        assert_eq!(Product::framework(Linking::Static), Product::StaticFramework);
        assert_eq!(Product::framework(Linking::Dynamic), Product::Framework);
        assert_eq!(Product::library(Linking::Static), Product::StaticLibrary);
        assert_eq!(Product::library(Linking::Dynamic), Product::DynamicLibrary);
    }

    #[test]
    fn parse_platform() {
        assert_eq!(Platform::from_str("macOS").unwrap(), Platform::MacOs);
        assert_eq!(Platform::from_str("ios").unwrap(), Platform::Ios);
        assert!(Platform::from_str("android").is_err());
    }

    #[test]
    fn parse_linking() {
        assert_eq!(Linking::from_str("Static").unwrap(), Linking::Static);
        assert_eq!(Linking::from_str("dynamic").unwrap(), Linking::Dynamic);
        assert!(matches!(
            Linking::from_str("weak"),
            Err(ParseError::InvalidLinking(value)) if value == "weak"
        ));
    }

    #[test]
    fn deployment_target_display() {
        let target = DeploymentTarget::MacOs("10.14.5".to_string());
        assert_eq!(target.platform(), Platform::MacOs);
        assert_eq!(target.to_string(), "macOS 10.14.5");
    }

    #[test]
    fn deserialize_deployment_target() {
        #[derive(Deserialize)]
        struct Wrapper {
            deployment_target: DeploymentTarget,
        }
        let wrapper: Wrapper = toml::from_str(r#"deployment_target = { macos = "10.14.5" }"#).unwrap();
        assert_eq!(
            wrapper.deployment_target,
            DeploymentTarget::MacOs("10.14.5".to_string())
        );
    }

    #[test]
    fn platform_filters_deserialize_from_their_display_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            filters: Vec<PlatformFilter>,
        }
        let all = [
            PlatformFilter::Ios,
            PlatformFilter::MacOs,
            PlatformFilter::TvOs,
            PlatformFilter::Catalyst,
            PlatformFilter::DriverKit,
            PlatformFilter::WatchOs,
            PlatformFilter::VisionOs,
        ];
        let names: Vec<_> = all.iter().map(|filter| format!("\"{filter}\"")).collect();
        let wrapper: Wrapper =
            toml::from_str(&format!("filters = [{}]", names.join(", "))).unwrap();
        assert_eq!(wrapper.filters, all);
    }
}
