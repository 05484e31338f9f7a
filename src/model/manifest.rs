use std::path::{Path, PathBuf};

use log::{debug, error};
use serde::Deserialize;

use super::{graph::DependencyNode, settings::Settings, DeploymentTarget, ParseError, Platform};

/// The loaded project graph handed over by the manifest front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub path: PathBuf,
    pub name: String,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    pub name: String,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub deployment_target: Option<DeploymentTarget>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

impl Manifest {
    pub async fn from_file(path: &Path) -> Result<Manifest, ParseError> {
        debug!("Attempting to read manifest from {}", path.display());
        let contents = tokio::fs::read_to_string(path).await?;

        let manifest = Manifest::from_toml_str(&contents);
        if let Err(err) = &manifest {
            error!("Could not build a valid manifest from {} due to err {err}", path.display())
        }
        manifest
    }

    pub fn from_toml_str(data: &str) -> Result<Manifest, ParseError> {
        Ok(toml::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{
        settings::{BuildConfiguration, Configuration, SettingValue},
        Linking,
    };

    use pretty_assertions::assert_eq;

    #[test]
    fn load_manifest() {
        let str = r#"
            [[projects]]
            path = "/Project"
            name = "App"

            [projects.settings]
            base = { A = "B" }

            [[projects.settings.configurations]]
            name = "Debug"
            variant = "debug"
            xcconfig = "/Project/Debug.xcconfig"

            [[projects.targets]]
            name = "App"
            platform = "ios"
            deployment_target = { ios = "16.0" }

            [[projects.targets.dependencies]]
            kind = "library"
            path = "/Project/libA.a"
            public_headers = "/Project/include"
            linking = "static"

            [[projects.targets.dependencies]]
            kind = "sdk"
            path = "/System/Library/Frameworks/UIKit.framework"
        "#;
        let manifest = Manifest::from_toml_str(str).unwrap();
        assert_eq!(manifest.projects.len(), 1);

        let project = &manifest.projects[0];
        assert_eq!(project.path, PathBuf::from("/Project"));
        assert_eq!(
            project.settings.base,
            BTreeMap::from([("A".to_string(), SettingValue::from("B"))])
        );
        assert_eq!(
            project.settings.configurations,
            BTreeMap::from([(
                BuildConfiguration::debug("Debug"),
                Some(Configuration::with_xcconfig("/Project/Debug.xcconfig"))
            )])
        );

        let target = &project.targets[0];
        assert_eq!(target.platform, Some(Platform::Ios));
        assert_eq!(
            target.deployment_target,
            Some(DeploymentTarget::Ios("16.0".to_string()))
        );
        assert!(target.settings.configurations.is_empty());
        assert_eq!(target.dependencies.len(), 2);
        assert!(matches!(
            target.dependencies[0],
            DependencyNode::Library {
                linking: Linking::Static,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn load_manifest_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.toml");
        std::fs::write(
            &path,
            r#"
            [[projects]]
            path = "/Project"
            name = "Empty"
            "#,
        )
        .unwrap();
        let manifest = Manifest::from_file(&path).await.unwrap();
        assert_eq!(manifest.projects[0].name, "Empty");
        assert!(manifest.projects[0].targets.is_empty());
    }

    #[test]
    fn load_invalid_dependency_kind() {
        let str = r#"
            [[projects]]
            path = "/Project"
            name = "App"

            [[projects.targets]]
            name = "App"

            [[projects.targets.dependencies]]
            kind = "plugin"
            path = "/Project/Plugin"
        "#;
        assert!(Manifest::from_toml_str(str).is_err());
    }

    #[tokio::test]
    async fn missing_manifest_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Manifest::from_file(&dir.path().join("missing.toml")).await;
        assert!(matches!(result, Err(ParseError::IO(_))));
    }
}
