use std::{
    collections::BTreeSet,
    fmt::Display,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use super::{Architecture, BinaryStatus, Linking, Platform, PlatformFilters, SdkSource, SdkStatus};

/// One thing a build unit depends on, as produced by graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DependencyNode {
    Framework {
        path: PathBuf,
        binary_path: PathBuf,
        #[serde(default)]
        dsym_path: Option<PathBuf>,
        #[serde(default)]
        bcsymbolmap_paths: Vec<PathBuf>,
        linking: Linking,
        #[serde(default)]
        architectures: BTreeSet<Architecture>,
        #[serde(default)]
        is_carthage: bool,
        #[serde(default)]
        status: BinaryStatus,
    },
    Library {
        path: PathBuf,
        public_headers: PathBuf,
        linking: Linking,
        #[serde(default)]
        architectures: BTreeSet<Architecture>,
        #[serde(default)]
        swift_module_map: Option<PathBuf>,
    },
    #[serde(rename = "xcframework")]
    XcFramework {
        path: PathBuf,
        #[serde(default)]
        info_plist: XcFrameworkInfoPlist,
        primary_binary_path: PathBuf,
        #[serde(default)]
        available_libraries: Vec<XcFrameworkLibrary>,
        #[serde(default)]
        status: BinaryStatus,
    },
    Bundle {
        path: PathBuf,
    },
    /// Output of another build unit in the graph.
    Target {
        name: String,
        product_name: String,
        #[serde(default)]
        platform_filters: PlatformFilters,
    },
    Sdk {
        path: PathBuf,
        #[serde(default)]
        status: SdkStatus,
        #[serde(default)]
        source: SdkSource,
    },
    /// A package product compiled from source. It has no artifact on disk
    /// until the package is built.
    SourceModule {
        name: String,
    },
}

impl DependencyNode {
    pub fn kind(&self) -> &'static str {
        match self {
            DependencyNode::Framework { .. } => "framework",
            DependencyNode::Library { .. } => "library",
            DependencyNode::XcFramework { .. } => "xcframework",
            DependencyNode::Bundle { .. } => "bundle",
            DependencyNode::Target { .. } => "target",
            DependencyNode::Sdk { .. } => "sdk",
            DependencyNode::SourceModule { .. } => "source module",
        }
    }
}

impl Display for DependencyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyNode::Framework { path, .. }
            | DependencyNode::Library { path, .. }
            | DependencyNode::XcFramework { path, .. }
            | DependencyNode::Bundle { path }
            | DependencyNode::Sdk { path, .. } => {
                write!(f, "{} at {}", self.kind(), path.display())
            }
            DependencyNode::Target { name, .. } | DependencyNode::SourceModule { name } => {
                write!(f, "{} {}", self.kind(), name)
            }
        }
    }
}

/// The parts of an xcframework's Info.plist the generator reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcFrameworkInfoPlist {
    #[serde(default)]
    pub libraries: Vec<XcFrameworkLibrary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XcFrameworkLibrary {
    pub identifier: String,
    pub path: PathBuf,
    pub platform: Platform,
    #[serde(default)]
    pub architectures: BTreeSet<Architecture>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[derive(Deserialize)]
    struct Nodes {
        dependencies: Vec<DependencyNode>,
    }

    #[test]
    fn deserialize_nodes() {
        let str = r#"
            [[dependencies]]
            kind = "framework"
            path = "/Frameworks/A.framework"
            binary_path = "/Frameworks/A.framework/A"
            linking = "static"
            architectures = ["arm64", "x86_64"]

            [[dependencies]]
            kind = "xcframework"
            path = "/Frameworks/B.xcframework"
            primary_binary_path = "/Frameworks/B.xcframework/ios-arm64/B.framework/B"
            status = "optional"

            [[dependencies]]
            kind = "target"
            name = "Core"
            product_name = "Core.framework"
            platform_filters = ["ios"]
        "#;
        let nodes: Nodes = toml::from_str(str).unwrap();
        assert_eq!(
            nodes.dependencies,
            vec![
                DependencyNode::Framework {
                    path: "/Frameworks/A.framework".into(),
                    binary_path: "/Frameworks/A.framework/A".into(),
                    dsym_path: None,
                    bcsymbolmap_paths: vec![],
                    linking: Linking::Static,
                    architectures: BTreeSet::from([Architecture::Arm64, Architecture::X86_64]),
                    is_carthage: false,
                    status: BinaryStatus::Required,
                },
                DependencyNode::XcFramework {
                    path: "/Frameworks/B.xcframework".into(),
                    info_plist: XcFrameworkInfoPlist::default(),
                    primary_binary_path: "/Frameworks/B.xcframework/ios-arm64/B.framework/B"
                        .into(),
                    available_libraries: vec![],
                    status: BinaryStatus::Optional,
                },
                DependencyNode::Target {
                    name: "Core".to_string(),
                    product_name: "Core.framework".to_string(),
                    platform_filters: BTreeSet::from([crate::model::PlatformFilter::Ios]),
                },
            ]
        );
    }

    #[test]
    fn display_names_the_node() {
        let node = DependencyNode::SourceModule {
            name: "Alamofire".to_string(),
        };
        assert_eq!(node.to_string(), "source module Alamofire");
        let node = DependencyNode::Bundle {
            path: "/Resources/R.bundle".into(),
        };
        assert_eq!(node.to_string(), "bundle at /Resources/R.bundle");
    }
}
