mod key;

pub use key::{reduce_key, ReferenceKey};

use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt::Display,
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
};

use crate::model::{
    graph::XcFrameworkInfoPlist, Architecture, BinaryStatus, Linking, PlatformFilters, Product,
    SdkSource, SdkStatus,
};

/// A generation-ready link or build input.
///
/// Equality, ordering and hashing all go through [reduce_key], so two
/// references with the same key are the same reference even when fields
/// outside the key (a stale dSYM path, a different architecture list) differ.
#[derive(Debug, Clone)]
pub enum DependencyReference {
    XcFramework {
        path: PathBuf,
        info_plist: XcFrameworkInfoPlist,
        primary_binary_path: PathBuf,
        status: BinaryStatus,
    },
    Library {
        path: PathBuf,
        linking: Linking,
        architectures: BTreeSet<Architecture>,
    },
    Framework {
        path: PathBuf,
        binary_path: PathBuf,
        is_carthage: bool,
        dsym_path: Option<PathBuf>,
        bcsymbolmap_paths: Vec<PathBuf>,
        linking: Linking,
        architectures: BTreeSet<Architecture>,
        status: BinaryStatus,
    },
    Bundle {
        path: PathBuf,
    },
    /// The output of another build unit.
    Product {
        target: String,
        product_name: String,
        platform_filters: PlatformFilters,
    },
    Sdk {
        path: PathBuf,
        status: SdkStatus,
        source: SdkSource,
    },
}

impl DependencyReference {
    /// Path of the precompiled artifact, for references that have one.
    pub fn precompiled_path(&self) -> Option<&Path> {
        match self {
            DependencyReference::XcFramework { path, .. }
            | DependencyReference::Library { path, .. }
            | DependencyReference::Framework { path, .. } => Some(path.as_path()),
            DependencyReference::Bundle { .. }
            | DependencyReference::Product { .. }
            | DependencyReference::Sdk { .. } => None,
        }
    }

    /// Product kind of a precompiled framework or library. Always derived from
    /// the linking mode.
    pub fn product(&self) -> Option<Product> {
        match self {
            DependencyReference::Library { linking, .. } => Some(Product::library(*linking)),
            DependencyReference::Framework { linking, .. } => Some(Product::framework(*linking)),
            DependencyReference::XcFramework { .. }
            | DependencyReference::Bundle { .. }
            | DependencyReference::Product { .. }
            | DependencyReference::Sdk { .. } => None,
        }
    }

    /// The binary that gets linked. For an xcframework this is its primary binary.
    pub fn binary_path(&self) -> Option<&Path> {
        match self {
            DependencyReference::XcFramework {
                primary_binary_path,
                ..
            } => Some(primary_binary_path.as_path()),
            DependencyReference::Framework { binary_path, .. } => Some(binary_path.as_path()),
            DependencyReference::Library { path, .. } => Some(path.as_path()),
            DependencyReference::Bundle { .. }
            | DependencyReference::Product { .. }
            | DependencyReference::Sdk { .. } => None,
        }
    }

    pub fn key(&self) -> ReferenceKey<'_> {
        reduce_key(self)
    }
}

impl PartialEq for DependencyReference {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DependencyReference {}

impl PartialOrd for DependencyReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DependencyReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for DependencyReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl Display for DependencyReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyReference::XcFramework { path, status, .. } => {
                write!(f, "xcframework {} ({:?})", path.display(), status)
            }
            DependencyReference::Library { path, linking, .. } => {
                write!(f, "{} {}", Product::library(*linking), path.display())
            }
            DependencyReference::Framework { path, linking, .. } => {
                write!(f, "{} {}", Product::framework(*linking), path.display())
            }
            DependencyReference::Bundle { path } => write!(f, "bundle {}", path.display()),
            DependencyReference::Product {
                target,
                product_name,
                platform_filters,
            } => {
                write!(f, "product {} ({})", product_name, target)?;
                if !platform_filters.is_empty() {
                    let filters = platform_filters
                        .iter()
                        .map(|filter| filter.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    write!(f, " [{}]", filters)?;
                }
                Ok(())
            }
            DependencyReference::Sdk { path, .. } => write!(f, "sdk {}", path.display()),
        }
    }
}
