use std::collections::BTreeSet;

use log::debug;
use thiserror::Error;

use crate::{model::graph::DependencyNode, reference::DependencyReference};

/// A node kind that has no build artifact reached the resolver. This is a bug
/// in graph construction, not a user error, and aborts generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot resolve {node} into a dependency reference: {kind} dependencies have no build artifact")]
pub struct UnsupportedDependency {
    pub kind: &'static str,
    pub node: String,
}

impl TryFrom<&DependencyNode> for DependencyReference {
    type Error = UnsupportedDependency;

    fn try_from(node: &DependencyNode) -> Result<Self, Self::Error> {
        match node {
            DependencyNode::Framework {
                path,
                binary_path,
                dsym_path,
                bcsymbolmap_paths,
                linking,
                architectures,
                is_carthage,
                status,
            } => Ok(DependencyReference::Framework {
                path: path.clone(),
                binary_path: binary_path.clone(),
                is_carthage: *is_carthage,
                dsym_path: dsym_path.clone(),
                bcsymbolmap_paths: bcsymbolmap_paths.clone(),
                linking: *linking,
                architectures: architectures.clone(),
                status: *status,
            }),
            DependencyNode::Library {
                path,
                public_headers: _,
                linking,
                architectures,
                swift_module_map: _,
            } => Ok(DependencyReference::Library {
                path: path.clone(),
                linking: *linking,
                architectures: architectures.clone(),
            }),
            DependencyNode::XcFramework {
                path,
                info_plist,
                primary_binary_path,
                available_libraries: _,
                status,
            } => Ok(DependencyReference::XcFramework {
                path: path.clone(),
                info_plist: info_plist.clone(),
                primary_binary_path: primary_binary_path.clone(),
                status: *status,
            }),
            DependencyNode::Bundle { path } => Ok(DependencyReference::Bundle { path: path.clone() }),
            DependencyNode::Target {
                name,
                product_name,
                platform_filters,
            } => Ok(DependencyReference::Product {
                target: name.clone(),
                product_name: product_name.clone(),
                platform_filters: platform_filters.clone(),
            }),
            DependencyNode::Sdk {
                path,
                status,
                source,
            } => Ok(DependencyReference::Sdk {
                path: path.clone(),
                status: *status,
                source: *source,
            }),
            DependencyNode::SourceModule { .. } => Err(UnsupportedDependency {
                kind: node.kind(),
                node: node.to_string(),
            }),
        }
    }
}

/// Materializes one graph node into the reference the project writer links against.
pub fn resolve(node: &DependencyNode) -> Result<DependencyReference, UnsupportedDependency> {
    debug!("Resolving {}", node);
    DependencyReference::try_from(node)
}

/// Resolves every node and returns the references in canonical order, one per
/// identity. When two nodes share an identity the first one wins.
pub fn resolve_all<'a>(
    nodes: impl IntoIterator<Item = &'a DependencyNode>,
) -> Result<BTreeSet<DependencyReference>, UnsupportedDependency> {
    let mut references = BTreeSet::new();
    for node in nodes {
        let reference = resolve(node)?;
        if references.contains(&reference) {
            debug!("Skipping {}, already referenced", node);
            continue;
        }
        references.insert(reference);
    }
    Ok(references)
}
