use std::path::Path;

use crate::model::PlatformFilters;

use super::DependencyReference;

/// The part of a [DependencyReference] that decides its identity and order.
///
/// Variant declaration order is the sort order across kinds. A product with
/// platform filters is its own variant so it never merges with, and always
/// sorts after, the unfiltered product of the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReferenceKey<'a> {
    Sdk(&'a Path),
    Library(&'a Path),
    Framework(&'a Path),
    XcFramework(&'a Path),
    Bundle(&'a Path),
    Product {
        target: &'a str,
        product_name: &'a str,
    },
    ProductWithPlatformFilters {
        target: &'a str,
        product_name: &'a str,
        platform_filters: &'a PlatformFilters,
    },
}

pub fn reduce_key(reference: &DependencyReference) -> ReferenceKey<'_> {
    match reference {
        DependencyReference::Sdk { path, .. } => ReferenceKey::Sdk(path),
        DependencyReference::Library { path, .. } => ReferenceKey::Library(path),
        DependencyReference::Framework { path, .. } => ReferenceKey::Framework(path),
        DependencyReference::XcFramework { path, .. } => ReferenceKey::XcFramework(path),
        DependencyReference::Bundle { path } => ReferenceKey::Bundle(path),
        DependencyReference::Product {
            target,
            product_name,
            platform_filters,
        } if platform_filters.is_empty() => ReferenceKey::Product {
            target,
            product_name,
        },
        DependencyReference::Product {
            target,
            product_name,
            platform_filters,
        } => ReferenceKey::ProductWithPlatformFilters {
            target,
            product_name,
            platform_filters,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::{PlatformFilter, SdkSource, SdkStatus};

    use pretty_assertions::assert_eq;

    #[test]
    fn framework_key_is_its_path() {
        let reference = DependencyReference::Framework {
            path: "/A.framework".into(),
            binary_path: "/A.framework/A".into(),
            is_carthage: true,
            dsym_path: Some("/A.framework.dSYM".into()),
            bcsymbolmap_paths: vec!["/A.bcsymbolmap".into()],
            linking: crate::model::Linking::Dynamic,
            architectures: BTreeSet::new(),
            status: Default::default(),
        };
        assert_eq!(
            reduce_key(&reference),
            ReferenceKey::Framework(Path::new("/A.framework"))
        );
    }

    #[test]
    fn sdk_key_drops_status_and_source() {
        let reference = DependencyReference::Sdk {
            path: "/XCTest.framework".into(),
            status: SdkStatus::Optional,
            source: SdkSource::Developer,
        };
        assert_eq!(
            reduce_key(&reference),
            ReferenceKey::Sdk(Path::new("/XCTest.framework"))
        );
    }

    #[test]
    fn product_key_depends_on_filters() {
        let unfiltered = DependencyReference::Product {
            target: "Foo".to_string(),
            product_name: "Foo.framework".to_string(),
            platform_filters: BTreeSet::new(),
        };
        let filtered = DependencyReference::Product {
            target: "Foo".to_string(),
            product_name: "Foo.framework".to_string(),
            platform_filters: BTreeSet::from([PlatformFilter::Ios]),
        };
        assert_eq!(
            reduce_key(&unfiltered),
            ReferenceKey::Product {
                target: "Foo",
                product_name: "Foo.framework"
            }
        );
        assert!(matches!(
            reduce_key(&filtered),
            ReferenceKey::ProductWithPlatformFilters { target: "Foo", .. }
        ));
    }
}
