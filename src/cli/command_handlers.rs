use std::{collections::BTreeSet, path::Path};

use log::{debug, info};

use crate::{
    lint::{LintReport, LocalFileSystem, SettingsLinter},
    model::manifest::Manifest,
    reference::DependencyReference,
    resolver::resolve_all,
};

/// Resolved references of one target, in the order the writer emits them.
#[derive(Debug, Clone)]
pub struct TargetReferences {
    pub project: String,
    pub target: String,
    pub references: BTreeSet<DependencyReference>,
}

/// Handler to lint command
/// Lints every project and target and fails if any issue blocks generation
pub async fn do_lint(
    root: &Path,
    manifest_file_name: &Path,
    concurrency: Option<usize>,
    strict: bool,
) -> anyhow::Result<LintReport> {
    let manifest = load_manifest(root, manifest_file_name).await?;
    lint_manifest(&manifest, concurrency, strict).await
}

/// Handler to references command
/// 1 - Lints the manifest, stopping on blocking issues
/// 2 - Resolves the dependencies of every target
/// 3 - Returns them ordered and deduplicated per target
pub async fn do_references(
    root: &Path,
    manifest_file_name: &Path,
    concurrency: Option<usize>,
    strict: bool,
) -> anyhow::Result<Vec<TargetReferences>> {
    let manifest = load_manifest(root, manifest_file_name).await?;
    lint_manifest(&manifest, concurrency, strict).await?;

    let mut resolved = Vec::new();
    for project in &manifest.projects {
        for target in &project.targets {
            debug!("Resolving dependencies of {}/{}", project.name, target.name);
            let references = resolve_all(&target.dependencies)?;
            resolved.push(TargetReferences {
                project: project.name.clone(),
                target: target.name.clone(),
                references,
            });
        }
    }
    Ok(resolved)
}

async fn lint_manifest(
    manifest: &Manifest,
    concurrency: Option<usize>,
    strict: bool,
) -> anyhow::Result<LintReport> {
    let units = manifest
        .projects
        .iter()
        .map(|project| 1 + project.targets.len())
        .sum::<usize>();
    let concurrency = concurrency.unwrap_or(units);
    info!("Linting {units} project(s) and target(s)...");

    let linter = SettingsLinter::new(LocalFileSystem);
    let report = linter.lint_manifest(manifest, concurrency).await?;
    report.ensure_passed(strict)?;
    Ok(report)
}

async fn load_manifest(root: &Path, manifest_file_name: &Path) -> anyhow::Result<Manifest> {
    Ok(Manifest::from_file(&root.join(manifest_file_name)).await?)
}
