use std::path::PathBuf;

use crate::{
    cli::command_handlers::{do_lint, do_references, TargetReferences},
    lint::LintReport,
};

mod builder;

pub use builder::XcgenBuilder;

pub struct Xcgen {
    root: PathBuf,
    manifest_file_name: PathBuf,
    lint_concurrency: Option<usize>,
    strict: bool,
}

impl Xcgen {
    pub fn builder() -> XcgenBuilder {
        XcgenBuilder::default()
    }

    /// Lints every project and target. Fails if an issue blocks generation.
    pub async fn lint(&self) -> anyhow::Result<LintReport> {
        do_lint(
            &self.root,
            &self.manifest_file_name,
            self.lint_concurrency,
            self.strict,
        )
        .await
    }

    /// Lints, then resolves the dependency references of every target
    pub async fn references(&self) -> anyhow::Result<Vec<TargetReferences>> {
        do_references(
            &self.root,
            &self.manifest_file_name,
            self.lint_concurrency,
            self.strict,
        )
        .await
    }
}
