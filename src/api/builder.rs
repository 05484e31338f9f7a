use std::{env, path::PathBuf};

use crate::Xcgen;

#[derive(Default)]
pub struct XcgenBuilder {
    // The manifest path is relative to `root`
    root: Option<PathBuf>,
    manifest_file_name: Option<PathBuf>,
    lint_concurrency: Option<usize>,
    strict: bool,
}

impl XcgenBuilder {
    /// Project root directory.
    ///
    /// Defaults to the current directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Name of the manifest toml file.
    ///
    /// Defaults to `xcgen.toml`.
    pub fn manifest_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_file_name = Some(path.into());
        self
    }

    /// Maximum number of projects and targets linted at once.
    ///
    /// Defaults to linting all of them at once.
    pub fn lint_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.lint_concurrency = concurrency;
        self
    }

    /// Whether warnings block generation like errors do.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn try_build(self) -> anyhow::Result<Xcgen> {
        let Self {
            root,
            manifest_file_name,
            lint_concurrency,
            strict,
        } = self;
        let root = match root {
            Some(root) => root,
            None => env::current_dir()?,
        };

        let manifest_file_name = manifest_file_name.unwrap_or_else(|| PathBuf::from("xcgen.toml"));

        Ok(Xcgen {
            root,
            manifest_file_name,
            lint_concurrency,
            strict,
        })
    }
}
