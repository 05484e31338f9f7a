mod file_system;
mod issue;
mod settings;

pub use file_system::{FileSystem, LocalFileSystem};
pub use issue::{LintReport, LintedUnit, LintingFailed, LintingIssue, Severity};
pub use settings::{LintError, SettingsLinter};

#[cfg(test)]
pub(crate) use file_system::testing;
