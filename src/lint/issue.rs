use std::{collections::BTreeMap, fmt::Display, path::PathBuf};

use log::{error, info, warn};
use thiserror::Error;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Ord, PartialOrd)]
pub enum Severity {
    /// Reported but does not block generation.
    Warning,
    /// Blocks generation once every issue has been collected.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LintingIssue {
    pub reason: String,
    pub severity: Severity,
}

impl LintingIssue {
    pub fn new(reason: impl Into<String>, severity: Severity) -> Self {
        LintingIssue {
            reason: reason.into(),
            severity,
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Error)
    }

    pub fn warning(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Warning)
    }
}

impl Display for LintingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

/// The project or target a list of issues belongs to.
///
/// Units are identified by their position in the manifest, so projects sharing
/// a path or targets sharing a name keep separate issue lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LintedUnit {
    Project {
        index: usize,
        path: PathBuf,
    },
    Target {
        project_index: usize,
        index: usize,
        project_path: PathBuf,
        name: String,
    },
}

impl LintedUnit {
    pub fn project(index: usize, path: impl Into<PathBuf>) -> Self {
        LintedUnit::Project {
            index,
            path: path.into(),
        }
    }

    pub fn target(
        project_index: usize,
        index: usize,
        project_path: impl Into<PathBuf>,
        name: impl Into<String>,
    ) -> Self {
        LintedUnit::Target {
            project_index,
            index,
            project_path: project_path.into(),
            name: name.into(),
        }
    }
}

impl Display for LintedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintedUnit::Project { path, .. } => write!(f, "project {}", path.display()),
            LintedUnit::Target {
                project_path, name, ..
            } => {
                write!(f, "target {} ({})", name, project_path.display())
            }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Linting failed with {errors} error(s) and {warnings} warning(s)")]
pub struct LintingFailed {
    pub errors: usize,
    pub warnings: usize,
}

/// Every issue found in one lint pass, keyed by the unit it was found on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    units: BTreeMap<LintedUnit, Vec<LintingIssue>>,
}

impl LintReport {
    /// Records the issues of a unit, after any already recorded for it.
    pub fn insert(&mut self, unit: LintedUnit, issues: Vec<LintingIssue>) {
        self.units.entry(unit).or_default().extend(issues);
    }

    pub fn get(&self, unit: &LintedUnit) -> Option<&[LintingIssue]> {
        self.units.get(unit).map(Vec::as_slice)
    }

    /// All issues, units in order and issues in the order they were found.
    pub fn issues(&self) -> impl Iterator<Item = (&LintedUnit, &LintingIssue)> {
        self.units
            .iter()
            .flat_map(|(unit, issues)| issues.iter().map(move |issue| (unit, issue)))
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues()
            .filter(|(_, issue)| issue.severity == severity)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.issues().next().is_none()
    }

    /// Logs every issue and fails if any of them blocks generation. In strict
    /// mode warnings block too.
    pub fn ensure_passed(&self, strict: bool) -> Result<(), LintingFailed> {
        for (unit, issue) in self.issues() {
            match issue.severity {
                Severity::Warning => warn!("{unit}: {issue}"),
                Severity::Error => error!("{unit}: {issue}"),
            }
        }

        let errors = self.count(Severity::Error);
        let warnings = self.count(Severity::Warning);
        if errors > 0 || (strict && warnings > 0) {
            return Err(LintingFailed { errors, warnings });
        }
        if warnings == 0 {
            info!("No linting issues found");
        }
        Ok(())
    }
}
