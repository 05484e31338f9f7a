use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

use crate::model::{manifest::Manifest, settings::Settings, DeploymentTarget, Platform};

use super::{FileSystem, LintReport, LintedUnit, LintingIssue};

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Could not check whether {} exists: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Linting was interrupted before every unit finished: {0}")]
    Interrupted(#[from] JoinError),
}

type LintOutcome = (LintedUnit, Result<Vec<LintingIssue>, LintError>);

/// Waits for one lint task and records its issues. A failed, panicked or
/// cancelled task fails the whole pass.
async fn join_one(
    tasks: &mut JoinSet<LintOutcome>,
    report: &mut LintReport,
) -> Result<(), LintError> {
    if let Some(joined) = tasks.join_next().await {
        let (unit, issues) = joined?;
        let issues = issues?;
        debug!("Linted {unit}: {} issue(s)", issues.len());
        report.insert(unit, issues);
    }
    Ok(())
}

/// Validates project and target settings before generation.
pub struct SettingsLinter<F> {
    file_system: Arc<F>,
}

impl<F> Clone for SettingsLinter<F> {
    fn clone(&self) -> Self {
        Self {
            file_system: Arc::clone(&self.file_system),
        }
    }
}

impl<F: FileSystem> SettingsLinter<F> {
    pub fn new(file_system: F) -> Self {
        Self {
            file_system: Arc::new(file_system),
        }
    }

    /// Lints the settings of the project at `project_path`.
    pub async fn lint_project(
        &self,
        settings: &Settings,
        project_path: &Path,
    ) -> Result<Vec<LintingIssue>, LintError> {
        let mut issues = self.lint_configuration_files(settings).await?;
        if settings.configurations.is_empty() {
            issues.push(LintingIssue::error(format!(
                "The project at path {} has no configurations",
                project_path.display()
            )));
        }
        Ok(issues)
    }

    /// Lints the settings of a target. A target without configurations is fine,
    /// it inherits the ones of its project.
    pub async fn lint_target(
        &self,
        settings: &Settings,
        platform: Option<Platform>,
        deployment_target: Option<&DeploymentTarget>,
    ) -> Result<Vec<LintingIssue>, LintError> {
        let mut issues = self.lint_configuration_files(settings).await?;
        issues.extend(lint_deployment_target(platform, deployment_target));
        Ok(issues)
    }

    /// Lints every project and target of the manifest, at most `concurrency`
    /// at a time. Either every unit is linted or an error is returned.
    pub async fn lint_manifest(
        &self,
        manifest: &Manifest,
        concurrency: usize,
    ) -> Result<LintReport, LintError> {
        let concurrency = concurrency.max(1);
        let mut tasks = JoinSet::new();
        let mut report = LintReport::default();

        for (project_index, project) in manifest.projects.iter().enumerate() {
            if tasks.len() >= concurrency {
                join_one(&mut tasks, &mut report).await?;
            }
            let linter = self.clone();
            let settings = project.settings.clone();
            let path = project.path.clone();
            let unit = LintedUnit::project(project_index, path.clone());
            tasks.spawn(async move {
                let issues = linter.lint_project(&settings, &path).await;
                (unit, issues)
            });

            for (index, target) in project.targets.iter().enumerate() {
                if tasks.len() >= concurrency {
                    join_one(&mut tasks, &mut report).await?;
                }
                let linter = self.clone();
                let target = target.clone();
                let unit =
                    LintedUnit::target(project_index, index, project.path.clone(), &target.name);
                tasks.spawn(async move {
                    let issues = linter
                        .lint_target(
                            &target.settings,
                            target.platform,
                            target.deployment_target.as_ref(),
                        )
                        .await;
                    (unit, issues)
                });
            }
        }

        while !tasks.is_empty() {
            join_one(&mut tasks, &mut report).await?;
        }
        Ok(report)
    }

    async fn lint_configuration_files(
        &self,
        settings: &Settings,
    ) -> Result<Vec<LintingIssue>, LintError> {
        let mut issues = Vec::new();
        let xcconfigs = settings
            .configurations
            .iter()
            .filter_map(|(name, configuration)| {
                let xcconfig = configuration.as_ref()?.xcconfig.as_ref()?;
                Some((name, xcconfig))
            });
        for (name, path) in xcconfigs {
            debug!("Checking {} configuration file {}", name, path.display());
            let exists =
                self.file_system
                    .exists(path)
                    .await
                    .map_err(|source| LintError::FileSystem {
                        path: path.clone(),
                        source,
                    })?;
            if !exists {
                issues.push(LintingIssue::error(format!(
                    "Configuration file not found at path {}",
                    path.display()
                )));
            }
        }
        Ok(issues)
    }
}

fn lint_deployment_target(
    platform: Option<Platform>,
    deployment_target: Option<&DeploymentTarget>,
) -> Option<LintingIssue> {
    let (Some(platform), Some(deployment_target)) = (platform, deployment_target) else {
        return None;
    };
    if deployment_target.platform() == platform {
        return None;
    }
    Some(LintingIssue::error(format!(
        "Found deployment platforms ({}) missing corresponding destination",
        deployment_target.platform().case_value()
    )))
}
