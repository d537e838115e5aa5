//! External analyzers.
//!
//! The taint solver and the payment scanner run out of process. They only communicate through
//! the reports they leave on disk, which the static analysis modules read afterwards.

use crate::{error, get_package_name, Config};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// An analyzer running out of process over one artifact.
pub trait ExternalAnalyzer: Send + Sync {
    /// Name of the tool, used in logs and warnings.
    fn name(&self) -> &str;

    /// Runs the tool over the artifact, blocking until it exits.
    ///
    /// A non-zero exit status or any error output is reported as
    /// [`error::Kind::ExternalToolFailure`].
    fn run(&self, artifact: &Path, config: &Config) -> Result<()>;
}

/// FlowDroid taint analyzer.
#[derive(Debug, Clone)]
pub struct FlowDroid {
    jar: PathBuf,
    android_sdk: PathBuf,
    sources_and_sinks: Option<PathBuf>,
}

impl FlowDroid {
    /// Creates the analyzer from the configuration, if both the JAR and the SDK are configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let taint = config.taint();
        Some(Self {
            jar: taint.jar()?.to_path_buf(),
            android_sdk: taint.android_sdk()?.to_path_buf(),
            sources_and_sinks: taint.sources_and_sinks().map(Path::to_path_buf),
        })
    }

    fn command(&self, artifact: &Path, output: &Path) -> Command {
        let mut command = Command::new("java");
        let _ = command
            .arg("-jar")
            .arg(&self.jar)
            .arg("-p")
            .arg(self.android_sdk.join("platforms"))
            .arg("-a")
            .arg(artifact)
            .args(&["-aa", "FLOWSENSITIVE"])
            .args(&["-al", "1000"])
            .args(&["-cg", "AUTO"])
            .args(&["-ds", "CONTEXTFLOWSENSITIVE"])
            .args(&["-mc", "1000"])
            .args(&["-md", "1000"])
            .args(&["-ct", "3600"])
            .args(&["-dt", "3600"])
            .args(&["-sf", "CONTEXTFLOWSENSITIVE"])
            .arg("-r")
            .args(&["-pa", "CONTEXTSENSITIVE"]);
        if let Some(sources_and_sinks) = &self.sources_and_sinks {
            let _ = command.arg("-s").arg(sources_and_sinks);
        }
        let _ = command.arg("-o").arg(output);
        command
    }
}

impl ExternalAnalyzer for FlowDroid {
    fn name(&self) -> &str {
        "FlowDroid"
    }

    fn run(&self, artifact: &Path, config: &Config) -> Result<()> {
        let output = config.taint().results_folder();
        fs::create_dir_all(output)
            .with_context(|| format!("could not create `{}`", output.display()))?;

        execute(self.name(), self.command(artifact, output))
    }
}

/// PaymentScope in-app purchase scanner.
#[derive(Debug, Clone)]
pub struct PaymentScope {
    script: PathBuf,
}

impl PaymentScope {
    /// Creates the scanner from the configuration, if its script is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.payment().script().map(|script| Self {
            script: script.to_path_buf(),
        })
    }

    fn command(&self, artifact: &Path, output: &Path, base_name: &str) -> Command {
        let mut command = Command::new("python");
        let _ = command
            .arg(&self.script)
            .arg("-n")
            .arg(artifact)
            .arg("-o")
            .arg(output)
            .arg("-p")
            .arg(base_name);
        command
    }
}

impl ExternalAnalyzer for PaymentScope {
    fn name(&self) -> &str {
        "PaymentScope"
    }

    fn run(&self, artifact: &Path, config: &Config) -> Result<()> {
        let base_name = get_package_name(artifact);
        let output = config.payment().results_folder().join(&base_name);
        fs::create_dir_all(&output)
            .with_context(|| format!("could not create `{}`", output.display()))?;

        execute(self.name(), self.command(artifact, &output, &base_name))
    }
}

/// Gets the analyzers enabled by the configuration.
pub fn configured_analyzers(config: &Config) -> Vec<Box<dyn ExternalAnalyzer>> {
    let mut analyzers: Vec<Box<dyn ExternalAnalyzer>> = Vec::new();
    if !config.runs_external() {
        return analyzers;
    }

    match FlowDroid::from_config(config) {
        Some(flowdroid) => analyzers.push(Box::new(flowdroid)),
        None => debug!("the taint analyzer is not configured, existing reports will be used"),
    }
    match PaymentScope::from_config(config) {
        Some(scope) => analyzers.push(Box::new(scope)),
        None => debug!("the payment scanner is not configured, existing reports will be used"),
    }
    analyzers
}

/// Runs a command to completion and checks its exit status and error output.
fn execute(tool: &str, mut command: Command) -> Result<()> {
    info!("Running {}…", tool.italic());
    debug!("{:?}", command);

    let output = command.output().map_err(|e| error::Kind::ExternalToolFailure {
        tool: tool.to_owned(),
        message: format!("could not be executed: {}", e),
    })?;

    if !output.status.success() {
        return Err(error::Kind::ExternalToolFailure {
            tool: tool.to_owned(),
            message: format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
        .into());
    }
    if !output.stderr.is_empty() {
        return Err(error::Kind::ExternalToolFailure {
            tool: tool.to_owned(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        }
        .into());
    }

    Ok(())
}
