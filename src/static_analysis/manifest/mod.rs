//! Module containing the manifest analysis logic.

mod permission;
mod permission_checklist;
#[cfg(test)]
mod tests;

pub use self::{
    permission::{
        Classification, Namespace, PermissionEntry, PermissionTable, PermissionTier,
        STANDARD_PREFIX, VENDOR_PREFIX,
    },
    permission_checklist::PermissionChecklist,
};

use crate::{criticality::Criticality, error, print_vulnerability, results::Results, Config};
use anyhow::Error;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Performs the manifest analysis.
///
/// Sets the application identity in the results, classifies the declared permissions and flags
/// risky application attributes. Returns the permission checklist, used later by the permission
/// consistency check.
pub fn analysis(
    manifest: &Manifest,
    table: &PermissionTable,
    config: &Config,
    results: &mut Results,
) -> PermissionChecklist {
    debug!("analyzing the manifest of `{}`", manifest.package());

    results.set_app_package(manifest.package());
    results.set_app_label(manifest.app_name());
    results.set_app_version(manifest.version_name());
    results.set_app_version_num(manifest.version_code());
    results.set_app_min_sdk(manifest.min_sdk());
    results.set_app_target_sdk(manifest.target_sdk());

    let checklist = PermissionChecklist::classify(table, manifest.permissions());
    for unknown in checklist.tier(PermissionTier::Other) {
        debug!("unrecognized permission declared: {}", unknown);
    }

    let flags = ManifestFlags {
        debuggable: manifest.is_debug(),
        allow_backup: manifest.allows_backup(),
        uses_cleartext_traffic: manifest.uses_cleartext_traffic(),
    };

    if flags.debuggable && Criticality::Critical >= config.min_criticality() {
        print_vulnerability(
            "The application is in debug mode. This allows any malicious person to inject \
             arbitrary code in the application.",
            Criticality::Critical,
        );
    }
    if flags.allow_backup && Criticality::Medium >= config.min_criticality() {
        print_vulnerability(
            "This option allows backups of the application data via adb. Malicious people with \
             physical access could use adb to get private data of your app into their PC.",
            Criticality::Medium,
        );
    }
    if flags.uses_cleartext_traffic && Criticality::Medium >= config.min_criticality() {
        print_vulnerability(
            "The application allows cleartext network traffic.",
            Criticality::Medium,
        );
    }

    results.set_manifest_flags(flags);
    results.set_activities_launch_mode(manifest.activities_launch_mode());
    results.set_permissions(checklist.clone());

    checklist
}

/// Manifest information, as exported together with the program model.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Manifest {
    package: String,
    app_name: String,
    version_code: u32,
    version_name: String,
    min_sdk: u32,
    target_sdk: Option<u32>,
    permissions: Vec<String>,
    debuggable: bool,
    allow_backup: bool,
    uses_cleartext_traffic: bool,
    activities: Vec<Activity>,
}

impl Manifest {
    /// Gets the application package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Gets the application name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Gets the version code.
    pub fn version_code(&self) -> u32 {
        self.version_code
    }

    /// Gets the version name.
    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    /// Gets the minimum SDK.
    pub fn min_sdk(&self) -> u32 {
        self.min_sdk
    }

    /// Gets the target SDK, which defaults to the minimum SDK when not declared.
    pub fn target_sdk(&self) -> u32 {
        self.target_sdk.unwrap_or(self.min_sdk)
    }

    /// Gets the declared permissions, fully qualified.
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Whether the application is debuggable.
    pub fn is_debug(&self) -> bool {
        self.debuggable
    }

    /// Whether the application allows adb backups.
    pub fn allows_backup(&self) -> bool {
        self.allow_backup
    }

    /// Whether the application allows cleartext traffic.
    pub fn uses_cleartext_traffic(&self) -> bool {
        self.uses_cleartext_traffic
    }

    /// Resolves the launch mode of every activity, keyed by fully qualified activity name.
    pub fn activities_launch_mode(&self) -> BTreeMap<String, LaunchMode> {
        self.activities
            .iter()
            .map(|activity| {
                let name = if activity.name.starts_with('.') {
                    format!("{}{}", self.package, activity.name)
                } else {
                    activity.name.clone()
                };
                let mode = match activity.launch_mode.as_deref() {
                    None => LaunchMode::Standard,
                    Some(mode) => LaunchMode::from_str(mode).unwrap_or_else(|_| {
                        warn!("unknown launch mode `{}` for activity `{}`", mode, name);
                        LaunchMode::Standard
                    }),
                };
                (name, mode)
            })
            .collect()
    }
}

/// Activity declaration.
#[derive(Debug, Clone, Deserialize)]
struct Activity {
    name: String,
    #[serde(default)]
    launch_mode: Option<String>,
}

/// Risky attributes of the `<application>` element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestFlags {
    /// `android:debuggable="true"`
    pub debuggable: bool,
    /// `android:allowBackup="true"`
    pub allow_backup: bool,
    /// `android:usesCleartextTraffic="true"`
    pub uses_cleartext_traffic: bool,
}

/// Launch mode of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaunchMode {
    /// `standard`
    #[serde(rename = "standard")]
    Standard,
    /// `singleTop`
    #[serde(rename = "singleTop")]
    SingleTop,
    /// `singleTask`
    #[serde(rename = "singleTask")]
    SingleTask,
    /// `singleInstance`
    #[serde(rename = "singleInstance")]
    SingleInstance,
}

impl FromStr for LaunchMode {
    type Err = Error;

    /// Accepts both the attribute names and the numeric codes of binary manifests.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" | "0" => Ok(Self::Standard),
            "singleTop" | "1" => Ok(Self::SingleTop),
            "singleTask" | "2" => Ok(Self::SingleTask),
            "singleInstance" | "3" => Ok(Self::SingleInstance),
            _ => Err(error::Kind::Parse.into()),
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "standard",
            Self::SingleTop => "singleTop",
            Self::SingleTask => "singleTask",
            Self::SingleInstance => "singleInstance",
        };
        f.write_str(name)
    }
}
