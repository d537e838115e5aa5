//! Permission and capability usage consistency.
//!
//! VR runtimes expose body, hand, eye and face tracking through script APIs, but the data is
//! only available to applications declaring the matching permission. An application calling
//! one of those APIs without declaring its permission is flagged.

use super::manifest::PermissionChecklist;
use crate::{
    criticality::Criticality, print_vulnerability, print_warning, results::Results, Config,
};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};

/// Name of the script metadata listing in the payment scanner working folder.
pub const USAGE_FILE: &str = "script.json";

/// Sensitive capability, the script API giving access to it and the permission it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    name: &'static str,
    api: &'static str,
    permission: &'static str,
}

impl Capability {
    /// Gets the capability name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the script API signature.
    pub fn api(&self) -> &'static str {
        self.api
    }

    /// Gets the short name of the required permission.
    pub fn permission(&self) -> &'static str {
        self.permission
    }
}

/// Tracking capabilities of the Oculus integration.
pub const CAPABILITIES: &[Capability] = &[
    Capability {
        name: "hand",
        api: "OVRHand$$OVRSkeleton.IOVRSkeletonDataProvider.GetSkeletonPoseData",
        permission: "HAND_TRACKING",
    },
    Capability {
        name: "body",
        api: "OVRBody$$OVRSkeletonRenderer.IOVRSkeletonRendererDataProvider.GetSkeletonRendererData",
        permission: "BODY_TRACKING",
    },
    Capability {
        name: "eye",
        api: "OVREyeGaze$$CalculateEyeRotation",
        permission: "EYE_TRACKING",
    },
    Capability {
        name: "face",
        api: "OVRFaceExpressions$$ToArray",
        permission: "FACE_TRACKING",
    },
];

/// Script metadata listing.
#[derive(Debug, Default, Deserialize)]
pub struct UsageListing {
    #[serde(rename = "ScriptMethod")]
    #[serde(default)]
    script_methods: Vec<ScriptMethod>,
}

#[derive(Debug, Deserialize)]
struct ScriptMethod {
    #[serde(rename = "Name")]
    name: String,
}

impl UsageListing {
    /// Loads a listing from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("could not read `{}`", path.as_ref().display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("`{}` is not a valid script listing", path.as_ref().display()))
    }

    /// Creates a listing from the names of the invoked APIs.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script_methods: names
                .into_iter()
                .map(|name| ScriptMethod { name: name.into() })
                .collect(),
        }
    }

    /// Gets the set of invoked API names.
    fn names(&self) -> HashSet<&str> {
        self.script_methods.iter().map(|m| m.name.as_str()).collect()
    }
}

/// A capability used without its permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    capability: &'static str,
    api: &'static str,
    permission: &'static str,
}

impl Mismatch {
    /// Gets the capability name.
    pub fn capability(&self) -> &str {
        self.capability
    }

    /// Gets the missing permission.
    pub fn permission(&self) -> &str {
        self.permission
    }
}

/// Checks the listing against the declared dangerous permissions.
///
/// At most one mismatch is emitted per capability.
pub fn check(
    usage: &UsageListing,
    permissions: &PermissionChecklist,
    capabilities: &[Capability],
) -> Vec<Mismatch> {
    let used = usage.names();
    capabilities
        .iter()
        .filter(|capability| used.contains(capability.api))
        .filter(|capability| !permissions.declares_dangerous(capability.permission))
        .map(|capability| Mismatch {
            capability: capability.name,
            api: capability.api,
            permission: capability.permission,
        })
        .collect()
}

/// Runs the consistency check for the artifact with the given base name.
///
/// Without a script listing, nothing is checked.
pub fn analysis(
    base_name: &str,
    permissions: &PermissionChecklist,
    config: &Config,
    results: &mut Results,
) {
    let path = config
        .payment()
        .results_folder()
        .join(base_name)
        .join(USAGE_FILE);
    if !path.is_file() {
        debug!("no script listing at `{}`", path.display());
        results.set_inconsistencies(Vec::new());
        return;
    }

    let usage = match UsageListing::from_file(&path) {
        Ok(usage) => usage,
        Err(e) => {
            print_warning(format!("the consistency check will be skipped: {:#}", e));
            results.set_inconsistencies(Vec::new());
            return;
        }
    };

    let mismatches = check(&usage, permissions, CAPABILITIES);
    if !config.is_quiet() && Criticality::High >= config.min_criticality() {
        for mismatch in &mismatches {
            print_vulnerability(
                format!(
                    "the application reads {} tracking data without requesting the {} \
                     permission",
                    mismatch.capability, mismatch.permission
                ),
                Criticality::High,
            );
        }
    }
    results.set_inconsistencies(mismatches);
}

#[cfg(test)]
mod tests {
    use super::{check, UsageListing, CAPABILITIES};
    use crate::static_analysis::manifest::{PermissionChecklist, PermissionTable};

    const HAND_API: &str = "OVRHand$$OVRSkeleton.IOVRSkeletonDataProvider.GetSkeletonPoseData";

    #[test]
    fn it_flags_hand_tracking_without_permission() {
        let table = PermissionTable::default();
        let permissions = PermissionChecklist::classify(
            &table,
            &["android.permission.INTERNET", "com.oculus.permission.EYE_TRACKING"],
        );
        let usage = UsageListing::from_names(vec![
            HAND_API,
            HAND_API,
            "OVREyeGaze$$CalculateEyeRotation",
            "OVRPlugin$$GetVersion",
        ]);

        let mismatches = check(&usage, &permissions, CAPABILITIES);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].capability(), "hand");
        assert_eq!(mismatches[0].permission(), "HAND_TRACKING");
    }

    #[test]
    fn it_accepts_declared_permissions() {
        let table = PermissionTable::default();
        let permissions =
            PermissionChecklist::classify(&table, &["com.oculus.permission.HAND_TRACKING"]);
        let usage = UsageListing::from_names(vec![HAND_API]);

        assert!(check(&usage, &permissions, CAPABILITIES).is_empty());
    }

    #[test]
    fn it_reads_script_listings() {
        let usage: UsageListing = serde_json::from_str(
            r#"{"ScriptMethod": [
                { "Address": 1234, "Name": "OVRFaceExpressions$$ToArray", "Signature": "" }
            ]}"#,
        )
        .unwrap();
        let permissions = PermissionChecklist::default();

        let mismatches = check(&usage, &permissions, CAPABILITIES);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].capability(), "face");
    }
}
