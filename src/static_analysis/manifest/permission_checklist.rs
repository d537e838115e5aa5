//! Module implementing a checklist for the declared permissions, bucketed by risk tier.

use super::permission::{Classification, PermissionTable, PermissionTier};
use serde::Serialize;

/// Declared permissions of an application, grouped by tier.
///
/// Known permissions are stored by short name (`INTERNET`), unknown ones by their full declared
/// name. Every distinct unknown permission is kept.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionChecklist {
    dangerous: Vec<String>,
    normal: Vec<String>,
    signature: Vec<String>,
    #[serde(rename = "signatureOrSystem")]
    signature_or_system: Vec<String>,
    others: Vec<String>,
}

impl PermissionChecklist {
    /// Classifies every declared permission.
    pub fn classify<I, S>(table: &PermissionTable, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checklist = Self::default();
        for permission in permissions {
            checklist.add(table, permission.as_ref());
        }
        checklist
    }

    /// Adds one declared permission to its bucket.
    pub fn add(&mut self, table: &PermissionTable, permission: &str) {
        let (tier, name) = match table.classify(permission) {
            Classification::Known(entry) => (entry.tier(), entry.name()),
            Classification::Unknown(name) => (PermissionTier::Other, name),
        };

        let bucket = self.bucket_mut(tier);
        if !bucket.iter().any(|p| p == name) {
            bucket.push(name.to_owned());
        }
    }

    /// Gets the permissions of the given tier.
    pub fn tier(&self, tier: PermissionTier) -> &[String] {
        match tier {
            PermissionTier::Dangerous => &self.dangerous,
            PermissionTier::Normal => &self.normal,
            PermissionTier::Signature => &self.signature,
            PermissionTier::SignatureOrSystem => &self.signature_or_system,
            PermissionTier::Other => &self.others,
        }
    }

    fn bucket_mut(&mut self, tier: PermissionTier) -> &mut Vec<String> {
        match tier {
            PermissionTier::Dangerous => &mut self.dangerous,
            PermissionTier::Normal => &mut self.normal,
            PermissionTier::Signature => &mut self.signature,
            PermissionTier::SignatureOrSystem => &mut self.signature_or_system,
            PermissionTier::Other => &mut self.others,
        }
    }

    /// Whether the given short name was declared as a dangerous permission.
    pub fn declares_dangerous(&self, short_name: &str) -> bool {
        self.dangerous.iter().any(|p| p == short_name)
    }

    /// Total number of declared permissions.
    pub fn len(&self) -> usize {
        self.dangerous.len()
            + self.normal.len()
            + self.signature.len()
            + self.signature_or_system.len()
            + self.others.len()
    }

    /// Whether no permission was declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
