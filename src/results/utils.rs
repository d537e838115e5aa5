use crate::{model::Method, static_analysis::code::Category};
use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::{collections::BTreeMap, fmt, fs, path::Path, result::Result as StdResult};

/// A method implicated by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    category: Category,
    class: String,
    method: String,
    descriptor: String,
    evidence: Option<String>,
}

impl Finding {
    /// Creates a new finding for the given caller.
    pub fn new(category: Category, method: &Method, evidence: Option<String>) -> Self {
        Self {
            category,
            class: method.class_name().to_owned(),
            method: method.name().to_owned(),
            descriptor: method.descriptor().to_owned(),
            evidence,
        }
    }

    /// Gets the category of the finding.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Gets the name of the class of the implicated method.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Gets the name of the implicated method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Gets the descriptor of the implicated method.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Gets the text that qualified the method, if any.
    pub fn evidence(&self) -> Option<&str> {
        self.evidence.as_deref()
    }

    /// Whether both findings implicate the same method in the same category.
    pub fn same_site(&self, other: &Self) -> bool {
        self.category == other.category
            && self.class == other.class
            && self.method == other.method
            && self.descriptor == other.descriptor
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class, self.method)
    }
}

impl Serialize for Finding {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Findings of every rule, bucketed by category in insertion order.
#[derive(Debug, Default, Clone)]
pub struct FindingSet {
    buckets: BTreeMap<Category, Vec<Finding>>,
}

impl FindingSet {
    /// Adds a finding, unless the same method is already in its category.
    ///
    /// Returns whether the finding was added.
    pub fn add(&mut self, finding: Finding) -> bool {
        let bucket = self.buckets.entry(finding.category()).or_default();
        if bucket.iter().any(|f| f.same_site(&finding)) {
            false
        } else {
            bucket.push(finding);
            true
        }
    }

    /// Gets the findings of a category.
    pub fn get(&self, category: Category) -> &[Finding] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of findings.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether there are no findings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hashes of the analyzed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerPrint {
    md5: [u8; 16],
    sha1: [u8; 20],
    sha256: [u8; 32],
}

impl FingerPrint {
    /// Creates a new fingerprint.
    pub fn new<P: AsRef<Path>>(package: P) -> Result<Self> {
        let buffer = fs::read(package.as_ref())
            .with_context(|| format!("could not read `{}`", package.as_ref().display()))?;
        Ok(Self::from_bytes(&buffer))
    }

    /// Computes the fingerprint of the given contents.
    pub fn from_bytes(buffer: &[u8]) -> Self {
        let mut fingerprint = Self {
            md5: md5::compute(buffer).0,
            sha1: [0; 20],
            sha256: [0; 32],
        };
        fingerprint
            .sha1
            .copy_from_slice(Sha1::digest(buffer).as_slice());
        fingerprint
            .sha256
            .copy_from_slice(Sha256::digest(buffer).as_slice());
        fingerprint
    }
}

impl Serialize for FingerPrint {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut ser_struct = serializer.serialize_struct("fingerprint", 3)?;
        ser_struct.serialize_field("md5", &hex::encode(self.md5))?;
        ser_struct.serialize_field("sha1", &hex::encode(self.sha1))?;
        ser_struct.serialize_field("sha256", &hex::encode(self.sha256))?;
        ser_struct.end()
    }
}
