//! Code analysis module.
//!
//! Every check of this module follows the same algorithm: locate the methods matching a
//! signature pattern, resolve the callers that invoke them, optionally test some evidence in the
//! caller, and record one finding per responsible caller. The checks themselves are data, loaded
//! from the rules file.

mod rule;
#[cfg(test)]
mod tests;

pub use self::rule::{load_rules, parse_rules, Evidence, Reroute, Rule, Target};

use crate::{
    model::{CallSite, ProgramModel},
    print_vulnerability,
    results::{Finding, Results},
    Config,
};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many callers of a matched method are implicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerStrategy {
    /// Stop at the first qualifying caller of each matched method.
    FirstRepresentative,
    /// Record every qualifying caller.
    Exhaustive,
}

impl Default for CallerStrategy {
    fn default() -> Self {
        Self::FirstRepresentative
    }
}

/// Finding bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Raw SQL execution.
    SqlRawQuery,
    /// Encrypted database keyed from the code.
    SqlHardcodedSecret,
    /// External storage or temporary file access.
    ExternalStorage,
    /// Weak hash algorithm.
    WeakHash,
    /// Block cipher in ECB mode.
    EcbMode,
    /// RSA without OAEP padding.
    RsaNoPadding,
    /// Predictable random number generator.
    InsecureRandom,
    /// Remote web view debugging enabled.
    WebViewDebugging,
    /// Overridden web view SSL error handler.
    InsecureWebView,
    /// Overridden hostname verification.
    InsecureCertificateValidation,
    /// Root detection.
    RootDetection,
    /// Usage of superuser libraries.
    RootUsage,
    /// Debugger or emulator detection.
    DebugDetection,
}

impl Category {
    /// Gets the name of the category in the report.
    pub fn key(self) -> &'static str {
        match self {
            Self::SqlRawQuery => "sql_raw_queries",
            Self::SqlHardcodedSecret => "sql_hardcoded_secrets",
            Self::ExternalStorage => "insecure_external_storage",
            Self::WeakHash => "insecure_hash_functions",
            Self::EcbMode => "ecb_mode",
            Self::RsaNoPadding => "rsa_no_padding",
            Self::InsecureRandom => "insecure_random_generator",
            Self::WebViewDebugging => "remote_webview_debugging",
            Self::InsecureWebView => "insecure_webview_implementation",
            Self::InsecureCertificateValidation => "insecure_certificate_validation",
            Self::RootDetection => "root_detections",
            Self::RootUsage => "root_usage",
            Self::DebugDetection => "debug_detections",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Runs every rule against the program and stores the findings in the results.
///
/// Rules are independent: a rule yielding nothing never prevents the others from running.
pub fn analysis<M: ProgramModel + ?Sized>(
    program: &M,
    rules: &[Rule],
    config: &Config,
    results: &mut Results,
) {
    let strategy = config.caller_strategy();
    for rule in rules {
        let findings = rule.apply(program, strategy);
        debug!("rule `{}` produced {} findings", rule.label(), findings.len());

        for finding in findings {
            if !config.is_quiet() {
                print_vulnerability(format!("{}: {}", rule.label(), finding), rule.criticality());
            }
            results.add_finding(finding);
        }
    }
}

/// Finds the callers of every method matching the patterns.
///
/// If `evidence` is given, only the callers containing it are implicated.
pub fn detect_usage<M: ProgramModel + ?Sized>(
    program: &M,
    class_pattern: &Regex,
    name_pattern: &Regex,
    evidence: Option<&Evidence>,
    category: Category,
    strategy: CallerStrategy,
) -> Vec<Finding> {
    resolve_callers(program, class_pattern, name_pattern, strategy, |site| {
        match evidence {
            Some(evidence) => evidence
                .find(program, site.method)
                .map(|text| (category, Some(text))),
            None => Some((category, None)),
        }
    })
}

/// Core of the usage detection.
///
/// `qualify` decides whether an inspectable caller is implicated, and in which category.
pub(crate) fn resolve_callers<'p, M, F>(
    program: &'p M,
    class_pattern: &Regex,
    name_pattern: &Regex,
    strategy: CallerStrategy,
    mut qualify: F,
) -> Vec<Finding>
where
    M: ProgramModel + ?Sized,
    F: FnMut(&CallSite<'p>) -> Option<(Category, Option<String>)>,
{
    let mut findings = Vec::new();

    for target in program.find_methods(class_pattern, name_pattern) {
        for site in program.callers_of(target) {
            if site.class.is_external() || site.method.is_external() {
                continue;
            }
            let (category, evidence) = match qualify(&site) {
                Some(qualified) => qualified,
                None => continue,
            };

            record(&mut findings, Finding::new(category, site.method, evidence));
            if strategy == CallerStrategy::FirstRepresentative {
                break;
            }
        }
    }

    findings
}

/// Finds the methods loading a string of the pool matching the pattern.
pub(crate) fn resolve_referrers<M: ProgramModel + ?Sized>(
    program: &M,
    string_pattern: &Regex,
    category: Category,
    strategy: CallerStrategy,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for string in program.find_strings(string_pattern) {
        for site in program.referrers_of(string) {
            if site.method.is_external() {
                continue;
            }

            let evidence = Some(string.value().to_owned());
            record(&mut findings, Finding::new(category, site.method, evidence));
            if strategy == CallerStrategy::FirstRepresentative {
                break;
            }
        }
    }

    findings
}

/// Adds the finding unless the same caller was already recorded in the same category.
fn record(findings: &mut Vec<Finding>, finding: Finding) {
    if !findings.iter().any(|f| f.same_site(&finding)) {
        findings.push(finding);
    }
}
