//! Privacy policy consistency.
//!
//! Method names give a hint of the personal data an application handles. Each kind of data
//! found in the code is looked up in the statements extracted from the privacy policy of the
//! application; data handled by the code but never disclosed by the policy is flagged.

use crate::{
    criticality::Criticality,
    error,
    model::{pattern, ProgramModel},
    print_vulnerability, print_warning,
    results::Results,
    Config,
};
use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Personal data looked for in method names.
pub const PII_METHOD_KEYWORDS: &[&str] = &[
    "user", "password", "username", "phone", "id", "email", "location",
];

/// A data practice extracted from a privacy policy.
///
/// The extractor writes one JSON array per line: `[kind, action, entity, data]`. Rows of kind
/// `entity` only name the parties involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    kind: String,
    action: String,
    data: Vec<String>,
}

impl Statement {
    /// Reads a statement from its JSON row.
    fn from_row(row: &[Value]) -> Self {
        let text = |value: Option<&Value>| match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let data = match row.get(3) {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            kind: text(row.get(0)),
            action: text(row.get(1)),
            data,
        }
    }

    /// Whether the statement discloses the collection or use of the given data.
    pub fn discloses(&self, keyword: &str) -> bool {
        self.kind != "entity"
            && !self.action.contains("not")
            && self
                .data
                .iter()
                .any(|data| data.to_lowercase().contains(keyword))
    }
}

/// Statements of the privacy policy of an application.
#[derive(Debug, Default)]
pub struct Policy {
    statements: Vec<Statement>,
}

impl Policy {
    /// Loads the statements extracted from a policy.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("could not open `{}`", path.display()))?;

        let mut statements = Vec::new();
        for (number, line) in BufReader::new(f).lines().enumerate() {
            let line = line.with_context(|| format!("could not read `{}`", path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            let row: Vec<Value> =
                serde_json::from_str(&line).map_err(|e| error::Kind::MalformedExternalReport {
                    path: path.to_path_buf(),
                    message: format!("line {}: {}", number + 1, e),
                })?;
            statements.push(Statement::from_row(&row));
        }

        Ok(Self { statements })
    }

    /// Creates a policy from already extracted statements.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a [Value]>,
    {
        Self {
            statements: rows.into_iter().map(Statement::from_row).collect(),
        }
    }

    /// Whether any statement discloses the given data.
    pub fn discloses(&self, keyword: &str) -> bool {
        self.statements.iter().any(|s| s.discloses(keyword))
    }
}

/// Personal data handled in the code, and whether the policy discloses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiiUsage {
    keyword: String,
    methods: Vec<String>,
    disclosed: bool,
}

impl PiiUsage {
    /// Gets the kind of personal data.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Gets the methods whose name mentions the data, as `Class.method`.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Whether the policy discloses the data.
    pub fn is_disclosed(&self) -> bool {
        self.disclosed
    }
}

/// Finds the inspectable methods whose name contains each keyword, ignoring case.
///
/// Keywords no method mentions are left out.
pub fn sensitive_methods<M: ProgramModel + ?Sized>(
    program: &M,
    keywords: &[&str],
) -> Vec<(String, Vec<String>)> {
    let any_class = match pattern(".*") {
        Ok(regex) => regex,
        Err(e) => {
            debug!("{}", e);
            return Vec::new();
        }
    };

    keywords
        .iter()
        .filter_map(|keyword| {
            let name = pattern(format!("(?i).*{}", regex::escape(keyword))).ok()?;
            let methods: BTreeSet<String> = program
                .find_methods(&any_class, &name)
                .into_iter()
                .filter(|method| !method.is_external())
                .map(|method| method.qualified_name())
                .collect();
            if methods.is_empty() {
                None
            } else {
                Some(((*keyword).to_owned(), methods.into_iter().collect()))
            }
        })
        .collect()
}

/// Checks the personal data handled in the code against the policy.
pub fn check<M: ProgramModel + ?Sized>(
    program: &M,
    policy: &Policy,
    keywords: &[&str],
) -> Vec<PiiUsage> {
    sensitive_methods(program, keywords)
        .into_iter()
        .map(|(keyword, methods)| PiiUsage {
            disclosed: policy.discloses(&keyword),
            keyword,
            methods,
        })
        .collect()
}

/// Runs the policy check for the artifact with the given base name.
///
/// Without extracted policy statements for the artifact, the check does not run.
pub fn analysis<M: ProgramModel + ?Sized>(
    program: &M,
    base_name: &str,
    config: &Config,
    results: &mut Results,
) {
    let path = config
        .policy()
        .results_folder()
        .join(format!("{}.json", base_name));
    if !path.is_file() {
        debug!("no policy statements at `{}`", path.display());
        return;
    }

    let policy = match Policy::from_file(&path) {
        Ok(policy) => policy,
        Err(e) => {
            let warning = format!("the privacy policy check will be skipped: {:#}", e);
            print_warning(&warning);
            results.add_warning(warning);
            return;
        }
    };

    let usages = check(program, &policy, PII_METHOD_KEYWORDS);
    if !config.is_quiet() && Criticality::Medium >= config.min_criticality() {
        for usage in usages.iter().filter(|usage| !usage.disclosed) {
            print_vulnerability(
                format!(
                    "the code handles `{}` data in {} methods, but the privacy policy does not \
                     disclose it",
                    usage.keyword,
                    usage.methods.len()
                ),
                Criticality::Medium,
            );
        }
    }
    results.set_policy_usage(usages);
}

#[cfg(test)]
mod tests {
    use super::{analysis, check, sensitive_methods, Policy, PII_METHOD_KEYWORDS};
    use crate::{
        model::Program,
        results::Results,
        Config,
    };
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Program {
        let mut builder = Program::builder();
        let login = builder.class("Lcom/example/Login;", false);
        let _ = builder.method(login, "checkPassword", "(Ljava/lang/String;)Z", Vec::new(), None);
        let _ = builder.method(login, "getUsername", "()Ljava/lang/String;", Vec::new(), None);
        let _ = builder.method(login, "onCreate", "()V", Vec::new(), None);
        let framework = builder.class("Landroid/location/LocationManager;", true);
        let _ = builder.external_method(framework, "getLastKnownLocation", "()V");
        builder.build()
    }

    fn rows(values: &[Value]) -> Vec<Vec<Value>> {
        values
            .iter()
            .map(|value| value.as_array().cloned().unwrap_or_default())
            .collect()
    }

    #[test]
    fn it_finds_sensitive_method_names() {
        let program = sample();
        let found = sensitive_methods(&program, PII_METHOD_KEYWORDS);
        let keywords: Vec<_> = found.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(keywords, ["user", "password", "username"]);
        assert_eq!(found[1].1, ["Lcom/example/Login;.checkPassword"]);
        assert_eq!(found[2].1, ["Lcom/example/Login;.getUsername"]);
    }

    #[test]
    fn it_checks_the_policy_statements() {
        let program = sample();
        let rows = rows(&[
            json!(["entity", "we", "", "user data"]),
            json!(["practice", "collect", "we", "username and email address"]),
            json!(["practice", "do not share", "we", ["password"]]),
        ]);
        let policy = Policy::from_rows(rows.iter().map(Vec::as_slice));

        let usages = check(&program, &policy, PII_METHOD_KEYWORDS);
        let disclosed: Vec<_> = usages
            .iter()
            .map(|usage| (usage.keyword(), usage.is_disclosed()))
            .collect();
        assert_eq!(
            disclosed,
            [("user", true), ("password", false), ("username", true)]
        );
    }

    #[test]
    fn it_reads_the_extracted_policy() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set_external_results_folder(dir.path());
        fs::create_dir_all(config.policy().results_folder()).unwrap();
        fs::write(
            config.policy().results_folder().join("game.json"),
            "[\"practice\", \"collect\", \"we\", \"password\"]\n\n",
        )
        .unwrap();

        let program = sample();
        let mut results = Results::new("game", None);
        analysis(&program, "game", &config, &mut results);

        let usages = results.policy_usage().unwrap();
        assert_eq!(usages.len(), 3);
        assert!(usages
            .iter()
            .any(|usage| usage.keyword() == "password" && usage.is_disclosed()));
        assert!(usages
            .iter()
            .any(|usage| usage.keyword() == "user" && !usage.is_disclosed()));
    }

    #[test]
    fn it_skips_missing_or_malformed_policies() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set_external_results_folder(dir.path());
        let program = sample();

        let mut results = Results::new("game", None);
        analysis(&program, "game", &config, &mut results);
        assert!(results.policy_usage().is_none());
        assert_eq!(results.warnings().count(), 0);

        fs::create_dir_all(config.policy().results_folder()).unwrap();
        fs::write(config.policy().results_folder().join("game.json"), "{not json").unwrap();
        analysis(&program, "game", &config, &mut results);
        assert!(results.policy_usage().is_none());
        assert_eq!(results.warnings().count(), 1);
    }
}
