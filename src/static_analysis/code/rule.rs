//! Module for rules.

use super::{resolve_callers, resolve_referrers, CallerStrategy, Category};
use crate::{
    criticality::Criticality,
    model::{self, Method, ProgramModel},
    results::Finding,
    Config,
};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer,
};
use std::{fmt, fs::File, io::Read};

lazy_static! {
    static ref ANY_NAME: Regex = Regex::new(".*").expect("the any-name pattern is valid");
}

/// Vulnerability searching rule.
#[derive(Debug, Deserialize)]
pub struct Rule {
    label: String,
    description: String,
    criticality: Criticality,
    category: Category,
    #[serde(deserialize_with = "deserialize_pattern")]
    #[serde(default)]
    class_regex: Option<Regex>,
    #[serde(deserialize_with = "deserialize_pattern")]
    #[serde(default)]
    method_regex: Option<Regex>,
    #[serde(deserialize_with = "deserialize_pattern")]
    #[serde(default)]
    string_regex: Option<Regex>,
    #[serde(default)]
    evidence: Option<Evidence>,
    #[serde(default)]
    reroute: Option<Reroute>,
    #[serde(deserialize_with = "deserialize_pattern")]
    #[serde(default)]
    excluded_callers: Option<Regex>,
}

/// What a rule looks for.
#[derive(Debug, Clone, Copy)]
pub enum Target<'r> {
    /// Calls to the methods matching both patterns.
    Method {
        /// Pattern over the class name.
        class: &'r Regex,
        /// Pattern over the method name.
        name: &'r Regex,
    },
    /// Literals of the string pool matching the pattern.
    String(&'r Regex),
}

/// Predicate tested in the caller before it is implicated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// A `const-string` instruction of the caller loads a matching literal.
    ConstString(#[serde(deserialize_with = "deserialize_regex")] Regex),
    /// The reconstructed source of the caller matches.
    Source(#[serde(deserialize_with = "deserialize_regex")] Regex),
}

impl Evidence {
    /// Creates a constant string predicate.
    pub fn const_string(regex: &str) -> Result<Self, regex::Error> {
        Regex::new(regex).map(Self::ConstString)
    }

    /// Creates a reconstructed source predicate.
    pub fn source(regex: &str) -> Result<Self, regex::Error> {
        Regex::new(regex).map(Self::Source)
    }

    /// Looks for the evidence in the given method, returning the matching text.
    ///
    /// A method whose body or source is not available never holds the evidence.
    pub fn find<M: ProgramModel + ?Sized>(&self, program: &M, method: &Method) -> Option<String> {
        match self {
            Self::ConstString(regex) => {
                let instructions = match program.instructions_of(method) {
                    Ok(instructions) => instructions,
                    Err(e) => {
                        debug!("skipping caller: {}", e);
                        return None;
                    }
                };
                instructions
                    .iter()
                    .filter_map(|instruction| instruction.const_string_value())
                    .find(|value| regex.is_match(value))
                    .map(str::to_owned)
            }
            Self::Source(regex) => {
                let source = match program.source_text_of(method) {
                    Some(source) => source,
                    None => {
                        debug!(
                            "skipping caller: no source available for `{}`",
                            method.qualified_name()
                        );
                        return None;
                    }
                };
                regex.find(source).map(|m| m.as_str().to_owned())
            }
        }
    }
}

/// Alternative category for the callers holding some evidence.
#[derive(Debug, Deserialize)]
pub struct Reroute {
    evidence: Evidence,
    category: Category,
}

impl Rule {
    /// Gets the label of the vulnerability.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Gets the description of the vulnerability.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Gets the criticality for the vulnerabilities found by the rule.
    pub fn criticality(&self) -> Criticality {
        self.criticality
    }

    /// Gets the category of the findings of the rule.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Gets the target of the rule.
    pub fn target(&self) -> Result<Target<'_>> {
        match (&self.class_regex, &self.method_regex, &self.string_regex) {
            (Some(class), name, None) => Ok(Target::Method {
                class,
                name: name.as_ref().unwrap_or(&*ANY_NAME),
            }),
            (None, None, Some(string)) => Ok(Target::String(string)),
            _ => bail!(
                "the `{}` rule must have either a {} (with an optional {}) or a {}",
                self.label,
                "class_regex".italic(),
                "method_regex".italic(),
                "string_regex".italic()
            ),
        }
    }

    /// Checks the parts of the rule that can not be expressed in its type.
    fn validate(&self) -> Result<()> {
        if let Target::String(_) = self.target()? {
            if self.evidence.is_some() || self.reroute.is_some() || self.excluded_callers.is_some()
            {
                bail!(
                    "the `{}` rule searches the string pool, so it can not have {}, {} or {}",
                    self.label,
                    "evidence".italic(),
                    "reroute".italic(),
                    "excluded_callers".italic()
                );
            }
        }
        Ok(())
    }

    /// Applies the rule to the program.
    pub fn apply<M: ProgramModel + ?Sized>(
        &self,
        program: &M,
        strategy: CallerStrategy,
    ) -> Vec<Finding> {
        let target = match self.target() {
            Ok(target) => target,
            Err(e) => {
                debug!("{}", e);
                return Vec::new();
            }
        };

        match target {
            Target::String(pattern) => {
                resolve_referrers(program, pattern, self.category, strategy)
            }
            Target::Method { class, name } => {
                resolve_callers(program, class, name, strategy, |site| {
                    if let Some(excluded) = &self.excluded_callers {
                        if excluded.is_match(site.class.name()) {
                            return None;
                        }
                    }
                    if let Some(reroute) = &self.reroute {
                        if let Some(text) = reroute.evidence.find(program, site.method) {
                            return Some((reroute.category, Some(text)));
                        }
                    }
                    match &self.evidence {
                        Some(evidence) => evidence
                            .find(program, site.method)
                            .map(|text| (self.category, Some(text))),
                        None => Some((self.category, None)),
                    }
                })
            }
        }
    }
}

/// Regular expression serde visitor.
struct RegexVisitor {
    anchored: bool,
}

impl<'de> Visitor<'de> for RegexVisitor {
    type Value = Regex;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a valid regular expression")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if self.anchored {
            model::pattern(value).map_err(E::custom)
        } else {
            Regex::new(value).map_err(E::custom)
        }
    }

    fn visit_borrowed_str<E>(self, value: &'de str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(value)
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&value)
    }
}

/// Deserializes an evidence regular expression, matched anywhere in the text.
fn deserialize_regex<'de, D>(deserializer: D) -> Result<Regex, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(RegexVisitor { anchored: false })
}

/// Deserializes an optional name pattern, matched from the start of the name.
fn deserialize_pattern<'de, D>(deserializer: D) -> Result<Option<Regex>, D::Error>
where
    D: Deserializer<'de>,
{
    /// Optional pattern serde visitor.
    struct PatternOptionVisitor;

    impl<'de> Visitor<'de> for PatternOptionVisitor {
        type Value = Option<Regex>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a valid regular expression")
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer
                .deserialize_str(RegexVisitor { anchored: true })
                .map(Some)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_option(PatternOptionVisitor)
}

/// Loads the rules from the configured rules file.
pub fn load_rules(config: &Config) -> Result<Vec<Rule>> {
    let f = File::open(config.rules_json()).with_context(|| {
        format!(
            "could not open the rules file `{}`",
            config.rules_json().display()
        )
    })?;
    parse_rules(f, config.min_criticality())
}

/// Parses a list of rules, keeping the ones at or above the given criticality.
pub fn parse_rules<R: Read>(reader: R, min_criticality: Criticality) -> Result<Vec<Rule>> {
    let format_error = || {
        format!(
            "rules must be objects with the following structure:\n{}\nInstead of {} and {}, a \
             rule can search the string pool with a {}. An optional {} attribute tests the \
             caller, either with {} or with {}, an optional {} attribute moves the callers \
             holding some evidence to another category, and an optional {} attribute ignores \
             the callers in the matching classes.",
            "{\n\t\"label\": \"Label for the rule\",\n\t\"description\": \"Long description for \
             this rule\",\n\t\"criticality\": \"warning|low|medium|high|critical\",\n\t\
             \"category\": \"finding_category\",\n\t\"class_regex\": \"Lcom/example/.*\",\n\t\
             \"method_regex\": \"methodName\"\n}"
                .italic(),
            "class_regex".italic(),
            "method_regex".italic(),
            "string_regex".italic(),
            "evidence".italic(),
            "const_string".italic(),
            "source".italic(),
            "reroute".italic(),
            "excluded_callers".italic(),
        )
    };

    let rules: Vec<Rule> = serde_json::from_reader(reader).with_context(format_error)?;
    let rules = rules
        .into_iter()
        .filter(|rule| rule.criticality >= min_criticality)
        .map(|rule| rule.validate().map(|_| rule))
        .collect::<Result<Vec<Rule>>>()
        .with_context(format_error)?;

    Ok(rules)
}
