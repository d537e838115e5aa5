//! Taint analysis result correlation.
//!
//! The external taint solver reports every source-to-sink route it finds. The routes that start
//! at a UI element lookup (`findViewById`) carry the identifier of the looked up view; those
//! identifiers are resolved to their resource names and compared against a list of sensitive
//! names.

use crate::{
    error,
    model::{self, ProgramModel},
    print_warning,
    results::Results,
    Config,
};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::debug;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use regex::Regex;
use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

lazy_static! {
    static ref RESOURCE_ID: Regex = Regex::new(r"\((\d+?)\)").unwrap();
}

/// Method prefixes of the platform and runtime libraries. Lookups made from these methods are
/// not application logic.
const PLATFORM_PREFIXES: &[&str] = &[
    "android.",
    "androidx.",
    "com.android.internal.util",
    "dalvik",
    "java.",
    "javax.",
    "org.json.",
];

/// Statement marker of a UI element lookup.
const VIEW_LOOKUP: &str = "findViewById";

/// One node of a taint route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    method: String,
    statement: String,
}

impl Node {
    /// Creates a new node. The method signature may still be wrapped in `<...>`.
    pub fn new<M: AsRef<str>, S: Into<String>>(method: M, statement: S) -> Self {
        let method = method.as_ref();
        let method = method
            .strip_prefix('<')
            .and_then(|m| m.strip_suffix('>'))
            .unwrap_or(method);
        Self {
            method: method.to_owned(),
            statement: statement.into(),
        }
    }

    /// Gets the signature of the method containing the statement.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Gets the Jimple statement.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Whether the node is a UI element lookup made by the application itself.
    fn is_app_view_lookup(&self) -> bool {
        self.statement.contains(VIEW_LOOKUP)
            && !PLATFORM_PREFIXES
                .iter()
                .any(|prefix| self.method.starts_with(prefix))
    }

    /// Extracts the resource identifier, the last parenthesized integer of the statement.
    fn resource_id(&self) -> Option<i64> {
        RESOURCE_ID
            .captures_iter(&self.statement)
            .last()
            .and_then(|caps| caps.get(1))
            .and_then(|id| id.as_str().parse().ok())
    }
}

/// One result of the taint report: a sink and the routes reaching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaintResult {
    sink: Option<Node>,
    paths: Vec<Vec<Node>>,
}

impl TaintResult {
    /// Gets the sink of the result.
    pub fn sink(&self) -> Option<&Node> {
        self.sink.as_ref()
    }

    /// Gets the routes reaching the sink, each starting at its source.
    pub fn paths(&self) -> &[Vec<Node>] {
        &self.paths
    }
}

/// Parsed taint report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaintReport {
    results: Vec<TaintResult>,
}

impl TaintReport {
    /// Gets the results of the report.
    pub fn results(&self) -> &[TaintResult] {
        &self.results
    }

    /// Collects the resource identifiers looked up by the application along any route.
    ///
    /// Route and sink grouping is not kept.
    pub fn candidate_ids(&self) -> BTreeSet<i64> {
        self.results
            .iter()
            .flat_map(|result| result.paths.iter())
            .flat_map(|path| path.iter())
            .filter(|node| node.is_app_view_lookup())
            .filter_map(Node::resource_id)
            .collect()
    }
}

/// Reads the `Method` and `Statement` attributes of an element.
fn parse_node(element: &BytesStart<'_>) -> Result<Node> {
    let mut method = None;
    let mut statement = None;

    for attr in element.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"Method" => method = Some(attr.unescape_value()?.into_owned()),
            b"Statement" => statement = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    match (method, statement) {
        (Some(method), Some(statement)) => Ok(Node::new(method, statement)),
        _ => Err(error::Kind::Parse).context(format!(
            "the `{}` element needs both a `Method` and a `Statement` attribute",
            String::from_utf8_lossy(element.name().as_ref())
        )),
    }
}

/// Parses a taint report.
///
/// A report without `Results` element has no results.
pub fn parse_report(xml: &str) -> Result<TaintReport> {
    let mut parser = Reader::from_str(xml);
    let _ = parser.trim_text(true);

    let mut report = TaintReport::default();
    let mut in_results = false;
    let mut current: Option<TaintResult> = None;
    let mut path: Option<Vec<Node>> = None;

    loop {
        let event = parser.read_event()?;
        let (element, closed) = match event {
            Event::Start(ref e) => (e, false),
            Event::Empty(ref e) => (e, true),
            Event::End(ref e) => {
                match e.local_name().as_ref() {
                    b"Results" => in_results = false,
                    b"Result" => {
                        if let Some(result) = current.take() {
                            report.results.push(result);
                        }
                    }
                    b"Source" => {
                        if let (Some(result), Some(finished)) = (current.as_mut(), path.take()) {
                            result.paths.push(finished);
                        }
                    }
                    _ => {}
                }
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        match element.local_name().as_ref() {
            b"Results" => in_results = !closed,
            b"Result" if in_results => {
                if !closed {
                    current = Some(TaintResult::default());
                }
            }
            b"Sink" => {
                if let Some(result) = current.as_mut() {
                    result.sink = Some(parse_node(element)?);
                }
            }
            b"Source" if current.is_some() => {
                let source = vec![parse_node(element)?];
                if closed {
                    if let Some(result) = current.as_mut() {
                        result.paths.push(source);
                    }
                } else {
                    path = Some(source);
                }
            }
            b"PathElement" => {
                if let Some(path) = path.as_mut() {
                    path.push(parse_node(element)?);
                }
            }
            _ => {}
        }
    }

    Ok(report)
}

/// Loads the taint report at the given path.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<TaintReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(error::Kind::MissingExternalArtifact {
            path: path.to_path_buf(),
        }
        .into());
    }

    let xml = fs::read_to_string(path)
        .with_context(|| format!("could not read the taint report `{}`", path.display()))?;
    parse_report(&xml).map_err(|e| {
        error::Kind::MalformedExternalReport {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        }
        .into()
    })
}

/// Sensitive resource names.
#[derive(Debug, Default, Clone)]
pub struct Keywords {
    words: HashSet<String>,
}

impl Keywords {
    /// Loads the keyword list, one keyword per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "could not read the keyword list `{}`",
                path.as_ref().display()
            )
        })?;
        Ok(contents.lines().collect())
    }

    /// Whether the name is exactly one of the keywords.
    pub fn contains(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'s> std::iter::FromIterator<&'s str> for Keywords {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Gets the name of the resource identifier class of a package, such as
/// `Lcom/example/app/R$id;`.
pub fn resource_class_name(package: &str) -> String {
    format!("L{}/R$id;", package.replace('.', "/"))
}

/// Resolves the resource symbol table of the program: every resource identifier with its name.
pub fn resource_symbols<M: ProgramModel + ?Sized>(
    program: &M,
    package: &str,
) -> Result<Vec<(String, i64)>, error::Kind> {
    let class_name = resource_class_name(package);
    let unresolvable = || error::Kind::UnresolvableSymbolTable {
        class: class_name.clone(),
    };

    let pattern =
        model::pattern(format!("{}$", regex::escape(&class_name))).map_err(|_| unresolvable())?;
    let classes = program.find_classes(&pattern, false);
    let class = classes.first().ok_or_else(unresolvable)?;

    Ok(program
        .fields_of(class)
        .iter()
        .filter_map(|field| field.value().map(|id| (field.name().to_owned(), id)))
        .collect())
}

/// Names the resources looked up along a taint route whose name is a sensitive keyword.
pub fn correlate(
    candidates: &BTreeSet<i64>,
    symbols: &[(String, i64)],
    keywords: &Keywords,
) -> Vec<String> {
    symbols
        .iter()
        .filter(|(name, id)| candidates.contains(id) && keywords.contains(name))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Finds the sensitive resources leaked according to the taint report of the artifact.
///
/// Any problem with the report or the symbol table yields an empty list.
pub fn leaked_keys<M: ProgramModel + ?Sized>(
    program: &M,
    package: &str,
    report_path: &Path,
    keywords: &Keywords,
) -> Vec<String> {
    let report = match load_report(report_path) {
        Ok(report) => report,
        Err(e) => {
            print_warning(format!("no taint results will be correlated: {:#}", e));
            return Vec::new();
        }
    };

    let candidates = report.candidate_ids();
    debug!(
        "{} taint results with {} candidate resource identifiers",
        report.results.len(),
        candidates.len()
    );
    if candidates.is_empty() {
        return Vec::new();
    }

    match resource_symbols(program, package) {
        Ok(symbols) => correlate(&candidates, &symbols, keywords),
        Err(e) => {
            print_warning(format!("no taint results will be correlated: {}", e));
            Vec::new()
        }
    }
}

/// Runs the taint result correlation for the artifact with the given base name.
pub fn analysis<M: ProgramModel + ?Sized>(
    program: &M,
    package: &str,
    base_name: &str,
    keywords: &Keywords,
    config: &Config,
    results: &mut Results,
) {
    let report_path = config
        .taint()
        .results_folder()
        .join(format!("{}.xml", base_name));
    let leaked = leaked_keys(program, package, &report_path, keywords);

    if !config.is_quiet() {
        for key in &leaked {
            println!("Sensitive input may leak: {}", key);
        }
    }
    results.set_leaked_keys(leaked);
}
