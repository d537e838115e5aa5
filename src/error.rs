//! Module containing the definition of error types.

use std::path::PathBuf;
use thiserror::Error;

/// Enumeration of the different error kinds.
#[derive(Debug, Error)]
pub enum Kind {
    /// Configuration error.
    #[error("there was an error in the configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },
    /// Parsing error.
    #[error("there was an error in the parsing process")]
    Parse,
    /// The body of an external method was requested.
    #[error("the method `{method}` is external, its body was not decompiled")]
    NotDecompiled {
        /// Rendered name of the method.
        method: String,
    },
    /// A report from an external analyzer is not where it should be.
    #[error("the external artifact `{}` does not exist", path.display())]
    MissingExternalArtifact {
        /// Expected location of the artifact.
        path: PathBuf,
    },
    /// A report from an external analyzer could not be understood.
    #[error("the external report `{}` is malformed: {message}", path.display())]
    MalformedExternalReport {
        /// Location of the report.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
    /// The resource identifier class is not part of the program.
    #[error("the resource class `{class}` could not be found in the program")]
    UnresolvableSymbolTable {
        /// Name of the class that was looked up.
        class: String,
    },
    /// An external analyzer exited with an error or wrote to its error output.
    #[error("the external tool `{tool}` failed: {message}")]
    ExternalToolFailure {
        /// Name of the tool.
        tool: String,
        /// Error output or exit status.
        message: String,
    },
}
