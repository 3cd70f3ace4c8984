#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the gitfolio crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Two error surfaces live here. [`Error`] covers failures that stop the
//! command itself (unreadable configuration, unwritable render target).
//! [`FetchFailure`] covers failures of the GitHub requests; those are always
//! recoverable and end up as the errored gallery state with a retry
//! affordance instead of terminating the run.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Unified error type returned by the configuration loader, the GitHub client
/// constructor, gallery containers and the CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading configuration files.
    #[error("failed to read configuration from {path:?}: {source}")]
    Io {
        /// Location of the configuration file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the configuration violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps serialization errors when writing JSON output.
    #[error("failed to serialize gallery: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Wraps I/O errors that occur while writing the gallery render target.
    #[error("failed to write gallery at {path:?}: {source}")]
    RenderIo {
        /// Location of the render target being replaced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Service errors when setting up the GitHub client.
    #[error("service error: {message}")]
    Service {
        /// Human readable message describing the service error.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a service error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the service error.
    pub fn service<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Service {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the configuration file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::RenderIo`] variant capturing the failing path and
/// source.
pub fn render_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::RenderIo {
        path: path.to_path_buf(),
        source
    }
}

/// Failure of a request against the repository host.
///
/// Every variant is recoverable: the gallery switches to its errored state and
/// offers a retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, masterror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchFailure {
    /// The request could not complete (DNS, connection, TLS, timeout).
    #[error("network failure: {message}")]
    Network {
        /// Transport error description.
        message: String
    },
    /// The request completed with a non-success status.
    #[error("GitHub API responded with {status}: {message}")]
    Api {
        /// HTTP status code.
        status:  u16,
        /// Message returned by the API.
        message: String
    },
    /// The request completed but the payload could not be decoded.
    #[error("unexpected response payload: {message}")]
    Decode {
        /// Decoder error description.
        message: String
    },
    /// An enrichment task terminated abnormally.
    #[error("enrichment aborted: {message}")]
    Aborted {
        /// Join error description.
        message: String
    }
}

impl FetchFailure {
    /// Constructs a [`FetchFailure::Network`] from the provided message.
    pub fn network<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Network {
            message: message.into()
        }
    }

    /// Constructs a [`FetchFailure::Api`] from a status code and message.
    pub fn api<M>(status: u16, message: M) -> Self
    where
        M: Into<String>
    {
        Self::Api {
            status,
            message: message.into()
        }
    }

    /// Constructs a [`FetchFailure::Decode`] from the provided message.
    pub fn decode<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Decode {
            message: message.into()
        }
    }

    /// Constructs a [`FetchFailure::Aborted`] from the provided message.
    pub fn aborted<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Aborted {
            message: message.into()
        }
    }

    /// Short machine-readable label used in markup attributes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network {
                ..
            } => "network",
            Self::Api {
                ..
            } => "api",
            Self::Decode {
                ..
            } => "decode",
            Self::Aborted {
                ..
            } => "aborted"
        }
    }
}
