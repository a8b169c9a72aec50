// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Library error type.
//!
//! Nothing here is fatal to a page: the overlay turns every load error into
//! "no data" and keeps running. The CLI prints them and exits non-zero.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two data files a parse error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    ContentIndex,
    ArticleFeed,
    Config,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::ContentIndex => "content index",
            Resource::ArticleFeed => "article feed",
            Resource::Config => "config",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {resource}: {source}")]
    Json {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),

    /// Failure reported by a host that fetched the data itself (the browser).
    #[error("load failed: {0}")]
    Host(String),
}

impl Error {
    pub(crate) fn json(resource: Resource, source: serde_json::Error) -> Self {
        Error::Json { resource, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
