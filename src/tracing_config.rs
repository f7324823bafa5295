//! Log output for enum declarations and lookups.
//!
//! `tenum_core` emits events under one target per module:
//!
//! - `tenum_core::builder` at `debug`: a base type was sealed
//! - `tenum_core::extend` at `debug`: a derived type was sealed, listing overridden constants
//! - `tenum_core::instance` at `trace`: a value did not match any constant
//! - `tenum_core::descriptor` at `trace`: a key did not name any constant
//!
//! `TENUM_LOG` takes `EnvFilter` directives and wins over `RUST_LOG`.
//! `TENUM_LOG_FORMAT` picks `text` (default), `tree` or `json`:
//!
//! ```bash
//! # which names each derivation overrode
//! TENUM_LOG=tenum_core::extend=debug cargo test
//!
//! # rejected constructions nested under the test spans
//! TENUM_LOG=tenum_core::instance=trace,tenum_core::descriptor=trace TENUM_LOG_FORMAT=tree cargo test
//! ```
//!
//! Nothing is installed unless one of the two filter variables is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to [`LogFormat::Text`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read `TENUM_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("TENUM_LOG_FORMAT").unwrap_or_default())
    }
}

/// Pick the filter directives: `TENUM_LOG` first, then `RUST_LOG`.
fn select_directives(tenum_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    tenum_log.or(rust_log)
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TENUM_LOG` nor `RUST_LOG` is set, or when a
/// global subscriber is already installed. Output goes to stderr.
pub fn init_tracing() {
    let Some(directives) =
        select_directives(std::env::var("TENUM_LOG").ok(), std::env::var("RUST_LOG").ok())
    else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);

    // try_init: a second call (e.g. from several tests) keeps the first subscriber.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
