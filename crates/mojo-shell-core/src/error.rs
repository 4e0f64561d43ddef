// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the mojo shell.
//
// The init/start contract itself never fails at the bridge layer; these
// variants cover the plumbing around it (process-wide handle, JNI
// conversion, launcher configuration).

use thiserror::Error;

/// Top-level error type for all mojo shell operations.
#[derive(Debug, Error)]
pub enum ShellError {
    // -- Process-wide handle --
    #[error("no native runtime installed")]
    RuntimeNotInstalled,

    #[error("a native runtime is already installed for this process")]
    RuntimeAlreadyInstalled,

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    // -- Launcher --
    #[error("invalid application spec: {0}")]
    InvalidAppSpec(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ShellError>;
