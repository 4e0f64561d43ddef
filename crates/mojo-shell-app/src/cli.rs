// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface of the launcher.

use std::path::PathBuf;

use clap::Parser;

/// Launch Mojo applications.
#[derive(Debug, Parser)]
#[command(
    name = "mojo_shell",
    version,
    after_help = "An <APP> is a Mojo URL, or a Mojo URL and arguments within quotes.\n\
                  Example: mojo_shell \"mojo:js_standalone test.js\""
)]
pub struct Cli {
    /// JSON launcher config (default parameters, startup apps, log filter).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Switch forwarded to the runtime's init, after the config defaults.
    #[arg(long = "runtime-arg", value_name = "SWITCH", allow_hyphen_values = true)]
    pub runtime_args: Vec<String>,

    /// Extra arguments for one app: "<url> <arg>...". May repeat.
    #[arg(long = "args-for", value_name = "URL ARGS")]
    pub args_for: Vec<String>,

    /// Applications to start, in order.
    #[arg(value_name = "APP")]
    pub apps: Vec<String>,
}
