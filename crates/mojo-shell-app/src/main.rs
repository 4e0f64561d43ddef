// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mojo_shell — desktop launcher.
//
// Entry point. Reads config and command line, initialises logging, then
// bootstraps the runtime once and starts each requested application.

mod cli;
mod launch;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use mojo_shell_bridge::MojoMain;
use mojo_shell_core::ShellConfig;
use mojo_shell_core::command_line::LaunchPlan;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = cli.config.as_deref().map(ShellConfig::load).transpose();
    let default_filter = match &config {
        Ok(Some(config)) => config.log_filter.clone(),
        _ => "info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match config {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            tracing::error!(error = %e, "could not load launcher config");
            return ExitCode::FAILURE;
        }
    };

    if cli.apps.is_empty() && config.startup_apps.is_empty() {
        // Nothing to launch: same as asking for help.
        if let Err(e) = Cli::command().print_help() {
            tracing::error!(error = %e, "could not print usage");
        }
        return ExitCode::SUCCESS;
    }

    let plan = LaunchPlan::build(&config, &cli.runtime_args, &cli.args_for, &cli.apps);

    tracing::info!(apps = plan.apps.len(), "mojo_shell starting");

    let bridge = MojoMain::new(mojo_shell_bridge::default_runtime());
    let started = launch::run(&bridge, &(), &plan);
    tracing::info!(started, "launch finished");

    ExitCode::SUCCESS
}
