// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drives a bridge through a launch plan: one init, then one start per app.

use mojo_shell_bridge::{MojoMain, NativeRuntime};
use mojo_shell_core::command_line::LaunchPlan;

/// Run `plan` against `bridge`. Returns the number of apps started.
///
/// Init runs even when the plan has no apps. Per-app arguments are logged
/// for diagnostics only: the runtime's `start` takes just the URL, so they
/// never reach it.
pub fn run<R: NativeRuntime>(
    bridge: &MojoMain<R>,
    context: &R::Context,
    plan: &LaunchPlan,
) -> usize {
    bridge.ensure_initialized(context, Some(&plan.parameters));

    for app in &plan.apps {
        if app.args.is_empty() {
            tracing::info!(url = %app.url, "launching");
        } else {
            tracing::info!(url = %app.url, args = ?app.args, "launching with arguments");
        }
        bridge.start(app.url.clone());
    }

    plan.apps.len()
}
