// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Turns launcher inputs (config + command line) into what the bridge needs:
// one parameter vector for init and an ordered list of apps to start.

use std::collections::HashMap;

use crate::config::ShellConfig;
use crate::types::AppSpec;

/// Everything the launcher will hand to the bridge, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Runtime switches for init, without the program name.
    pub parameters: Vec<String>,
    /// Apps to start, in start order.
    pub apps: Vec<AppSpec>,
}

impl LaunchPlan {
    /// Build the plan.
    ///
    /// * parameters: config defaults, then `runtime_args`.
    /// * apps: config `startup_apps`, then positional `apps`; blank specs
    ///   are skipped. Collection stops at the first invalid URL, so the apps
    ///   ahead of it still start and the rest do not.
    /// * `args_for` entries register arguments for a URL. The last
    ///   registration for a URL wins; an app's own arguments replace it.
    ///   Invalid entries are logged and skipped.
    pub fn build(
        config: &ShellConfig,
        runtime_args: &[String],
        args_for: &[String],
        apps: &[String],
    ) -> Self {
        let mut parameters = config.default_parameters.clone();
        parameters.extend(runtime_args.iter().cloned());

        let mut registered: HashMap<String, Vec<String>> = HashMap::new();
        for entry in args_for {
            match AppSpec::parse(entry) {
                Ok(Some(spec)) if !spec.args.is_empty() => {
                    registered.insert(spec.url.into_string(), spec.args);
                }
                Ok(Some(spec)) => {
                    tracing::warn!(url = %spec.url, "--args-for without arguments ignored");
                }
                Ok(None) => tracing::warn!("empty --args-for value ignored"),
                Err(e) => tracing::error!(error = %e, "--args-for entry skipped"),
            }
        }

        let mut specs = Vec::new();
        for raw in config.startup_apps.iter().chain(apps) {
            let mut spec = match AppSpec::parse(raw) {
                Ok(Some(spec)) => spec,
                Ok(None) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "not launching this or any later app");
                    break;
                }
            };
            if let Some(extra) = registered.get(spec.url.as_str()) {
                spec.apply_registered_args(extra);
            }
            specs.push(spec);
        }

        Self {
            parameters,
            apps: specs,
        }
    }
}
