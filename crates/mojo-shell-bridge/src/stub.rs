// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub runtime for desktop/CI builds where no native mojo runtime is linked.
//
// Every call is logged and recorded, so the launcher can dry-run a command
// line and tests can check exactly what reached the runtime.

use std::sync::Mutex;

use mojo_shell_core::types::{AppUrl, ParameterList};

use crate::traits::NativeRuntime;

/// One call that reached the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCall {
    /// `init` with the full argument vector (program name included).
    Init(Vec<String>),
    /// `start` with the URL exactly as forwarded.
    Start(String),
}

/// Recording runtime returned on non-Android platforms.
#[derive(Debug, Default)]
pub struct StubRuntime {
    calls: Mutex<Vec<RuntimeCall>>,
}

impl StubRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in arrival order.
    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Argument vectors of each `init` call.
    pub fn init_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RuntimeCall::Init(argv) => Some(argv),
                RuntimeCall::Start(_) => None,
            })
            .collect()
    }

    /// URLs passed to `start`, in order.
    pub fn started(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RuntimeCall::Start(url) => Some(url),
                RuntimeCall::Init(_) => None,
            })
            .collect()
    }

    fn record(&self, call: RuntimeCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl NativeRuntime for StubRuntime {
    type Context = ();

    fn init(&self, _context: &(), parameters: ParameterList) {
        tracing::info!(argv = ?parameters.as_slice(), "stub runtime: init");
        self.record(RuntimeCall::Init(parameters.into_vec()));
    }

    fn start(&self, app_url: &AppUrl) {
        tracing::info!(url = %app_url, "stub runtime: start");
        self.record(RuntimeCall::Start(app_url.as_str().to_string()));
    }
}
