// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Process-wide bridge for hosts that can only reach us through static entry
// points (the JNI exports). Everything else should own a `MojoMain` directly.

use std::sync::OnceLock;

use mojo_shell_core::error::{Result, ShellError};
use mojo_shell_core::types::AppUrl;

use crate::HostContext;
use crate::bridge::MojoMain;
use crate::traits::NativeRuntime;

type ProcessBridge = MojoMain<Box<dyn NativeRuntime<Context = HostContext>>>;

static PROCESS_BRIDGE: OnceLock<ProcessBridge> = OnceLock::new();

/// Register the runtime for this process. Only the first install sticks.
pub fn install<R>(runtime: R) -> Result<()>
where
    R: NativeRuntime<Context = HostContext> + 'static,
{
    PROCESS_BRIDGE
        .set(MojoMain::new(Box::new(runtime)))
        .map_err(|_| ShellError::RuntimeAlreadyInstalled)?;
    tracing::debug!("native runtime installed");
    Ok(())
}

fn installed() -> Result<&'static ProcessBridge> {
    PROCESS_BRIDGE.get().ok_or(ShellError::RuntimeNotInstalled)
}

/// [`MojoMain::ensure_initialized`] on the installed bridge.
pub fn ensure_initialized(context: &HostContext, parameters: Option<&[String]>) -> Result<bool> {
    Ok(installed()?.ensure_initialized(context, parameters))
}

/// [`MojoMain::start`] on the installed bridge.
pub fn start(app_url: impl Into<AppUrl>) -> Result<()> {
    installed()?.start(app_url);
    Ok(())
}

/// False when nothing is installed yet.
pub fn is_initialized() -> bool {
    PROCESS_BRIDGE
        .get()
        .is_some_and(|bridge| bridge.is_initialized())
}
