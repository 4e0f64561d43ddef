// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! mojo-shell — native runtime bootstrap bridge.
//!
//! A host (an Android `Activity`, the desktop launcher) calls
//! `ensure_initialized` once and `start` per application. The bridge
//! prepends the program name, makes sure the runtime's `init` runs at most
//! once, and forwards `start` untouched. The runtime itself is whatever
//! implements [`traits::NativeRuntime`].

pub mod bridge;
pub mod global;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

pub use bridge::MojoMain;
pub use traits::NativeRuntime;

/// Host context type used by the process-wide bridge.
///
/// On Android this is a global reference to the application `Context`.
#[cfg(target_os = "android")]
pub type HostContext = jni::objects::GlobalRef;

/// Host context type used by the process-wide bridge.
///
/// Desktop hosts have nothing to pass.
#[cfg(not(target_os = "android"))]
pub type HostContext = ();

/// The runtime used when the host does not bring its own.
///
/// On desktop/CI this is the recording [`stub::StubRuntime`]. Android has no
/// default: the runtime library installs itself through [`global::install`].
#[cfg(not(target_os = "android"))]
pub fn default_runtime() -> stub::StubRuntime {
    stub::StubRuntime::new()
}
