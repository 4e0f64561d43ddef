// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability trait for the native mojo runtime.
//
// The runtime (application manager, URL resolution, app loading) lives
// outside this crate. The bridge only ever reaches it through these two
// entry points.

use std::sync::Arc;

use mojo_shell_core::types::{AppUrl, ParameterList};

/// The two entry points the bridge forwards to.
///
/// Neither returns anything the bridge observes. Failure handling is the
/// runtime's business; a panic propagates to whoever called the bridge.
pub trait NativeRuntime: Send + Sync {
    /// Opaque host handle passed through to [`NativeRuntime::init`]
    /// (an Android `Context` global reference, `()` on desktop).
    type Context: ?Sized;

    /// Bootstrap the runtime. The bridge calls this at most once.
    fn init(&self, context: &Self::Context, parameters: ParameterList);

    /// Launch or address the application identified by `app_url`.
    fn start(&self, app_url: &AppUrl);
}

impl<R: NativeRuntime + ?Sized> NativeRuntime for Box<R> {
    type Context = R::Context;

    fn init(&self, context: &Self::Context, parameters: ParameterList) {
        (**self).init(context, parameters)
    }

    fn start(&self, app_url: &AppUrl) {
        (**self).start(app_url)
    }
}

impl<R: NativeRuntime + ?Sized> NativeRuntime for Arc<R> {
    type Context = R::Context;

    fn init(&self, context: &Self::Context, parameters: ParameterList) {
        (**self).init(context, parameters)
    }

    fn start(&self, app_url: &AppUrl) {
        (**self).start(app_url)
    }
}
