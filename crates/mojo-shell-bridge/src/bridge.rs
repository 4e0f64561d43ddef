// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The bootstrap bridge: a one-shot guarded `init` and a pass-through `start`.

use std::sync::{Mutex, PoisonError};

use mojo_shell_core::types::{AppUrl, ParameterList};

use crate::traits::NativeRuntime;

/// Owns a runtime and the flag recording whether it has been initialised.
///
/// The flag sits behind a mutex that is held across the runtime's `init`, so
/// concurrent callers of [`MojoMain::ensure_initialized`] wait for the first
/// one and then see the runtime as initialised. `init` therefore runs at most
/// once per `MojoMain`.
pub struct MojoMain<R: NativeRuntime> {
    runtime: R,
    initialized: Mutex<bool>,
}

impl<R: NativeRuntime> MojoMain<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            initialized: Mutex::new(false),
        }
    }

    /// Initialise the native runtime unless that already happened.
    ///
    /// Builds `["mojo_shell", parameters...]` and forwards it with `context`.
    /// `None` behaves like an empty slice. Later calls are no-ops and their
    /// parameters are ignored.
    ///
    /// Returns `true` if this call ran the runtime's `init`. If `init`
    /// panics, the flag stays unset and the panic propagates.
    pub fn ensure_initialized(
        &self,
        context: &R::Context,
        parameters: Option<&[String]>,
    ) -> bool {
        // A poisoned lock only means an earlier init panicked before the flag
        // was set, so the guarded value is still accurate.
        let mut initialized = self
            .initialized
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *initialized {
            tracing::trace!("native runtime already initialised");
            return false;
        }

        let parameters = ParameterList::from_host(parameters);
        tracing::info!(argv = ?parameters.as_slice(), "initialising native runtime");
        self.runtime.init(context, parameters);
        *initialized = true;
        true
    }

    /// Forward `app_url` to the runtime, unmodified.
    ///
    /// Not gated on initialisation; calling this first is the caller's
    /// problem and is left to the runtime.
    pub fn start(&self, app_url: impl Into<AppUrl>) {
        let app_url = app_url.into();
        tracing::debug!(url = %app_url, "starting application");
        self.runtime.start(&app_url);
    }

    pub fn is_initialized(&self) -> bool {
        *self
            .initialized
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::stub::{RuntimeCall, StubRuntime};

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn second_call_is_a_no_op() {
        let bridge = MojoMain::new(StubRuntime::new());
        let empty: Vec<String> = Vec::new();
        let flag = strings(&["--flag"]);

        assert!(bridge.ensure_initialized(&(), Some(&empty)));
        assert!(!bridge.ensure_initialized(&(), Some(&flag)));

        assert_eq!(bridge.runtime().init_calls(), [strings(&["mojo_shell"])]);
        assert!(bridge.is_initialized());
    }

    #[test]
    fn first_parameters_win_across_many_calls() {
        let bridge = MojoMain::new(StubRuntime::new());
        for i in 0..10 {
            let params = vec![format!("--call={i}")];
            bridge.ensure_initialized(&(), Some(&params));
        }
        assert_eq!(
            bridge.runtime().init_calls(),
            [strings(&["mojo_shell", "--call=0"])]
        );
    }

    #[test]
    fn parameters_keep_their_order() {
        let bridge = MojoMain::new(StubRuntime::new());
        let params = strings(&["--enable-x", "--port=80"]);
        bridge.ensure_initialized(&(), Some(&params));
        assert_eq!(
            bridge.runtime().init_calls(),
            [strings(&["mojo_shell", "--enable-x", "--port=80"])]
        );
    }

    #[test]
    fn null_parameters_behave_like_empty() {
        let with_none = MojoMain::new(StubRuntime::new());
        with_none.ensure_initialized(&(), None);

        let with_empty = MojoMain::new(StubRuntime::new());
        with_empty.ensure_initialized(&(), Some(&[][..]));

        assert_eq!(
            with_none.runtime().init_calls(),
            with_empty.runtime().init_calls()
        );
    }

    #[test]
    fn start_passes_url_through_every_time() {
        let bridge = MojoMain::new(StubRuntime::new());
        bridge.ensure_initialized(&(), None);
        bridge.start("app://foo");
        bridge.start("app://foo");
        assert_eq!(bridge.runtime().started(), ["app://foo", "app://foo"]);
    }

    #[test]
    fn start_before_init_forwards_without_initialising() {
        let bridge = MojoMain::new(StubRuntime::new());
        bridge.start(" not even a url ");

        assert!(!bridge.is_initialized());
        assert_eq!(
            bridge.runtime().calls(),
            [RuntimeCall::Start(" not even a url ".into())]
        );
    }

    /// Counts inits and lingers inside `init` to widen the race window.
    #[derive(Default)]
    struct SlowRuntime {
        inits: AtomicUsize,
    }

    impl NativeRuntime for SlowRuntime {
        type Context = ();

        fn init(&self, _context: &(), _parameters: ParameterList) {
            thread::sleep(Duration::from_millis(20));
            self.inits.fetch_add(1, Ordering::SeqCst);
        }

        fn start(&self, _app_url: &AppUrl) {}
    }

    #[test]
    fn concurrent_callers_initialise_once() {
        let bridge = Arc::new(MojoMain::new(SlowRuntime::default()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let bridge = Arc::clone(&bridge);
                thread::spawn(move || bridge.ensure_initialized(&(), None))
            })
            .collect();

        let performed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ran| *ran)
            .count();

        assert_eq!(performed, 1);
        assert_eq!(bridge.runtime().inits.load(Ordering::SeqCst), 1);
    }

    /// Panics on the first `init`, succeeds afterwards.
    #[derive(Default)]
    struct FlakyRuntime {
        attempts: AtomicUsize,
    }

    impl NativeRuntime for FlakyRuntime {
        type Context = ();

        fn init(&self, _context: &(), _parameters: ParameterList) {
            if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("native init failed");
            }
        }

        fn start(&self, _app_url: &AppUrl) {}
    }

    #[test]
    fn panicking_init_leaves_bridge_uninitialised() {
        let bridge = MojoMain::new(FlakyRuntime::default());

        let outcome = catch_unwind(AssertUnwindSafe(|| bridge.ensure_initialized(&(), None)));
        assert!(outcome.is_err());
        assert!(!bridge.is_initialized());

        assert!(bridge.ensure_initialized(&(), None));
        assert!(bridge.is_initialized());
        assert_eq!(bridge.runtime().attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn boxed_runtime_is_a_runtime() {
        let runtime: Box<dyn NativeRuntime<Context = ()>> = Box::new(StubRuntime::new());
        let bridge = MojoMain::new(runtime);
        assert!(bridge.ensure_initialized(&(), None));
        bridge.start("mojo:boxed");
    }
}
