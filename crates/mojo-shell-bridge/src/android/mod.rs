// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android entry points via JNI.
//
// The Java side declares the bridge as two static natives:
//
//     package org.chromium.mojo_shell_apk;
//     public class MojoMain {
//         public static native void ensureInitialized(Context ctx, String[] parameters);
//         public static native void start(String appUrl);
//     }
//
// Both land on the process-wide bridge in `crate::global`. The native runtime
// library must have called `global::install` before (typically from its
// `JNI_OnLoad`).
//
// ## Failure handling
//
// Conversion failures (bad array element, failed global ref) and a missing
// runtime are logged and the call returns without reaching the runtime. No
// Java exception is raised from here. A panic inside the runtime cannot
// unwind through `extern "system"` and aborts the process.

#![cfg(target_os = "android")]

use jni::JNIEnv;
use jni::objects::{JClass, JObject, JObjectArray, JString};

use mojo_shell_core::error::{Result, ShellError};

use crate::global;

/// Convenience: map any `jni::errors::Error` into `ShellError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> ShellError {
    ShellError::Bridge(format!("{context}: {e}"))
}

/// Copy a Java `String[]` into Rust.
///
/// A null array is `None`. Null elements are skipped.
fn read_string_array(env: &mut JNIEnv, array: &JObjectArray) -> Result<Option<Vec<String>>> {
    if array.is_null() {
        return Ok(None);
    }

    let len = env
        .get_array_length(array)
        .map_err(|e| jni_err("get_array_length", e))?;
    let mut strings = Vec::with_capacity(len.max(0) as usize);

    for index in 0..len {
        let element = env
            .get_object_array_element(array, index)
            .map_err(|e| jni_err("get_object_array_element", e))?;
        if element.is_null() {
            tracing::warn!(index, "null entry in parameter array skipped");
            continue;
        }
        let element = JString::from(element);
        let value: String = env
            .get_string(&element)
            .map_err(|e| jni_err("get_string(parameter)", e))?
            .into();
        // Long parameter lists would otherwise exhaust the local ref table.
        env.delete_local_ref(element)
            .map_err(|e| jni_err("delete_local_ref", e))?;
        strings.push(value);
    }

    Ok(Some(strings))
}

fn ensure_initialized(
    env: &mut JNIEnv,
    context: &JObject,
    parameters: &JObjectArray,
) -> Result<()> {
    let parameters = read_string_array(env, parameters)?;
    let context = env
        .new_global_ref(context)
        .map_err(|e| jni_err("new_global_ref(context)", e))?;
    global::ensure_initialized(&context, parameters.as_deref())?;
    Ok(())
}

fn start(env: &mut JNIEnv, app_url: &JString) -> Result<()> {
    if app_url.is_null() {
        return Err(ShellError::Bridge("start called with a null app URL".into()));
    }
    let app_url: String = env
        .get_string(app_url)
        .map_err(|e| jni_err("get_string(appUrl)", e))?
        .into();
    global::start(app_url)
}

/// `MojoMain.ensureInitialized(Context, String[])`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_chromium_mojo_1shell_1apk_MojoMain_ensureInitialized<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    context: JObject<'local>,
    parameters: JObjectArray<'local>,
) {
    if let Err(e) = ensure_initialized(&mut env, &context, &parameters) {
        tracing::error!(error = %e, "MojoMain.ensureInitialized failed");
    }
}

/// `MojoMain.start(String)`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_chromium_mojo_1shell_1apk_MojoMain_start<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    app_url: JString<'local>,
) {
    if let Err(e) = start(&mut env, &app_url) {
        tracing::error!(error = %e, "MojoMain.start failed");
    }
}
