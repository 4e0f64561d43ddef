// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the mojo shell bridge.

use crate::error::{Result, ShellError};

/// Program name the native runtime expects as `argv[0]`.
pub const PROGRAM_NAME: &str = "mojo_shell";

/// Argument vector handed to the native runtime's init entry point.
///
/// Element 0 is always [`PROGRAM_NAME`]; the host's parameters follow in the
/// order they were given. The bridge builds one of these per effective
/// initialisation and gives it away; nothing retains it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterList(Vec<String>);

impl ParameterList {
    /// Build the list from host-supplied parameters.
    ///
    /// `None` is the Rust spelling of a null parameter array and yields the
    /// same list as an empty slice: just the program name.
    pub fn from_host(parameters: Option<&[String]>) -> Self {
        let parameters = parameters.unwrap_or_default();
        let mut argv = Vec::with_capacity(parameters.len() + 1);
        argv.push(PROGRAM_NAME.to_string());
        argv.extend(parameters.iter().cloned());
        Self(argv)
    }

    /// The program name slot (always [`PROGRAM_NAME`]).
    pub fn program_name(&self) -> &str {
        &self.0[0]
    }

    /// Host parameters, without the program name.
    pub fn parameters(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; the program name is always present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl AsRef<[String]> for ParameterList {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

/// Opaque identifier of an application to launch (e.g. `mojo:sample_app`).
///
/// Passed through to the runtime untouched. No parsing or validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppUrl(String);

impl AppUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for AppUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl From<String> for AppUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl std::fmt::Display for AppUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An application URL plus its configuration arguments, as written on the
/// launcher command line: `"<app-url> [<arg>...]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub url: AppUrl,
    /// Configuration arguments; `args[0]` is the URL itself when non-empty,
    /// matching what the application sees as its own argv.
    pub args: Vec<String>,
}

impl AppSpec {
    /// Parse a space-separated spec.
    ///
    /// Repeated spaces produce no empty arguments. A blank string is
    /// `Ok(None)`. The first token must at least carry a URL scheme.
    pub fn parse(spec: &str) -> Result<Option<Self>> {
        let argv: Vec<String> = spec
            .split(' ')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let Some(first) = argv.first() else {
            return Ok(None);
        };
        if !has_scheme(first) {
            return Err(ShellError::InvalidAppSpec(format!("invalid URL: {first}")));
        }

        let url = AppUrl::new(first.clone());
        let args = if argv.len() > 1 { argv } else { Vec::new() };
        Ok(Some(Self { url, args }))
    }

    /// Fall back to arguments registered for this URL elsewhere.
    ///
    /// `registered` is a full argv (URL first). It is used only when this
    /// spec carries no arguments of its own; own arguments replace any
    /// registration.
    pub fn apply_registered_args(&mut self, registered: &[String]) {
        if self.args.is_empty() {
            self.args = registered.to_vec();
        }
    }
}

/// `scheme:` with a leading letter, then letters, digits, `+`, `-` or `.`.
fn has_scheme(candidate: &str) -> bool {
    let Some((scheme, _)) = candidate.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parameter_list_prefixes_program_name() {
        let params = strings(&["--enable-x", "--port=80"]);
        let list = ParameterList::from_host(Some(&params));
        assert_eq!(list.as_slice(), ["mojo_shell", "--enable-x", "--port=80"]);
        assert_eq!(list.program_name(), PROGRAM_NAME);
        assert_eq!(list.parameters(), params.as_slice());
    }

    #[test]
    fn null_parameters_match_empty_parameters() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(
            ParameterList::from_host(None),
            ParameterList::from_host(Some(&empty))
        );
        assert_eq!(ParameterList::from_host(None).into_vec(), ["mojo_shell"]);
    }

    #[test]
    fn app_url_is_untouched() {
        let url = AppUrl::from("  weird://Not A Url ");
        assert_eq!(url.as_str(), "  weird://Not A Url ");
        assert_eq!(url.to_string(), "  weird://Not A Url ");
    }

    #[test]
    fn spec_drops_empty_segments() {
        let spec = AppSpec::parse("mojo:js_standalone   test.js  ")
            .unwrap()
            .unwrap();
        assert_eq!(spec.url.as_str(), "mojo:js_standalone");
        assert_eq!(spec.args, ["mojo:js_standalone", "test.js"]);
    }

    #[test]
    fn spec_without_args_has_empty_argv() {
        let spec = AppSpec::parse("mojo:sample_app").unwrap().unwrap();
        assert!(spec.args.is_empty());
    }

    #[test]
    fn blank_spec_is_none() {
        assert!(AppSpec::parse("   ").unwrap().is_none());
        assert!(AppSpec::parse("").unwrap().is_none());
    }

    #[test]
    fn spec_without_scheme_is_rejected() {
        assert!(matches!(
            AppSpec::parse("sample_app --x"),
            Err(ShellError::InvalidAppSpec(_))
        ));
        assert!(AppSpec::parse("1mojo:app").is_err());
    }

    #[test]
    fn own_args_replace_registered_args() {
        let mut spec = AppSpec::parse("mojo:app own").unwrap().unwrap();
        spec.apply_registered_args(&strings(&["mojo:app", "reg1", "reg2"]));
        assert_eq!(spec.args, ["mojo:app", "own"]);

        let mut bare = AppSpec::parse("mojo:app").unwrap().unwrap();
        bare.apply_registered_args(&strings(&["mojo:app", "reg"]));
        assert_eq!(bare.args, ["mojo:app", "reg"]);
    }
}
