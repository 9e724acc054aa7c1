//! Semantic-action hooks.
//!
//! A rule can end in `{ name }` to compute its value with a hook instead of
//! concatenating the values of its elements. Hooks are plain function pointers
//! so a compiled [`Matcher`](crate::Matcher) stays `Send + Sync` and matching
//! touches no shared state.
//!
//! [`Hooks::new`] registers one built-in, `words`, which joins the non-empty
//! element values with single spaces. Everything else is registered by the
//! caller with [`Hooks::with`].

use std::collections::BTreeMap;

use thiserror::Error;

/// A hook computes a rule's value from the values its elements produced.
///
/// Returning an error aborts the whole match; the failure is reported as a
/// rejection rather than a syntax error.
pub type HookFn = fn(&Bindings<'_>) -> Result<String, HookError>;

/// A hook refused the input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    /// Creates a new hook error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The value one sequence element produced, with its label if it had one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<'g> {
    /// Label from `label:expr`.
    pub label: Option<&'g str>,
    /// Matched value.
    pub value: String,
}

/// The values a hook receives, in element order.
#[derive(Clone, Copy, Debug)]
pub struct Bindings<'a> {
    items: &'a [Binding<'a>],
}

impl<'a> Bindings<'a> {
    /// Wraps a slice of bindings.
    #[must_use]
    pub fn new(items: &'a [Binding<'a>]) -> Self {
        Self { items }
    }

    /// Returns the value bound to `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&'a str> {
        self.items
            .iter()
            .find(|b| b.label == Some(label))
            .map(|b| b.value.as_str())
    }

    /// Returns all values in order.
    pub fn values(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.items.iter().map(|b| b.value.as_str())
    }

    /// Returns all values joined with nothing.
    #[must_use]
    pub fn concat(&self) -> String {
        self.values().collect()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Named hooks available to a grammar at compile time.
#[derive(Clone, Debug)]
pub struct Hooks {
    table: BTreeMap<String, HookFn>,
}

impl Hooks {
    /// Creates a hook table holding the built-in `words` hook.
    #[must_use]
    pub fn new() -> Self {
        Self::empty().with("words", words)
    }

    /// Creates a hook table with no hooks at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Registers a hook, replacing any hook with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, hook: HookFn) -> Self {
        self.table.insert(name.into(), hook);
        self
    }

    /// Looks up a hook by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<HookFn> {
        self.table.get(name).copied()
    }

    /// Returns the registered hook names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::unnecessary_wraps)]
fn words(bindings: &Bindings<'_>) -> Result<String, HookError> {
    Ok(bindings
        .values()
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}
