// Copyright 2025 the gtmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enable/disable lifecycle shared by every interaction handler.
//!
//! ## Usage
//!
//! 1) Implement [`Handler`] for your interaction type; override the hooks you need.
//! 2) Wrap it in a [`Lifecycle`]. It starts disabled.
//! 3) Call [`Lifecycle::enable`] / [`Lifecycle::disable`]. Hooks run once per real transition.
//!
//! ## Failure policy
//!
//! The enabled flag is committed before the hook runs and is never rolled back.
//! A hook error (or, with `std`, a hook panic) is caught and returned as
//! [`Transition::HookFailed`], so one broken handler cannot wedge the others or leave
//! the flag out of step with what the owner asked for.
//!
//! ## Minimal example
//!
//! ```
//! use gtmap_handler::lifecycle::{Handler, Lifecycle};
//! use gtmap_handler::types::Transition;
//!
//! #[derive(Debug, Default)]
//! struct Toggle;
//! impl Handler for Toggle {}
//!
//! let mut h = Lifecycle::new(Toggle);
//! assert!(!h.is_enabled());
//! assert_eq!(h.enable(), Transition::Applied);
//! assert_eq!(h.enable(), Transition::Unchanged);
//! assert!(h.is_enabled());
//! ```

use alloc::boxed::Box;

use crate::types::{HookError, Transition};

/// Hooks run when a handler is switched on or off.
///
/// Both default to doing nothing, so a handler without overrides is a plain toggle.
pub trait Handler {
    /// Called once when the handler becomes enabled.
    fn add_hooks(&mut self) -> Result<(), HookError> {
        Ok(())
    }

    /// Called once when the handler becomes disabled.
    fn remove_hooks(&mut self) -> Result<(), HookError> {
        Ok(())
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn add_hooks(&mut self) -> Result<(), HookError> {
        (**self).add_hooks()
    }

    fn remove_hooks(&mut self) -> Result<(), HookError> {
        (**self).remove_hooks()
    }
}

/// A handler plus its enabled flag.
///
/// The flag is private: it only changes through [`enable`](Self::enable),
/// [`disable`](Self::disable) and [`set_enabled`](Self::set_enabled).
#[derive(Clone, Debug, Default)]
pub struct Lifecycle<H: Handler> {
    handler: H,
    enabled: bool,
}

impl<H: Handler> Lifecycle<H> {
    /// Wrap a handler. It starts disabled and no hook runs.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            enabled: false,
        }
    }

    /// Enable right away, for construction chains. The transition outcome is discarded.
    #[must_use]
    pub fn with_enabled(mut self) -> Self {
        let _ = self.enable();
        self
    }

    /// Whether the handler is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable the handler and run [`Handler::add_hooks`] if it was disabled.
    pub fn enable(&mut self) -> Transition {
        if self.enabled {
            return Transition::Unchanged;
        }
        self.enabled = true;
        let handler = &mut self.handler;
        into_transition(guarded(|| handler.add_hooks()))
    }

    /// Disable the handler and run [`Handler::remove_hooks`] if it was enabled.
    pub fn disable(&mut self) -> Transition {
        if !self.enabled {
            return Transition::Unchanged;
        }
        self.enabled = false;
        let handler = &mut self.handler;
        into_transition(guarded(|| handler.remove_hooks()))
    }

    /// [`enable`](Self::enable) or [`disable`](Self::disable) depending on `on`.
    pub fn set_enabled(&mut self, on: bool) -> Transition {
        if on { self.enable() } else { self.disable() }
    }

    /// Shared access to the wrapped handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the wrapped handler. Does not touch the enabled flag.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Unwrap the handler without running any hook.
    pub fn into_inner(self) -> H {
        self.handler
    }
}

fn into_transition(result: Result<(), HookError>) -> Transition {
    match result {
        Ok(()) => Transition::Applied,
        Err(e) => Transition::HookFailed(e),
    }
}

#[cfg(feature = "std")]
fn guarded(hook: impl FnOnce() -> Result<(), HookError>) -> Result<(), HookError> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(hook))
        .unwrap_or(Err(HookError::Panicked))
}

#[cfg(not(feature = "std"))]
fn guarded(hook: impl FnOnce() -> Result<(), HookError>) -> Result<(), HookError> {
    hook()
}
