//! Scheduler Console Bindings
//!
//! Declarative view components for the cluster scheduler web console, and a
//! preview harness that renders one component from a JSON fixture.

pub mod preview;

/// Domain types, markup tree, errors and logging
pub mod core {
    pub use console_core::*;
}

/// Components, registry, template resolution and the DOM primitive
pub mod bindings {
    pub use console_bindings::*;
}

pub use preview::{render_component, render_or_placeholder, PreviewOutput};
