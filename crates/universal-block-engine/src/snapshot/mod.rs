//! # Snapshot Testing Support
//!
//! Utilities for testing conversions via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a forest as a stable indented text outline for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for builder correctness (class/style/control
//!   keys never leak into generic attributes, void tags are self-closing, `<svg>`
//!   is never decomposed)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
