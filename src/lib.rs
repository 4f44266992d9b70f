//! Safe navigation and typed conversion over decoded JSON-like trees.

/// Path-tracking values, container views, conversions, and the keyed archive adapter.
pub mod nav;
