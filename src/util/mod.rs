//! Shared helpers used across lexigraph components.

pub mod join;
