//! Shared helpers used across indicator modules.

pub mod math;
