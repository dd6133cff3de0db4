//! Service plumbing: HTTP surface and the periodic evaluation loop.

pub mod http;
pub mod runtime;
