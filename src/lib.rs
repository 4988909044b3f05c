//! Bastiongen - generates reverse-proxy routing configuration for per-student backends
//!
//! This library turns a roster of `name:ip` pairs and a domain into:
//! - A stream-level map routing `*.{name}.{domain}` to each backend's port 443
//! - Per-student SSH forwarding blocks on ports derived from each backend IP
//! - A per-student HTTP/HTTPS vhost file rendered from an external template
//!
//! Generation is a one-shot, sequential pipeline: parse the roster, plan all
//! artifacts in memory, write them out, report a summary.

pub mod config;
pub mod generate;
pub mod report;
pub mod roster;
pub mod stream;
pub mod template;
pub mod vhost;
