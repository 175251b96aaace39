//! Interactive data-structure demos for feedlab.
//!
//! A [`DemoContext`] owns one queue, stack, general tree, binary tree and
//! integer BST for the life of the process. Callers send [`DemoRequest`]s,
//! usually parsed from JSON with [`parse_request`], and get back a
//! [`DemoResponse`] holding a status and a JSON snapshot of the structure
//! they touched.

mod context;
mod request;

pub use context::{DemoContext, DemoState};
pub use request::{DemoRequest, DemoResponse, node_ref, parse_request};

/// Component name used in log entries from this crate.
pub const COMPONENT: &str = "demo";
