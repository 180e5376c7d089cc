//! Markup output for rendered components
//!
//! This module is the host-side half of the component contract: it takes
//! element trees produced by components and serializes them to HTML.

pub mod config;
pub mod writer;

pub use config::HtmlConfig;
pub use writer::{escape_html, Element, Node};
