//! Reporter module for HTML output

pub mod escape;
pub mod html;

pub use escape::{encode_uri_component, sanitize};
pub use html::{render, HtmlReporter, DEFAULT_TEMPLATE, PLACEHOLDER};
