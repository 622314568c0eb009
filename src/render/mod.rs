//! Page rendering.
//!
//! Produces the HTML bodies for the bridge and deep-link pages. Each page is a
//! static shell plus an inline script implementing a small redirect state
//! machine that runs in the visitor's browser (modelled in Rust by
//! [`crate::client_flow`]). Rendering is total: every interpolated value is
//! HTML-escaped or encoded as a script-safe JSON string literal.

mod bridge;
mod deep_link;
mod escape;
mod query;
mod templates;
mod types;

pub use bridge::render_bridge_page;
pub use deep_link::render_deep_link_page;
pub use escape::{escape_html, js_string_literal};
pub use query::append_query_string;
pub use types::{
    not_installed_message, AppPlatform, BridgePageOptions, DeepLinkPageOptions,
    APP_OPENED_MESSAGE,
};
