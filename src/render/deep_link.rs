//! Deep-link page rendering.

use super::escape::{escape_html, js_string_literal};
use super::query::append_query_string;
use super::templates::{BASE_STYLE, DEEP_LINK_SCRIPT, DEEP_LINK_STYLE};
use super::types::{not_installed_message, DeepLinkPageOptions, APP_OPENED_MESSAGE};
use crate::config::{DEEP_LINK_CHECK_DELAY_MS, DEEP_LINK_OPEN_WINDOW_MS, STORE_REDIRECT_DELAY_MS};

/// Renders the deep-link page.
///
/// The page navigates to the deep link immediately, then checks once whether
/// the browser lost focus (the app opened). If not, it announces the store
/// redirect and navigates to the store listing. The forwarded query string is
/// appended to the deep link only.
pub fn render_deep_link_page(options: &DeepLinkPageOptions) -> String {
    let deep_link_with_query = append_query_string(&options.deep_link, &options.query_string);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Opening App...</title>
  <style>{base_style}{deep_link_style}
  </style>
</head>
<body>
  <div class="container">
    <div class="spinner" id="spinner"></div>
    <h1>Opening App...</h1>
    <p>Attempting to open the app. If it doesn't open, tap the button below.</p>
    <div class="buttons">
      <a href="{store_href}" class="btn" id="store-btn">{store_label}</a>
    </div>
    <p class="status" id="status">Trying to open app...</p>
  </div>
  <script>
    (function() {{
      var deepLink = {deep_link_js};
      var storeUrl = {store_js};
      var notInstalledText = {not_installed_js};
      var openedText = {opened_js};
      var checkDelay = {check_delay};
      var openWindow = {open_window};
      var storeDelay = {store_delay};
{script}
    }})();
  </script>
</body>
</html>"#,
        base_style = BASE_STYLE,
        deep_link_style = DEEP_LINK_STYLE,
        store_href = escape_html(&options.store_url),
        store_label = escape_html(options.device.store_label()),
        deep_link_js = js_string_literal(&deep_link_with_query),
        store_js = js_string_literal(&options.store_url),
        not_installed_js = js_string_literal(&not_installed_message(options.device)),
        opened_js = js_string_literal(APP_OPENED_MESSAGE),
        check_delay = DEEP_LINK_CHECK_DELAY_MS,
        open_window = DEEP_LINK_OPEN_WINDOW_MS,
        store_delay = STORE_REDIRECT_DELAY_MS,
        script = DEEP_LINK_SCRIPT,
    )
}
