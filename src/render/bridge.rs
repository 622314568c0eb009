//! Bridge page rendering.

use super::escape::{escape_html, js_string_literal};
use super::query::append_query_string;
use super::templates::{BASE_STYLE, BRIDGE_SCRIPT, BRIDGE_STYLE};
use super::types::BridgePageOptions;
use crate::config::BRIDGE_REDIRECT_DELAY_MS;

/// Renders the bridge page.
///
/// The page re-runs device detection in the browser and navigates after a
/// short delay. Store and website buttons stay visible as a manual fallback.
/// Only the fallback URL receives the forwarded query string.
pub fn render_bridge_page(options: &BridgePageOptions) -> String {
    let fallback_with_query = append_query_string(&options.fallback_url, &options.query_string);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Redirecting...</title>
  <style>{base_style}{bridge_style}
  </style>
</head>
<body>
  <div class="container">
    <div class="spinner" id="spinner"></div>
    <h1>Opening App...</h1>
    <p>Detecting your device. If you're not redirected automatically, choose an option below.</p>
    <div class="buttons">
      <a href="{ios_href}" class="btn" id="ios-btn">Download on App Store</a>
      <a href="{android_href}" class="btn" id="android-btn">Get it on Google Play</a>
      <a href="{fallback_href}" class="btn secondary">Visit Website</a>
    </div>
  </div>
  <script>
    (function() {{
      var androidUrl = {android_js};
      var iosUrl = {ios_js};
      var fallbackUrl = {fallback_js};
      var redirectDelay = {redirect_delay};
{script}
    }})();
  </script>
</body>
</html>"#,
        base_style = BASE_STYLE,
        bridge_style = BRIDGE_STYLE,
        ios_href = escape_html(&options.ios_store_url),
        android_href = escape_html(&options.android_store_url),
        fallback_href = escape_html(&fallback_with_query),
        android_js = js_string_literal(&options.android_store_url),
        ios_js = js_string_literal(&options.ios_store_url),
        fallback_js = js_string_literal(&fallback_with_query),
        redirect_delay = BRIDGE_REDIRECT_DELAY_MS,
        script = BRIDGE_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(query: &str) -> BridgePageOptions {
        BridgePageOptions {
            android_store_url: "https://play.google.com/store/apps/details?id=com.example.app"
                .to_string(),
            ios_store_url: "https://apps.apple.com/app/id123456789".to_string(),
            fallback_url: "https://example.com/app".to_string(),
            query_string: query.to_string(),
        }
    }

    #[test]
    fn test_bridge_page_embeds_all_destinations() {
        let html = render_bridge_page(&options(""));
        assert!(html.contains(r#"var androidUrl = "https://play.google.com/store/apps/details?id=com.example.app";"#));
        assert!(html.contains(r#"var iosUrl = "https://apps.apple.com/app/id123456789";"#));
        assert!(html.contains(r#"var fallbackUrl = "https://example.com/app";"#));
        assert!(html.contains(r#"href="https://play.google.com/store/apps/details?id=com.example.app""#));
        assert!(html.contains(r#"href="https://apps.apple.com/app/id123456789""#));
    }

    #[test]
    fn test_bridge_page_forwards_query_to_fallback_only() {
        let html = render_bridge_page(&options("utm=foo&campaign=x"));
        assert!(html.contains(r#"var fallbackUrl = "https://example.com/app?utm=foo&campaign=x";"#));
        assert!(html.contains(r#"href="https://example.com/app?utm=foo&amp;campaign=x""#));
        assert!(html.contains(r#"var iosUrl = "https://apps.apple.com/app/id123456789";"#));
    }

    #[test]
    fn test_bridge_page_embeds_redirect_delay() {
        let html = render_bridge_page(&options(""));
        assert!(html.contains("var redirectDelay = 300;"));
        assert!(html.contains("}, redirectDelay);"));
    }

    #[test]
    fn test_bridge_page_escapes_hostile_values() {
        let hostile = BridgePageOptions {
            fallback_url: "https://evil.example/\"><script>alert(1)</script>".to_string(),
            ..options("q=</script>")
        };
        let html = render_bridge_page(&hostile);
        assert!(!html.contains("<script>alert(1)"));
        assert!(!html.contains("q=</script>"));
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains("&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_bridge_page_has_balanced_script_wrapper() {
        let html = render_bridge_page(&options(""));
        assert!(html.contains("(function() {\n"));
        assert!(html.contains("})();"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
    }
}
