//! Static page fragments.
//!
//! The scripts reference variables declared by the renderer in a prelude, so
//! no per-request value is ever spliced into these strings.

/// Styles shared by both pages.
pub(super) const BASE_STYLE: &str = r#"
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      min-height: 100vh;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: #fff;
      padding: 20px;
      text-align: center;
    }
    .container {
      background: rgba(255,255,255,0.1);
      backdrop-filter: blur(10px);
      border-radius: 16px;
      padding: 40px;
      max-width: 400px;
      width: 100%;
    }
    h1 { font-size: 24px; margin-bottom: 16px; }
    p { font-size: 16px; opacity: 0.9; margin-bottom: 24px; }
    .spinner {
      width: 40px;
      height: 40px;
      border: 3px solid rgba(255,255,255,0.3);
      border-top-color: #fff;
      border-radius: 50%;
      animation: spin 1s linear infinite;
      margin: 0 auto 24px;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .buttons { display: flex; flex-direction: column; gap: 12px; }
    a.btn {
      display: block;
      padding: 14px 24px;
      background: #fff;
      color: #667eea;
      text-decoration: none;
      border-radius: 8px;
      font-weight: 600;
      transition: transform 0.2s, box-shadow 0.2s;
    }
    a.btn:hover {
      transform: translateY(-2px);
      box-shadow: 0 4px 12px rgba(0,0,0,0.2);
    }"#;

pub(super) const BRIDGE_STYLE: &str = r#"
    .btn.secondary {
      background: rgba(255,255,255,0.2);
      color: #fff;
    }"#;

pub(super) const DEEP_LINK_STYLE: &str = r#"
    .status { font-size: 14px; opacity: 0.8; margin-top: 16px; }"#;

/// Bridge page state machine.
///
/// Expects `androidUrl`, `iosUrl`, `fallbackUrl` and `redirectDelay` in scope.
pub(super) const BRIDGE_SCRIPT: &str = r#"
      function detectDevice() {
        var ua = navigator.userAgent || '';
        var platform = navigator.platform || '';
        var maxTouch = navigator.maxTouchPoints || 0;

        if (/android/i.test(ua)) {
          return 'android';
        }
        if (/iphone|ipad|ipod/i.test(ua)) {
          return 'ios';
        }
        // iPadOS 13+ reports as Macintosh but has a touch screen
        if (/macintosh/i.test(ua) && maxTouch > 1) {
          return 'ios';
        }
        if (/iphone|ipad|ipod/i.test(platform)) {
          return 'ios';
        }
        if (/win|mac|linux/i.test(platform) && maxTouch <= 1) {
          return 'desktop';
        }
        return 'unknown';
      }

      var device = detectDevice();

      setTimeout(function() {
        if (device === 'android') {
          document.getElementById('ios-btn').style.display = 'none';
          window.location.href = androidUrl;
        } else if (device === 'ios') {
          document.getElementById('android-btn').style.display = 'none';
          window.location.href = iosUrl;
        } else {
          window.location.href = fallbackUrl;
        }
      }, redirectDelay);"#;

/// Deep-link page state machine.
///
/// Expects `deepLink`, `storeUrl`, `notInstalledText`, `openedText`,
/// `checkDelay`, `openWindow` and `storeDelay` in scope.
pub(super) const DEEP_LINK_SCRIPT: &str = r#"
      var status = document.getElementById('status');
      var spinner = document.getElementById('spinner');

      var appOpened = false;
      document.addEventListener('visibilitychange', function() {
        if (document.hidden) {
          appOpened = true;
        }
      });
      window.addEventListener('blur', function() {
        appOpened = true;
      });

      var start = Date.now();
      window.location.href = deepLink;

      setTimeout(function() {
        if (!appOpened && Date.now() - start < openWindow) {
          status.textContent = notInstalledText;
          setTimeout(function() {
            window.location.href = storeUrl;
          }, storeDelay);
        } else if (appOpened) {
          status.textContent = openedText;
          spinner.style.display = 'none';
        }
      }, checkDelay);"#;
