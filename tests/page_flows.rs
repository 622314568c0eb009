//! Rendered pages and their client flow models must agree.

use smartlink::client_flow::{
    BridgeFlow, ClientSignals, DeepLinkFlow, Effect, ManualClock, Timer,
};
use smartlink::render::{
    render_bridge_page, render_deep_link_page, AppPlatform, BridgePageOptions,
    DeepLinkPageOptions,
};

fn bridge_options() -> BridgePageOptions {
    BridgePageOptions {
        android_store_url: "https://play.google.com/store/apps/details?id=com.example.app"
            .to_string(),
        ios_store_url: "https://apps.apple.com/app/id123456789".to_string(),
        fallback_url: "https://example.com/app?ref=x".to_string(),
        query_string: "utm=foo".to_string(),
    }
}

fn deep_link_options() -> DeepLinkPageOptions {
    DeepLinkPageOptions {
        deep_link: "myapp://open".to_string(),
        store_url: "https://play.google.com/store/apps/details?id=com.example.app".to_string(),
        device: AppPlatform::Android,
        query_string: "utm=foo".to_string(),
    }
}

fn delay_of(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Schedule { delay_ms, .. } => Some(*delay_ms),
            _ => None,
        })
        .expect("no timer scheduled")
}

fn navigation_of(effects: &[Effect]) -> String {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Navigate(url) => Some(url.clone()),
            _ => None,
        })
        .expect("no navigation")
}

#[test]
fn test_bridge_model_matches_rendered_page() {
    let options = bridge_options();
    let html = render_bridge_page(&options);
    let mut flow = BridgeFlow::new(&options);

    let delay = delay_of(&flow.start(&ClientSignals::default()));
    assert!(html.contains(&format!("var redirectDelay = {};", delay)));

    let destination = navigation_of(&flow.on_timer(Timer::BridgeRedirect));
    assert_eq!(destination, "https://example.com/app?ref=x&utm=foo");
    assert!(html.contains(&format!("var fallbackUrl = \"{}\";", destination)));
}

#[test]
fn test_deep_link_model_matches_rendered_page() {
    let options = deep_link_options();
    let html = render_deep_link_page(&options);
    let clock = ManualClock::new(0);
    let mut flow = DeepLinkFlow::new(&options, &clock);

    let effects = flow.start();
    let deep_link = navigation_of(&effects);
    assert!(html.contains(&format!("var deepLink = \"{}\";", deep_link)));
    let check_delay = delay_of(&effects);
    assert!(html.contains(&format!("var checkDelay = {};", check_delay)));

    clock.advance(check_delay);
    let effects = flow.on_timer(Timer::DeepLinkCheck);
    let status = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SetStatus(text) => Some(text.clone()),
            _ => None,
        })
        .unwrap();
    assert!(html.contains(&format!("var notInstalledText = \"{}\";", status)));
    let store_delay = delay_of(&effects);
    assert!(html.contains(&format!("var storeDelay = {};", store_delay)));

    clock.advance(store_delay);
    let store = navigation_of(&flow.on_timer(Timer::StoreRedirect));
    assert!(html.contains(&format!("var storeUrl = \"{}\";", store)));
}
