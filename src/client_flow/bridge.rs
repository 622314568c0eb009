//! Bridge page flow.

use super::detect::{detect_client_device, ClientDevice, ClientSignals};
use super::effect::{Effect, Timer, ANDROID_BUTTON_ID, IOS_BUTTON_ID};
use crate::config::BRIDGE_REDIRECT_DELAY_MS;
use crate::render::{append_query_string, BridgePageOptions};

/// Where the bridge page is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Page not loaded yet
    Detecting,
    /// Device detected, redirect timer pending; buttons usable
    Waiting(ClientDevice),
    /// Navigation issued
    Navigated(ClientDevice),
}

/// Model of the bridge page script.
#[derive(Debug, Clone)]
pub struct BridgeFlow {
    android_url: String,
    ios_url: String,
    fallback_url: String,
    state: BridgeState,
}

impl BridgeFlow {
    /// Builds the flow with the same destinations the rendered page embeds.
    pub fn new(options: &BridgePageOptions) -> Self {
        Self {
            android_url: options.android_store_url.clone(),
            ios_url: options.ios_store_url.clone(),
            fallback_url: append_query_string(&options.fallback_url, &options.query_string),
            state: BridgeState::Detecting,
        }
    }

    /// Current state.
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Page load: detect the device and schedule the redirect.
    pub fn start(&mut self, signals: &ClientSignals) -> Vec<Effect> {
        if self.state != BridgeState::Detecting {
            return Vec::new();
        }
        self.state = BridgeState::Waiting(detect_client_device(signals));
        vec![Effect::Schedule {
            timer: Timer::BridgeRedirect,
            delay_ms: BRIDGE_REDIRECT_DELAY_MS,
        }]
    }

    /// Timer callback.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        let device = match (self.state, timer) {
            (BridgeState::Waiting(device), Timer::BridgeRedirect) => device,
            _ => return Vec::new(),
        };
        self.state = BridgeState::Navigated(device);

        match device {
            ClientDevice::Android => vec![
                Effect::HideElement(IOS_BUTTON_ID),
                Effect::Navigate(self.android_url.clone()),
            ],
            ClientDevice::Ios => vec![
                Effect::HideElement(ANDROID_BUTTON_ID),
                Effect::Navigate(self.ios_url.clone()),
            ],
            ClientDevice::Desktop | ClientDevice::Unknown => {
                vec![Effect::Navigate(self.fallback_url.clone())]
            }
        }
    }
}
