//! Deep-link page flow.

use super::clock::Clock;
use super::effect::{Effect, Timer, SPINNER_ID};
use crate::config::{DEEP_LINK_CHECK_DELAY_MS, DEEP_LINK_OPEN_WINDOW_MS, STORE_REDIRECT_DELAY_MS};
use crate::render::{
    append_query_string, not_installed_message, AppPlatform, DeepLinkPageOptions,
    APP_OPENED_MESSAGE,
};

/// How a deep-link attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepLinkOutcome {
    /// Focus was lost before the checkpoint; the app is assumed open
    AppOpened,
    /// No focus loss in time; the store listing was opened
    RedirectedToStore,
    /// The checkpoint fired too late to judge; nothing further happens
    Inconclusive,
}

/// Where the deep-link page is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepLinkState {
    /// Page not loaded yet
    Idle,
    /// Deep link issued, checkpoint pending, no focus loss seen
    Pending,
    /// Deep link issued, checkpoint pending, focus lost
    AppOpened,
    /// Checkpoint found no app; store redirect pending
    TimedOut,
    /// Finished; no further events are handled
    Terminal(DeepLinkOutcome),
}

/// Model of the deep-link page script.
///
/// Focus-loss events and timer callbacks may arrive in any order. Events only
/// flip the `app_opened` flag; the flag is read once, at the checkpoint.
/// Timers are never cancelled.
#[derive(Debug)]
pub struct DeepLinkFlow<C: Clock> {
    clock: C,
    deep_link: String,
    store_url: String,
    platform: AppPlatform,
    state: DeepLinkState,
    app_opened: bool,
    started_at: u64,
}

impl<C: Clock> DeepLinkFlow<C> {
    /// Builds the flow with the same values the rendered page embeds.
    pub fn new(options: &DeepLinkPageOptions, clock: C) -> Self {
        Self {
            clock,
            deep_link: append_query_string(&options.deep_link, &options.query_string),
            store_url: options.store_url.clone(),
            platform: options.device,
            state: DeepLinkState::Idle,
            app_opened: false,
            started_at: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> DeepLinkState {
        self.state
    }

    /// Whether a focus-loss signal has been seen (at any time).
    pub fn app_opened(&self) -> bool {
        self.app_opened
    }

    /// Page load: record the start time, open the deep link, arm the checkpoint.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.state != DeepLinkState::Idle {
            return Vec::new();
        }
        self.started_at = self.clock.now_ms();
        self.state = DeepLinkState::Pending;
        vec![
            Effect::Navigate(self.deep_link.clone()),
            Effect::Schedule {
                timer: Timer::DeepLinkCheck,
                delay_ms: DEEP_LINK_CHECK_DELAY_MS,
            },
        ]
    }

    /// `visibilitychange` with `document.hidden == true`.
    pub fn on_visibility_hidden(&mut self) {
        self.mark_app_opened();
    }

    /// `window` blur.
    pub fn on_blur(&mut self) {
        self.mark_app_opened();
    }

    fn mark_app_opened(&mut self) {
        if self.state == DeepLinkState::Idle {
            return;
        }
        self.app_opened = true;
        if self.state == DeepLinkState::Pending {
            self.state = DeepLinkState::AppOpened;
        }
    }

    /// Timer callback.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match (self.state, timer) {
            (DeepLinkState::Pending, Timer::DeepLinkCheck) => {
                let elapsed = self.clock.now_ms().saturating_sub(self.started_at);
                if elapsed < DEEP_LINK_OPEN_WINDOW_MS {
                    self.state = DeepLinkState::TimedOut;
                    vec![
                        Effect::SetStatus(not_installed_message(self.platform)),
                        Effect::Schedule {
                            timer: Timer::StoreRedirect,
                            delay_ms: STORE_REDIRECT_DELAY_MS,
                        },
                    ]
                } else {
                    self.state = DeepLinkState::Terminal(DeepLinkOutcome::Inconclusive);
                    Vec::new()
                }
            }
            (DeepLinkState::AppOpened, Timer::DeepLinkCheck) => {
                self.state = DeepLinkState::Terminal(DeepLinkOutcome::AppOpened);
                vec![
                    Effect::SetStatus(APP_OPENED_MESSAGE.to_string()),
                    Effect::HideElement(SPINNER_ID),
                ]
            }
            (DeepLinkState::TimedOut, Timer::StoreRedirect) => {
                self.state = DeepLinkState::Terminal(DeepLinkOutcome::RedirectedToStore);
                vec![Effect::Navigate(self.store_url.clone())]
            }
            _ => Vec::new(),
        }
    }
}
