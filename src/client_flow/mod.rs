//! Models of the redirect state machines embedded in the rendered pages.
//!
//! The scripts in [`crate::render`] run in the visitor's browser and cannot be
//! exercised by the server. These types mirror them transition for transition,
//! sharing the same timing constants and status texts, with time supplied by a
//! [`Clock`] and side effects returned as [`Effect`] values. That makes the
//! race between timers and focus-loss events testable without a browser.

mod bridge;
mod clock;
mod deep_link;
mod detect;
mod effect;

pub use bridge::{BridgeFlow, BridgeState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use deep_link::{DeepLinkFlow, DeepLinkOutcome, DeepLinkState};
pub use detect::{detect_client_device, ClientDevice, ClientSignals};
pub use effect::{Effect, Timer, ANDROID_BUTTON_ID, IOS_BUTTON_ID, SPINNER_ID};
