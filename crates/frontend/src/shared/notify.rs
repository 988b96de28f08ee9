//! Blocking user notifications
//!
//! The running app notifies through `window.alert`. The trait is the seam
//! that lets controller flows be exercised in tests without a browser.

/// Capability for surfacing a blocking message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert`-backed notifier.
#[derive(Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }
}
