use std::time::Duration;

/// Side effects the controller needs from its host, other than the network.
pub(crate) trait Platform {
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;

    /// Runs `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        leptos_dom::helpers::set_timeout(move || callback(), delay);
    }
}
