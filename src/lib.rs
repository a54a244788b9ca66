mod api;
mod app;
mod components;
mod drafts;
mod models;
mod pages;
mod state;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

pub use app::App;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::{ApiClient, EnvConfig};
    use crate::state::{BrowserPlatform, Platform};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_env_config_defaults_without_window_env() {
        let cfg = EnvConfig::new();
        assert_eq!(cfg.api_base(), "http://localhost:8000/api");
    }

    #[wasm_bindgen_test]
    fn test_api_client_from_env_targets_api_prefix() {
        let client = ApiClient::from_env();
        assert!(client.base_url.ends_with("/api"));
    }

    #[wasm_bindgen_test]
    async fn test_browser_platform_schedule_runs_once() {
        let (tx, rx) = futures::channel::oneshot::channel::<u8>();
        BrowserPlatform.schedule(
            std::time::Duration::from_millis(10),
            Box::new(move || {
                let _ = tx.send(7);
            }),
        );
        assert_eq!(rx.await, Ok(7));
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
