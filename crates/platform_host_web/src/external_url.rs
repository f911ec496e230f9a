//! External URL adapter that opens links in a new browser tab.

use platform_host::{ExternalUrlService, HostFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Opens external slots with `window.open(url, "_blank")`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url(&self, url: &str) -> HostFuture<'static, Result<(), String>> {
        let url = url.trim().to_string();
        Box::pin(async move {
            if url.is_empty() {
                return Err("external url is empty".to_string());
            }

            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                return window
                    .open_with_url_and_target(&url, "_blank")
                    .map(|_| ())
                    .map_err(|err| format!("window.open for `{url}` failed: {err:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Ok(())
            }
        })
    }
}
