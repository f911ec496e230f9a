//! Hand-off of external-link application slots to the host browser.

use std::cell::RefCell;

use crate::HostFuture;

/// Host service that opens a URL outside the desktop shell (a new browser tab).
pub trait ExternalUrlService {
    /// Opens `url` with the host's navigation mechanism.
    fn open_url(&self, url: &str) -> HostFuture<'static, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// External URL service for hosts that cannot navigate.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url(&self, _url: &str) -> HostFuture<'static, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// External URL service that records every requested URL.
pub struct MemoryExternalUrlService {
    opened: RefCell<Vec<String>>,
}

impl MemoryExternalUrlService {
    /// Returns the URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url(&self, url: &str) -> HostFuture<'static, Result<(), String>> {
        if url.trim().is_empty() {
            return Box::pin(async { Err("external url is empty".to_string()) });
        }
        self.opened.borrow_mut().push(url.to_string());
        Box::pin(async { Ok(()) })
    }
}
