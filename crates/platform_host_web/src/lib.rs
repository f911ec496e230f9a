//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on native targets too; there it degrades to a silent no-op so the
//! desktop runtime can be unit-tested without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host bundle factory.
pub mod adapters;
pub mod audio;
pub mod external_url;
pub mod random;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use audio::{sound_asset_url, WebSoundCueService};
pub use external_url::WebExternalUrlService;
pub use random::WebRandomSource;
