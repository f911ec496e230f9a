//! Ambient browser randomness behind the [`RandomSource`] contract.

use platform_host::{RandomSource, SeededRandomSource};

/// `Math.random()` on wasm; a clock-seeded xorshift elsewhere.
#[derive(Debug, Clone)]
pub struct WebRandomSource {
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fallback: SeededRandomSource,
}

impl Default for WebRandomSource {
    fn default() -> Self {
        Self {
            fallback: SeededRandomSource::new(clock_seed()),
        }
    }
}

impl RandomSource for WebRandomSource {
    fn next_unit(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.fallback.next_unit()
        }
    }
}

fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(1.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(1)
    }
}
