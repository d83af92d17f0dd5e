//! Frame timing utilities for the chart animation loop.

/// Monotonic timestamp in milliseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct InstantStamp(f64);

impl InstantStamp {
    pub fn from_ms(ms: f64) -> Self {
        Self(ms)
    }

    pub fn as_ms(self) -> f64 {
        self.0
    }

    /// Milliseconds since `earlier`, never negative.
    pub fn elapsed_since(self, earlier: InstantStamp) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> InstantStamp {
    let ms = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default();
    InstantStamp(ms)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> InstantStamp {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    InstantStamp(ORIGIN.elapsed().as_secs_f64() * 1000.0)
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
