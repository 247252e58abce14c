//! Best score persistence

pub const BEST_SCORE_KEY: &str = "nw_best";

pub trait ScoreStore {
    /// Stored best, 0 when absent or unreadable
    fn load_best(&self) -> u32;
    fn save_best(&mut self, best: u32);
}

/// Stored values are decimal strings; anything else reads as 0
pub fn parse_best(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::*;
    use web_sys::Storage;

    /// `localStorage`-backed store. Without storage every read is 0 and writes are dropped.
    pub struct LocalStore {
        storage: Option<Storage>,
    }

    impl LocalStore {
        pub fn new(window: &web_sys::Window) -> Self {
            let storage = match window.local_storage() {
                Ok(storage) => storage,
                Err(e) => {
                    tracing::warn!(?e, "localStorage unavailable");
                    None
                }
            };
            Self { storage }
        }
    }

    impl ScoreStore for LocalStore {
        fn load_best(&self) -> u32 {
            let raw = self
                .storage
                .as_ref()
                .and_then(|s| s.get_item(BEST_SCORE_KEY).ok().flatten());
            parse_best(raw.as_deref())
        }

        fn save_best(&mut self, best: u32) {
            if let Some(storage) = &self.storage {
                if let Err(e) = storage.set_item(BEST_SCORE_KEY, &best.to_string()) {
                    tracing::warn!(?e, best, "failed to persist best score");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best() {
        assert_eq!(parse_best(Some("42")), 42);
        assert_eq!(parse_best(Some(" 7 ")), 7);
        assert_eq!(parse_best(Some("12.0")), 12);
        assert_eq!(parse_best(None), 0);
        assert_eq!(parse_best(Some("")), 0);
        assert_eq!(parse_best(Some("abc")), 0);
        assert_eq!(parse_best(Some("-3")), 0);
    }
}
