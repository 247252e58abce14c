//! Offline asset cache for the game page
//!
//! Cache-first policy over a versioned cache:
//! - install: cache every manifest asset under the current version name
//! - activate: delete every cache whose name is not the current version
//! - fetch: serve the cached response if there is one, otherwise the network
//!
//! The policy is written against `OfflineBackend` so it runs off-browser in
//! tests; `web` binds it to the service worker's `CacheStorage`.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{on_activate, on_fetch, on_install};

/// Versioned list of assets needed to load the page offline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheManifest {
    pub name: &'static str,
    pub assets: &'static [&'static str],
}

impl CacheManifest {
    pub const CURRENT: CacheManifest = CacheManifest {
        name: "neonwaves-cache-v2",
        assets: &[
            "./",
            "index.html",
            "style.css",
            "script.js",
            "pkg/client_wasm.js",
            "pkg/client_wasm_bg.wasm",
            "icon-192.png",
            "icon-512.png",
            "OhLaLa.m4a",
            "score.wav",
        ],
    };
}

/// Cache storage and network access as seen by the worker
#[allow(async_fn_in_trait)]
pub trait OfflineBackend {
    type Request;
    type Response;
    type Error: std::fmt::Debug;

    /// Open (creating if needed) `cache` and store every url. Fails as a whole.
    async fn add_all(&self, cache: &str, urls: &[&str]) -> Result<(), Self::Error>;
    async fn cache_names(&self) -> Result<Vec<String>, Self::Error>;
    /// True if a cache was deleted
    async fn delete_cache(&self, name: &str) -> Result<bool, Self::Error>;
    /// Look the request up across all caches
    async fn cached(&self, request: &Self::Request) -> Result<Option<Self::Response>, Self::Error>;
    async fn fetch_network(&self, request: &Self::Request) -> Result<Self::Response, Self::Error>;
}

/// Precache the manifest. A failed install leaves no cache for this version.
pub async fn install<B: OfflineBackend>(backend: &B, manifest: &CacheManifest) -> Result<(), B::Error> {
    match backend.add_all(manifest.name, manifest.assets).await {
        Ok(()) => {
            tracing::info!(cache = manifest.name, assets = manifest.assets.len(), "precached");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(cache = manifest.name, error = ?e, "precache failed");
            if let Err(cleanup) = backend.delete_cache(manifest.name).await {
                tracing::warn!(cache = manifest.name, error = ?cleanup, "failed to drop partial cache");
            }
            Err(e)
        }
    }
}

/// Drop every cache from an older version. Returns the names deleted.
pub async fn activate<B: OfflineBackend>(backend: &B, manifest: &CacheManifest) -> Result<Vec<String>, B::Error> {
    let mut deleted = Vec::new();
    for name in backend.cache_names().await? {
        if name == manifest.name {
            continue;
        }
        if backend.delete_cache(&name).await? {
            tracing::info!(cache = %name, "deleted stale cache");
            deleted.push(name);
        }
    }
    Ok(deleted)
}

/// Cache first, then network. Lookup errors count as a miss.
pub async fn respond<B: OfflineBackend>(backend: &B, request: &B::Request) -> Result<B::Response, B::Error> {
    match backend.cached(request).await {
        Ok(Some(response)) => return Ok(response),
        Ok(None) => {}
        Err(e) => tracing::debug!(error = ?e, "cache lookup failed"),
    }
    backend.fetch_network(request).await
}
