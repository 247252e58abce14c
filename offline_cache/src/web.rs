//! Service worker binding over `CacheStorage` and `fetch`
//!
//! Event listeners must be registered synchronously when the worker script
//! evaluates, so the JS shim owns them and forwards to these exports once the
//! module is ready.

use js_sys::{Array, Promise};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{Cache, CacheStorage, Request, Response, ServiceWorkerGlobalScope};

use crate::{activate, install, respond, CacheManifest, OfflineBackend};

struct WorkerBackend {
    scope: ServiceWorkerGlobalScope,
    caches: CacheStorage,
}

impl WorkerBackend {
    fn new() -> Result<Self, JsValue> {
        let scope: ServiceWorkerGlobalScope = js_sys::global().dyn_into()?;
        let caches = scope.caches()?;
        Ok(Self { scope, caches })
    }
}

impl OfflineBackend for WorkerBackend {
    type Request = Request;
    type Response = Response;
    type Error = JsValue;

    async fn add_all(&self, cache: &str, urls: &[&str]) -> Result<(), JsValue> {
        let cache: Cache = JsFuture::from(self.caches.open(cache)).await?.dyn_into()?;
        let urls: Array = urls.iter().map(|url| JsValue::from_str(url)).collect();
        JsFuture::from(cache.add_all_with_str_sequence(&urls)).await?;
        Ok(())
    }

    async fn cache_names(&self) -> Result<Vec<String>, JsValue> {
        let keys: Array = JsFuture::from(self.caches.keys()).await?.dyn_into()?;
        Ok(keys.iter().filter_map(|key| key.as_string()).collect())
    }

    async fn delete_cache(&self, name: &str) -> Result<bool, JsValue> {
        let deleted = JsFuture::from(self.caches.delete(name)).await?;
        Ok(deleted.as_bool().unwrap_or(false))
    }

    async fn cached(&self, request: &Request) -> Result<Option<Response>, JsValue> {
        let found = JsFuture::from(self.caches.match_with_request(request)).await?;
        if found.is_undefined() || found.is_null() {
            return Ok(None);
        }
        Ok(Some(found.dyn_into()?))
    }

    async fn fetch_network(&self, request: &Request) -> Result<Response, JsValue> {
        JsFuture::from(self.scope.fetch_with_request(request))
            .await?
            .dyn_into()
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());
    if tracing_subscriber::registry()
        .with(filter)
        .with(wasm_layer)
        .try_init()
        .is_err()
    {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
    console_error_panic_hook::set_once();
}

/// `install` event: resolves once the manifest is cached
#[wasm_bindgen]
pub fn on_install() -> Promise {
    future_to_promise(async move {
        let backend = WorkerBackend::new()?;
        install(&backend, &CacheManifest::CURRENT).await?;
        Ok(JsValue::UNDEFINED)
    })
}

/// `activate` event: resolves to the array of deleted cache names
#[wasm_bindgen]
pub fn on_activate() -> Promise {
    future_to_promise(async move {
        let backend = WorkerBackend::new()?;
        let deleted = activate(&backend, &CacheManifest::CURRENT).await?;
        Ok(deleted
            .into_iter()
            .map(JsValue::from)
            .collect::<Array>()
            .into())
    })
}

/// `fetch` event: resolves to the response to serve
#[wasm_bindgen]
pub fn on_fetch(request: Request) -> Promise {
    future_to_promise(async move {
        let backend = WorkerBackend::new()?;
        let response = respond(&backend, &request).await?;
        Ok(response.into())
    })
}
