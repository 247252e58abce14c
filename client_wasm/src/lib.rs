//! WebGPU client for Neon Waves
//!
//! Engine-free rendering using wgpu for WebGPU API. Input, HUD, audio and
//! storage logic is target-independent; browser bindings are wasm32-only.

pub mod audio;
pub mod camera;
pub mod canvas;
pub mod frontend;
pub mod hud;
pub mod input;
pub mod logging;
pub mod mesh;
pub mod renderer;
pub mod storage;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{init_client, start};
