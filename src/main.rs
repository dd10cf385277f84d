#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod effects;
mod error;
mod platform;
mod preview;
mod session;
mod ticker;
mod types;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod clipboard;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod controller;
#[cfg(target_arch = "wasm32")]
mod log;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod stream;

#[cfg(target_arch = "wasm32")]
use app::App;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    log::info(
        "startup",
        serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "git_sha": option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
            "built": option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"),
        }),
    );
    yew::Renderer::<App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This crate targets WebAssembly. Use `trunk serve` to run the frontend. Do not `cargo run` this crate natively."
    );
    std::process::exit(1);
}
