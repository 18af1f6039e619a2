use wasm_bindgen::prelude::*;

mod common;
mod console;
mod map;
mod surface;

pub use map::{WasmCityMap, fetch_text};

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser,
/// and routes `tracing` output to console.log.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let _ = tracing_subscriber::fmt()
        .with_writer(console::ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .try_init();
}
