pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn enhance_page() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    shared::mount::mount_all();
}

#[wasm_bindgen(start)]
pub fn start() {
    enhance_page();
}
