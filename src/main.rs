use leptos::prelude::*;
use wasm_bindgen::JsCast;
use webbash::app::App;
use webbash::utils::logging;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_console(log::Level::Info);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
