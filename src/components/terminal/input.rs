//! Terminal input component with history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::models::HistoryDirection;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field.
///
/// Enter submits the line (empty lines too), ArrowUp/ArrowDown walk the
/// history, Ctrl+L clears the screen and Ctrl+C drops the current line.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_history_nav: Callback<HistoryDirection, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            let value = input_value.get();
            set_input_value.set(String::new());
            on_submit.run(value);
        }
        "ArrowUp" => {
            ev.prevent_default();
            if let Some(cmd) = on_history_nav.run(HistoryDirection::Older) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            let cmd = on_history_nav.run(HistoryDirection::Newer);
            set_input_value.set(cmd.unwrap_or_default());
            move_cursor_to_end();
        }
        "c" if ev.ctrl_key() => {
            set_input_value.set(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            on_submit.run("clear".to_string());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
