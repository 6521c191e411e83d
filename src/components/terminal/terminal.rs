//! Terminal view component.
//!
//! The terminal interface with output scrollback and command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::models::HistoryDirection;
use crate::utils::Scrollback;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Helper Functions
// ============================================================================

/// Focus the terminal input element.
fn focus_input() {
    use wasm_bindgen::JsCast;
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(input) = document.query_selector("input").ok().flatten()
        && let Ok(element) = input.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = element.focus();
    }
}

/// Auto-scroll output to bottom when the scrollback changes.
fn setup_autoscroll_effect(scrollback: RwSignal<Scrollback>, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        scrollback.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Derived signals
    let prompt = Signal::derive(move || ctx.get_prompt());

    // Callbacks
    let on_submit = Callback::new(move |input: String| ctx.submit(&input));
    let on_history_nav = Callback::new(move |direction: HistoryDirection| {
        ctx.terminal.navigate_history(direction)
    });

    let scrollback = ctx.terminal.scrollback;
    setup_autoscroll_effect(scrollback, output_ref);

    view! {
        <div class=css::container on:click=move |_| focus_input()>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || scrollback.with(Scrollback::to_vec)
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>
            <div class=css::inputArea>
                <Input prompt=prompt on_submit=on_submit on_history_nav=on_history_nav />
            </div>
        </div>
    }
}
