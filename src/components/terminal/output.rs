use leptos::prelude::*;

use crate::models::{LineKind, OutputLine, OutputLineData};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a line classification
fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Command => css::command,
        LineKind::System => css::system,
        LineKind::Error => css::error,
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    let kind = line.kind();
    let class = format!("{} {}", css::line, kind_class(kind));
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=class data-kind=kind.as_str()>
                <span class=css::prompt>{prompt}</span>
                <span>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::System(text) | OutputLineData::Error(text) => view! {
            <div class=class data-kind=kind.as_str()>{text}</div>
        }
        .into_any(),
    }
}
