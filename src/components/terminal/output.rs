use leptos::prelude::*;
use termfolio_core::{OutputLine, OutputLineData};

use crate::utils::sanitize_markup;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => {
            view! {
                <div class=css::command>
                    <span class=format!("{} glow", css::textAccent)>{prompt}</span>
                    " "
                    <span class=css::textFg>{input}</span>
                </div>
            }.into_any()
        }
        OutputLineData::Text { text } => {
            view! {
                <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
            }.into_any()
        }
        OutputLineData::Markup { html } => {
            view! {
                <div class=format!("{} {}", css::line, css::textFg) inner_html=sanitize_markup(&html)></div>
            }.into_any()
        }
        OutputLineData::Error { text } => {
            view! {
                <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
            }.into_any()
        }
        OutputLineData::Success { text } => {
            view! {
                <div class=format!("{} {}", css::line, css::textAccent)>{text}</div>
            }.into_any()
        }
        OutputLineData::Info { text } => {
            view! {
                <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
            }.into_any()
        }
    }
}
