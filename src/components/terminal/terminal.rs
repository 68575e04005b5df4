//! Terminal view component.
//!
//! The terminal window with output history and command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{INPUT_ID, Input, Output};
use crate::models::ScreenMode;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let prompt = Signal::derive(move || ctx.prompt());
    let on_submit = Callback::new(move |input: String| ctx.submit(&input));

    let handle_click = move |_| {
        dom::focus_element(&format!("#{INPUT_ID}"));
    };
    let history_signal = ctx.terminal.history;

    view! {
        <div class=css::container on:click=handle_click>
            <div class=css::titleBar>
                <span class=css::dot></span>
                <span class=css::dot></span>
                <span class=css::dot></span>
                <span class=css::title>{move || format!("{} - bash", ctx.prompt())}</span>
            </div>

            <div node_ref=output_ref class=css::output>
                <For
                    each=move || history_signal.get().to_vec()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show
                when=move || !matches!(ctx.terminal.screen_mode.get(), ScreenMode::Booting)
                fallback=|| ()
            >
                <div class=css::inputArea>
                    <Input prompt=prompt on_submit=on_submit />
                </div>
            </Show>
        </div>
    }
}
