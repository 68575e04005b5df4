//! HUD bar.
//!
//! Shows the prompt identity and a live clock, and holds the theme switcher
//! and the matrix rain toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use termfolio_core::effects::Theme;

use crate::app::AppContext;
use crate::components::hooks::use_interval;
use crate::components::icons as ic;
use crate::config::CLOCK_TICK_MS;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// HUD bar pinned to the top of the page.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | `root@tezzzt:~$ \| 12:34:56 \| themes \| rain` |
/// | Mobile (< 480px) | Identity hidden, clock and controls only |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let clock = RwSignal::new(dom::clock_time());
    use_interval(CLOCK_TICK_MS, move || clock.set(dom::clock_time()));

    let toggle_rain = move |_: leptos::ev::MouseEvent| {
        ctx.rain_enabled.update(|on| *on = !*on);
    };
    let rain_title = Signal::derive(move || {
        if ctx.rain_enabled.get() {
            "Disable matrix rain"
        } else {
            "Enable matrix rain"
        }
    });

    let theme_buttons = Theme::ALL
        .into_iter()
        .map(|theme| {
            let class = move || {
                if ctx.theme.get() == theme {
                    format!("{} {}", css::swatch, css::swatchActive)
                } else {
                    css::swatch.to_string()
                }
            };
            view! {
                <button
                    class=class
                    title=format!("Theme: {theme}")
                    style:background-color=theme.accent_hex()
                    on:click=move |_| ctx.theme.set(theme)
                ></button>
            }
        })
        .collect_view();

    view! {
        <header class=css::bar>
            <div class=css::section>
                <span class=css::label>
                    <span class=css::labelIcon><Icon icon=ic::TERMINAL /></span>
                    <span class=css::labelText>{move || ctx.prompt()}</span>
                </span>
                <span class=css::label>
                    <span class=css::labelIcon><Icon icon=ic::CLOCK /></span>
                    <span class=css::value>{move || clock.get()}</span>
                </span>
            </div>

            <div class=css::section>
                <span class=css::swatches>{theme_buttons}</span>
                <button class=css::toggleButton on:click=toggle_rain title=rain_title>
                    {move || {
                        if ctx.rain_enabled.get() {
                            view! { <Icon icon=ic::RAIN_ON /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::RAIN_OFF /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </header>
    }
}
