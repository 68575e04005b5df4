//! Main shell component.
//!
//! Page container: boot screen, background canvas, HUD, hero, project cards,
//! terminal, hex dump, footer and the modal slot. Also owns the page-wide
//! effects (theme body class, autoscroll, global key handling).

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use termfolio_core::config::PROMPT_HOST;
use termfolio_core::effects::{KonamiDetector, Theme};
use termfolio_core::{OutputLine, RingBuffer};

use super::boot::{self, BootScreen};
use super::terminal::Terminal;
use super::INPUT_ID;
use crate::app::AppContext;
use crate::components::backdrop::Backdrop;
use crate::components::hero::{Hero, Projects};
use crate::components::hexdump::HexDump;
use crate::components::icons as ic;
use crate::components::modal::Modal;
use crate::components::status::Status;
use crate::config::{CONTACT_EMAIL, GITHUB_URL};
use crate::models::{ModalView, ScreenMode};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll output to bottom when history changes.
fn setup_autoscroll_effect(
    history: RwSignal<RingBuffer<OutputLine>>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        history.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Keep exactly the current theme's class on the body.
///
/// Other body classes (`root-unlocked`) are left alone.
fn setup_theme_effect(theme: RwSignal<Theme>) {
    Effect::new(move || {
        let current = theme.get();
        for t in Theme::ALL {
            if let Some(class) = t.body_class() {
                dom::toggle_body_class(&class, t == current);
            }
        }
        tracing::debug!(theme = %current, "theme applied");
    });
}

/// Page-wide keydown handling: the Konami code, and any key focusing the
/// terminal input.
fn setup_key_listener(ctx: AppContext) {
    let konami = StoredValue::new(KonamiDetector::new());
    let input_selector = format!("#{INPUT_ID}");

    let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if konami
            .try_update_value(|k| k.feed(&ev.key()))
            .unwrap_or(false)
        {
            ctx.activate_root_mode();
        }

        // the contact form needs its own fields focused
        if ctx.modal.get_untracked().is_none() && !dom::is_focused(&input_selector) {
            dom::focus_element(&input_selector);
        }
    });
}

// ============================================================================
// Shell Component
// ============================================================================

/// Shell component: the whole page.
///
/// This is a container component that:
/// - Runs the boot sequence once, then shows the page with a CRT turn-on
/// - Renders the backdrop, HUD, hero, terminal and hex dump
/// - Applies the theme to the body
/// - Listens for the Konami code
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Boot sequence runs once
    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    setup_autoscroll_effect(ctx.terminal.history, output_ref);
    setup_theme_effect(ctx.theme);
    setup_key_listener(ctx);

    let screen_mode = ctx.terminal.screen_mode;
    let interface_class = move || match screen_mode.get() {
        ScreenMode::PoweringOn => format!("{} crt-on", css::interface),
        _ => css::interface.to_string(),
    };

    let open_contact = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.open_modal(ModalView::Contact);
    };

    view! {
        <Backdrop />
        <div class=css::crtOverlay></div>
        <div class=css::scanline></div>

        <Show when=move || screen_mode.get() == ScreenMode::Booting fallback=|| ()>
            <BootScreen />
        </Show>

        <div
            class=interface_class
            style:visibility=move || {
                if screen_mode.get() == ScreenMode::Booting { "hidden" } else { "visible" }
            }
        >
            <Status />

            <main class=css::main>
                <Hero />
                <Projects />
                <section class=css::console>
                    <Terminal output_ref=output_ref />
                    <HexDump />
                </section>
            </main>

            <footer class=css::footer>
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                    <Icon icon=ic::GITHUB />
                    " GitHub"
                </a>
                <a href=format!("mailto:{CONTACT_EMAIL}")>
                    <Icon icon=ic::MAIL />
                    " Email"
                </a>
                <a href="#" on:click=open_contact>
                    <Icon icon=ic::LOCK />
                    " Secure Contact"
                </a>
                <span class=css::copyright>{format!("© {PROMPT_HOST}")}</span>
            </footer>
        </div>

        <Modal />
    }
}
