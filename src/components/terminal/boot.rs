//! Boot sequence logic
//!
//! Plays the boot log, then hands the page over with the CRT turn-on effect.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use termfolio_core::config::boot::{CRT_ON_MS, FINAL_PAUSE_MS};
use termfolio_core::effects::{boot_script, welcome_line};

use crate::app::AppContext;
use crate::models::ScreenMode;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Run the boot sequence
///
/// 1. Print each `[OK]` line after its random delay
/// 2. Hide the boot screen after a short pause
/// 3. Keep the CRT turn-on class for its animation, then go interactive
pub fn run(ctx: AppContext) {
    spawn_local(async move {
        let script = boot_script(&mut rand::thread_rng());

        for step in script {
            TimeoutFuture::new(step.delay_ms).await;
            ctx.terminal.boot_log.update(|log| log.push(step.line));
        }
        TimeoutFuture::new(FINAL_PAUSE_MS).await;

        ctx.terminal.screen_mode.set(ScreenMode::PoweringOn);
        ctx.terminal.push_output(welcome_line());
        tracing::info!("boot complete");

        TimeoutFuture::new(CRT_ON_MS).await;
        ctx.terminal.screen_mode.set(ScreenMode::Ready);
    });
}

/// Full-screen boot log shown until the sequence finishes.
#[component]
pub fn BootScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::bootScreen>
            <div class=css::bootLog>
                <For
                    each=move || ctx.terminal.boot_log.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=|(_, line)| view! { <div class=css::bootLine>{line}</div> }
                />
            </div>
        </div>
    }
}
