//! Landing section: decrypting title, typewriter role line and the project
//! cards that open modals.

mod decrypt;
mod tilt;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use termfolio_core::config::konami::HERO_TITLE as ROOT_TITLE;
use termfolio_core::effects::{MODALS, Typewriter};

use crate::app::AppContext;
use crate::config::{HERO_TITLE, PROJECTS_HEADING};

pub use decrypt::Decrypted;
pub use tilt::GlassPanel;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

/// Drive a typewriter until the owning component is gone.
fn run_typewriter(typed: RwSignal<String>) {
    spawn_local(async move {
        let mut typewriter = Typewriter::default();
        loop {
            let frame = typewriter.tick();
            if typed.try_set(frame.text).is_some() {
                break;
            }
            TimeoutFuture::new(frame.next_ms).await;
        }
    });
}

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let title = Signal::derive(move || {
        if ctx.root_mode.get() {
            ROOT_TITLE.to_string()
        } else {
            HERO_TITLE.to_string()
        }
    });

    let typed = RwSignal::new(String::new());
    run_typewriter(typed);

    view! {
        <section class=css::hero>
            <h1 class=format!("{} glow", css::title)>
                <Decrypted text=title />
            </h1>
            <p class=css::role>
                <span class="text-accent">"> "</span>
                <span>{move || typed.get()}</span>
                <span class=css::cursor>"_"</span>
            </p>
        </section>
    }
}

/// Grid of project cards, one per modal entry.
#[component]
pub fn Projects() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <section class=css::projects>
            <h2 class=css::heading>
                <Decrypted text=PROJECTS_HEADING.to_string() />
            </h2>
            <div class=css::grid>
                {MODALS
                    .iter()
                    .map(|entry| {
                        let open = Callback::new(move |()| ctx.open_project(entry.id));
                        view! {
                            <GlassPanel on_click=open>
                                <span class=css::cardId>{format!("[{}]", entry.id)}</span>
                                <h3 class=css::cardTitle>
                                    <Decrypted text=entry.title.to_string() />
                                </h3>
                            </GlassPanel>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
