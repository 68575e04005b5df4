//! Single modal slot: project details or the encrypted contact form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use termfolio_core::config::modal::{
    ACTION_LABEL, CLOSE_DELAY_MS, ENCRYPTING_LABEL, TRANSMIT_FRAME_MS, TRANSMIT_LABEL,
};
use termfolio_core::effects::{ModalEntry, Transmission, TransmitFrame};

use crate::app::AppContext;
use crate::components::hooks::{IntervalSlot, after};
use crate::components::icons as ic;
use crate::models::ModalView;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

/// Modal overlay. Clicking outside the window closes it.
#[component]
pub fn Modal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    move || {
        ctx.modal.get().map(|modal| {
            let body = match modal {
                ModalView::Project(entry) => view! { <ProjectBody entry=entry /> }.into_any(),
                ModalView::Contact => view! { <ContactForm /> }.into_any(),
            };

            view! {
                <div class=css::backdrop on:click=move |_| ctx.close_modal()>
                    <div class=css::window on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                        <div class=css::header>
                            <span>{modal.header()}</span>
                            <button
                                class=css::closeButton
                                title="Close"
                                on:click=move |_| ctx.close_modal()
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                        <div class=css::body>{body}</div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ProjectBody(entry: &'static ModalEntry) -> impl IntoView {
    view! {
        {entry.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
        {entry.tools.map(|tools| view! { <p class="mono text-accent">{tools}</p> })}
        <a
            href="#"
            class=css::actionButton
            on:click=|ev: ev::MouseEvent| ev.prevent_default()
        >
            {ACTION_LABEL}
        </a>
    }
}

/// Contact form whose submit button only plays the transmission animation.
#[component]
fn ContactForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let label = RwSignal::new(TRANSMIT_LABEL.to_string());
    let transmission = StoredValue::new(None::<Transmission>);
    let frames = IntervalSlot::new();

    let transmit = move |_: ev::MouseEvent| {
        if transmission.with_value(Option::is_some) {
            return;
        }
        tracing::debug!("contact transmission started");
        transmission.set_value(Some(Transmission::new()));
        label.set(ENCRYPTING_LABEL.to_string());

        frames.start(TRANSMIT_FRAME_MS, move || {
            let frame = transmission
                .try_update_value(|t| t.as_mut().map(|t| t.next_frame(&mut rand::thread_rng())))
                .flatten();
            match frame {
                Some(TransmitFrame::Scramble(text)) => {
                    let _ = label.try_set(text);
                }
                Some(TransmitFrame::Sent(text)) => {
                    frames.stop();
                    let _ = label.try_set(text.to_string());
                    after(CLOSE_DELAY_MS, move || ctx.close_modal_if(ModalView::Contact));
                }
                None => frames.stop(),
            }
        });
    };

    view! {
        <div class=css::form>
            <input type="text" class=css::field placeholder="IDENTITY_Required" />
            <textarea class=css::field placeholder="TRANSMISSION_Content" rows="5"></textarea>
            <button class=css::actionButton on:click=transmit>
                {move || label.get()}
            </button>
        </div>
    }
}
