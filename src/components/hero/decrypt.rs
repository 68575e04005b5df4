use leptos::prelude::*;

use termfolio_core::config::decrypt::{FRAME_MS, START_DELAY_MS};
use termfolio_core::effects::Decrypt;

use crate::components::hooks::{IntervalSlot, after};

/// Heading text that plays the decrypt scramble once, shortly after load.
///
/// Outside the animation the current `text` is shown as-is, so later changes
/// (the root-mode title) render directly.
#[component]
pub fn Decrypted(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let frame = RwSignal::new(None::<String>);
    let state = StoredValue::new(None::<Decrypt>);
    let frames = IntervalSlot::new();

    after(START_DELAY_MS, move || {
        let Some(source) = text.try_get_untracked() else {
            return;
        };
        if state.try_set_value(Some(Decrypt::new(&source))).is_some() {
            return;
        }

        frames.start(FRAME_MS, move || {
            let next = state
                .try_update_value(|d| d.as_mut()?.next_frame(&mut rand::thread_rng()))
                .flatten();
            if next.is_none() {
                frames.stop();
            }
            let _ = frame.try_set(next);
        });
    });

    move || frame.get().unwrap_or_else(|| text.get())
}
