use leptos::{ev, html, prelude::*};
use leptos_use::{UseIntersectionObserverOptions, use_intersection_observer_with_options};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use termfolio_core::config::tilt::REVEAL_THRESHOLD;
use termfolio_core::effects::{Reveal, rest_transform, tilt_transform};

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

/// Translucent card that tilts toward the pointer and fades in the first
/// time it scrolls into view.
#[component]
pub fn GlassPanel(
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();
    let transform = RwSignal::new(rest_transform());
    let reveal = RwSignal::new(Reveal::default());

    let _ = use_intersection_observer_with_options(
        panel_ref,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            let hits = entries.iter().map(IntersectionObserverEntry::is_intersecting);
            if reveal.try_update(|r| r.observe(hits)).unwrap_or(false) {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    let handle_move = move |ev: ev::MouseEvent| {
        if let Some(panel) = panel_ref.get_untracked() {
            let rect = panel.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();
            transform.set(tilt_transform(x, y, rect.width(), rect.height()));
        }
    };

    let class = if on_click.is_some() {
        format!("{} {}", css::panel, css::clickable)
    } else {
        css::panel.to_string()
    };

    view! {
        <div
            node_ref=panel_ref
            class=class
            style:transform=move || transform.get()
            style:opacity=move || reveal.get().opacity()
            on:mousemove=handle_move
            on:mouseleave=move |_| transform.set(rest_transform())
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </div>
    }
}
