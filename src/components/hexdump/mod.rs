//! Scrolling hex-dump decoration.

use leptos::prelude::*;

use termfolio_core::config::hexdump::TICK_MS;
use termfolio_core::effects::HexTicker;

use crate::components::hooks::use_interval;

stylance::import_crate_style!(css, "src/components/hexdump/hexdump.module.css");

#[component]
pub fn HexDump() -> impl IntoView {
    let ticker = RwSignal::new(HexTicker::new());

    use_interval(TICK_MS, move || {
        ticker.update(|t| t.tick(&mut rand::thread_rng()));
    });

    let rows = move || {
        ticker.with(|t| {
            t.rows()
                .map(|row| {
                    view! {
                        <div class=css::row>
                            <span class=css::addr>{row.addr_label()}</span>
                            "  "
                            <span class=css::bytes>{row.bytes_label()}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <aside class=css::panel aria-hidden="true">
            <div class=css::title>"MEMORY_DUMP"</div>
            <div class=css::content>{rows}</div>
        </aside>
    }
}
