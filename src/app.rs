//! Page state and the root component.
//!
//! [`AppContext`] holds every piece of reactive page state (terminal history,
//! theme, root mode, open modal, rain toggle) and applies interpreter
//! directives. [`App`] provides it and wraps the page in an error boundary.

use std::time::Duration;

use leptos::prelude::*;

use termfolio_core::config::konami::{ALERT, FLASH_MS};
use termfolio_core::effects::{Theme, unlock_notice};
use termfolio_core::{Directive, Interpreter, OutputLine, RingBuffer};

use crate::components::Shell;
use crate::config::MAX_TERMINAL_HISTORY;
use crate::models::{ModalView, ScreenMode, dismiss};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// Output history is a bounded [`RingBuffer`] so a long session never grows
/// the DOM without limit.
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Terminal output history (bounded by `MAX_TERMINAL_HISTORY`).
    pub history: RwSignal<RingBuffer<OutputLine>>,
    /// Boot screen, power-on animation or interactive page.
    pub screen_mode: RwSignal<ScreenMode>,
    /// `[OK] ...` lines shown on the boot screen.
    pub boot_log: RwSignal<Vec<String>>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            history: RwSignal::new(RingBuffer::new(MAX_TERMINAL_HISTORY)),
            screen_mode: RwSignal::new(ScreenMode::Booting),
            boot_log: RwSignal::new(Vec::new()),
        }
    }

    pub fn push_output(&self, line: OutputLine) {
        self.history.update(|h| {
            h.push(line);
        });
    }

    pub fn push_lines(&self, lines: Vec<OutputLine>) {
        self.history.update(|h| h.extend(lines));
    }

    /// Clears all terminal output history.
    pub fn clear_history(&self) {
        self.history.update(|h| h.clear());
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; every field is a signal or
/// stored value, so the context is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,
    /// Command interpreter over the compiled-in catalog.
    pub shell: StoredValue<Interpreter>,
    pub theme: RwSignal<Theme>,
    /// Set once the Konami code has been entered.
    pub root_mode: RwSignal<bool>,
    pub modal: RwSignal<Option<ModalView>>,
    pub rain_enabled: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            terminal: TerminalState::new(),
            shell: StoredValue::new(Interpreter::default()),
            theme: RwSignal::new(Theme::default()),
            root_mode: RwSignal::new(false),
            modal: RwSignal::new(None),
            rain_enabled: RwSignal::new(true),
        }
    }

    pub fn prompt(&self) -> String {
        self.shell.with_value(Interpreter::prompt)
    }

    /// Run one submitted input line and apply its directive.
    pub fn submit(&self, input: &str) {
        let result = self.shell.with_value(|shell| shell.dispatch(input));
        match result.directive {
            Directive::None => self.terminal.push_lines(result.output),
            // the echo of `clear` itself goes too
            Directive::ClearOutput => self.terminal.clear_history(),
            Directive::Reload => {
                tracing::info!("reboot requested");
                dom::reload();
            }
        }
    }

    pub fn open_modal(&self, modal: ModalView) {
        self.modal.set(Some(modal));
    }

    /// Open a project modal by id. Unknown ids open nothing.
    pub fn open_project(&self, id: &str) {
        match ModalView::project(id) {
            Some(modal) => self.open_modal(modal),
            None => tracing::warn!(id, "no project modal with this id"),
        }
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    /// Close the modal only if `which` is still the one shown.
    pub fn close_modal_if(&self, which: ModalView) {
        self.modal.maybe_update(|slot| dismiss(slot, which));
    }

    /// Konami code reward: alert, red theme, `GOD_MODE` title and a short
    /// flash on the page.
    pub fn activate_root_mode(&self) {
        tracing::info!("root mode unlocked");
        dom::alert(ALERT);
        self.terminal.push_output(unlock_notice());
        self.theme.set(Theme::Red);
        self.root_mode.set(true);

        dom::toggle_body_class("root-unlocked", true);
        set_timeout(
            || dom::toggle_body_class("root-unlocked", false),
            Duration::from_millis(u64::from(FLASH_MS)),
        );
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1 class=css::fallbackTitle>"KERNEL PANIC"</h1>
                    <ul class=css::fallbackErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button class=css::fallbackButton on:click=move |_| dom::reload()>
                        "reboot"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
