//! Transient, auto-dismissing notifications.
//!
//! Success and error banners disappear on their own after a short display
//! window, matching the backend-driven screens' two-second flashes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_MS: u32 = 2000;

/// Per-screen flash-message state. Copyable so closures can capture it freely.
///
/// Each message carries a sequence number; the dismiss timer only clears the
/// message it was started for, so an old timer never wipes a newer message.
#[derive(Clone, Copy)]
pub struct Flash {
    error: RwSignal<Option<(u64, String)>>,
    success: RwSignal<Option<(u64, String)>>,
    seq: RwSignal<u64>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    fn next_seq(&self) -> u64 {
        self.seq.update(|s| *s += 1);
        self.seq.get_untracked()
    }

    pub fn error(&self, message: impl Into<String>) {
        let seq = self.next_seq();
        self.error.set(Some((seq, message.into())));
        let slot = self.error;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            slot.update(|current| {
                if matches!(current, Some((s, _)) if *s == seq) {
                    *current = None;
                }
            });
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        let seq = self.next_seq();
        self.success.set(Some((seq, message.into())));
        let slot = self.success;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            slot.update(|current| {
                if matches!(current, Some((s, _)) if *s == seq) {
                    *current = None;
                }
            });
        });
    }

    pub fn error_text(&self) -> Option<String> {
        self.error.get().map(|(_, m)| m)
    }

    pub fn success_text(&self) -> Option<String> {
        self.success.get().map(|(_, m)| m)
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the current flash messages of a screen.
#[component]
pub fn FlashMessages(flash: Flash) -> impl IntoView {
    view! {
        {move || flash.error_text().map(|msg| view! {
            <div class="flash flash--error">{msg}</div>
        })}
        {move || flash.success_text().map(|msg| view! {
            <div class="flash flash--success">{msg}</div>
        })}
    }
}
