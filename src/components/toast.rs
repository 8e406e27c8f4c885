use leptos::*;
use gloo_timers::callback::Timeout;

use crate::core::constants::{MAX_VISIBLE_TOASTS, TOAST_DURATION_MS};
use crate::core::lifecycle::{Notification, NotificationSink};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Notification surface; Copy, so it can be handed to every component
#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| remove_toast(toasts, id));
    }
}

/// Append, dropping the oldest toasts beyond the visible limit
fn push_capped(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_VISIBLE_TOASTS {
        let excess = toasts.len() - MAX_VISIBLE_TOASTS;
        toasts.drain(..excess);
    }
}

fn remove_toast(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|t| t.id != id);
}

impl NotificationSink for ToastStore {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| push_capped(toasts, Toast { id, notification }));

        let store = *self;
        Timeout::new(TOAST_DURATION_MS, move || store.dismiss(id)).forget();
    }
}

#[component]
pub fn ToastHost(
    store: ToastStore,
) -> impl IntoView {
    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.notification.level.css_class())
                            on:click=move |_| store.dismiss(id)
                        >
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast { id, notification: Notification::info(format!("toast {}", id)) }
    }

    fn ids(toasts: &[Toast]) -> Vec<u64> {
        toasts.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_oldest_toasts_dropped_past_limit() {
        let mut toasts = Vec::new();
        for id in 0..7 {
            push_capped(&mut toasts, toast(id));
        }

        assert_eq!(toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(ids(&toasts), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_under_limit_keeps_everything() {
        let mut toasts = Vec::new();
        for id in 0..3 {
            push_capped(&mut toasts, toast(id));
        }
        assert_eq!(ids(&toasts), vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_only_matching_toast() {
        let mut toasts = vec![toast(1), toast(2), toast(3)];

        remove_toast(&mut toasts, 2);
        assert_eq!(ids(&toasts), vec![1, 3]);

        remove_toast(&mut toasts, 42);
        assert_eq!(ids(&toasts), vec![1, 3]);
    }
}
