//! Notification read state shared by the sidebar badge and the notifications page.

use api::models::{unread_count, Notification};
use dioxus::prelude::*;

/// Get the shared notification list.
/// Writes through this signal (e.g. marking all read) update the sidebar badge.
pub fn use_notifications() -> Signal<Vec<Notification>> {
    use_context::<Signal<Vec<Notification>>>()
}

/// Unread count over the shared list.
pub fn use_unread_count() -> Memo<usize> {
    let notifications = use_notifications();
    use_memo(move || unread_count(&notifications.read()))
}

/// Provides the notification list to everything below it.
///
/// There is no notifications endpoint, so the list starts from the samples.
#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notification::samples()));

    rsx! {
        {children}
    }
}
