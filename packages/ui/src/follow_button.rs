use api::reactions::{Optimistic, Reaction, Reconcile, ToggleState};
use dioxus::prelude::*;

use crate::use_api;

/// Follow / Following toggle for a developer profile.
///
/// Flips immediately and calls `on_change` with the new state (follower
/// count included). A failed request restores the previous state, reports it
/// through `on_change` again, then calls `on_refetch`.
#[component]
pub fn FollowButton(
    username: String,
    following: bool,
    #[props(default)] followers: u64,
    #[props(default)] on_change: Option<EventHandler<ToggleState>>,
    #[props(default)] on_refetch: Option<EventHandler<()>>,
) -> Element {
    let mut seen = use_signal(|| (following, followers));
    let mut state = use_signal(|| ToggleState::counted(following, followers));
    if *seen.peek() != (following, followers) {
        seen.set((following, followers));
        state.set(ToggleState::counted(following, followers));
    }
    let mut busy = use_signal(|| false);
    let client = use_api();

    let onclick = move |_: MouseEvent| {
        if busy() {
            return;
        }
        let pending = Optimistic::begin(Reaction::Follow, state());
        state.set(pending.current());
        if let Some(handler) = on_change {
            handler.call(pending.current());
        }
        busy.set(true);

        let client = client.clone();
        let username = username.clone();
        spawn(async move {
            let outcome = if pending.current().active {
                client.follow(&username).await
            } else {
                client.unfollow(&username).await
            };
            let (settled, reconcile) = pending.settle(&outcome);
            state.set(settled);
            busy.set(false);
            if reconcile == Reconcile::Refetch {
                if let Some(handler) = on_change {
                    handler.call(settled);
                }
                if let Some(handler) = on_refetch {
                    handler.call(());
                }
            }
        });
    };

    let following = state().active;
    rsx! {
        button {
            class: if following { "follow-button following" } else { "follow-button" },
            disabled: busy(),
            onclick: onclick,
            if busy() {
                span { class: "loading-text", "..." }
            } else if following {
                "Following"
            } else {
                "Follow"
            }
        }
    }
}
