use api::forms::{AttachmentSlot, ProfileField, ProfileUpdate};
use api::User;
use dioxus::prelude::*;

use crate::files::{preview_url, read_attachment};
use crate::{use_api, use_auth, use_session_store, ModalOverlay};

/// Modal form editing the logged-in user's profile.
///
/// Text fields are prefilled from `user`. A successful save replaces the
/// session user (persisted too) and is reported through `on_saved`.
#[component]
pub fn EditProfileModal(
    user: User,
    on_close: EventHandler<()>,
    on_saved: EventHandler<User>,
) -> Element {
    let mut update = use_signal(|| ProfileUpdate::from_user(&user));
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut session = use_auth();
    let sessions = use_session_store();
    let client = use_api();

    let pick = move |slot: AttachmentSlot, evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            update.write().detach(slot);
            return;
        };
        if let Some(attachment) = read_attachment(&file).await {
            update.write().attach(slot, attachment);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let sessions = sessions.clone();
        async move {
            if saving() {
                return;
            }
            saving.set(true);
            error.set(None);
            match client.update_profile(update.peek().clone()).await {
                Ok(user) => {
                    let next = sessions.update_user(&session.peek(), user.clone());
                    session.set(next);
                    saving.set(false);
                    on_saved.call(user);
                }
                Err(e) => {
                    tracing::warn!("Profile update failed: {e}");
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        }
    };

    let form = update();
    let picture = form
        .attachment(AttachmentSlot::ProfilePicture)
        .map(preview_url)
        .or_else(|| user.profile_picture().map(str::to_string));
    let banner = form
        .attachment(AttachmentSlot::Banner)
        .map(preview_url)
        .or_else(|| user.banner().map(str::to_string));

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            class: "modal-card edit-profile-modal",

            form {
                class: "edit-profile-form",
                onsubmit: handle_submit,

                div {
                    class: "edit-profile-header",
                    h2 { "Edit profile" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    class: "edit-profile-images",
                    label {
                        class: "banner-picker",
                        if let Some(src) = banner {
                            img { class: "banner-preview", src: "{src}", alt: "Banner" }
                        } else {
                            div { class: "banner-preview placeholder", "Add banner" }
                        }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            hidden: true,
                            onchange: move |evt| pick(AttachmentSlot::Banner, evt),
                        }
                    }
                    label {
                        class: "picture-picker",
                        if let Some(src) = picture {
                            img { class: "avatar-preview", src: "{src}", alt: "Profile picture" }
                        } else {
                            div { class: "avatar-preview placeholder", "{user.initial()}" }
                        }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            hidden: true,
                            onchange: move |evt| pick(AttachmentSlot::ProfilePicture, evt),
                        }
                    }
                }

                for field in ProfileField::ALL {
                    div {
                        key: "{field.name()}",
                        class: "form-group",
                        label { r#for: "profile-{field.name()}", "{field.label()}" }
                        if field == ProfileField::Bio {
                            textarea {
                                id: "profile-{field.name()}",
                                rows: 4,
                                value: "{form.get(field)}",
                                oninput: move |evt: FormEvent| update.write().set(field, evt.value()),
                            }
                        } else {
                            input {
                                id: "profile-{field.name()}",
                                r#type: if field == ProfileField::Email { "email" } else { "text" },
                                value: "{form.get(field)}",
                                oninput: move |evt: FormEvent| update.write().set(field, evt.value()),
                            }
                        }
                    }
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
