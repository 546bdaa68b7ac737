//! New project form.

use api::forms::{NewProject, TagKind};
use api::models::{ProjectStatus, MAX_IMAGES};
use dioxus::prelude::*;
use ui::files::{preview_url, read_attachment};
use ui::icons::FaXmark;
use ui::{use_api, use_auth, Icon};

/// Tag list with an input that adds on Enter or via the button.
#[component]
fn TagEditor(project: Signal<NewProject>, kind: TagKind, label: String) -> Element {
    let mut project = project;
    let mut draft = use_signal(String::new);

    let mut add = move || {
        if project.write().add_tag(kind, &draft.peek()) {
            draft.set(String::new());
        }
    };

    let tags = match kind {
        TagKind::General => project.read().general_tags.clone(),
        TagKind::Programming => project.read().programming_tags.clone(),
    };

    rsx! {
        div {
            class: "form-group",
            label { "{label}" }
            div {
                class: "tag-input-row",
                input {
                    r#type: "text",
                    placeholder: "Add a tag",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            add();
                        }
                    },
                }
                button { r#type: "button", class: "btn btn-outline", onclick: move |_| add(), "Add" }
            }
            div {
                class: "tags-container",
                for tag in tags {
                    span {
                        key: "{tag}",
                        class: "tag",
                        "{tag}"
                        button {
                            r#type: "button",
                            class: "tag-remove",
                            aria_label: "Remove {tag}",
                            onclick: {
                                let tag = tag.clone();
                                move |_| project.write().remove_tag(kind, &tag)
                            },
                            Icon { icon: FaXmark, width: 10, height: 10 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CreateProject() -> Element {
    let client = use_api();
    let session = use_auth();
    let nav = use_navigator();
    let mut project = use_signal(NewProject::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let pick_images = move |evt: FormEvent| async move {
        for file in evt.files() {
            let Some(attachment) = read_attachment(&file).await else {
                continue;
            };
            if let Err(e) = project.write().add_image(preview_url(&attachment)) {
                error.set(Some(e.to_string()));
                break;
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if submitting() {
                return;
            }
            error.set(None);
            submitting.set(true);
            let draft = project();
            match client.create_project(&draft).await {
                Ok(created) => {
                    tracing::info!("Created project {}", created.code);
                    // Older backends omit the owner on create
                    let path = created.detail_path().or_else(|| {
                        session
                            .peek()
                            .username()
                            .map(|me| format!("/dev/{me}/{}", draft.code))
                    });
                    nav.push(path.unwrap_or_else(|| api::auth::HOME_PATH.to_string()));
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        }
    };

    let draft = project();

    rsx! {
        div {
            class: "create-page",
            header {
                class: "page-header",
                h1 { "Share a project" }
            }

            form {
                class: "create-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "form-group",
                    label { r#for: "project-name", "Project name" }
                    input {
                        id: "project-name",
                        r#type: "text",
                        value: "{draft.name}",
                        oninput: move |evt: FormEvent| project.write().set_name(evt.value()),
                    }
                    if !draft.code.is_empty() {
                        span { class: "form-hint", "Code: {draft.code}" }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "project-description", "Description" }
                    textarea {
                        id: "project-description",
                        rows: 5,
                        value: "{draft.description}",
                        oninput: move |evt: FormEvent| project.write().description = evt.value(),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "project-status", "Status" }
                    select {
                        id: "project-status",
                        value: "{draft.status}",
                        onchange: move |evt: FormEvent| {
                            project.write().status = ProjectStatus::from(evt.value());
                        },
                        for status in ProjectStatus::ALL {
                            option { key: "{status}", value: "{status}", "{status}" }
                        }
                    }
                }

                TagEditor { project, kind: TagKind::General, label: "General tags" }
                TagEditor { project, kind: TagKind::Programming, label: "Programming tags" }

                div {
                    class: "form-group",
                    label { "Images ({draft.images.len()}/{MAX_IMAGES})" }
                    if draft.remaining_image_slots() > 0 {
                        input {
                            r#type: "file",
                            accept: "image/*",
                            multiple: true,
                            onchange: pick_images,
                        }
                    }
                    div {
                        class: "image-previews",
                        for (i, src) in draft.images.iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "image-preview",
                                img { src: "{src}", alt: "Image {i + 1}" }
                                button {
                                    r#type: "button",
                                    class: "image-remove",
                                    aria_label: "Remove image",
                                    onclick: move |_| project.write().remove_image(i),
                                    Icon { icon: FaXmark, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() { "Publishing..." } else { "Publish" }
                    }
                }
            }
        }
    }
}
