//! Registration page view.

use api::forms::{SignupForm, UserType};
use dioxus::prelude::*;
use ui::{use_auth, use_session_store};

use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Phone,
    GithubLink,
    PortfolioLink,
    LinkedinLink,
    CompanyName,
}

impl Field {
    fn slot(self, form: &mut SignupForm) -> &mut String {
        match self {
            Field::Username => &mut form.username,
            Field::Email => &mut form.email,
            Field::Password => &mut form.password,
            Field::ConfirmPassword => &mut form.confirm_password,
            Field::FirstName => &mut form.first_name,
            Field::LastName => &mut form.last_name,
            Field::Phone => &mut form.phone,
            Field::GithubLink => &mut form.github_link,
            Field::PortfolioLink => &mut form.portfolio_link,
            Field::LinkedinLink => &mut form.linkedin_link,
            Field::CompanyName => &mut form.company_name,
        }
    }
}

/// One labelled input bound to a [`SignupForm`] field.
#[component]
fn SignupInput(
    form: Signal<SignupForm>,
    field: Field,
    label: String,
    #[props(default = "text".to_string())] kind: String,
) -> Element {
    let mut form = form;
    let mut snapshot = form();
    let value = field.slot(&mut snapshot).clone();
    rsx! {
        div {
            class: "form-group",
            label { "{label}" }
            input {
                r#type: "{kind}",
                value: "{value}",
                oninput: move |evt: FormEvent| *field.slot(&mut form.write()) = evt.value(),
            }
        }
    }
}

/// Register page component.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let sessions = use_session_store();
    let mut form = use_signal(SignupForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let sessions = sessions.clone();
        spawn(async move {
            error.set(None);
            let submitted = form();
            if let Err(e) = submitted.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            match sessions.register(&submitted).await {
                Ok(session) => auth.set(session),
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let user_type = form.read().user_type;

    rsx! {
        div {
            class: "auth-card auth-card-wide",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Join Devfolio" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "user-type-toggle",
                    for kind in [UserType::Developer, UserType::Entrepreneur] {
                        button {
                            key: "{kind.label()}",
                            r#type: "button",
                            class: if user_type == kind { "user-type active" } else { "user-type" },
                            onclick: move |_| form.write().user_type = kind,
                            "{kind.label()}"
                        }
                    }
                }

                div {
                    class: "form-row",
                    SignupInput { form, field: Field::FirstName, label: "First Name" }
                    SignupInput { form, field: Field::LastName, label: "Last Name" }
                }
                SignupInput { form, field: Field::Username, label: "Username" }
                SignupInput { form, field: Field::Email, label: "Email", kind: "email" }
                SignupInput { form, field: Field::Phone, label: "Phone", kind: "tel" }
                SignupInput { form, field: Field::Password, label: "Password", kind: "password" }
                SignupInput { form, field: Field::ConfirmPassword, label: "Confirm Password", kind: "password" }

                if user_type == UserType::Developer {
                    SignupInput { form, field: Field::GithubLink, label: "GitHub", kind: "url" }
                    SignupInput { form, field: Field::PortfolioLink, label: "Portfolio", kind: "url" }
                    SignupInput { form, field: Field::LinkedinLink, label: "LinkedIn", kind: "url" }
                } else {
                    SignupInput { form, field: Field::CompanyName, label: "Company" }
                    SignupInput { form, field: Field::LinkedinLink, label: "LinkedIn", kind: "url" }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
