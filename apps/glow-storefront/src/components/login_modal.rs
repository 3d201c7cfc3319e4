//! Sign-in / sign-up modal.

use glow_core::auth::{AuthMode, LoginForm, SignInPolicy, User};
use leptos::ev;
use leptos::prelude::*;

use crate::app::use_store;

fn field_label(field: &str) -> &'static str {
    match field {
        "name" => "Full Name",
        "email" => "Email Address",
        "phone" => "Phone Number",
        "password" => "Password",
        _ => "",
    }
}

fn field_type(field: &str) -> &'static str {
    match field {
        "email" => "email",
        "phone" => "tel",
        "password" => "password",
        _ => "text",
    }
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let store = use_store();
    let open = Memo::new(move |_| store.with(|s| s.is_login_open()));
    let demo_hint = store.with_untracked(|s| s.config().auth.sign_in_policy) == SignInPolicy::DemoIdentity;

    let (mode, set_mode) = signal(AuthMode::SignIn);
    let form = RwSignal::new(LoginForm::new());
    let (error, set_error) = signal(None::<String>);

    let close = move || {
        store.update(|s| s.close_login());
        form.update(|f| f.clear());
        set_error.set(None);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.get_untracked();
        let mode = mode.get_untracked();
        match store.try_update(|s| s.login(&submitted, mode).map(|_| ())) {
            Some(Ok(())) => {
                form.update(|f| f.clear());
                set_error.set(None);
            }
            Some(Err(err)) => set_error.set(Some(err.to_string())),
            None => {}
        }
    };

    let fields = move || {
        mode.get()
            .fields()
            .iter()
            .map(|&field| {
                view! {
                    <label class="field">
                        <span>{field_label(field)}</span>
                        <input
                            type=field_type(field)
                            name=field
                            prop:value=move || form.with(|f| f.get(field).to_string())
                            on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                        />
                    </label>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || open.get()>
            <div class="overlay" on:click=move |_| close()></div>
            <div class="modal login-modal" role="dialog">
                <div class="modal-header">
                    <h2>{move || mode.get().title()}</h2>
                    <button class="icon-button" aria-label="Close" on:click=move |_| close()>"✕"</button>
                </div>

                <form on:submit=on_submit>
                    {fields}
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <button type="submit" class="btn btn-primary">{move || mode.get().submit_label()}</button>
                </form>

                <p class="switch-mode">
                    {move || mode.get().switch_prompt()} " "
                    <button class="link" on:click=move |_| {
                        set_mode.update(|m| *m = m.toggled());
                        set_error.set(None);
                    }>
                        {move || mode.get().toggled().submit_label()}
                    </button>
                </p>

                <Show when=move || demo_hint && mode.get() == AuthMode::SignIn>
                    <DemoHint/>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn DemoHint() -> impl IntoView {
    let demo = User::demo();

    view! {
        <div class="demo-hint">
            <strong>"Demo Login:"</strong>
            <p>"Email: " {demo.email}</p>
            <p>"Phone: " {demo.phone}</p>
            <p>"Name: " {demo.name}</p>
        </div>
    }
}
