//! Sign in or create an account.

use anyhow::Result;
use dialoguer::{Input, Password};
use glow_core::auth::{AuthMode, LoginForm, SignInPolicy, User};

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let mode = if args.sign_up {
        AuthMode::SignUp
    } else {
        AuthMode::SignIn
    };

    ctx.output.header(mode.title());
    if mode == AuthMode::SignIn && ctx.config.auth.sign_in_policy == SignInPolicy::DemoIdentity {
        let demo = User::demo();
        ctx.output.info("Demo Login:");
        ctx.output.kv("Email", &demo.email);
        ctx.output.kv("Phone", &demo.phone);
        ctx.output.kv("Name", &demo.name);
    }

    let form = fill_form(&args, mode)?;

    let mut store = ctx.storefront();
    store.open_login();
    let user = store.login(&form, mode)?.clone();

    if ctx.output.is_json() {
        ctx.output.json(&user);
        return Ok(());
    }

    ctx.output.success(&format!("Welcome, {}!", user.first_name()));
    ctx.output.kv("Name", &user.name);
    ctx.output.kv("Email", &user.email);
    ctx.output.kv("Phone", &user.phone);

    Ok(())
}

/// Take values from flags, prompting for anything the mode needs that is missing.
fn fill_form(args: &LoginArgs, mode: AuthMode) -> Result<LoginForm> {
    let mut form = LoginForm::new();

    for field in mode.fields() {
        let given = match *field {
            "name" => args.name.clone(),
            "email" => args.email.clone(),
            "phone" => args.phone.clone(),
            "password" => args.password.clone(),
            _ => None,
        };

        let value = match given {
            Some(value) => value,
            None if *field == "password" => Password::new().with_prompt("Password").interact()?,
            None => Input::<String>::new()
                .with_prompt(prompt_label(field))
                .interact_text()?,
        };
        form.set(field, value);
    }

    Ok(form)
}

fn prompt_label(field: &str) -> &'static str {
    match field {
        "name" => "Full Name",
        "email" => "Email Address",
        "phone" => "Phone Number",
        _ => "Value",
    }
}
