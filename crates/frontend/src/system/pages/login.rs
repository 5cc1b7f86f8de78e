use contracts::system::auth::{validate_email, validate_password};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (api_error, set_api_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        // Field validation happens client-side before any request goes out.
        set_email_error.set(validate_email(&email_val).err());
        set_password_error.set(validate_password(&password_val).err());
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        set_is_loading.set(true);
        set_api_error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    session.login(response.token, response.user);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    set_api_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <section class="login-container">
            <div class="login-box">
                <form on:submit=on_submit>
                    <h2>"Nextzone Login"</h2>

                    <Show when=move || api_error.get().is_some()>
                        <div class="error-message">
                            <strong>"Error: "</strong>
                            {move || api_error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || email_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || password_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <p class="login-switch">
                    "¿No tienes una cuenta? "
                    <A href="/register">"Regístrate"</A>
                </p>
            </div>
        </section>
    }
}
