//! Login page: usuario/clave form against the `iniciar-sesion` endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Credenciales;
use crate::state::form::FormState;
use crate::state::session::SessionState;

/// Login payload from the form fields. The remember-me flag is always
/// sent as true; the UI has no control for it.
fn build_credenciales(usuario: &str, clave: &str) -> Credenciales {
    Credenciales {
        usuario: usuario.trim().to_owned(),
        clave: clave.to_owned(),
        recordar_sesion: true,
    }
}

/// Sign-in form. On success the token pair lands in the shared session
/// context and localStorage, then the router moves to `/home`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let usuario = RwSignal::new(String::new());
    let clave = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().saving {
            return;
        }
        let credenciales = build_credenciales(&usuario.get(), &clave.get());
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::iniciar_sesion(&credenciales).await {
                    Ok(resultado) => {
                        let nueva = SessionState::from_jwt(&resultado.jwt);
                        crate::util::storage::save_session(&nueva);
                        session.set(nueva);
                        form.update(FormState::finish);
                        navigate("/home", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("inicio de sesión fallido: {e}");
                        form.update(|f| f.fail(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credenciales;
            let _ = session;
        }
    };

    view! {
        <div class="pagina-auth">
            <div class="tarjeta-auth">
                <h1 class="tarjeta-auth__titulo">"Login"</h1>
                <form class="formulario" on:submit=on_submit>
                    <label class="formulario__campo">
                        "Email"
                        <input
                            class="campo"
                            type="email"
                            placeholder="info@gmail.com"
                            prop:value=move || usuario.get()
                            on:input=move |ev| usuario.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Password"
                        <input
                            class="campo"
                            type="password"
                            placeholder="Ingresa tu contraseña"
                            prop:value=move || clave.get()
                            on:input=move |ev| clave.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || form.get().error.is_some()>
                        <p class="formulario__error">
                            {move || form.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="boton boton--primario" type="submit" disabled=move || form.get().saving>
                        {move || if form.get().saving { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="tarjeta-auth__pie">
                    "No tengo una cuenta? "
                    <a class="enlace" href="/signup">"Registrar"</a>
                </p>
            </div>
        </div>
    }
}
