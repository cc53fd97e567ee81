//! Registration page against the `crear-usuario` endpoint.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::UsuarioNuevo;
use crate::state::form::FormState;

/// Registration payload from the form fields. The backend expects the
/// super-user and second-factor flags fixed; the form never exposes them.
fn build_usuario_nuevo(
    nombre: &str,
    apellido: &str,
    correo: &str,
    clave: &str,
    telefono: &str,
) -> UsuarioNuevo {
    UsuarioNuevo {
        first_name: nombre.trim().to_owned(),
        last_name: apellido.trim().to_owned(),
        email: correo.trim().to_owned(),
        password_hash: clave.to_owned(),
        phone_number: telefono.trim().to_owned(),
        is_super_user: false,
        tipo_2fa: 0,
    }
}

/// Sign-up form. On success a welcome message is recorded and the router
/// returns to the login page.
#[component]
pub fn SignupPage() -> impl IntoView {
    let nombre = RwSignal::new(String::new());
    let apellido = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let correo = RwSignal::new(String::new());
    let clave = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().saving {
            return;
        }
        let usuario = build_usuario_nuevo(
            &nombre.get(),
            &apellido.get(),
            &correo.get(),
            &clave.get(),
            &telefono.get(),
        );
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::crear_usuario(&usuario).await {
                    Ok(()) => {
                        form.update(|f| f.succeed("Registro exitoso. ¡Bienvenido!".to_owned()));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("registro fallido: {e}");
                        form.update(|f| f.fail(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = usuario;
        }
    };

    view! {
        <div class="pagina-auth">
            <div class="tarjeta-auth">
                <h1 class="tarjeta-auth__titulo">"Registro"</h1>
                <form class="formulario" on:submit=on_submit>
                    <div class="formulario__fila">
                        <label class="formulario__campo">
                            "Nombre"
                            <input
                                class="campo"
                                type="text"
                                placeholder="Ingresa tu nombre"
                                prop:value=move || nombre.get()
                                on:input=move |ev| nombre.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="formulario__campo">
                            "Apellido"
                            <input
                                class="campo"
                                type="text"
                                placeholder="Ingresa tu apellido"
                                prop:value=move || apellido.get()
                                on:input=move |ev| apellido.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="formulario__campo">
                        "Teléfono"
                        <input
                            class="campo"
                            type="tel"
                            placeholder="Ingresa tu número de teléfono"
                            prop:value=move || telefono.get()
                            on:input=move |ev| telefono.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Correo electrónico"
                        <input
                            class="campo"
                            type="email"
                            placeholder="Ingresa tu correo"
                            prop:value=move || correo.get()
                            on:input=move |ev| correo.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Contraseña"
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
                    <Show when=move || form.get().success.is_some()>
                        <p class="formulario__exito">
                            {move || form.get().success.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="boton boton--primario" type="submit" disabled=move || form.get().saving>
                        {move || if form.get().saving { "Registrando..." } else { "Registrar" }}
                    </button>
                </form>
                <p class="tarjeta-auth__pie">
                    "¿Ya tienes una cuenta? "
                    <a class="enlace" href="/">"Ingresa aquí"</a>
                </p>
            </div>
        </div>
    }
}
