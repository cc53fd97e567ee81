//! Client pages: list with delete-in-place, create form, edit form.

#[cfg(test)]
#[path = "clientes_test.rs"]
mod clientes_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::page_header::PageHeader;
use crate::net::types::{Cliente, ClienteActualizar, ClienteFiltro, ClienteNuevo};
use crate::state::form::FormState;
use crate::state::list::ListState;
use crate::state::session::SessionState;
use crate::util::abort::AbortHandle;
use crate::util::fecha::fecha_corta;

fn parse_ruta_id(valor: Option<String>) -> Option<i64> {
    valor?.trim().parse().ok()
}

/// The select only offers 0 and 1; anything else falls back to the
/// backend default of 1.
fn parse_tipo_impuesto(valor: &str) -> i32 {
    valor.trim().parse().unwrap_or(1)
}

fn build_cliente_nuevo(
    numero: &str,
    razon: &str,
    descripcion: &str,
    tipo_impuesto: &str,
) -> ClienteNuevo {
    ClienteNuevo {
        numero_identificacion: numero.trim().to_owned(),
        razon_social: razon.trim().to_owned(),
        descripcion: descripcion.trim().to_owned(),
        tipo_impuesto: parse_tipo_impuesto(tipo_impuesto),
    }
}

fn build_cliente_actualizar(
    id: i64,
    numero: &str,
    razon: &str,
    descripcion: &str,
) -> ClienteActualizar {
    ClienteActualizar {
        id,
        numero_identificacion: numero.trim().to_owned(),
        razon_social: razon.trim().to_owned(),
        descripcion: descripcion.trim().to_owned(),
    }
}

/// Client list. The mount fetch is tied to an abort handle so navigating
/// away cancels it; a delete removes exactly the acknowledged row.
#[component]
pub fn ClientesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let lista = RwSignal::new(ListState::<Cliente> {
        loading: true,
        ..ListState::default()
    });

    let abort = AbortHandle::new();
    {
        let abort = abort.clone();
        Effect::new(move || {
            lista.update(ListState::begin);
            let filtro = ClienteFiltro::default();
            let abort = abort.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                let resultado =
                    crate::net::api::consultar_clientes(token.as_deref(), &filtro, Some(&abort))
                        .await;
                if abort.is_aborted() {
                    return;
                }
                match resultado {
                    Ok(clientes) => lista.update(|l| l.resolve(clientes)),
                    Err(e) => lista.update(|l| l.fail(e.to_string())),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = filtro;
                let _ = abort;
                let _ = session;
            }
        });
    }
    on_cleanup(move || abort.abort());

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match crate::net::api::eliminar_cliente(token.as_deref(), id).await {
                Ok(()) => lista.update(|l| l.remove_where(|c| c.id == id)),
                Err(e) => lista.update(|l| l.fail(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Clientes"/>
            <section class="tarjeta">
                <div class="tarjeta__acciones">
                    <a class="boton boton--primario" href="/clienteCrear">"Crear Cliente"</a>
                </div>
                {move || {
                    let estado = lista.get();
                    if estado.loading {
                        view! { <p class="tarjeta__estado">"Cargando clientes..."</p> }.into_any()
                    } else if let Some(error) = estado.error {
                        view! { <p class="tarjeta__estado tarjeta__estado--error">{error}</p> }
                            .into_any()
                    } else {
                        let filas = estado
                            .items
                            .into_iter()
                            .map(|cliente| {
                                let id = cliente.id;
                                let fecha = fecha_corta(&cliente.fecha_creacion).to_owned();
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{cliente.razon_social}</td>
                                        <td>{cliente.descripcion}</td>
                                        <td>{fecha}</td>
                                        <td class="tabla__acciones">
                                            <a class="enlace" href=format!("/cliente/{id}")>
                                                "Editar"
                                            </a>
                                            <button
                                                class="enlace enlace--peligro"
                                                on:click=move |_| on_delete(id)
                                            >
                                                "Eliminar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <table class="tabla">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Nombre"</th>
                                        <th>"Descripción"</th>
                                        <th>"Fecha Creación"</th>
                                        <th>"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>{filas}</tbody>
                            </table>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Client creation form; navigates back to the list on success.
#[component]
pub fn CrearClientePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let numero = RwSignal::new(String::new());
    let razon = RwSignal::new(String::new());
    let descripcion = RwSignal::new(String::new());
    let tipo_impuesto = RwSignal::new("1".to_owned());
    let form = RwSignal::new(FormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().saving {
            return;
        }
        let cliente = build_cliente_nuevo(
            &numero.get(),
            &razon.get(),
            &descripcion.get(),
            &tipo_impuesto.get(),
        );
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                match crate::net::api::crear_cliente(token.as_deref(), &cliente).await {
                    Ok(()) => {
                        form.update(FormState::finish);
                        navigate("/cliente", NavigateOptions::default());
                    }
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cliente;
            let _ = session;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Crear Cliente"/>
            <section class="tarjeta tarjeta--angosta">
                <form class="formulario" on:submit=on_submit>
                    <label class="formulario__campo">
                        "Número de Identificación"
                        <input
                            class="campo"
                            type="text"
                            placeholder="Número de Identificación"
                            prop:value=move || numero.get()
                            on:input=move |ev| numero.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Razón Social"
                        <input
                            class="campo"
                            type="text"
                            placeholder="Razón Social"
                            prop:value=move || razon.get()
                            on:input=move |ev| razon.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Descripción"
                        <input
                            class="campo"
                            type="text"
                            placeholder="Descripción"
                            prop:value=move || descripcion.get()
                            on:input=move |ev| descripcion.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Tipo de Impuesto"
                        <select
                            class="campo"
                            prop:value=move || tipo_impuesto.get()
                            on:change=move |ev| tipo_impuesto.set(event_target_value(&ev))
                        >
                            <option value="0">"0"</option>
                            <option value="1">"1"</option>
                        </select>
                    </label>
                    <Show when=move || form.get().error.is_some()>
                        <p class="formulario__error">
                            {move || form.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="boton boton--primario" type="submit" disabled=move || form.get().saving>
                        {move || if form.get().saving { "Creando..." } else { "Crear Cliente" }}
                    </button>
                </form>
                <a class="enlace" href="/cliente">"Cancelar"</a>
            </section>
        </div>
    }
}

/// Client edit form: fetches the row named by the route, updates on
/// submit.
#[component]
pub fn EditarClientePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let cliente_id = RwSignal::new(None::<i64>);
    let numero = RwSignal::new(String::new());
    let razon = RwSignal::new(String::new());
    let descripcion = RwSignal::new(String::new());
    let cargando = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(FormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    Effect::new(move || {
        let id = parse_ruta_id(params.read().get("id"));
        cargando.set(true);
        error.set(None);
        let Some(id) = id else {
            cargando.set(false);
            error.set(Some("Error al obtener el cliente.".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match crate::net::api::consultar_cliente(token.as_deref(), id).await {
                Ok(cliente) => {
                    cliente_id.set(Some(cliente.id));
                    numero.set(cliente.numero_identificacion);
                    razon.set(cliente.razon_social);
                    descripcion.set(cliente.descripcion);
                    cargando.set(false);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    cargando.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            let _ = session;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().saving {
            return;
        }
        let Some(id) = cliente_id.get() else {
            form.update(|f| f.fail("El cliente no tiene un ID válido.".to_owned()));
            return;
        };
        let cliente = build_cliente_actualizar(id, &numero.get(), &razon.get(), &descripcion.get());
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                match crate::net::api::actualizar_cliente(token.as_deref(), &cliente).await {
                    Ok(()) => {
                        form.update(FormState::finish);
                        navigate("/cliente", NavigateOptions::default());
                    }
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cliente;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Editar Cliente"/>
            <section class="tarjeta tarjeta--angosta">
                <form class="formulario" on:submit=on_submit>
                    <label class="formulario__campo">
                        "Número de Identificación"
                        <input
                            class="campo"
                            type="text"
                            prop:value=move || numero.get()
                            on:input=move |ev| numero.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Razón Social"
                        <input
                            class="campo"
                            type="text"
                            prop:value=move || razon.get()
                            on:input=move |ev| razon.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Descripción"
                        <input
                            class="campo"
                            type="text"
                            prop:value=move || descripcion.get()
                            on:input=move |ev| descripcion.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="formulario__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || form.get().error.is_some()>
                        <p class="formulario__error">
                            {move || form.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        class="boton boton--primario"
                        type="submit"
                        disabled=move || cargando.get() || form.get().saving
                    >
                        {move || if form.get().saving { "Guardando..." } else { "Guardar Cambios" }}
                    </button>
                </form>
                <a class="enlace" href="/cliente">"Cancelar"</a>
            </section>
        </div>
    }
}
