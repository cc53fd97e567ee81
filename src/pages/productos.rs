//! Product pages: list with delete-in-place, create form, edit form.

#[cfg(test)]
#[path = "productos_test.rs"]
mod productos_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::page_header::PageHeader;
use crate::net::types::{Producto, ProductoActualizar, ProductoNuevo};
use crate::state::form::FormState;
use crate::state::list::ListState;
use crate::state::session::SessionState;
use crate::util::abort::AbortHandle;
use crate::util::fecha::fecha_corta;

fn parse_ruta_id(valor: Option<String>) -> Option<i64> {
    valor?.trim().parse().ok()
}

fn build_producto_nuevo(nombre: &str, descripcion: &str) -> ProductoNuevo {
    ProductoNuevo {
        nombre_producto: nombre.trim().to_owned(),
        descripcion_producto: descripcion.trim().to_owned(),
    }
}

fn build_producto_actualizar(id: i64, nombre: &str, descripcion: &str) -> ProductoActualizar {
    ProductoActualizar {
        id,
        nombre_producto: nombre.trim().to_owned(),
        descripcion_producto: descripcion.trim().to_owned(),
    }
}

/// Product list. The mount fetch is tied to an abort handle so navigating
/// away cancels it.
#[component]
pub fn ProductosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let lista = RwSignal::new(ListState::<Producto> {
        loading: true,
        ..ListState::default()
    });

    let abort = AbortHandle::new();
    {
        let abort = abort.clone();
        Effect::new(move || {
            lista.update(ListState::begin);
            let abort = abort.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                let resultado =
                    crate::net::api::consultar_productos(token.as_deref(), Some(&abort)).await;
                if abort.is_aborted() {
                    return;
                }
                match resultado {
                    Ok(productos) => lista.update(|l| l.resolve(productos)),
                    Err(e) => lista.update(|l| l.fail(e.to_string())),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
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
            match crate::net::api::eliminar_producto(token.as_deref(), id).await {
                Ok(()) => lista.update(|l| l.remove_where(|p| p.id == id)),
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
            <PageHeader titulo="Productos"/>
            <section class="tarjeta">
                <div class="tarjeta__acciones">
                    <a class="boton boton--primario" href="/productoCrear">"Crear Producto"</a>
                </div>
                {move || {
                    let estado = lista.get();
                    if estado.loading {
                        view! { <p class="tarjeta__estado">"Cargando productos..."</p> }.into_any()
                    } else if let Some(error) = estado.error {
                        view! { <p class="tarjeta__estado tarjeta__estado--error">{error}</p> }
                            .into_any()
                    } else {
                        let filas = estado
                            .items
                            .into_iter()
                            .map(|producto| {
                                let id = producto.id;
                                let fecha = fecha_corta(&producto.fecha_creacion).to_owned();
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{producto.nombre_producto}</td>
                                        <td>{producto.descripcion_producto}</td>
                                        <td>{fecha}</td>
                                        <td class="tabla__acciones">
                                            <a class="enlace" href=format!("/producto/{id}")>
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

/// Product creation form; navigates back to the list on success.
#[component]
pub fn CrearProductoPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nombre = RwSignal::new(String::new());
    let descripcion = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().saving {
            return;
        }
        let producto = build_producto_nuevo(&nombre.get(), &descripcion.get());
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                match crate::net::api::crear_producto(token.as_deref(), &producto).await {
                    Ok(()) => {
                        form.update(FormState::finish);
                        navigate("/producto", NavigateOptions::default());
                    }
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = producto;
            let _ = session;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Crear Producto"/>
            <section class="tarjeta tarjeta--angosta">
                <form class="formulario" on:submit=on_submit>
                    <label class="formulario__campo">
                        "Nombre del Producto"
                        <input
                            class="campo"
                            type="text"
                            placeholder="Nombre del Producto"
                            prop:value=move || nombre.get()
                            on:input=move |ev| nombre.set(event_target_value(&ev))
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
                    <Show when=move || form.get().error.is_some()>
                        <p class="formulario__error">
                            {move || form.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="boton boton--primario" type="submit" disabled=move || form.get().saving>
                        {move || if form.get().saving { "Creando..." } else { "Crear Producto" }}
                    </button>
                </form>
                <a class="enlace" href="/producto">"Cancelar"</a>
            </section>
        </div>
    }
}

/// Product edit form: fetches the row named by the route, updates on
/// submit.
#[component]
pub fn EditarProductoPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let producto_id = RwSignal::new(None::<i64>);
    let nombre = RwSignal::new(String::new());
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
            error.set(Some("Error al obtener el producto.".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match crate::net::api::consultar_producto(token.as_deref(), id).await {
                Ok(producto) => {
                    producto_id.set(Some(producto.id));
                    nombre.set(producto.nombre_producto);
                    descripcion.set(producto.descripcion_producto);
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
        let Some(id) = producto_id.get() else {
            form.update(|f| f.fail("El producto no tiene un ID válido.".to_owned()));
            return;
        };
        let producto = build_producto_actualizar(id, &nombre.get(), &descripcion.get());
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                match crate::net::api::actualizar_producto(token.as_deref(), &producto).await {
                    Ok(()) => {
                        form.update(FormState::finish);
                        navigate("/producto", NavigateOptions::default());
                    }
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = producto;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Editar Producto"/>
            <section class="tarjeta tarjeta--angosta">
                <form class="formulario" on:submit=on_submit>
                    <label class="formulario__campo">
                        "Nombre del Producto"
                        <input
                            class="campo"
                            type="text"
                            prop:value=move || nombre.get()
                            on:input=move |ev| nombre.set(event_target_value(&ev))
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
                <a class="enlace" href="/producto">"Cancelar"</a>
            </section>
        </div>
    }
}
