//! Kardex report page: two spreadsheet downloads over one shared filter.

#[cfg(test)]
#[path = "kardex_test.rs"]
mod kardex_test;

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::KardexFiltro;
use crate::state::form::FormState;
use crate::state::session::SessionState;
use crate::util::fecha::fecha_o_null;

/// Both download buttons require a selected product; the placeholder
/// option carries id 0.
fn build_filtro(id_producto: &str, fecha_inicio: &str, fecha_fin: &str) -> Option<KardexFiltro> {
    let id = id_producto.trim().parse().unwrap_or(0);
    if id == 0 {
        return None;
    }
    Some(KardexFiltro {
        id_producto: id,
        fecha_inicio: fecha_o_null(fecha_inicio),
        fecha_fin: fecha_o_null(fecha_fin),
    })
}

/// Kardex query form. Each button downloads a spreadsheet variant built
/// from the same product and date-range filter.
#[component]
pub fn KardexPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let productos = RwSignal::new(Vec::<crate::net::types::Producto>::new());
    let id_producto = RwSignal::new("0".to_owned());
    let fecha_inicio = RwSignal::new(String::new());
    let fecha_fin = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match crate::net::api::consultar_productos(token.as_deref(), None).await {
                Ok(lista) => productos.set(lista),
                Err(e) => form.update(|f| f.fail(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    let descargar = move |valorizado: bool| {
        if form.get().saving {
            return;
        }
        let Some(filtro) = build_filtro(&id_producto.get(), &fecha_inicio.get(), &fecha_fin.get())
        else {
            form.update(|f| f.fail("Es necesario seleccionar un producto.".to_owned()));
            return;
        };
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            let resultado = if valorizado {
                crate::net::api::obtener_kardex_valorizado(token.as_deref(), &filtro).await
            } else {
                crate::net::api::obtener_kardex(token.as_deref(), &filtro).await
            };
            match resultado {
                Ok(archivo) => match archivo.bytes() {
                    Ok(bytes) => {
                        crate::util::download::save_file(&archivo.nombre_archivo, &bytes);
                        let mensaje = if valorizado {
                            "Información adicional descargada exitosamente."
                        } else {
                            "Reporte descargado exitosamente."
                        };
                        form.update(|f| f.succeed(mensaje.to_owned()));
                    }
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                },
                Err(e) => form.update(|f| f.fail(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filtro;
            let _ = session;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Kardex"/>
            <section class="tarjeta tarjeta--angosta">
                <p class="tarjeta__descripcion">
                    "Realiza consultas según el rango de fechas y selecciona un producto para obtener los resultados."
                </p>
                <form class="formulario" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    <label class="formulario__campo">
                        "Producto"
                        <select
                            class="campo"
                            prop:value=move || id_producto.get()
                            on:change=move |ev| id_producto.set(event_target_value(&ev))
                        >
                            <option value="0">"Selecciona un producto"</option>
                            {move || {
                                productos
                                    .get()
                                    .into_iter()
                                    .map(|producto| {
                                        view! {
                                            <option value=producto.id.to_string()>
                                                {producto.nombre_producto}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="formulario__campo">
                        "Fecha de Inicio"
                        <input
                            class="campo"
                            type="date"
                            prop:value=move || fecha_inicio.get()
                            on:input=move |ev| fecha_inicio.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Fecha de Fin"
                        <input
                            class="campo"
                            type="date"
                            prop:value=move || fecha_fin.get()
                            on:input=move |ev| fecha_fin.set(event_target_value(&ev))
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
                    <button
                        class="boton boton--primario"
                        type="button"
                        disabled=move || form.get().saving
                        on:click=move |_| descargar(false)
                    >
                        {move || if form.get().saving { "Consultando..." } else { "Descargar Reporte Kardex" }}
                    </button>
                    <button
                        class="boton boton--secundario"
                        type="button"
                        disabled=move || form.get().saving
                        on:click=move |_| descargar(true)
                    >
                        {move || {
                            if form.get().saving {
                                "Consultando..."
                            } else {
                                "Descargar Reporte Kardex valorizado"
                            }
                        }}
                    </button>
                </form>
            </section>
        </div>
    }
}
