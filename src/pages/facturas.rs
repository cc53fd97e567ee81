//! Invoice pages: list with estado badge, by-id lookup, creation form
//! with editable line items.

#[cfg(test)]
#[path = "facturas_test.rs"]
mod facturas_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::types::{DetalleNuevo, Factura, FacturaNueva};
use crate::state::form::FormState;
use crate::state::list::ListState;
use crate::state::session::SessionState;
use crate::util::fecha::ahora_iso;

fn parse_factura_id(valor: &str) -> Option<i64> {
    valor.trim().parse().ok()
}

fn badge_class(estado: &str) -> &'static str {
    if estado == "Eliminada" {
        "insignia insignia--error"
    } else {
        "insignia insignia--exito"
    }
}

fn agregar_detalle(detalles: &mut Vec<DetalleNuevo>) {
    detalles.push(DetalleNuevo {
        id_producto: 0,
        cantidad: 1,
    });
}

fn quitar_detalle(detalles: &mut Vec<DetalleNuevo>, indice: usize) {
    if indice < detalles.len() {
        detalles.remove(indice);
    }
}

/// A quantity field mid-edit can be empty; keep the previous value until
/// the input parses again.
fn parse_cantidad(valor: &str, previa: i64) -> i64 {
    valor.trim().parse().unwrap_or(previa)
}

/// Line items travel in insertion order; pricing stays server-side.
fn build_factura(
    id_cliente: &str,
    fecha_factura: &str,
    glosa: &str,
    detalles: &[DetalleNuevo],
) -> FacturaNueva {
    FacturaNueva {
        id_cliente: id_cliente.trim().parse().unwrap_or(0),
        fecha_factura: fecha_factura.trim().to_owned(),
        glosa: glosa.trim().to_owned(),
        detalles: detalles.to_vec(),
    }
}

/// Invoice list plus a by-id lookup that expands one invoice with its
/// line items. Deleting marks the row server-side and drops it locally.
#[component]
pub fn FacturasPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let lista = RwSignal::new(ListState::<Factura> {
        loading: true,
        ..ListState::default()
    });
    let id_factura = RwSignal::new(String::new());
    let factura = RwSignal::new(None::<Factura>);
    let consulta_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        lista.update(ListState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match crate::net::api::consultar_facturas(token.as_deref()).await {
                Ok(facturas) => lista.update(|l| l.resolve(facturas)),
                Err(e) => {
                    leptos::logging::warn!("no se pudieron obtener las facturas: {e}");
                    lista.update(|l| l.fail(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    let on_consultar = move |_| {
        let Some(id) = parse_factura_id(&id_factura.get()) else {
            consulta_error.set(Some("Error al consultar la factura.".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match crate::net::api::consultar_factura(token.as_deref(), id).await {
                Ok(detalle) => {
                    consulta_error.set(None);
                    factura.set(Some(detalle));
                }
                Err(e) => {
                    leptos::logging::warn!("no se pudo consultar la factura: {e}");
                    factura.set(None);
                    consulta_error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().access_token;
            match crate::net::api::eliminar_factura(token.as_deref(), id).await {
                Ok(()) => lista.update(|l| l.remove_where(|f| f.id == id)),
                Err(e) => {
                    leptos::logging::warn!("no se pudo eliminar la factura: {e}");
                    lista.update(|l| l.fail(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Facturación"/>
            <section class="tarjeta">
                <div class="tarjeta__acciones">
                    <a class="boton boton--primario" href="/facturaCrear">"Crear Factura"</a>
                </div>
                <h2 class="tarjeta__titulo">"Gestión de Facturas"</h2>
                <div class="formulario formulario--en-linea">
                    <input
                        class="campo"
                        type="text"
                        placeholder="ID Factura"
                        prop:value=move || id_factura.get()
                        on:input=move |ev| id_factura.set(event_target_value(&ev))
                    />
                    <button class="boton boton--secundario" type="button" on:click=on_consultar>
                        "Consultar Factura"
                    </button>
                </div>
                <Show when=move || consulta_error.get().is_some()>
                    <p class="formulario__error">
                        {move || consulta_error.get().unwrap_or_default()}
                    </p>
                </Show>
                {move || {
                    factura
                        .get()
                        .map(|detalle| {
                            let filas = detalle
                                .detalles
                                .into_iter()
                                .map(|linea| {
                                    view! {
                                        <tr>
                                            <td>{linea.nombre_producto}</td>
                                            <td>{linea.cantidad}</td>
                                            <td>{linea.precio}</td>
                                            <td>{linea.subtotal}</td>
                                            <td>{linea.impuesto}</td>
                                            <td>{linea.total}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <div class="tarjeta__detalle">
                                    <h3>{format!("Factura #{}", detalle.id)}</h3>
                                    <p>{format!("Cliente: {}", detalle.nombre_cliente)}</p>
                                    <p>{format!("Total: {}", detalle.total)}</p>
                                    <h4>"Detalles:"</h4>
                                    <table class="tabla">
                                        <thead>
                                            <tr>
                                                <th>"Producto"</th>
                                                <th>"Cantidad"</th>
                                                <th>"Precio"</th>
                                                <th>"Subtotal"</th>
                                                <th>"Impuesto"</th>
                                                <th>"Total"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{filas}</tbody>
                                    </table>
                                </div>
                            }
                        })
                }}
                <h2 class="tarjeta__titulo">"Listado de Facturas"</h2>
                {move || {
                    let estado = lista.get();
                    if estado.loading {
                        view! { <p class="tarjeta__estado">"Cargando facturas..."</p> }.into_any()
                    } else if let Some(error) = estado.error {
                        view! { <p class="tarjeta__estado tarjeta__estado--error">{error}</p> }
                            .into_any()
                    } else {
                        let filas = estado
                            .items
                            .into_iter()
                            .map(|factura| {
                                let id = factura.id;
                                let insignia = badge_class(&factura.estado);
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{factura.nombre_cliente}</td>
                                        <td>{factura.total}</td>
                                        <td>
                                            <span class=insignia>{factura.estado}</span>
                                        </td>
                                        <td class="tabla__acciones">
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
                                        <th>"Cliente"</th>
                                        <th>"Total"</th>
                                        <th>"Estado"</th>
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

/// Invoice creation form. Line items are edited in place and submitted
/// in the order they were added.
#[component]
pub fn CrearFacturaPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let clientes = RwSignal::new(Vec::<crate::net::types::Cliente>::new());
    let productos = RwSignal::new(Vec::<crate::net::types::Producto>::new());
    let id_cliente = RwSignal::new(String::new());
    let glosa = RwSignal::new(String::new());
    let fecha_factura = RwSignal::new(ahora_iso());
    let detalles = RwSignal::new(Vec::<DetalleNuevo>::new());
    let form = RwSignal::new(FormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                let filtro = crate::net::types::ClienteFiltro::default();
                match crate::net::api::consultar_clientes(token.as_deref(), &filtro, None).await {
                    Ok(lista) => clientes.set(lista),
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                match crate::net::api::consultar_productos(token.as_deref(), None).await {
                    Ok(lista) => productos.set(lista),
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().saving {
            return;
        }
        let factura = build_factura(
            &id_cliente.get(),
            &fecha_factura.get(),
            &glosa.get(),
            &detalles.get(),
        );
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                match crate::net::api::crear_factura(token.as_deref(), &factura).await {
                    Ok(()) => {
                        form.update(FormState::finish);
                        navigate("/factura", NavigateOptions::default());
                    }
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = factura;
            let _ = session;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Crear Factura"/>
            <section class="tarjeta tarjeta--angosta">
                <form class="formulario" on:submit=on_submit>
                    <label class="formulario__campo">
                        "Cliente"
                        <select
                            class="campo"
                            prop:value=move || id_cliente.get()
                            on:change=move |ev| id_cliente.set(event_target_value(&ev))
                        >
                            <option value="">"Seleccionar Cliente"</option>
                            {move || {
                                clientes
                                    .get()
                                    .into_iter()
                                    .map(|cliente| {
                                        let etiqueta = format!(
                                            "{} - {}",
                                            cliente.razon_social,
                                            cliente.numero_identificacion,
                                        );
                                        view! {
                                            <option value=cliente.id.to_string()>{etiqueta}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="formulario__campo">
                        "Glosa"
                        <input
                            class="campo"
                            type="text"
                            placeholder="Descripción de la factura"
                            prop:value=move || glosa.get()
                            on:input=move |ev| glosa.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Fecha de la Factura"
                        <input
                            class="campo"
                            type="datetime-local"
                            prop:value=move || fecha_factura.get()
                            on:input=move |ev| fecha_factura.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="formulario__campo">
                        "Detalles de la Factura"
                        {move || {
                            let productos_actual = productos.get();
                            detalles
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(indice, detalle)| {
                                    let opciones = productos_actual
                                        .iter()
                                        .map(|producto| {
                                            let etiqueta = format!(
                                                "{} - {}",
                                                producto.nombre_producto,
                                                producto.descripcion_producto,
                                            );
                                            view! {
                                                <option value=producto.id.to_string()>
                                                    {etiqueta}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>();
                                    view! {
                                        <div class="formulario__detalle">
                                            <select
                                                class="campo"
                                                prop:value=detalle.id_producto.to_string()
                                                on:change=move |ev| {
                                                    detalles
                                                        .update(|d| {
                                                            if let Some(det) = d.get_mut(indice) {
                                                                det.id_producto = event_target_value(&ev)
                                                                    .trim()
                                                                    .parse()
                                                                    .unwrap_or(0);
                                                            }
                                                        });
                                                }
                                            >
                                                <option value="0">"Seleccionar Producto"</option>
                                                {opciones}
                                            </select>
                                            <input
                                                class="campo"
                                                type="number"
                                                placeholder="Cantidad"
                                                prop:value=detalle.cantidad.to_string()
                                                on:input=move |ev| {
                                                    detalles
                                                        .update(|d| {
                                                            if let Some(det) = d.get_mut(indice) {
                                                                det.cantidad = parse_cantidad(
                                                                    &event_target_value(&ev),
                                                                    det.cantidad,
                                                                );
                                                            }
                                                        });
                                                }
                                            />
                                            <button
                                                class="enlace enlace--peligro"
                                                type="button"
                                                on:click=move |_| {
                                                    detalles.update(|d| quitar_detalle(d, indice));
                                                }
                                            >
                                                "Eliminar"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <button
                            class="enlace"
                            type="button"
                            on:click=move |_| detalles.update(agregar_detalle)
                        >
                            "Añadir Detalle"
                        </button>
                    </div>
                    <Show when=move || form.get().error.is_some()>
                        <p class="formulario__error">
                            {move || form.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="boton boton--primario" type="submit" disabled=move || form.get().saving>
                        {move || if form.get().saving { "Creando..." } else { "Crear Factura" }}
                    </button>
                </form>
                <a class="enlace" href="/factura">"Cancelar"</a>
            </section>
        </div>
    }
}
