//! Stock intake page: pick a product, add quantity at a unit price.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::types::StockNuevo;
use crate::state::form::FormState;
use crate::state::session::SessionState;

fn parse_entero(valor: &str) -> i64 {
    valor.trim().parse().unwrap_or(0)
}

fn parse_decimal(valor: &str) -> f64 {
    valor.trim().parse().unwrap_or(0.0)
}

/// Unparseable fields become zero and the backend rejects the intake,
/// same as leaving them empty.
fn build_stock(id_producto: &str, cantidad: &str, precio_unitario: &str) -> StockNuevo {
    StockNuevo {
        id_producto: parse_entero(id_producto),
        cantidad: parse_decimal(cantidad),
        precio_unitario: parse_decimal(precio_unitario),
    }
}

/// Stock intake form. On success the fields reset and the success message
/// stays on screen for two seconds before navigating.
#[component]
pub fn StockPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let productos = RwSignal::new(Vec::<crate::net::types::Producto>::new());
    let id_producto = RwSignal::new("0".to_owned());
    let cantidad = RwSignal::new(String::new());
    let precio_unitario = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

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

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().saving {
            return;
        }
        let stock = build_stock(&id_producto.get(), &cantidad.get(), &precio_unitario.get());
        form.update(FormState::begin);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().access_token;
                match crate::net::api::agregar_stock(token.as_deref(), &stock).await {
                    Ok(()) => {
                        form.update(|f| f.succeed("Stock agregado exitosamente.".to_owned()));
                        id_producto.set("0".to_owned());
                        cantidad.set(String::new());
                        precio_unitario.set(String::new());
                        gloo_timers::future::TimeoutFuture::new(2_000).await;
                        navigate("/stock", NavigateOptions::default());
                    }
                    Err(e) => form.update(|f| f.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = stock;
            let _ = session;
        }
    };

    view! {
        <div class="pagina">
            <PageHeader titulo="Stock"/>
            <section class="tarjeta tarjeta--angosta">
                <p class="tarjeta__descripcion">
                    "Ingresa los detalles para agregar stock a un producto."
                </p>
                <form class="formulario" on:submit=on_submit>
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
                        "Cantidad"
                        <input
                            class="campo"
                            type="number"
                            placeholder="Cantidad"
                            prop:value=move || cantidad.get()
                            on:input=move |ev| cantidad.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="formulario__campo">
                        "Precio Unitario"
                        <input
                            class="campo"
                            type="number"
                            placeholder="Precio Unitario"
                            prop:value=move || precio_unitario.get()
                            on:input=move |ev| precio_unitario.set(event_target_value(&ev))
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
                        {move || if form.get().saving { "Agregando..." } else { "Agregar Stock" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
