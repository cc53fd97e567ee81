//! Home page: navigation cards for each module plus logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Landing page after login. Logout is the single writer that clears the
/// shared session and its persisted tokens.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.update(SessionState::clear);
        crate::util::storage::clear_session();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="pagina">
            <header class="encabezado">
                <h1 class="encabezado__titulo">"CITIKOLD"</h1>
                <button class="boton boton--secundario" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </header>
            <div class="tarjetas-inicio">
                <a class="tarjeta-inicio" href="/cliente">
                    <h2 class="tarjeta-inicio__titulo">"Clientes"</h2>
                    <p class="tarjeta-inicio__detalle">"Consulta, crea y edita clientes."</p>
                </a>
                <a class="tarjeta-inicio" href="/producto">
                    <h2 class="tarjeta-inicio__titulo">"Productos"</h2>
                    <p class="tarjeta-inicio__detalle">"Catálogo de productos."</p>
                </a>
                <a class="tarjeta-inicio" href="/stock">
                    <h2 class="tarjeta-inicio__titulo">"Stock"</h2>
                    <p class="tarjeta-inicio__detalle">"Ingreso de inventario por producto."</p>
                </a>
                <a class="tarjeta-inicio" href="/kardex">
                    <h2 class="tarjeta-inicio__titulo">"Kardex"</h2>
                    <p class="tarjeta-inicio__detalle">"Reportes de movimientos en Excel."</p>
                </a>
                <a class="tarjeta-inicio" href="/factura">
                    <h2 class="tarjeta-inicio__titulo">"Facturación"</h2>
                    <p class="tarjeta-inicio__detalle">"Gestión y emisión de facturas."</p>
                </a>
            </div>
        </div>
    }
}
