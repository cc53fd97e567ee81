//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    clientes::{ClientesPage, CrearClientePage, EditarClientePage},
    facturas::{CrearFacturaPage, FacturasPage},
    home::HomePage,
    kardex::KardexPage,
    login::LoginPage,
    productos::{CrearProductoPage, EditarProductoPage, ProductosPage},
    signup::SignupPage,
    stock::StockPage,
};
use crate::state::session::SessionState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context (seeded from localStorage so a
/// reload keeps the user signed in) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(storage::load_session());
    provide_context::<RwSignal<SessionState>>(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/balanza.css"/>
        <Title text="CITIKOLD"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("cliente") view=ClientesPage/>
                <Route path=(StaticSegment("cliente"), ParamSegment("id")) view=EditarClientePage/>
                <Route path=StaticSegment("clienteCrear") view=CrearClientePage/>
                <Route path=StaticSegment("producto") view=ProductosPage/>
                <Route path=(StaticSegment("producto"), ParamSegment("id")) view=EditarProductoPage/>
                <Route path=StaticSegment("productoCrear") view=CrearProductoPage/>
                <Route path=StaticSegment("stock") view=StockPage/>
                <Route path=StaticSegment("kardex") view=KardexPage/>
                <Route path=StaticSegment("factura") view=FacturasPage/>
                <Route path=StaticSegment("facturaCrear") view=CrearFacturaPage/>
            </Routes>
        </Router>
    }
}
