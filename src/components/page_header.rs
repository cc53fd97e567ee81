//! Breadcrumb-style header shown on every authenticated page.

use leptos::prelude::*;

/// Page title plus a breadcrumb back to the module index.
#[component]
pub fn PageHeader(titulo: &'static str) -> impl IntoView {
    view! {
        <header class="encabezado">
            <h1 class="encabezado__titulo">{titulo}</h1>
            <nav class="encabezado__migas">
                <a class="encabezado__enlace" href="/home">"Inicio"</a>
                <span class="encabezado__separador">"/"</span>
                <span class="encabezado__actual">{titulo}</span>
            </nav>
        </header>
    }
}
