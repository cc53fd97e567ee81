//! Date helpers for forms and table rendering.

#[cfg(test)]
#[path = "fecha_test.rs"]
mod fecha_test;

/// Current timestamp in ISO-8601, used to seed the invoice date field.
/// Empty outside the browser.
#[must_use]
pub fn ahora_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Map an empty date input to the JSON `null` the kardex filter expects.
#[must_use]
pub fn fecha_o_null(valor: &str) -> Option<String> {
    let valor = valor.trim();
    if valor.is_empty() {
        None
    } else {
        Some(valor.to_owned())
    }
}

/// The date portion of an ISO timestamp, for table cells.
#[must_use]
pub fn fecha_corta(valor: &str) -> &str {
    valor.split('T').next().unwrap_or(valor)
}
