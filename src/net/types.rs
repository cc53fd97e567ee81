//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON exactly (via
//! `rename_all`), so these types are the single source of truth for the
//! wire schema. Request bodies and response rows are kept as separate
//! types because the backend accepts fewer fields than it returns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use envelope::{ApiError, ArchivoReporte, Envelope, ListEnvelope, Respuesta};

/// Token pair issued by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jwt {
    /// Bearer token attached to every authenticated request.
    pub access_token: String,
    /// Issued but never exchanged; kept only so a later backend revision
    /// can use it.
    pub refresh_token: String,
    /// Expiry timestamp as the backend formats it.
    pub expiration: String,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultado {
    /// Whether a second authentication factor is pending.
    pub validar_factor_autenticacion: bool,
    /// Issued token pair.
    pub jwt: Jwt,
}

/// Login request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credenciales {
    pub usuario: String,
    pub clave: String,
    pub recordar_sesion: bool,
}

/// Registration request body.
///
/// `is_super_user` and `tipo_2fa` are fixed by the UI; the form never
/// exposes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioNuevo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Plain password; the backend hashes it despite the field name.
    pub password_hash: String,
    pub phone_number: String,
    pub is_super_user: bool,
    #[serde(rename = "tipo2FA")]
    pub tipo_2fa: i32,
}

/// A client row as returned by the query endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,
    pub numero_identificacion: String,
    pub razon_social: String,
    pub descripcion: String,
    /// Absent from the by-id endpoint.
    #[serde(default)]
    pub fecha_creacion: String,
    pub fecha_modificacion: Option<String>,
}

/// Search filter for the client list; empty fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteFiltro {
    pub numero_identificacion: String,
    pub nombre_contiene: String,
}

/// Client creation body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteNuevo {
    pub numero_identificacion: String,
    pub razon_social: String,
    pub descripcion: String,
    pub tipo_impuesto: i32,
}

/// Client update body; only the editable fields travel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteActualizar {
    pub id: i64,
    pub numero_identificacion: String,
    pub razon_social: String,
    pub descripcion: String,
}

/// A product row as returned by the query endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: i64,
    pub nombre_producto: String,
    pub descripcion_producto: String,
    /// Absent from the by-id endpoint.
    #[serde(default)]
    pub fecha_creacion: String,
    pub fecha_modificacion: Option<String>,
}

/// Product creation body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoNuevo {
    pub nombre_producto: String,
    pub descripcion_producto: String,
}

/// Product update body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoActualizar {
    pub id: i64,
    pub nombre_producto: String,
    pub descripcion_producto: String,
}

/// Stock intake body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockNuevo {
    pub id_producto: i64,
    pub cantidad: f64,
    pub precio_unitario: f64,
}

/// Filter for the kardex report endpoints.
///
/// `None` dates serialize as JSON `null`, which the backend reads as an
/// open-ended range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KardexFiltro {
    pub id_producto: i64,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
}

/// An invoice row as returned by the query endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factura {
    pub id: i64,
    pub id_cliente: i64,
    pub nombre_cliente: String,
    pub fecha_factura: String,
    pub glosa: String,
    pub subtotal: f64,
    pub descuento: f64,
    pub impuesto: f64,
    pub total: f64,
    /// `"Eliminada"` marks a soft-deleted invoice.
    pub estado: String,
    /// Only the by-id endpoint populates the line items.
    #[serde(default)]
    pub detalles: Vec<FacturaDetalle>,
}

/// One invoice line item; the priced fields are backend-computed and
/// absent from list responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacturaDetalle {
    pub id_producto: i64,
    pub nombre_producto: Option<String>,
    pub cantidad: f64,
    pub precio: Option<f64>,
    pub subtotal: Option<f64>,
    pub descuento: Option<f64>,
    pub impuesto: Option<f64>,
    pub total: Option<f64>,
}

/// Invoice creation body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacturaNueva {
    pub id_cliente: i64,
    pub fecha_factura: String,
    pub glosa: String,
    pub detalles: Vec<DetalleNuevo>,
}

/// One line item of an invoice creation body; pricing stays server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetalleNuevo {
    pub id_producto: i64,
    pub cantidad: i64,
}
