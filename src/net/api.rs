//! REST client for the inventory/billing backend.
//!
//! Every endpoint is a JSON POST under one base URL; query endpoints
//! answer a `respuesta` + `resultado`/`resultados` envelope while
//! mutation endpoints answer a flat status block. The request cores
//! below own that shape, so each per-endpoint wrapper only picks the
//! endpoint name, the response kind, and the fallback message shown when
//! the backend sends none.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! All outcomes funnel into [`ApiError`]: a missing token short-circuits
//! before any request is issued, HTTP/network failures become
//! `Transport`, and backend-flagged failures (`esExitosa` false, any
//! HTTP status) become `Rejected` carrying the backend message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ApiError, ArchivoReporte, Cliente, ClienteActualizar, ClienteFiltro, ClienteNuevo,
    Credenciales, Factura, FacturaNueva, KardexFiltro, LoginResultado, Producto,
    ProductoActualizar, ProductoNuevo, StockNuevo, UsuarioNuevo,
};
#[cfg(feature = "hydrate")]
use super::types::{Envelope, ListEnvelope, Respuesta};
use crate::util::abort::AbortHandle;

/// Base URL of the backend API.
pub const BASE_URL: &str = "http://localhost:6061/api/v1";

const INICIAR_SESION: &str = "iniciar-sesion";
const CREAR_USUARIO: &str = "crear-usuario";
const CONSULTAR_CLIENTES: &str = "consultar-clientes";
const CONSULTAR_CLIENTE_ID: &str = "consultar-cliente-id";
const CREAR_CLIENTE: &str = "crear-cliente";
const ACTUALIZAR_CLIENTE: &str = "actualizar-cliente";
const ELIMINAR_CLIENTE: &str = "eliminar-cliente";
const CONSULTAR_PRODUCTOS: &str = "consultar-productos";
const CONSULTAR_PRODUCTO_ID: &str = "consultar-producto-id";
const CREAR_PRODUCTO: &str = "crear-producto";
const ACTUALIZAR_PRODUCTO: &str = "actualizar-producto";
const ELIMINAR_PRODUCTO: &str = "eliminar-producto";
const AGREGAR_STOCK: &str = "agregar-stock";
const OBTENER_KARDEX: &str = "obtener-kardex";
const OBTENER_KARDEX_VALORIZADO: &str = "obtener-kardex-valorizado";
const CONSULTAR_FACTURAS: &str = "consultar-facturas";
const CONSULTAR_FACTURA_ID: &str = "consultar-factura-id";
const CREAR_FACTURA: &str = "crear-factura";
const ELIMINAR_FACTURA: &str = "eliminar-factura";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(nombre: &str) -> String {
    format!("{BASE_URL}/{nombre}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Message for a non-OK HTTP status whose body carried no backend
/// message.
#[cfg(any(test, feature = "hydrate"))]
fn http_failure_message(status: u16, fallback: &str) -> String {
    format!("Error {status}: {fallback}")
}

/// Guard that an access token is present before issuing a request.
fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::NoToken),
    }
}

#[cfg(not(feature = "hydrate"))]
fn no_browser() -> ApiError {
    ApiError::Transport("No disponible fuera del navegador.".to_owned())
}

/// Issue one JSON POST and parse the response body as `R`.
///
/// This is the single request core every endpoint goes through: it
/// attaches the bearer token and abort signal when given, maps network
/// failures to `Transport`, and maps non-OK statuses to `Rejected` when
/// the error body carries a backend message (or `Transport` with an
/// HTTP-status message when it does not).
#[cfg(feature = "hydrate")]
async fn send_post<B, R>(
    nombre: &str,
    token: Option<&str>,
    body: &B,
    abort: Option<&AbortHandle>,
    fallback: &str,
) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let mut request =
        gloo_net::http::Request::post(&endpoint_url(nombre)).header("Accept", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(token));
    }
    if let Some(abort) = abort {
        request = request.abort_signal(abort.signal().as_ref());
    }
    let response = request
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        let cuerpo = response.text().await.unwrap_or_default();
        return Err(match envelope::error_mensaje(&cuerpo) {
            Some(mensaje) => ApiError::Rejected(mensaje),
            None => ApiError::Transport(http_failure_message(response.status(), fallback)),
        });
    }
    response
        .json::<R>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Authenticated POST unwrapping a single-`resultado` envelope.
async fn post_authed<B, T>(
    nombre: &str,
    token: Option<&str>,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let token = require_token(token)?;
    #[cfg(feature = "hydrate")]
    {
        let cuerpo: Envelope<T> = send_post(nombre, Some(token), body, None, fallback).await?;
        cuerpo.into_resultado(fallback)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nombre, token, body, fallback);
        Err(no_browser())
    }
}

/// Authenticated POST unwrapping a `resultados` list envelope.
async fn post_authed_list<B, T>(
    nombre: &str,
    token: Option<&str>,
    body: &B,
    abort: Option<&AbortHandle>,
    fallback: &str,
) -> Result<Vec<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let token = require_token(token)?;
    #[cfg(feature = "hydrate")]
    {
        let cuerpo: ListEnvelope<T> = send_post(nombre, Some(token), body, abort, fallback).await?;
        cuerpo.into_resultados(fallback)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nombre, token, body, abort, fallback);
        Err(no_browser())
    }
}

/// Authenticated POST against an endpoint answering a flat status block.
async fn post_authed_plain<B>(
    nombre: &str,
    token: Option<&str>,
    body: &B,
    fallback: &str,
) -> Result<(), ApiError>
where
    B: Serialize,
{
    let token = require_token(token)?;
    #[cfg(feature = "hydrate")]
    {
        let cuerpo: Respuesta = send_post(nombre, Some(token), body, None, fallback).await?;
        cuerpo.exigir_exito(fallback)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nombre, token, body, fallback);
        Err(no_browser())
    }
}

/// Unauthenticated POST unwrapping a single-`resultado` envelope.
async fn post_public<B, T>(nombre: &str, body: &B, fallback: &str) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let cuerpo: Envelope<T> = send_post(nombre, None, body, None, fallback).await?;
        cuerpo.into_resultado(fallback)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nombre, body, fallback);
        Err(no_browser())
    }
}

/// Unauthenticated POST against an endpoint answering a flat status
/// block.
async fn post_public_plain<B>(nombre: &str, body: &B, fallback: &str) -> Result<(), ApiError>
where
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let cuerpo: Respuesta = send_post(nombre, None, body, None, fallback).await?;
        cuerpo.exigir_exito(fallback)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nombre, body, fallback);
        Err(no_browser())
    }
}

/// Sign in and obtain the token pair.
///
/// # Errors
///
/// `Rejected` with the backend message when the credentials are refused,
/// otherwise the mapped transport failure.
pub async fn iniciar_sesion(credenciales: &Credenciales) -> Result<LoginResultado, ApiError> {
    post_public(INICIAR_SESION, credenciales, "Error en la autenticación").await
}

/// Register a new user account.
///
/// # Errors
///
/// The mapped [`ApiError`] when registration fails.
pub async fn crear_usuario(usuario: &UsuarioNuevo) -> Result<(), ApiError> {
    post_public_plain(CREAR_USUARIO, usuario, "Error en el registro").await
}

/// Query clients matching `filtro`; pass an abort handle when the caller
/// cancels on unmount.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn consultar_clientes(
    token: Option<&str>,
    filtro: &ClienteFiltro,
    abort: Option<&AbortHandle>,
) -> Result<Vec<Cliente>, ApiError> {
    post_authed_list(
        CONSULTAR_CLIENTES,
        token,
        filtro,
        abort,
        "No se pudieron obtener los clientes.",
    )
    .await
}

/// Fetch one client by id.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn consultar_cliente(token: Option<&str>, id: i64) -> Result<Cliente, ApiError> {
    post_authed(
        CONSULTAR_CLIENTE_ID,
        token,
        &serde_json::json!({ "id": id }),
        "Error al obtener el cliente.",
    )
    .await
}

/// Create a client.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn crear_cliente(token: Option<&str>, cliente: &ClienteNuevo) -> Result<(), ApiError> {
    post_authed_plain(CREAR_CLIENTE, token, cliente, "Error al crear el cliente.").await
}

/// Update a client's editable fields.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn actualizar_cliente(
    token: Option<&str>,
    cliente: &ClienteActualizar,
) -> Result<(), ApiError> {
    post_authed_plain(
        ACTUALIZAR_CLIENTE,
        token,
        cliente,
        "Error al actualizar el cliente.",
    )
    .await
}

/// Delete a client by id.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn eliminar_cliente(token: Option<&str>, id: i64) -> Result<(), ApiError> {
    post_authed_plain(
        ELIMINAR_CLIENTE,
        token,
        &serde_json::json!({ "id": id }),
        "Error al eliminar el cliente.",
    )
    .await
}

/// Query all products; pass an abort handle when the caller cancels on
/// unmount.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn consultar_productos(
    token: Option<&str>,
    abort: Option<&AbortHandle>,
) -> Result<Vec<Producto>, ApiError> {
    post_authed_list(
        CONSULTAR_PRODUCTOS,
        token,
        &serde_json::json!({}),
        abort,
        "No se pudieron obtener los productos.",
    )
    .await
}

/// Fetch one product by id.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn consultar_producto(token: Option<&str>, id: i64) -> Result<Producto, ApiError> {
    post_authed(
        CONSULTAR_PRODUCTO_ID,
        token,
        &serde_json::json!({ "id": id }),
        "Error al obtener el producto.",
    )
    .await
}

/// Create a product.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn crear_producto(token: Option<&str>, producto: &ProductoNuevo) -> Result<(), ApiError> {
    post_authed_plain(CREAR_PRODUCTO, token, producto, "Error al crear el producto.").await
}

/// Update a product's editable fields.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn actualizar_producto(
    token: Option<&str>,
    producto: &ProductoActualizar,
) -> Result<(), ApiError> {
    post_authed_plain(
        ACTUALIZAR_PRODUCTO,
        token,
        producto,
        "Error al actualizar el producto.",
    )
    .await
}

/// Delete a product by id.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn eliminar_producto(token: Option<&str>, id: i64) -> Result<(), ApiError> {
    post_authed_plain(
        ELIMINAR_PRODUCTO,
        token,
        &serde_json::json!({ "id": id }),
        "Error al eliminar el producto.",
    )
    .await
}

/// Register a stock intake for a product.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn agregar_stock(token: Option<&str>, stock: &StockNuevo) -> Result<(), ApiError> {
    post_authed_plain(AGREGAR_STOCK, token, stock, "Error al agregar el stock.").await
}

/// Fetch the kardex spreadsheet for a product and date range.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn obtener_kardex(
    token: Option<&str>,
    filtro: &KardexFiltro,
) -> Result<ArchivoReporte, ApiError> {
    post_authed(
        OBTENER_KARDEX,
        token,
        filtro,
        "Error al realizar la consulta.",
    )
    .await
}

/// Fetch the valued kardex spreadsheet for a product and date range.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn obtener_kardex_valorizado(
    token: Option<&str>,
    filtro: &KardexFiltro,
) -> Result<ArchivoReporte, ApiError> {
    post_authed(
        OBTENER_KARDEX_VALORIZADO,
        token,
        filtro,
        "Error al obtener información adicional.",
    )
    .await
}

/// Query all invoices, soft-deleted ones included.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn consultar_facturas(token: Option<&str>) -> Result<Vec<Factura>, ApiError> {
    post_authed_list(
        CONSULTAR_FACTURAS,
        token,
        &serde_json::json!({}),
        None,
        "No se pudieron obtener las facturas.",
    )
    .await
}

/// Fetch one invoice with its line items.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn consultar_factura(token: Option<&str>, id: i64) -> Result<Factura, ApiError> {
    post_authed(
        CONSULTAR_FACTURA_ID,
        token,
        &serde_json::json!({ "id": id }),
        "Error al consultar la factura.",
    )
    .await
}

/// Create an invoice; totals are computed server-side.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn crear_factura(token: Option<&str>, factura: &FacturaNueva) -> Result<(), ApiError> {
    post_authed_plain(CREAR_FACTURA, token, factura, "Error al crear la factura.").await
}

/// Soft-delete an invoice by id.
///
/// # Errors
///
/// [`ApiError::NoToken`] without a token, otherwise the mapped failure.
pub async fn eliminar_factura(token: Option<&str>, id: i64) -> Result<(), ApiError> {
    post_authed_plain(
        ELIMINAR_FACTURA,
        token,
        &serde_json::json!({ "id": id }),
        "Error al eliminar la factura.",
    )
    .await
}
