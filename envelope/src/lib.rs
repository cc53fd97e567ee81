//! Shared response-envelope model for the inventory/billing backend.
//!
//! Every endpoint wraps its body in a `respuesta` status block; query
//! endpoints additionally carry a `resultado` object or a `resultados`
//! array, and report endpoints carry a base64-encoded spreadsheet. This
//! crate owns that wire representation plus the error taxonomy the UI
//! layer maps outcomes into, so page code never inspects raw bodies.

use base64::Engine;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Failure classes surfaced to the UI as user-facing messages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No access token is available; the request was never issued.
    #[error("No hay token de acceso disponible.")]
    NoToken,
    /// The request could not complete or the body was not a valid envelope.
    #[error("{0}")]
    Transport(String),
    /// The backend answered but flagged the operation as failed
    /// (`esExitosa` false, any HTTP status).
    #[error("{0}")]
    Rejected(String),
    /// A report payload that could not be decoded from base64.
    #[error("El archivo del reporte no se pudo decodificar.")]
    InvalidFile,
}

/// Status block present on every backend response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Respuesta {
    /// Backend-defined status code, distinct from the HTTP status.
    pub codigo: String,
    /// Human-readable message, often empty on success.
    pub mensaje: String,
    /// Logical outcome; `false` marks a failure even on HTTP 200.
    pub es_exitosa: bool,
    /// Whether the backend caught an exception while handling the call.
    pub existe_excepcion: bool,
}

impl Respuesta {
    /// The backend message when it is non-empty, otherwise `fallback`.
    #[must_use]
    pub fn mensaje_o<'a>(&'a self, fallback: &'a str) -> &'a str {
        let mensaje = self.mensaje.trim();
        if mensaje.is_empty() { fallback } else { mensaje }
    }

    /// Map the logical outcome to a result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend message (or
    /// `fallback` when that message is empty) whenever `esExitosa` is
    /// `false`.
    pub fn exigir_exito(&self, fallback: &str) -> Result<(), ApiError> {
        if self.es_exitosa {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.mensaje_o(fallback).to_owned()))
        }
    }
}

/// Envelope for endpoints returning a single `resultado` object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Status block.
    pub respuesta: Respuesta,
    /// Payload; absent on failures and on malformed bodies.
    pub resultado: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, honoring the status block first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `esExitosa` is `false` (even if
    /// a `resultado` is present), and [`ApiError::Transport`] when a
    /// successful status arrives without a payload.
    pub fn into_resultado(self, fallback: &str) -> Result<T, ApiError> {
        self.respuesta.exigir_exito(fallback)?;
        self.resultado
            .ok_or_else(|| ApiError::Transport(fallback.to_owned()))
    }
}

/// Envelope for endpoints returning a `resultados` array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ListEnvelope<T> {
    /// Status block.
    pub respuesta: Respuesta,
    /// Payload rows; a missing field is an empty list, not an error.
    #[serde(default = "Vec::new")]
    pub resultados: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// Unwrap the rows, honoring the status block first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `esExitosa` is `false`.
    pub fn into_resultados(self, fallback: &str) -> Result<Vec<T>, ApiError> {
        self.respuesta.exigir_exito(fallback)?;
        Ok(self.resultados)
    }
}

/// Spreadsheet report payload returned by the kardex endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivoReporte {
    /// File content, standard base64 with padding.
    pub base64: String,
    /// Download file name chosen by the backend.
    pub nombre_archivo: String,
}

impl ArchivoReporte {
    /// Decode the file content into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidFile`] when the content is not valid
    /// base64.
    pub fn bytes(&self) -> Result<Vec<u8>, ApiError> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.base64)
            .map_err(|_| ApiError::InvalidFile)
    }
}

/// Extract the backend message from an error-response body.
///
/// Error bodies carry either a full envelope (`respuesta.mensaje`) or a
/// flat `mensaje` field depending on the endpoint; whichever is present
/// and non-empty wins. Returns `None` for unparseable bodies so callers
/// fall back to a status-based message.
#[must_use]
pub fn error_mensaje(body: &str) -> Option<String> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return None,
    };
    let nested = value
        .get("respuesta")
        .and_then(|r| r.get("mensaje"))
        .and_then(serde_json::Value::as_str);
    let flat = value.get("mensaje").and_then(serde_json::Value::as_str);
    nested
        .into_iter()
        .chain(flat)
        .map(str::trim)
        .find(|mensaje| !mensaje.is_empty())
        .map(str::to_owned)
}
