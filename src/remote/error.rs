//! Fehlertypen der Remote-Schicht.

use thiserror::Error;

/// Fehler beim Zugriff auf die Reiseplan-API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Ungültige URL: {0}")]
    InvalidUrl(String),
    #[error("Verbindungsfehler: {0}")]
    Transport(String),
    #[error("HTTP {status} bei {url}")]
    Status { status: u16, url: String },
    #[error("Antwort nicht lesbar: {0}")]
    Decode(String),
    #[error("Kein Plan ausgewählt")]
    MissingScope,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Fehler der Ortssuche.
///
/// `MissingCredential` (Server ohne Gaode-Key) ist bewusst von einer leeren
/// Trefferliste und von einem Abbruch unterschieden.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    #[error("Gaode-API-Key fehlt auf dem Server")]
    MissingCredential,
    #[error("Suche abgebrochen")]
    Cancelled,
    #[error("Suche fehlgeschlagen: {0}")]
    Request(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Request(err.to_string())
    }
}
