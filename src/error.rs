//! Tipos de error compartidos por services y viewmodels.

/// Fallos de acceso a localStorage
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Sin window, o el navegador negó el acceso (modo privado, storage deshabilitado)
    #[error("localStorage is not available")]
    Unavailable,

    #[error("could not write key {0}")]
    Write(String),

    #[error("could not read key {0}")]
    Read(String),

    #[error("could not remove key {0}")]
    Remove(String),
}

/// Fallo reportado por un [`AuthBackend`](crate::services::AuthBackend)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("OTP rejected")]
    Rejected,

    #[error("auth backend unavailable: {0}")]
    Unavailable(String),
}

/// Error general de los controladores de página
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("navigation to {0} failed")]
    Navigation(String),

    #[error("DOM error: {0}")]
    Dom(String),
}
