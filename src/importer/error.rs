// ==========================================
// Inventario Castaño - Errores de importación
// ==========================================
// Herramienta: macro derive de thiserror
// ==========================================

use thiserror::Error;

/// Errores del módulo de importación y almacenamiento
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Errores de archivo =====
    #[error("Archivo no encontrado: {0}")]
    ArchivoNoEncontrado(String),

    #[error("No se pudo leer el archivo: {0}")]
    LecturaArchivo(String),

    // ===== Errores del contenedor XLSX =====
    #[error("Contenedor XLSX inválido: {0}")]
    ContenedorInvalido(String),

    #[error("XML de hoja de cálculo inválido: {0}")]
    XmlInvalido(String),

    // ===== Errores de persistencia local =====
    #[error("Almacenamiento local dañado ({ruta}): {mensaje}")]
    Persistencia { ruta: String, mensaje: String },

    #[error("Serialización JSON fallida: {0}")]
    Json(String),

    // ===== Error genérico =====
    #[error(transparent)]
    Otro(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::LecturaArchivo(err.to_string())
    }
}

impl From<zip::result::ZipError> for ImportError {
    fn from(err: zip::result::ZipError) -> Self {
        ImportError::ContenedorInvalido(err.to_string())
    }
}

impl From<quick_xml::Error> for ImportError {
    fn from(err: quick_xml::Error) -> Self {
        ImportError::XmlInvalido(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ImportError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ImportError::XmlInvalido(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Json(err.to_string())
    }
}

/// Alias de Result para el módulo
pub type ImportResult<T> = Result<T, ImportError>;
