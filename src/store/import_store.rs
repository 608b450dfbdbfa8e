// ==========================================
// Inventario Castaño - Preferencias de importación
// ==========================================
// Recuerda el último archivo importado y su cantidad
// de ítems: se lee al arrancar y se escribe tras cada
// importación exitosa
// ==========================================

use crate::importer::error::ImportResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Contenido persistido de las preferencias
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenciasImport {
    #[serde(default)]
    pub cantidad: usize,
    #[serde(default)]
    pub ultimo_archivo: Option<String>,
}

// ==========================================
// ImportStore - llave-valor mínimo en JSON
// ==========================================
pub struct ImportStore {
    ruta: PathBuf,
}

impl ImportStore {
    pub fn new<P: AsRef<Path>>(ruta: P) -> Self {
        Self {
            ruta: ruta.as_ref().to_path_buf(),
        }
    }

    /// Lee las preferencias; cualquier fallo de lectura se traga y se
    /// parte de valores por defecto (la recarga del catálogo se intenta
    /// igual y reporta su propio error si corresponde)
    pub fn cargar(&self) -> PreferenciasImport {
        match std::fs::read_to_string(&self.ruta) {
            Ok(contenido) => serde_json::from_str(&contenido).unwrap_or_else(|e| {
                warn!(ruta = %self.ruta.display(), error = %e, "preferencias dañadas: se reinician");
                PreferenciasImport::default()
            }),
            Err(_) => PreferenciasImport::default(),
        }
    }

    /// Escribe las preferencias tras una importación exitosa
    pub fn guardar(&self, preferencias: &PreferenciasImport) -> ImportResult<()> {
        if let Some(directorio) = self.ruta.parent() {
            std::fs::create_dir_all(directorio)?;
        }
        std::fs::write(&self.ruta, serde_json::to_string(preferencias)?)?;
        Ok(())
    }
}
