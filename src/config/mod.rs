// ==========================================
// Inventario Castaño - Configuración
// ==========================================
// Responsabilidad: parámetros de la aplicación y
// ubicación de los archivos de datos
// Almacenamiento: JSON en el directorio de datos
// ==========================================

use crate::domain::catalogo::{Catalogo, UMBRAL_DIGITOS_EAN};
use crate::importer::error::ImportResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Nombre del directorio de la aplicación bajo el directorio de datos
/// del sistema
const DIRECTORIO_APP: &str = "castano-inventario";

fn umbral_por_defecto() -> usize {
    UMBRAL_DIGITOS_EAN
}

// ==========================================
// AppConfig - configuración de la aplicación
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cantidad mínima de dígitos para tratar una consulta como EAN
    #[serde(default = "umbral_por_defecto")]
    pub umbral_digitos_ean: usize,

    /// Directorio de datos; si falta se usa el del sistema
    #[serde(default)]
    pub directorio_datos: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            umbral_digitos_ean: UMBRAL_DIGITOS_EAN,
            directorio_datos: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde un archivo JSON; ausencia o contenido
    /// dañado caen a los valores por defecto sin abortar el arranque
    pub fn cargar(ruta: &Path) -> Self {
        match std::fs::read_to_string(ruta) {
            Ok(contenido) => serde_json::from_str(&contenido).unwrap_or_else(|e| {
                warn!(ruta = %ruta.display(), error = %e, "configuración dañada: valores por defecto");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn guardar(&self, ruta: &Path) -> ImportResult<()> {
        if let Some(directorio) = ruta.parent() {
            std::fs::create_dir_all(directorio)?;
        }
        std::fs::write(ruta, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Directorio efectivo de datos de la aplicación
    pub fn directorio_datos(&self) -> PathBuf {
        self.directorio_datos.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DIRECTORIO_APP)
        })
    }

    /// Ruta del blob de registros
    pub fn ruta_registros(&self) -> PathBuf {
        self.directorio_datos().join("registros.json")
    }

    /// Ruta de las preferencias de importación
    pub fn ruta_preferencias(&self) -> PathBuf {
        self.directorio_datos().join("import.json")
    }

    /// Ruta por defecto del archivo de configuración
    pub fn ruta_config() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DIRECTORIO_APP)
            .join("config.json")
    }

    /// Catálogo vacío configurado con el umbral EAN vigente
    pub fn catalogo(&self) -> Catalogo {
        Catalogo::con_umbral(self.umbral_digitos_ean)
    }
}
