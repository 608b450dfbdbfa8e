// ==========================================
// Inventario Castaño - Almacén de registros
// ==========================================
// Persistencia: un blob JSON (arreglo) en disco
// Orden: el más reciente primero; borrado solo masivo
// ==========================================

use crate::domain::registro::Registro;
use crate::importer::error::{ImportError, ImportResult};
use std::path::{Path, PathBuf};
use tracing::info;

// ==========================================
// RegistroStore - lista persistida de conteos
// ==========================================
pub struct RegistroStore {
    ruta: PathBuf,
}

impl RegistroStore {
    pub fn new<P: AsRef<Path>>(ruta: P) -> Self {
        Self {
            ruta: ruta.as_ref().to_path_buf(),
        }
    }

    /// Carga todos los registros; archivo ausente equivale a lista vacía
    pub fn load(&self) -> ImportResult<Vec<Registro>> {
        if !self.ruta.exists() {
            return Ok(Vec::new());
        }
        let contenido = std::fs::read_to_string(&self.ruta)?;
        serde_json::from_str(&contenido).map_err(|e| ImportError::Persistencia {
            ruta: self.ruta.display().to_string(),
            mensaje: e.to_string(),
        })
    }

    fn save(&self, registros: &[Registro]) -> ImportResult<()> {
        if let Some(directorio) = self.ruta.parent() {
            std::fs::create_dir_all(directorio)?;
        }
        let contenido = serde_json::to_string(registros)?;
        std::fs::write(&self.ruta, contenido)?;
        Ok(())
    }

    /// Agrega un registro al frente de la lista (último primero)
    pub fn add(&self, registro: Registro) -> ImportResult<()> {
        let mut registros = self.load()?;
        registros.insert(0, registro);
        self.save(&registros)
    }

    /// Elimina todos los registros (único borrado soportado)
    pub fn clear(&self) -> ImportResult<()> {
        info!(ruta = %self.ruta.display(), "registros eliminados");
        self.save(&[])
    }
}
