// ==========================================
// Inventario Castaño - Biblioteca principal
// ==========================================
// Toma de inventario de bodega: catálogo de productos
// (XLSX/CSV/TXT), búsqueda por código interno o EAN,
// registro de conteos y exportación CSV/TXT.
// ==========================================

// ==========================================
// Declaración de módulos
// ==========================================

// Capa de dominio - entidades y reglas
pub mod domain;

// Capa de importación - catálogo desde archivos
pub mod importer;

// Almacenamiento local - registros y preferencias
pub mod store;

// Exportación - cuerpos CSV/TXT para correo
pub mod export;

// Configuración de la aplicación
pub mod config;

// Sistema de logs
pub mod logging;

// ==========================================
// Reexportación de tipos centrales
// ==========================================

// Dominio
pub use domain::catalogo::{Catalogo, ImportRow};
pub use domain::registro::Registro;
pub use domain::total::calc_total;
pub use domain::turno::{codigo_semana_dia_turno, turno_automatico};

// Importación
pub use importer::catalog_importer::{importar_archivo, importar_archivo_async, TipoArchivo};
pub use importer::error::{ImportError, ImportResult};

// Almacenamiento
pub use store::import_store::ImportStore;
pub use store::registro_store::RegistroStore;

// Configuración
pub use config::AppConfig;

// ==========================================
// Constantes del sistema
// ==========================================

// Versión del crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nombre de la aplicación
pub const APP_NAME: &str = "Inventario Castaño";
