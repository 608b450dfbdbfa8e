// ==========================================
// Inventario Castaño - Capa de importación
// ==========================================
// Responsabilidad: convertir archivos externos
// (XLSX/CSV/TXT) en el catálogo en memoria
// ==========================================

// Declaración de módulos
pub mod catalog_importer;
pub mod delimited;
pub mod error;
pub mod header_mapper;
pub mod row_projector;
pub mod xlsx;

// Reexportación de tipos centrales
pub use catalog_importer::{
    detectar_tipo, importar_archivo, importar_archivo_async, leer_tabla, TipoArchivo,
};
pub use delimited::{detectar_delimitador, dividir_linea, leer_tabla_texto};
pub use error::{ImportError, ImportResult};
pub use header_mapper::{campo_para_encabezado, mapear_encabezados, normalizar_encabezado, Campo};
pub use row_projector::proyectar_filas;
pub use xlsx::leer_tabla_xlsx;
