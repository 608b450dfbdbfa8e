// ==========================================
// Inventario Castaño - Capa de dominio
// ==========================================
// Responsabilidad: entidades y reglas de negocio
// Sin acceso a archivos ni a almacenamiento
// ==========================================

pub mod catalogo;
pub mod registro;
pub mod total;
pub mod turno;

// Reexportación de tipos centrales
pub use catalogo::{Catalogo, ImportRow, UMBRAL_DIGITOS_EAN};
pub use registro::Registro;
pub use total::{a_entero_seguro, calc_total};
pub use turno::{codigo_semana_dia_turno, turno_automatico};
