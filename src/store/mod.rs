// ==========================================
// Inventario Castaño - Almacenamiento local
// ==========================================
// Responsabilidad: persistencia en el dispositivo
// (blob JSON de registros y preferencias llave-valor)
// ==========================================

pub mod import_store;
pub mod registro_store;

pub use import_store::{ImportStore, PreferenciasImport};
pub use registro_store::RegistroStore;
