// ==========================================
// Inventario Castaño - Registro de conteo
// ==========================================
// Una entrada física de inventario: pares
// izquierda/derecha por medida, total derivado y
// etiqueta opcional de semana-día-turno (WWDT).
// Inmutable tras su creación.
// ==========================================

use chrono::Utc;
use serde::{Deserialize, Serialize};

// ==========================================
// Registro - conteo confirmado por el operador
// ==========================================
// Los campos de medida son texto tal como se digitan;
// el total ya viene calculado al confirmar el formulario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registro {
    // ===== Identificación =====
    pub ubicacion: String,
    /// Código interno (EN203…)
    pub codigo: String,

    // ===== Medidas izquierda (digitadas) / derecha (del catálogo) =====
    pub pata_izq: String,
    pub pata_der: String,
    pub bandejas_izq: String,
    pub bandejas_der: String,
    pub unidad_izq: String,
    pub unidad_der: String,
    pub cajas_izq: String,
    pub cajas_der: String,

    // ===== Derivados =====
    pub total: String,
    pub descripcion: String,

    // ===== Etiqueta C. Día (opcional) =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wwdt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turno: Option<u8>,
    /// Fecha de facturación, epoch en milisegundos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_facturacion: Option<i64>,
    /// Fecha de captura, epoch en milisegundos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_captura: Option<i64>,

    // ===== EAN (opcional, del catálogo) =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,

    /// Momento de creación, epoch en milisegundos
    #[serde(default)]
    pub timestamp: i64,
}

impl Registro {
    /// Timestamp de "ahora" en milisegundos, para construir registros
    pub fn ahora_ms() -> i64 {
        Utc::now().timestamp_millis()
    }
}
