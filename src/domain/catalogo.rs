// ==========================================
// Inventario Castaño - Catálogo de productos
// ==========================================
// Índice en memoria con dos llaves alternas:
// código interno normalizado y EAN (solo dígitos).
// Se reemplaza completo en cada importación; los
// lectores ven siempre un snapshot consistente.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Umbral por defecto: una consulta con al menos esta cantidad de
/// dígitos se intenta primero como EAN
pub const UMBRAL_DIGITOS_EAN: usize = 8;

// ==========================================
// ImportRow - una entrada del catálogo
// ==========================================
// Inmutable una vez construida; el conjunto completo
// se reemplaza de forma atómica en cada importación
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    /// Código interno (EN203, EN280…); nunca en blanco
    pub sku: String,
    pub descripcion: Option<String>,
    pub patas: Option<String>,
    pub bandejas: Option<String>,
    pub cajas: Option<String>,
    /// EAN / código de barras
    pub codigo: Option<String>,
}

/// Snapshot inmutable de los dos índices
#[derive(Debug, Default)]
struct Indice {
    por_sku: HashMap<String, ImportRow>,
    por_ean: HashMap<String, ImportRow>,
}

// ==========================================
// Catalogo - estado compartido reemplazable
// ==========================================
// El snapshot se publica detrás de un Arc intercambiado
// bajo RwLock: los lectores ven el índice viejo completo
// o el nuevo completo, nunca una mezcla
#[derive(Debug)]
pub struct Catalogo {
    indice: RwLock<Arc<Indice>>,
    umbral_digitos_ean: usize,
}

impl Default for Catalogo {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalogo {
    /// Catálogo vacío con el umbral EAN por defecto
    pub fn new() -> Self {
        Self::con_umbral(UMBRAL_DIGITOS_EAN)
    }

    /// Catálogo vacío con umbral EAN configurable
    ///
    /// El umbral de 8 dígitos es una heurística sin justificación
    /// documentada; se mantiene configurable porque los formatos reales
    /// de EAN/SKU pueden cambiar.
    pub fn con_umbral(umbral_digitos_ean: usize) -> Self {
        Self {
            indice: RwLock::new(Arc::new(Indice::default())),
            umbral_digitos_ean,
        }
    }

    fn normalizar_sku(s: &str) -> String {
        s.trim().to_uppercase()
    }

    fn solo_digitos(s: &str) -> String {
        s.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Descarta el índice anterior y construye uno nuevo con las filas dadas.
    ///
    /// Ante códigos internos duplicados gana la última fila (comportamiento
    /// heredado; la pérdida se registra en el log a nivel debug). Las filas
    /// con sku en blanco no entran al índice por código.
    pub fn replace_all(&self, filas: Vec<ImportRow>) {
        let mut por_sku = HashMap::with_capacity(filas.len());
        let mut por_ean = HashMap::new();

        for fila in filas {
            if !fila.sku.trim().is_empty() {
                let llave = Self::normalizar_sku(&fila.sku);
                if let Some(anterior) = por_sku.insert(llave.clone(), fila.clone()) {
                    debug!(sku = %llave, sku_anterior = %anterior.sku, "sku duplicado: gana la última fila");
                }
            }
            if let Some(codigo) = &fila.codigo {
                let digitos = Self::solo_digitos(codigo);
                if !digitos.is_empty() {
                    por_ean.insert(digitos, fila);
                }
            }
        }

        let nuevo = Arc::new(Indice { por_sku, por_ean });
        // el panic de un lock envenenado solo puede venir de otro panic previo
        *self.indice.write().expect("lock del catálogo envenenado") = nuevo;
    }

    /// Busca por SKU (con letras) o por EAN (solo dígitos).
    ///
    /// Si la consulta trae al menos `umbral` dígitos se intenta primero el
    /// índice EAN; si falla (o no alcanza el umbral) se cae al índice por
    /// código interno. `None` es un resultado normal, no un error.
    pub fn lookup(&self, consulta: &str) -> Option<ImportRow> {
        let indice = self
            .indice
            .read()
            .expect("lock del catálogo envenenado")
            .clone();

        let crudo = consulta.trim();
        let digitos = Self::solo_digitos(crudo);
        if digitos.len() >= self.umbral_digitos_ean {
            if let Some(fila) = indice.por_ean.get(&digitos) {
                return Some(fila.clone());
            }
        }
        indice.por_sku.get(&Self::normalizar_sku(crudo)).cloned()
    }

    /// Cantidad de ítems indexados (máximo de ambos índices, como la
    /// versión original)
    pub fn len(&self) -> usize {
        let indice = self.indice.read().expect("lock del catálogo envenenado");
        indice.por_sku.len().max(indice.por_ean.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
