// ==========================================
// Inventario Castaño - Proyección de filas
// ==========================================
// Tabla rectangular + mapa de encabezados → ImportRow
// Filas sin identificador se descartan en silencio
// ==========================================

use crate::domain::catalogo::ImportRow;
use crate::importer::header_mapper::{mapear_encabezados, Campo};
use std::collections::HashMap;
use tracing::debug;

/// Valor de la columna mapeada, recortado; "" si la columna no existe
fn columna(fila: &[String], mapa: &HashMap<Campo, usize>, campo: Campo) -> String {
    mapa.get(&campo)
        .and_then(|i| fila.get(*i))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Blanco tras recorte ⇒ None ("campo ausente", no "presente pero vacío")
fn opcional(valor: String) -> Option<String> {
    if valor.is_empty() {
        None
    } else {
        Some(valor)
    }
}

/// Proyecta la tabla (fila 0 = encabezados) a entradas del catálogo.
///
/// Una fila produce entrada solo si el código interno o el EAN vienen
/// no vacíos tras recortar; si el interno falta, toma el valor del EAN.
pub fn proyectar_filas(tabla: &[Vec<String>]) -> Vec<ImportRow> {
    let Some(encabezados) = tabla.first() else {
        return Vec::new();
    };
    let mapa = mapear_encabezados(encabezados);

    let mut salida = Vec::with_capacity(tabla.len().saturating_sub(1));
    let mut descartadas = 0usize;

    for fila in &tabla[1..] {
        let sku_crudo = columna(fila, &mapa, Campo::Sku);
        let ean_crudo = columna(fila, &mapa, Campo::Codigo);
        let sku = if sku_crudo.is_empty() {
            ean_crudo.clone()
        } else {
            sku_crudo
        };
        if sku.is_empty() {
            descartadas += 1;
            continue;
        }

        salida.push(ImportRow {
            sku,
            descripcion: opcional(columna(fila, &mapa, Campo::Descripcion)),
            patas: opcional(columna(fila, &mapa, Campo::Patas)),
            bandejas: opcional(columna(fila, &mapa, Campo::Bandejas)),
            cajas: opcional(columna(fila, &mapa, Campo::Cajas)),
            codigo: opcional(ean_crudo),
        });
    }

    if descartadas > 0 {
        debug!(descartadas, "filas sin identificador descartadas");
    }
    salida
}
