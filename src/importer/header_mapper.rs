// ==========================================
// Inventario Castaño - Mapeo de encabezados
// ==========================================
// Encabezado crudo → campo canónico del catálogo
// Coincidencia exacta tras normalizar (sin fuzzy)
// ==========================================

use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Campos canónicos de una fila del catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Campo {
    /// Código interno de bodega (EN203, EN280…)
    Sku,
    /// Código de barras / EAN (solo dígitos)
    Codigo,
    Descripcion,
    Patas,
    Bandejas,
    Cajas,
}

/// Normaliza un encabezado: minúsculas, descomposición NFD con marcas
/// diacríticas eliminadas, y sin espacios, guiones ni guiones bajos.
pub fn normalizar_encabezado(encabezado: &str) -> String {
    encabezado
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect()
}

/// Resuelve un encabezado contra la tabla fija de sinónimos.
///
/// Los encabezados sin sinónimo se ignoran (devuelve None); su columna
/// sigue ocupando un índice en la tabla.
pub fn campo_para_encabezado(encabezado: &str) -> Option<Campo> {
    match normalizar_encabezado(encabezado).as_str() {
        // Interno / SKU ("codigo_int" y "codigo int" colapsan a "codigoint")
        "sku" | "codigoint" | "codint" | "interno" | "codigoitem" => Some(Campo::Sku),
        // EAN / código de barras
        "codigo" | "ean" | "codigoean" | "barcode" | "barra" | "codigobarra" | "gtin" => {
            Some(Campo::Codigo)
        }
        "descripcion" | "desc" => Some(Campo::Descripcion),
        "patas" | "pata" => Some(Campo::Patas),
        "bandejas" | "bandeja" => Some(Campo::Bandejas),
        "cajas" | "caja" => Some(Campo::Cajas),
        _ => None,
    }
}

/// Mapea la fila de encabezados (fila 0) a índices de columna por campo.
///
/// Ante encabezados duplicados gana la primera columna.
pub fn mapear_encabezados(fila: &[String]) -> HashMap<Campo, usize> {
    let mut mapa = HashMap::new();
    for (i, encabezado) in fila.iter().enumerate() {
        if let Some(campo) = campo_para_encabezado(encabezado) {
            mapa.entry(campo).or_insert(i);
        }
    }
    mapa
}
