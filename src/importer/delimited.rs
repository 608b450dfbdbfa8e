// ==========================================
// Inventario Castaño - Lector de texto delimitado
// ==========================================
// Soporta: CSV / TXT con delimitador autodetectado
// Política: extracción tolerante, nunca falla por
// comillas mal cerradas
// ==========================================

use crate::importer::error::ImportResult;
use std::io::BufRead;

/// Delimitadores candidatos, en orden de prioridad
const DELIMITADORES: [char; 3] = [';', '\t', '|'];

/// Elige el delimitador mirando solo la línea de encabezado.
///
/// Prioridad: punto y coma, tabulador, barra vertical; coma por defecto.
/// Es una heurística: no garantiza el delimitador real del archivo.
pub fn detectar_delimitador(encabezado: &str) -> char {
    for d in DELIMITADORES {
        if encabezado.contains(d) {
            return d;
        }
    }
    ','
}

/// Divide una línea en campos respetando comillas dobles.
///
/// - Una comilla doble duplicada dentro de un campo citado es un escape.
/// - Un delimitador dentro de comillas no corta el campo.
/// - Una comilla sin cerrar se tolera: el campo llega hasta el fin de línea.
///
/// Nunca devuelve error; siempre produce al menos un campo.
pub fn dividir_linea(linea: &str, delimitador: char) -> Vec<String> {
    let mut campos = Vec::new();
    let mut actual = String::new();
    let mut en_comillas = false;

    let chars: Vec<char> = linea.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            if en_comillas && i + 1 < chars.len() && chars[i + 1] == '"' {
                actual.push('"');
                i += 1;
            } else {
                en_comillas = !en_comillas;
            }
        } else if c == delimitador && !en_comillas {
            campos.push(std::mem::take(&mut actual));
        } else {
            actual.push(c);
        }
        i += 1;
    }
    campos.push(actual);
    campos
}

/// Lee un archivo de texto delimitado como tabla completa (incluye encabezado).
///
/// El delimitador se detecta una sola vez, sobre la primera línea no vacía.
/// Se elimina el BOM UTF-8 del encabezado y los retornos de carro sueltos.
pub fn leer_tabla_texto<R: BufRead>(lector: R) -> ImportResult<Vec<Vec<String>>> {
    let mut lineas = Vec::new();
    for linea in lector.lines() {
        lineas.push(linea?.replace('\r', ""));
    }
    if lineas.is_empty() {
        return Ok(Vec::new());
    }

    // BOM solo puede venir al inicio del archivo
    lineas[0] = lineas[0].replace('\u{feff}', "");

    let delimitador = lineas
        .iter()
        .find(|l| !l.is_empty())
        .map(|l| detectar_delimitador(l))
        .unwrap_or(',');

    Ok(lineas
        .iter()
        .map(|l| dividir_linea(l, delimitador))
        .collect())
}
