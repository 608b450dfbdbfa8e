// ==========================================
// Inventario Castaño - Lector de contenedor XLSX
// ==========================================
// Formato: XML-en-zip (SpreadsheetML)
// Estrategia: dos pasadas sobre los mismos bytes
//   1) tabla de strings compartidos (xl/sharedStrings.xml)
//   2) primera hoja bajo xl/worksheets/ como eventos XML
// El llamador entrega una fuente de bytes re-leíble.
// ==========================================

use crate::importer::error::ImportResult;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Cursor};
use zip::result::ZipError;
use zip::ZipArchive;

const RUTA_SHARED_STRINGS: &str = "xl/sharedStrings.xml";
const PREFIJO_HOJAS: &str = "xl/worksheets/";

/// Estados del escáner de celdas de la hoja
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Estado {
    FueraDeFila,
    EnFila,
    EnCelda,
    EnValor,
    EnTextoInline,
}

/// Tipo declarado de la celda (atributo `t`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TipoCelda {
    Directa,
    Compartida,
    Booleana,
    Inline,
}

/// Lee la primera hoja del contenedor como tabla rectangular.
///
/// - Sin hoja bajo `xl/worksheets/` → tabla vacía.
/// - Sin tabla de strings compartidos → las referencias resuelven a "".
/// - Las hojas posteriores a la primera se ignoran.
pub fn leer_tabla_xlsx(bytes: &[u8]) -> ImportResult<Vec<Vec<String>>> {
    let compartidas = leer_shared_strings(bytes)?;

    let mut archivo = ZipArchive::new(Cursor::new(bytes))?;

    // Primera hoja en el orden del directorio del zip
    let mut nombre_hoja: Option<String> = None;
    for i in 0..archivo.len() {
        let entrada = archivo.by_index(i)?;
        let nombre = entrada.name();
        if nombre.starts_with(PREFIJO_HOJAS) && nombre.ends_with(".xml") {
            nombre_hoja = Some(nombre.to_string());
            break;
        }
    }
    let Some(nombre) = nombre_hoja else {
        return Ok(Vec::new());
    };

    let hoja = archivo.by_name(&nombre)?;
    leer_hoja(BufReader::new(hoja), &compartidas)
}

/// Extrae los strings compartidos en orden de aparición.
///
/// Cada entrada `<si>` concatena sus tramos `<t>` (textos enriquecidos
/// incluidos). Si el archivo no trae la tabla, devuelve lista vacía.
fn leer_shared_strings(bytes: &[u8]) -> ImportResult<Vec<String>> {
    let mut archivo = ZipArchive::new(Cursor::new(bytes))?;
    let entrada = match archivo.by_name(RUTA_SHARED_STRINGS) {
        Ok(e) => e,
        Err(ZipError::FileNotFound) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut lector = Reader::from_reader(BufReader::new(entrada));
    let mut buf = Vec::new();
    let mut lista = Vec::new();
    let mut actual = String::new();
    let mut en_t = false;

    loop {
        match lector.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"si" => actual.clear(),
                b"t" => en_t = true,
                _ => {}
            },
            Event::Text(t) => {
                if en_t {
                    actual.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => en_t = false,
                b"si" => lista.push(std::mem::take(&mut actual)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(lista)
}

/// Decodifica las letras de columna de una referencia de celda
/// ("BC23" → 54). Base 26, 1-indexado y convertido a 0-indexado.
fn indice_columna(referencia: &str) -> Option<usize> {
    let mut col: usize = 0;
    let mut con_letras = false;
    for ch in referencia.chars() {
        if ch.is_ascii_alphabetic() {
            col = col * 26 + (ch.to_ascii_uppercase() as usize - 'A' as usize + 1);
            con_letras = true;
        } else {
            break;
        }
    }
    if con_letras {
        Some(col - 1)
    } else {
        None
    }
}

/// Escanea una hoja como secuencia de eventos XML con una máquina de
/// estados explícita y un único acumulador por celda.
fn leer_hoja<R: BufRead>(origen: R, compartidas: &[String]) -> ImportResult<Vec<Vec<String>>> {
    let mut lector = Reader::from_reader(origen);
    let mut buf = Vec::new();

    let mut tabla: Vec<Vec<String>> = Vec::new();
    let mut estado = Estado::FueraDeFila;
    let mut fila: BTreeMap<usize, String> = BTreeMap::new();
    let mut col_actual: Option<usize> = None;
    let mut tipo_actual = TipoCelda::Directa;
    let mut acumulador = String::new();

    loop {
        match lector.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => {
                    fila.clear();
                    estado = Estado::EnFila;
                }
                b"c" if estado == Estado::EnFila => {
                    col_actual = None;
                    tipo_actual = TipoCelda::Directa;
                    acumulador.clear();
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"r" => col_actual = indice_columna(&attr.unescape_value()?),
                            b"t" => {
                                tipo_actual = match attr.unescape_value()?.as_ref() {
                                    "s" => TipoCelda::Compartida,
                                    "b" => TipoCelda::Booleana,
                                    "inlineStr" => TipoCelda::Inline,
                                    _ => TipoCelda::Directa,
                                }
                            }
                            _ => {}
                        }
                    }
                    estado = Estado::EnCelda;
                }
                b"v" if estado == Estado::EnCelda => {
                    acumulador.clear();
                    estado = Estado::EnValor;
                }
                b"is" if estado == Estado::EnCelda => {
                    acumulador.clear();
                    estado = Estado::EnTextoInline;
                }
                _ => {}
            },
            Event::Text(t) => {
                if estado == Estado::EnValor || estado == Estado::EnTextoInline {
                    acumulador.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"v" if estado == Estado::EnValor => {
                    resolver_valor(&mut acumulador, tipo_actual, compartidas);
                    estado = Estado::EnCelda;
                }
                b"is" if estado == Estado::EnTextoInline => {
                    estado = Estado::EnCelda;
                }
                b"c" if estado == Estado::EnCelda => {
                    if let Some(col) = col_actual {
                        fila.insert(col, std::mem::take(&mut acumulador));
                    }
                    acumulador.clear();
                    estado = Estado::EnFila;
                }
                b"row" if estado == Estado::EnFila => {
                    if let Some(materializada) = materializar_fila(&fila) {
                        tabla.push(materializada);
                    }
                    estado = Estado::FueraDeFila;
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(tabla)
}

/// Resuelve el texto crudo de `<v>` según el tipo declarado.
///
/// Una referencia compartida fuera de rango o no numérica resuelve a ""
/// sin abortar el escaneo.
fn resolver_valor(acumulador: &mut String, tipo: TipoCelda, compartidas: &[String]) {
    match tipo {
        TipoCelda::Compartida => {
            let resuelto = acumulador
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|i| compartidas.get(i))
                .cloned()
                .unwrap_or_default();
            *acumulador = resuelto;
        }
        TipoCelda::Booleana => {
            *acumulador = match acumulador.as_str() {
                "1" => "TRUE".to_string(),
                "0" => "FALSE".to_string(),
                otro => otro.to_string(),
            };
        }
        TipoCelda::Directa | TipoCelda::Inline => {}
    }
}

/// Materializa la fila a ancho fijo: máximo índice visto + 1, con ""
/// en las columnas no declaradas. Las filas sin celdas se descartan.
fn materializar_fila(fila: &BTreeMap<usize, String>) -> Option<Vec<String>> {
    let max = *fila.keys().next_back()?;
    let mut salida = vec![String::new(); max + 1];
    for (col, valor) in fila {
        salida[*col] = valor.clone();
    }
    Some(salida)
}
