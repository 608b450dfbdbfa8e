// ==========================================
// Inventario Castaño - Importador de catálogo
// ==========================================
// Flujo: detectar tipo → leer tabla → proyectar filas
//        → reemplazo atómico del índice
// La importación corre en un worker de bloqueo para no
// congelar el hilo interactivo; el índice anterior queda
// intacto si algo falla.
// ==========================================

use crate::domain::catalogo::Catalogo;
use crate::importer::delimited::leer_tabla_texto;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::row_projector::proyectar_filas;
use crate::importer::xlsx::leer_tabla_xlsx;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};

// ==========================================
// TipoArchivo - clase de archivo de entrada
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoArchivo {
    /// Contenedor XML-en-zip (SpreadsheetML)
    Xlsx,
    /// Binario heredado 97-2003: se trata como cero filas, no como error
    Xls,
    /// CSV/TXT delimitado (también el caso por defecto)
    Texto,
}

/// Clasifica por extensión del nombre; si no hay extensión usa el
/// content-type declarado. Lo desconocido cae a texto delimitado.
pub fn detectar_tipo(nombre: &str, tipo_contenido: Option<&str>) -> TipoArchivo {
    let extension = nombre
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" => return TipoArchivo::Xlsx,
        "xls" => return TipoArchivo::Xls,
        "csv" | "txt" => return TipoArchivo::Texto,
        "" => {}
        _ => return TipoArchivo::Texto,
    }

    match tipo_contenido {
        Some(mime) if mime.to_lowercase().contains("spreadsheetml") => TipoArchivo::Xlsx,
        Some(mime) if mime.to_lowercase().contains("ms-excel") => TipoArchivo::Xls,
        _ => TipoArchivo::Texto,
    }
}

/// Lee el archivo como tabla rectangular según su tipo.
///
/// Para XLSX se carga el archivo completo a memoria: el contenedor se
/// recorre dos veces (strings compartidos y luego la hoja).
pub fn leer_tabla(ruta: &Path) -> ImportResult<Vec<Vec<String>>> {
    if !ruta.exists() {
        return Err(ImportError::ArchivoNoEncontrado(
            ruta.display().to_string(),
        ));
    }

    let nombre = ruta
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match detectar_tipo(&nombre, None) {
        TipoArchivo::Xlsx => {
            let bytes = std::fs::read(ruta)?;
            leer_tabla_xlsx(&bytes)
        }
        TipoArchivo::Xls => {
            // decisión de producto heredada: sin soporte, sin error
            warn!(ruta = %ruta.display(), "formato XLS heredado: se importa como vacío");
            Ok(Vec::new())
        }
        TipoArchivo::Texto => {
            let archivo = std::fs::File::open(ruta)?;
            leer_tabla_texto(BufReader::new(archivo))
        }
    }
}

/// Importa un archivo al catálogo y devuelve la cantidad de filas.
///
/// El reemplazo del índice ocurre recién con la tabla completa en mano:
/// cualquier error deja el catálogo anterior intacto.
#[instrument(skip(catalogo))]
pub fn importar_archivo(catalogo: &Catalogo, ruta: &Path) -> ImportResult<usize> {
    let tabla = leer_tabla(ruta)?;
    let filas = proyectar_filas(&tabla);
    let cantidad = filas.len();

    catalogo.replace_all(filas);
    info!(ruta = %ruta.display(), filas = cantidad, "catálogo reemplazado");
    Ok(cantidad)
}

/// Variante asíncrona: corre la importación en un worker de bloqueo de
/// tokio y entrega el resultado al hilo interactivo al completarse.
///
/// No hay cancelación de una importación en curso: o completa y
/// reemplaza el índice, o falla y el índice previo sigue vigente.
pub async fn importar_archivo_async(
    catalogo: Arc<Catalogo>,
    ruta: PathBuf,
) -> ImportResult<usize> {
    tokio::task::spawn_blocking(move || importar_archivo(&catalogo, &ruta))
        .await
        .map_err(|e| ImportError::Otro(anyhow::anyhow!("worker de importación caído: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detectar_tipo_por_extension() {
        assert_eq!(detectar_tipo("catalogo.XLSX", None), TipoArchivo::Xlsx);
        assert_eq!(detectar_tipo("viejo.xls", None), TipoArchivo::Xls);
        assert_eq!(detectar_tipo("datos.csv", None), TipoArchivo::Texto);
        assert_eq!(detectar_tipo("datos.txt", None), TipoArchivo::Texto);
        assert_eq!(detectar_tipo("raro.dat", None), TipoArchivo::Texto);
    }

    #[test]
    fn test_detectar_tipo_por_content_type() {
        assert_eq!(
            detectar_tipo(
                "descarga",
                Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            ),
            TipoArchivo::Xlsx
        );
        assert_eq!(
            detectar_tipo("descarga", Some("application/vnd.ms-excel")),
            TipoArchivo::Xls
        );
        assert_eq!(detectar_tipo("descarga", Some("text/plain")), TipoArchivo::Texto);
        assert_eq!(detectar_tipo("descarga", None), TipoArchivo::Texto);
    }

    #[test]
    fn test_archivo_inexistente_es_error() {
        let resultado = leer_tabla(Path::new("no_existe.csv"));
        assert!(matches!(
            resultado,
            Err(ImportError::ArchivoNoEncontrado(_))
        ));
    }

    #[test]
    fn test_importar_csv_basico() {
        let mut archivo = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(archivo, "sku,codigo,descripcion").unwrap();
        writeln!(archivo, "EN203,7801234567890,Rack A").unwrap();
        writeln!(archivo, ",7809999999999,Rack B").unwrap();
        writeln!(archivo, ",,").unwrap();

        let catalogo = Catalogo::new();
        let cantidad = importar_archivo(&catalogo, archivo.path()).unwrap();

        // la fila sin identificadores no cuenta
        assert_eq!(cantidad, 2);
        assert_eq!(catalogo.lookup("en203").unwrap().sku, "EN203");
        assert!(catalogo.lookup("7809999999999").is_some());
    }

    #[test]
    fn test_error_deja_el_catalogo_intacto() {
        let catalogo = Catalogo::new();
        let mut archivo = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(archivo, "sku\nEN203").unwrap();
        importar_archivo(&catalogo, archivo.path()).unwrap();

        let resultado = importar_archivo(&catalogo, Path::new("no_existe.csv"));
        assert!(resultado.is_err());
        assert!(catalogo.lookup("EN203").is_some());
    }

    #[test]
    fn test_xls_importa_cero_filas_sin_error() {
        let mut archivo = tempfile::Builder::new()
            .suffix(".xls")
            .tempfile()
            .unwrap();
        archivo.write_all(b"\xd0\xcf\x11\xe0basura").unwrap();

        let catalogo = Catalogo::new();
        let cantidad = importar_archivo(&catalogo, archivo.path()).unwrap();
        assert_eq!(cantidad, 0);
    }

    #[tokio::test]
    async fn test_importacion_asincrona() {
        let mut archivo = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(archivo, "sku\nEN203").unwrap();

        let catalogo = Arc::new(Catalogo::new());
        let cantidad = importar_archivo_async(catalogo.clone(), archivo.path().to_path_buf())
            .await
            .unwrap();

        assert_eq!(cantidad, 1);
        assert!(catalogo.lookup("EN203").is_some());
    }
}
