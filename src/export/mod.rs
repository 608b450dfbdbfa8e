// ==========================================
// Inventario Castaño - Exportación de registros
// ==========================================
// Cuerpos CSV/TXT con esquema fijo de 11 columnas,
// pensados para adjuntar en un correo
// ==========================================

use crate::domain::catalogo::Catalogo;
use crate::domain::registro::Registro;
use chrono::{DateTime, Datelike, Local, TimeZone};

/// Encabezado fijo del esquema de exportación
pub const ENCABEZADO: [&str; 11] = [
    "Factura",
    "Proceso",
    "codigo",
    "CodigoInt",
    "Ubicacion",
    "Descripcion",
    "Pata",
    "Bandeja",
    "Caja",
    "Unidad",
    "Total",
];

/// Solo los dígitos del texto
fn solo_digitos(texto: &str) -> String {
    texto.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Columna Factura: dígitos del WWDT guardado; si no se guardó, se
/// intenta rescatar de la descripción la primera corrida de 3 a 6 dígitos
fn factura_de(registro: &Registro) -> String {
    if let Some(wwdt) = &registro.wwdt {
        let digitos = solo_digitos(wwdt);
        if !digitos.is_empty() {
            return digitos;
        }
    }
    for linea in registro.descripcion.lines() {
        let digitos = solo_digitos(linea);
        if (3..=6).contains(&digitos.len()) {
            return digitos;
        }
    }
    String::new()
}

/// Columna Proceso: fecha de captura como d/M/yyyy (sin ceros a la
/// izquierda), en hora local; vacía si no hay fecha
fn proceso_de(registro: &Registro) -> String {
    registro
        .fecha_captura
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|fecha: DateTime<Local>| {
            format!("{}/{}/{}", fecha.day(), fecha.month(), fecha.year())
        })
        .unwrap_or_default()
}

/// EAN del registro; si no se guardó, se busca en el catálogo por el
/// código interno
fn ean_de(registro: &Registro, catalogo: &Catalogo) -> String {
    if let Some(ean) = &registro.ean {
        return ean.clone();
    }
    catalogo
        .lookup(&registro.codigo)
        .and_then(|fila| fila.codigo)
        .unwrap_or_default()
}

/// Si una línea de la descripción es el propio WWDT, se omite al exportar
fn descripcion_export(registro: &Registro) -> String {
    let wwdt = registro
        .wwdt
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    registro
        .descripcion
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .find(|l| *l != wwdt)
        .map(str::to_string)
        .unwrap_or_else(|| registro.descripcion.replace('\n', " "))
}

/// Una fila del esquema de 11 columnas
fn fila_export(registro: &Registro, catalogo: &Catalogo) -> [String; 11] {
    [
        factura_de(registro),
        proceso_de(registro),
        ean_de(registro, catalogo),
        registro.codigo.clone(),
        registro.ubicacion.clone(),
        descripcion_export(registro),
        registro.pata_izq.clone(),
        registro.bandejas_izq.clone(),
        registro.cajas_izq.clone(),
        registro.unidad_izq.clone(),
        registro.total.clone(),
    ]
}

/// Cuerpo CSV: comillas solo cuando el campo las necesita, comilla
/// interna duplicada
pub fn cuerpo_csv(registros: &[Registro], catalogo: &Catalogo) -> String {
    let mut escritor = csv::Writer::from_writer(Vec::new());
    // el esquema es fijo: estas escrituras no pueden fallar sobre un Vec
    escritor
        .write_record(ENCABEZADO)
        .expect("escritura CSV en memoria");
    for registro in registros {
        escritor
            .write_record(fila_export(registro, catalogo))
            .expect("escritura CSV en memoria");
    }
    let bytes = escritor.into_inner().expect("escritura CSV en memoria");
    let cuerpo = String::from_utf8(bytes).expect("CSV generado como UTF-8");
    cuerpo.trim_end_matches('\n').to_string()
}

/// Cuerpo TXT: sin comillas, comas de la descripción reemplazadas por
/// espacios, y coma final en cada línea de datos
pub fn cuerpo_txt(registros: &[Registro], catalogo: &Catalogo) -> String {
    let mut lineas = vec![ENCABEZADO.join(",")];
    for registro in registros {
        let mut fila = fila_export(registro, catalogo);
        fila[5] = fila[5].replace(',', " ");
        lineas.push(format!("{},", fila.join(",")));
    }
    lineas.join("\n")
}

/// Nombre de archivo para el adjunto: castano_registros_AAAAMMDD_HHMM
pub fn nombre_archivo(ahora: DateTime<Local>, como_csv: bool) -> String {
    let base = format!("castano_registros_{}", ahora.format("%Y%m%d_%H%M"));
    if como_csv {
        format!("{base}.csv")
    } else {
        format!("{base}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogo::ImportRow;

    fn registro_base() -> Registro {
        Registro {
            ubicacion: "B-12".to_string(),
            codigo: "EN203".to_string(),
            pata_izq: "2".to_string(),
            pata_der: "4".to_string(),
            bandejas_izq: "3".to_string(),
            bandejas_der: "6".to_string(),
            unidad_izq: "5".to_string(),
            unidad_der: "0".to_string(),
            cajas_izq: "0".to_string(),
            cajas_der: "24".to_string(),
            total: "71".to_string(),
            descripcion: "Rack A".to_string(),
            wwdt: Some("3542".to_string()),
            turno: Some(2),
            fecha_facturacion: None,
            fecha_captura: None,
            ean: Some("7801234567890".to_string()),
            timestamp: 0,
        }
    }

    #[test]
    fn test_factura_desde_wwdt() {
        assert_eq!(factura_de(&registro_base()), "3542");
    }

    #[test]
    fn test_factura_rescatada_de_la_descripcion() {
        let mut registro = registro_base();
        registro.wwdt = None;
        registro.descripcion = "Rack A\n4342".to_string();
        assert_eq!(factura_de(&registro), "4342");

        registro.descripcion = "sin numeros".to_string();
        assert_eq!(factura_de(&registro), "");
    }

    #[test]
    fn test_proceso_formato_dia_mes_anio() {
        let mut registro = registro_base();
        let fecha = Local.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap();
        registro.fecha_captura = Some(fecha.timestamp_millis());
        assert_eq!(proceso_de(&registro), "5/3/2025");

        registro.fecha_captura = None;
        assert_eq!(proceso_de(&registro), "");
    }

    #[test]
    fn test_descripcion_omite_linea_wwdt() {
        let mut registro = registro_base();
        registro.descripcion = "3542\nRack A".to_string();
        assert_eq!(descripcion_export(&registro), "Rack A");
    }

    #[test]
    fn test_ean_cae_al_catalogo() {
        let catalogo = Catalogo::new();
        catalogo.replace_all(vec![ImportRow {
            sku: "EN203".to_string(),
            descripcion: None,
            patas: None,
            bandejas: None,
            cajas: None,
            codigo: Some("7800000000001".to_string()),
        }]);

        let mut registro = registro_base();
        registro.ean = None;
        assert_eq!(ean_de(&registro, &catalogo), "7800000000001");
    }

    #[test]
    fn test_cuerpo_csv_esquema_y_comillas() {
        let catalogo = Catalogo::new();
        let mut registro = registro_base();
        registro.ubicacion = "pasillo 2, rack A".to_string();

        let cuerpo = cuerpo_csv(&[registro], &catalogo);
        let mut lineas = cuerpo.lines();
        assert_eq!(
            lineas.next().unwrap(),
            "Factura,Proceso,codigo,CodigoInt,Ubicacion,Descripcion,Pata,Bandeja,Caja,Unidad,Total"
        );
        let datos = lineas.next().unwrap();
        // la coma embebida fuerza comillas
        assert!(datos.contains("\"pasillo 2, rack A\""));
        assert_eq!(datos.split(',').count() - 1, 11); // 10 comas separadoras + 1 embebida
    }

    #[test]
    fn test_cuerpo_txt_sin_comillas_y_coma_final() {
        let catalogo = Catalogo::new();
        let mut registro = registro_base();
        registro.descripcion = "Rack A, nivel 2".to_string();

        let cuerpo = cuerpo_txt(&[registro], &catalogo);
        let datos = cuerpo.lines().nth(1).unwrap();
        assert!(datos.ends_with(','));
        assert!(!datos.contains('"'));
        // la coma de la descripción se volvió espacio
        assert!(datos.contains("Rack A  nivel 2"));
    }

    #[test]
    fn test_nombre_archivo() {
        let ahora = Local.with_ymd_and_hms(2025, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(
            nombre_archivo(ahora, true),
            "castano_registros_20250305_1430.csv"
        );
        assert_eq!(
            nombre_archivo(ahora, false),
            "castano_registros_20250305_1430.txt"
        );
    }
}
