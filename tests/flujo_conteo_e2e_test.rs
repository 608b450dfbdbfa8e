// ==========================================
// Flujo completo de conteo - test de extremo a extremo
// ==========================================
// Importa el catálogo, completa un conteo con los datos
// del producto, lo persiste y lo exporta
// ==========================================

use castano_inventario::config::AppConfig;
use castano_inventario::domain::registro::Registro;
use castano_inventario::domain::total::calc_total;
use castano_inventario::domain::turno::{codigo_semana_dia_turno, turno_automatico};
use castano_inventario::export;
use castano_inventario::importer::importar_archivo;
use castano_inventario::logging;
use castano_inventario::store::{ImportStore, PreferenciasImport, RegistroStore};
use chrono::{NaiveDate, NaiveTime, TimeZone};
use std::path::Path;

const FIXTURE_CSV: &str = "tests/fixtures/catalogo_productos.csv";

#[test]
fn test_flujo_completo_de_conteo() {
    logging::init_test();

    let directorio = tempfile::tempdir().unwrap();
    let config = AppConfig {
        umbral_digitos_ean: 8,
        directorio_datos: Some(directorio.path().to_path_buf()),
    };

    // --- importación del catálogo ---
    let catalogo = config.catalogo();
    let cantidad = importar_archivo(&catalogo, Path::new(FIXTURE_CSV)).unwrap();

    let prefs_store = ImportStore::new(config.ruta_preferencias());
    prefs_store
        .guardar(&PreferenciasImport {
            cantidad,
            ultimo_archivo: Some(FIXTURE_CSV.to_string()),
        })
        .unwrap();
    assert_eq!(prefs_store.cargar().cantidad, 3);

    // --- búsqueda y llenado del formulario ---
    let producto = catalogo.lookup("7801234567890").unwrap();
    assert_eq!(producto.sku, "EN203");

    let pata_der = producto.patas.clone().unwrap_or_else(|| "0".to_string());
    let bandejas_der = producto.bandejas.clone().unwrap_or_else(|| "0".to_string());
    let cajas_der = producto.cajas.clone().unwrap_or_else(|| "0".to_string());

    // 2 patas × 4 bandejas × 6 u/bandeja + 1 caja × 24 + 3 sueltas
    let total = calc_total("2", &pata_der, "0", &bandejas_der, "3", "1", &cajas_der);
    assert_eq!(total, 75);

    // --- etiqueta C. Día ---
    let hora = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    let turno = turno_automatico(hora);
    assert_eq!(turno, 2);
    let fecha = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
    let wwdt = codigo_semana_dia_turno(fecha, turno);
    assert_eq!(wwdt, "0342");

    let captura = chrono::Local
        .with_ymd_and_hms(2025, 1, 16, 12, 0, 0)
        .unwrap()
        .timestamp_millis();

    let registro = Registro {
        ubicacion: "B-12".to_string(),
        codigo: producto.sku.clone(),
        pata_izq: "2".to_string(),
        pata_der,
        bandejas_izq: "0".to_string(),
        bandejas_der,
        unidad_izq: "3".to_string(),
        unidad_der: "0".to_string(),
        cajas_izq: "1".to_string(),
        cajas_der,
        total: total.to_string(),
        descripcion: producto.descripcion.clone().unwrap_or_default(),
        wwdt: Some(wwdt),
        turno: Some(turno),
        fecha_facturacion: Some(captura),
        fecha_captura: Some(captura),
        ean: producto.codigo.clone(),
        timestamp: Registro::ahora_ms(),
    };

    // --- persistencia ---
    let almacen = RegistroStore::new(config.ruta_registros());
    almacen.add(registro).unwrap();
    let guardados = almacen.load().unwrap();
    assert_eq!(guardados.len(), 1);
    assert_eq!(guardados[0].codigo, "EN203");

    // --- exportación ---
    let csv = export::cuerpo_csv(&guardados, &catalogo);
    let lineas: Vec<&str> = csv.lines().collect();
    assert_eq!(lineas.len(), 2);
    assert!(lineas[0].starts_with("Factura,Proceso,codigo,CodigoInt"));
    assert!(lineas[1].starts_with("0342,16/1/2025,7801234567890,EN203,B-12"));

    let txt = export::cuerpo_txt(&guardados, &catalogo);
    let datos = txt.lines().nth(1).unwrap();
    assert!(datos.ends_with(','));
    // la coma de la descripción importada se volvió espacio
    assert!(datos.contains("Rack A  pasillo 2"));

    // --- borrado masivo ---
    almacen.clear().unwrap();
    assert!(almacen.load().unwrap().is_empty());
}
