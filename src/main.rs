// ==========================================
// Inventario Castaño - Entrada de línea de comandos
// ==========================================
// Flujos: importar catálogo, buscar producto,
// exportar registros guardados
// ==========================================

use castano_inventario::config::AppConfig;
use castano_inventario::export;
use castano_inventario::importer::importar_archivo_async;
use castano_inventario::store::{ImportStore, PreferenciasImport, RegistroStore};
use castano_inventario::{logging, APP_NAME, VERSION};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

fn uso() -> ! {
    eprintln!("Uso:");
    eprintln!("  castano-inventario importar <archivo>");
    eprintln!("  castano-inventario buscar <consulta>");
    eprintln!("  castano-inventario exportar <csv|txt>");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    info!("{} v{}", APP_NAME, VERSION);

    let config = AppConfig::cargar(&AppConfig::ruta_config());
    let argumentos: Vec<String> = std::env::args().skip(1).collect();

    match argumentos.first().map(String::as_str) {
        Some("importar") => {
            let Some(archivo) = argumentos.get(1) else { uso() };
            let catalogo = Arc::new(config.catalogo());
            let cantidad =
                importar_archivo_async(catalogo.clone(), PathBuf::from(archivo)).await?;

            let prefs = ImportStore::new(config.ruta_preferencias());
            prefs.guardar(&PreferenciasImport {
                cantidad,
                ultimo_archivo: Some(archivo.clone()),
            })?;

            println!("Catálogo cargado: {cantidad} ítems");
        }

        Some("buscar") => {
            let Some(consulta) = argumentos.get(1) else { uso() };
            let catalogo = Arc::new(config.catalogo());

            // recarga del último catálogo importado; si falla se sigue
            // con el catálogo vacío y se avisa
            let prefs = ImportStore::new(config.ruta_preferencias()).cargar();
            if let Some(ultimo) = prefs.ultimo_archivo {
                match importar_archivo_async(catalogo.clone(), PathBuf::from(&ultimo)).await {
                    Ok(cantidad) => info!(archivo = %ultimo, cantidad, "catálogo recargado"),
                    Err(e) => warn!(archivo = %ultimo, error = %e, "no se pudo recargar el catálogo"),
                }
            }

            match catalogo.lookup(consulta) {
                Some(fila) => {
                    println!("{}", fila.sku);
                    if let Some(descripcion) = &fila.descripcion {
                        println!("  {descripcion}");
                    }
                    if let Some(ean) = &fila.codigo {
                        println!("  EAN: {ean}");
                    }
                }
                None => println!("Producto no encontrado"),
            }
        }

        Some("exportar") => {
            let como_csv = match argumentos.get(1).map(String::as_str) {
                Some("csv") => true,
                Some("txt") => false,
                _ => uso(),
            };

            let registros = RegistroStore::new(config.ruta_registros()).load()?;
            let catalogo = config.catalogo();
            let cuerpo = if como_csv {
                export::cuerpo_csv(&registros, &catalogo)
            } else {
                export::cuerpo_txt(&registros, &catalogo)
            };
            println!("{cuerpo}");
        }

        _ => uso(),
    }

    Ok(())
}
