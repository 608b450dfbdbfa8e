// ==========================================
// Inventario Castaño - Total derivado
// ==========================================
// total = patas·(bandejas/pata)·(unidades/bandeja)
//       + extra (cajas si hay, si no bandejas sueltas)
//       + unidades sueltas
// ==========================================

/// Entero tolerante: texto no numérico cuenta como 0
pub fn a_entero_seguro(texto: &str) -> i64 {
    texto.trim().parse::<i64>().unwrap_or(0)
}

/// Calcula el total de unidades de un conteo.
///
/// Los lados derechos vienen del catálogo: `pata_der` = bandejas por
/// pata, `bandejas_der` = unidades por bandeja, `cajas_der` = unidades
/// por caja. Cajas y bandejas sueltas son excluyentes: con cajas > 0 el
/// extra sale de las cajas.
#[allow(clippy::too_many_arguments)]
pub fn calc_total(
    pata_izq: &str,
    pata_der: &str,
    bandejas_izq: &str,
    bandejas_der: &str,
    unidad_izq: &str,
    cajas_izq: &str,
    cajas_der: &str,
) -> i64 {
    let p_i = a_entero_seguro(pata_izq);
    let p_d = a_entero_seguro(pata_der);
    let b_i = a_entero_seguro(bandejas_izq);
    let b_d = a_entero_seguro(bandejas_der);
    let u_i = a_entero_seguro(unidad_izq);
    let c_i = a_entero_seguro(cajas_izq);
    let c_d = a_entero_seguro(cajas_der);

    let base_por_patas = p_i * p_d * b_d;
    let extra = if c_i > 0 { c_i * c_d } else { b_i * b_d };
    base_por_patas + extra + u_i
}
