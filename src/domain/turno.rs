// ==========================================
// Inventario Castaño - Turnos y código C. Día
// ==========================================
// WWDT: semana ISO (2 dígitos) + día ISO + turno
// ==========================================

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Turno según la hora: 2 = [07:00, 15:00), 3 = [15:00, 22:00), 1 = resto
pub fn turno_automatico(hora: NaiveTime) -> u8 {
    let minutos = hora.hour() * 60 + hora.minute();
    match minutos {
        m if (7 * 60..15 * 60).contains(&m) => 2,
        m if (15 * 60..22 * 60).contains(&m) => 3,
        _ => 1,
    }
}

/// Código WWDT con semana ISO (lunes = 1, primera semana con ≥ 4 días).
///
/// Formato: `%02d%d%d` → semana, día de la semana, turno.
pub fn codigo_semana_dia_turno(fecha: NaiveDate, turno: u8) -> String {
    let semana = fecha.iso_week().week();
    let dia = fecha.weekday().number_from_monday();
    format!("{:02}{}{}", semana, dia, turno)
}
