//! Configuration menu: working hours and month generation.

use chrono::{Datelike, Local};
use consultorio_core::Store;

use super::describe;
use crate::ui;

pub fn menu(store: &Store) {
    loop {
        ui::clear_screen();
        ui::say(&"=".repeat(50));
        ui::say("MÓDULO DE CONFIGURACIÓN");
        ui::say(&"=".repeat(50));
        ui::blank();
        ui::say("1. Generar turnos del mes");
        ui::say("2. Configurar horarios");
        ui::say("3. Volver al menú principal");
        ui::blank();

        match ui::prompt("Seleccione una opción (1-3): ").as_str() {
            "1" => generate_month(store),
            "2" => configure_hours(store),
            "3" => break,
            _ => {
                ui::say("❌ Opción inválida");
                ui::pause();
            }
        }
    }
}

fn generate_month(store: &Store) {
    ui::clear_screen();
    ui::say("=== GENERAR TURNOS DEL MES ===");
    ui::blank();

    let config = match store.schedule() {
        Ok(Some(config)) => config,
        Ok(None) => {
            ui::say("❌ Primero debe configurar los horarios");
            ui::pause();
            return;
        }
        Err(err) => {
            ui::say(&describe(&err));
            ui::pause();
            return;
        }
    };

    let Some(month) = ui::prompt_number("Ingrese mes (1-12) o 0 para volver: ") else {
        return;
    };
    if !(1..=12).contains(&month) {
        ui::say("❌ Mes inválido");
        ui::pause();
        return;
    }

    let current_year = Local::now().year();
    let Some(year) =
        ui::prompt_number(&format!("Ingrese año (mínimo {current_year}) o 0 para volver: "))
    else {
        return;
    };
    let year = year as i32;
    if year < current_year {
        ui::say(&format!("❌ El año debe ser mayor o igual a {current_year}"));
        ui::pause();
        return;
    }

    match store.generate_month(month, year, &config) {
        Ok(summary) => {
            ui::clear_screen();
            ui::say("=== TURNOS GENERADOS EXITOSAMENTE ===");
            ui::say(&format!("Mes: {month:02}/{year}"));
            ui::say(&format!("Días laborables: {}", summary.days));
            ui::say(&format!("Horarios por día: {}", summary.slots_per_day));
            ui::say(&format!("Turnos generados: {}", summary.total));
        }
        Err(err) => ui::say(&describe(&err)),
    }
    ui::pause();
}

fn configure_hours(store: &Store) {
    ui::clear_screen();
    ui::say("=== CONFIGURAR HORARIOS ===");
    ui::blank();

    let Some(start) = ui::prompt_number("Ingrese hora de inicio (1-23) o 0 para salir: ") else {
        return;
    };
    if !(1..=23).contains(&start) {
        ui::say("❌ Hora inválida");
        ui::pause();
        return;
    }

    let Some(end) =
        ui::prompt_number("Ingrese hora de fin (mayor a inicio, máx 23) o 0 para salir: ")
    else {
        return;
    };
    if end <= start || end > 23 {
        ui::say("❌ Hora de fin inválida");
        ui::pause();
        return;
    }

    ui::blank();
    ui::say("Seleccione intervalo entre turnos:");
    ui::say("1. 15 minutos");
    ui::say("2. 20 minutos");
    ui::say("3. 30 minutos");
    ui::say("0. Cancelar y volver");
    let interval = match ui::prompt("Opción (0-3): ").as_str() {
        "1" => 15,
        "2" => 20,
        "3" => 30,
        "0" => return,
        _ => {
            ui::say("❌ Opción inválida");
            ui::pause();
            return;
        }
    };

    ui::clear_screen();
    ui::say("=== NUEVA CONFIGURACIÓN ===");
    ui::say(&format!("Inicio: {start:02}:00"));
    ui::say(&format!("Fin: {end:02}:00"));
    ui::say(&format!("Intervalo: {interval} minutos"));
    ui::blank();

    if ui::confirm("¿Confirmar cambios? (s/n): ") {
        match store.set_schedule(start, end, interval) {
            Ok(_) => ui::say("✅ Configuración guardada"),
            Err(err) => ui::say(&describe(&err)),
        }
    } else {
        ui::say("❌ Cambios cancelados");
    }
    ui::pause();
}
