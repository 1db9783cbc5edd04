//! Report menu: daily and monthly summaries.

use std::path::Path;

use consultorio_core::{DailyReport, MonthlyReport, Store};

use super::describe;
use crate::ui;

pub fn menu(store: &Store, reports_dir: &Path) {
    loop {
        ui::clear_screen();
        ui::say(&"=".repeat(50));
        ui::say("MÓDULO DE INFORMES");
        ui::say(&"=".repeat(50));
        ui::blank();
        ui::say("1. Informe de turnos del día");
        ui::say("2. Informe de turnos del mes");
        ui::say("3. Volver al menú principal");
        ui::blank();

        match ui::prompt("Seleccione una opción (1-3): ").as_str() {
            "1" => daily(store, reports_dir),
            "2" => monthly(store, reports_dir),
            "3" => break,
            _ => {
                ui::say("❌ Opción inválida");
                ui::pause();
            }
        }
    }
}

fn show_and_save(text: &str, saved: consultorio_core::Result<Option<std::path::PathBuf>>) {
    ui::clear_screen();
    for line in text.lines() {
        ui::say(line);
    }
    ui::blank();
    match saved {
        Ok(Some(path)) => ui::say(&format!("✅ Informe guardado en: {}", path.display())),
        Ok(None) => {}
        Err(err) => ui::say(&format!("❌ Error al guardar el informe: {err}")),
    }
    ui::pause();
}

fn daily(store: &Store, reports_dir: &Path) {
    ui::clear_screen();
    ui::say("=== INFORME DE TURNOS DEL DÍA ===");
    ui::blank();

    let Some(day) = ui::prompt_number("Ingrese día (1-31) o 0 para volver: ") else {
        return;
    };
    let Some(month) = ui::prompt_number("Ingrese mes (1-12) o 0 para volver: ") else {
        return;
    };
    let Some(year) = ui::prompt_number("Ingrese año o 0 para volver: ") else {
        return;
    };

    match DailyReport::build(store, day, month, year as i32) {
        Ok(report) => show_and_save(&report.render(), report.save(reports_dir)),
        Err(err) => {
            ui::say(&describe(&err));
            ui::pause();
        }
    }
}

fn monthly(store: &Store, reports_dir: &Path) {
    ui::clear_screen();
    ui::say("=== INFORME DE TURNOS DEL MES ===");
    ui::blank();

    let Some(month) = ui::prompt_number("Ingrese mes (1-12) o 0 para volver: ") else {
        return;
    };
    let Some(year) = ui::prompt_number("Ingrese año o 0 para volver: ") else {
        return;
    };

    match MonthlyReport::build(store, month, year as i32) {
        Ok(report) => show_and_save(&report.render(), report.save(reports_dir)),
        Err(err) => {
            ui::say(&describe(&err));
            ui::pause();
        }
    }
}
