//! Slot assignment, cancellation and lookup menu.

use chrono::Local;
use consultorio_core::{calendar, Slot, Store};

use super::describe;
use crate::ui;

pub fn menu(store: &Store) {
    loop {
        ui::clear_screen();
        ui::say(&"=".repeat(50));
        ui::say("MÓDULO DE TURNOS");
        ui::say(&"=".repeat(50));
        ui::blank();
        ui::say("1. Asignar turno");
        ui::say("2. Cancelar turno");
        ui::say("3. Buscar turnos por paciente");
        ui::say("4. Volver al menú principal");
        ui::blank();

        match ui::prompt("Seleccione una opción (1-4): ").as_str() {
            "1" => assign(store),
            "2" => cancel(store),
            "3" => search(store),
            "4" => break,
            _ => {
                ui::say("❌ Opción inválida");
                ui::pause();
            }
        }
    }
}

/// Numbered pick out of a listed slot set; `None` aborts the flow.
fn pick(slots: &[(String, Slot)]) -> Option<(String, Slot)> {
    let choice = ui::prompt_number(&format!("Seleccione turno (1-{}): ", slots.len()))?;
    if choice == 0 || choice as usize > slots.len() {
        ui::say("❌ Opción inválida");
        ui::pause();
        return None;
    }
    Some(slots[choice as usize - 1].clone())
}

fn assign(store: &Store) {
    ui::clear_screen();
    ui::say("=== ASIGNAR TURNO ===");
    ui::blank();

    let dni = ui::prompt("Ingrese DNI del paciente (0 para volver): ");
    if dni == "0" {
        return;
    }
    let patient = match store.get_patient(&dni) {
        Ok(Some(patient)) => patient,
        Ok(None) => {
            ui::say("❌ No existe un paciente con ese DNI");
            ui::pause();
            return;
        }
        Err(err) => {
            ui::say(&describe(&err));
            ui::pause();
            return;
        }
    };

    ui::say(&format!("Paciente: {}", patient.full_name()));
    ui::blank();
    ui::say("Ingrese la fecha del turno:");
    let Some(day) = ui::prompt_number("Día (1-31) o 0 para volver: ") else {
        return;
    };
    let Some(month) = ui::prompt_number("Mes (1-12) o 0 para volver: ") else {
        return;
    };
    let Some(year) = ui::prompt_number("Año o 0 para volver: ") else {
        return;
    };

    let today = Local::now().date_naive();
    let date = match calendar::validate_appointment_date(day, month, year as i32, today) {
        Ok(date) => calendar::format_date(date),
        Err(_) => {
            ui::say("❌ Fecha inválida o anterior a hoy");
            ui::pause();
            return;
        }
    };

    let available = match store.available_slots(&date) {
        Ok(available) => available,
        Err(err) => {
            ui::say(&describe(&err));
            ui::pause();
            return;
        }
    };
    if available.is_empty() {
        ui::say(&format!("❌ No hay turnos disponibles para {date}"));
        ui::pause();
        return;
    }

    ui::clear_screen();
    ui::say(&format!("=== TURNOS DISPONIBLES PARA {date} ==="));
    ui::blank();
    for (i, (_, slot)) in available.iter().enumerate() {
        ui::say(&format!("{}. {}", i + 1, slot.time));
    }
    ui::blank();

    let Some((slot_id, slot)) = pick(&available) else {
        return;
    };

    ui::clear_screen();
    ui::say("=== CONFIRMAR TURNO ===");
    ui::say(&format!("Paciente: {}", patient.full_name()));
    ui::say(&format!("DNI: {dni}"));
    ui::say(&format!("Fecha: {date}"));
    ui::say(&format!("Horario: {}", slot.time));
    ui::blank();

    if ui::confirm("¿Confirma el turno? (s/n): ") {
        match store.assign_slot(&slot_id, &dni, &patient.full_name()) {
            Ok(_) => ui::say("✅ Turno asignado correctamente"),
            Err(err) => ui::say(&describe(&err)),
        }
    } else {
        ui::say("Turno cancelado");
    }
    ui::pause();
}

fn cancel(store: &Store) {
    ui::clear_screen();
    ui::say("=== CANCELAR TURNO ===");
    ui::blank();

    let dni = ui::prompt("Ingrese DNI del paciente (0 para volver): ");
    if dni == "0" {
        return;
    }
    let slots = match store.slots_for_patient(&dni) {
        Ok(slots) => slots,
        Err(err) => {
            ui::say(&describe(&err));
            ui::pause();
            return;
        }
    };
    if slots.is_empty() {
        ui::say("❌ El paciente no tiene turnos asignados");
        ui::pause();
        return;
    }

    ui::clear_screen();
    ui::say("=== TURNOS DEL PACIENTE ===");
    ui::say(&format!("Paciente: {}", slots[0].1.patient_name));
    ui::blank();
    for (i, (_, slot)) in slots.iter().enumerate() {
        ui::say(&format!("{}. {} - {}", i + 1, slot.date, slot.time));
    }
    ui::blank();

    let Some((slot_id, slot)) = pick(&slots) else {
        return;
    };

    ui::clear_screen();
    ui::say("=== CONFIRMAR CANCELACIÓN ===");
    ui::say(&format!("Paciente: {}", slot.patient_name));
    ui::say(&format!("Fecha: {}", slot.date));
    ui::say(&format!("Horario: {}", slot.time));
    ui::blank();

    if ui::confirm("¿Confirma la cancelación? (s/n): ") {
        match store.cancel_slot(&slot_id) {
            Ok(_) => ui::say("✅ Turno cancelado correctamente"),
            Err(err) => ui::say(&describe(&err)),
        }
    } else {
        ui::say("Cancelación cancelada");
    }
    ui::pause();
}

fn search(store: &Store) {
    ui::clear_screen();
    ui::say("=== BUSCAR TURNOS POR PACIENTE ===");
    ui::blank();

    let dni = ui::prompt("Ingrese DNI del paciente (0 para volver): ");
    if dni == "0" {
        return;
    }

    ui::clear_screen();
    ui::say(&format!("=== TURNOS DEL PACIENTE DNI {dni} ==="));
    ui::blank();
    match store.slots_for_patient(&dni) {
        Ok(slots) if slots.is_empty() => {
            ui::say("❌ No hay turnos asignados a este paciente");
        }
        Ok(slots) => {
            for (i, (_, slot)) in slots.iter().enumerate() {
                ui::say(&format!("{}. {} - {}", i + 1, slot.date, slot.time));
            }
        }
        Err(err) => ui::say(&describe(&err)),
    }
    ui::blank();
    ui::pause();
}
