//! Patient management menu.

use consultorio_core::{validation, Patient, PatientField, Store};

use super::describe;
use crate::ui;

pub fn menu(store: &Store) {
    loop {
        ui::clear_screen();
        ui::say(&"=".repeat(50));
        ui::say("MÓDULO DE PACIENTES");
        ui::say(&"=".repeat(50));
        ui::blank();
        ui::say("1. Alta de paciente");
        ui::say("2. Modificar paciente");
        ui::say("3. Eliminar paciente");
        ui::say("4. Consultar paciente");
        ui::say("5. Volver al menú principal");
        ui::blank();

        match ui::prompt("Seleccione una opción (1-5): ").as_str() {
            "1" => register(store),
            "2" => modify(store),
            "3" => remove(store),
            "4" => lookup(store),
            "5" => break,
            _ => {
                ui::say("❌ Opción inválida");
                ui::pause();
            }
        }
    }
}

/// Prompt a DNI until valid; `None` when the user backs out with `0`.
fn ask_dni(label: &str) -> Option<String> {
    loop {
        let dni = ui::prompt(label);
        if dni == "0" {
            return None;
        }
        if !validation::is_valid_dni(&dni) {
            ui::say("❌ DNI inválido. Debe tener 7-8 dígitos");
            ui::pause();
            continue;
        }
        return Some(dni);
    }
}

/// Prompt one field until its validator accepts; `None` backs out.
fn ask_field(label: &str, error: &str, valid: fn(&str) -> bool) -> Option<String> {
    loop {
        let value = ui::prompt(label);
        if value == "0" {
            return None;
        }
        if !valid(&value) {
            ui::say(error);
            ui::pause();
            continue;
        }
        return Some(value);
    }
}

fn register(store: &Store) {
    ui::clear_screen();
    ui::say("=== ALTA DE PACIENTE ===");
    ui::blank();

    let dni = loop {
        let Some(dni) = ask_dni("Ingrese DNI (7-8 dígitos) o 0 para volver: ") else {
            return;
        };
        match store.get_patient(&dni) {
            Ok(Some(_)) => {
                ui::say("❌ Ya existe un paciente con ese DNI");
                ui::pause();
            }
            Ok(None) => break dni,
            Err(err) => {
                ui::say(&describe(&err));
                ui::pause();
                return;
            }
        }
    };

    ui::say("=== DATOS DEL PACIENTE ===");
    ui::blank();
    let Some(first) = ask_field(
        "Ingrese nombre (0 para cancelar): ",
        "❌ Nombre inválido. Solo letras y espacios",
        validation::is_valid_name,
    ) else {
        return;
    };
    let Some(last) = ask_field(
        "Ingrese apellido (0 para cancelar): ",
        "❌ Apellido inválido. Solo letras y espacios",
        validation::is_valid_name,
    ) else {
        return;
    };
    let Some(phone) = ask_field(
        "Ingrese teléfono (0 para cancelar): ",
        "❌ Teléfono inválido",
        validation::is_valid_phone,
    ) else {
        return;
    };
    let Some(email) = ask_field(
        "Ingrese email (0 para cancelar): ",
        "❌ Email inválido",
        validation::is_valid_email,
    ) else {
        return;
    };

    match store.create_patient(&dni, &first, &last, &phone, &email) {
        Ok(patient) => ui::say(&format!(
            "✅ Paciente {} registrado correctamente",
            patient.full_name()
        )),
        Err(err) => ui::say(&describe(&err)),
    }
    ui::pause();
}

fn show_patient(dni: &str, patient: &Patient) {
    ui::say(&format!("DNI: {dni}"));
    ui::say(&format!("Nombre: {}", patient.full_name()));
    ui::say(&format!("Teléfono: {}", patient.phone));
    ui::say(&format!("Email: {}", patient.email));
}

fn modify(store: &Store) {
    ui::clear_screen();
    ui::say("=== MODIFICAR PACIENTE ===");
    ui::blank();

    let Some(dni) = ask_dni("Ingrese DNI del paciente a modificar (0 para volver): ") else {
        return;
    };
    match store.get_patient(&dni) {
        Ok(Some(_)) => {}
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
    }

    loop {
        let Ok(Some(patient)) = store.get_patient(&dni) else {
            return;
        };
        ui::clear_screen();
        ui::say("=== DATOS ACTUALES DEL PACIENTE ===");
        ui::say(&format!("DNI: {dni}"));
        ui::say(&format!("1. Nombre: {}", patient.first_name));
        ui::say(&format!("2. Apellido: {}", patient.last_name));
        ui::say(&format!("3. Teléfono: {}", patient.phone));
        ui::say(&format!("4. Email: {}", patient.email));
        ui::blank();

        let choice = ui::prompt("¿Qué dato desea modificar? (1-4, 0 para salir): ");
        let field = match choice.as_str() {
            "0" => break,
            "1" => PatientField::FirstName,
            "2" => PatientField::LastName,
            "3" => PatientField::Phone,
            "4" => PatientField::Email,
            _ => {
                ui::say("❌ Opción inválida");
                ui::pause();
                continue;
            }
        };

        // Empty input keeps the current value.
        let value = ui::prompt("Nuevo valor, enter para cancelar: ");
        match store.update_patient(&dni, field, &value) {
            Ok(_) if value.trim().is_empty() => {}
            Ok(_) => {
                ui::say("✅ Dato actualizado");
                ui::pause();
            }
            Err(err) => {
                ui::say(&describe(&err));
                ui::pause();
            }
        }
    }
}

fn remove(store: &Store) {
    ui::clear_screen();
    ui::say("=== ELIMINAR PACIENTE ===");
    ui::blank();

    let Some(dni) = ask_dni("Ingrese DNI del paciente a eliminar (0 para volver): ") else {
        return;
    };
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

    ui::clear_screen();
    ui::say("=== CONFIRMAR ELIMINACIÓN ===");
    show_patient(&dni, &patient);
    ui::blank();

    if ui::confirm("¿Confirma la eliminación? (s/n): ") {
        match store.delete_patient(&dni) {
            Ok(()) => ui::say("✅ Paciente eliminado correctamente"),
            Err(err) => ui::say(&describe(&err)),
        }
    } else {
        ui::say("Eliminación cancelada");
    }
    ui::pause();
}

fn lookup(store: &Store) {
    ui::clear_screen();
    ui::say("=== CONSULTAR PACIENTE ===");
    ui::blank();

    let Some(dni) = ask_dni("Ingrese DNI del paciente a consultar (0 para volver): ") else {
        return;
    };
    match store.get_patient(&dni) {
        Ok(Some(patient)) => {
            ui::clear_screen();
            ui::say("=== DATOS DEL PACIENTE ===");
            show_patient(&dni, &patient);
        }
        Ok(None) => ui::say("❌ No se encontró un paciente con ese DNI"),
        Err(err) => ui::say(&describe(&err)),
    }
    ui::pause();
}
