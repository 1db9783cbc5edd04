//! Daily appointment report.

use std::fs;
use std::path::{Path, PathBuf};

use super::{timestamp, ReportEntry};
use crate::error::{Error, Result};
use crate::store::Store;

/// All assigned slots of one exact date, sorted by time.
#[derive(Debug, Clone)]
pub struct DailyReport {
    day: u32,
    month: u32,
    year: i32,
    generated_at: String,
    entries: Vec<ReportEntry>,
}

impl DailyReport {
    /// Filter the ledger down to assigned slots on `DD/MM/YYYY`.
    ///
    /// Day and month are range-checked only; a day that does not exist in
    /// the month simply matches no slots.
    pub fn build(store: &Store, day: u32, month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation("month must be 1-12".into()));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::Validation("day must be 1-31".into()));
        }

        let date = format!("{day:02}/{month:02}/{year}");
        let book = store.load_slot_book()?;
        let mut entries: Vec<ReportEntry> = book
            .slots
            .values()
            .filter(|slot| !slot.is_available() && slot.date == date)
            .map(|slot| ReportEntry {
                time: slot.time.clone(),
                patient_name: slot.patient_name.clone(),
                patient_dni: slot.patient_dni.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.time.cmp(&b.time));

        Ok(Self {
            day,
            month,
            year,
            generated_at: timestamp(),
            entries,
        })
    }

    pub fn date(&self) -> String {
        format!("{:02}/{:02}/{}", self.day, self.month, self.year)
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_name(&self) -> String {
        format!("turnos_dia_{:02}_{:02}_{}.txt", self.day, self.month, self.year)
    }

    /// Full report text, one trailing newline.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push("=".repeat(60));
        lines.push(format!("INFORME DE TURNOS DEL DÍA {}", self.date()));
        lines.push("=".repeat(60));
        lines.push(format!("Generado el: {}", self.generated_at));
        lines.push(String::new());

        if self.entries.is_empty() {
            lines.push("No hay turnos programados para esta fecha.".into());
        } else {
            lines.push(format!("Total de turnos: {}", self.entries.len()));
            lines.push(String::new());
            lines.push("DETALLE DE TURNOS:".into());
            lines.push("-".repeat(40));
            for entry in &self.entries {
                lines.push(format!("Horario: {}", entry.time));
                lines.push(format!("Paciente: {}", entry.patient_name));
                lines.push(format!("DNI: {}", entry.patient_dni));
                lines.push("-".repeat(40));
            }
        }

        lines.push("Fin del informe".into());
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Persist the rendered report under `dir`. Empty reports are never
    /// written; the path is returned otherwise.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<Option<PathBuf>> {
        if self.is_empty() {
            return Ok(None);
        }
        fs::create_dir_all(&dir)?;
        let path = dir.as_ref().join(self.file_name());
        fs::write(&path, self.render())?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleConfig;

    fn store_with_assignments() -> Store {
        let store = Store::open_in_memory();
        let config = ScheduleConfig::new(9, 10, 30).unwrap();
        store.generate_month(3, 2025, &config).unwrap();

        let slots = store.available_slots("03/03/2025").unwrap();
        store
            .assign_slot(&slots[1].0, "12345678", "Ana Gomez")
            .unwrap();
        store
            .assign_slot(&slots[0].0, "23456789", "Juan Perez")
            .unwrap();
        store
    }

    #[test]
    fn test_build_filters_and_sorts() {
        let store = store_with_assignments();
        let report = DailyReport::build(&store, 3, 3, 2025).unwrap();

        assert_eq!(report.entries().len(), 2);
        assert_eq!(report.entries()[0].time, "09:00");
        assert_eq!(report.entries()[0].patient_name, "Juan Perez");
        assert_eq!(report.entries()[1].time, "09:30");
    }

    #[test]
    fn test_build_rejects_out_of_range() {
        let store = Store::open_in_memory();
        assert!(DailyReport::build(&store, 0, 3, 2025).is_err());
        assert!(DailyReport::build(&store, 32, 3, 2025).is_err());
        assert!(DailyReport::build(&store, 3, 0, 2025).is_err());
        assert!(DailyReport::build(&store, 3, 13, 2025).is_err());
    }

    #[test]
    fn test_render_layout() {
        let store = store_with_assignments();
        let report = DailyReport::build(&store, 3, 3, 2025).unwrap();
        let text = report.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "INFORME DE TURNOS DEL DÍA 03/03/2025");
        assert!(lines[3].starts_with("Generado el: "));
        assert_eq!(lines[5], "Total de turnos: 2");
        assert_eq!(lines[7], "DETALLE DE TURNOS:");
        assert_eq!(lines[9], "Horario: 09:00");
        assert_eq!(lines[10], "Paciente: Juan Perez");
        assert_eq!(lines[11], "DNI: 23456789");
        assert_eq!(lines.last().unwrap(), &"Fin del informe");
    }

    #[test]
    fn test_empty_report_renders_notice_and_skips_save() {
        let store = Store::open_in_memory();
        let report = DailyReport::build(&store, 5, 3, 2025).unwrap();
        assert!(report.is_empty());
        assert!(report
            .render()
            .contains("No hay turnos programados para esta fecha."));

        let tmp = tempfile::tempdir().unwrap();
        assert!(report.save(tmp.path()).unwrap().is_none());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_uses_fixed_file_name() {
        let store = store_with_assignments();
        let report = DailyReport::build(&store, 3, 3, 2025).unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let path = report.save(tmp.path()).unwrap().unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "turnos_dia_03_03_2025.txt"
        );
        assert_eq!(fs::read_to_string(path).unwrap(), report.render());
    }
}
