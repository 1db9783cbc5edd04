//! Monthly appointment report, grouped by day.

use std::fs;
use std::path::{Path, PathBuf};

use super::{timestamp, ReportEntry};
use crate::error::{Error, Result};
use crate::store::Store;

/// Assigned slots of one date within the month.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: String,
    pub entries: Vec<ReportEntry>,
}

/// All assigned slots of a month, grouped by date.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    month: u32,
    year: i32,
    generated_at: String,
    groups: Vec<DayGroup>,
}

/// Month/year taken from a `DD/MM/YYYY` string; anything not in exactly
/// three `/`-separated numeric parts is skipped.
fn month_year(date: &str) -> Option<(u32, i32)> {
    let mut parts = date.split('/');
    let _day = parts.next()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((month, year))
}

impl MonthlyReport {
    /// Collect assigned slots whose date falls in (month, year).
    ///
    /// Groups are sorted by date string, which is chronological within a
    /// single month thanks to the zero-padded format; each group is sorted
    /// by time.
    pub fn build(store: &Store, month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation("month must be 1-12".into()));
        }

        let book = store.load_slot_book()?;
        let mut matched: Vec<(&String, ReportEntry)> = Vec::new();
        for slot in book.slots.values() {
            if slot.is_available() {
                continue;
            }
            match month_year(&slot.date) {
                Some((m, y)) if m == month && y == year => {
                    matched.push((
                        &slot.date,
                        ReportEntry {
                            time: slot.time.clone(),
                            patient_name: slot.patient_name.clone(),
                            patient_dni: slot.patient_dni.clone(),
                        },
                    ));
                }
                _ => continue,
            }
        }

        let mut dates: Vec<&String> = matched.iter().map(|(date, _)| *date).collect();
        dates.sort();
        dates.dedup();

        let mut groups = Vec::with_capacity(dates.len());
        for date in dates {
            let mut entries: Vec<ReportEntry> = matched
                .iter()
                .filter(|(d, _)| *d == date)
                .map(|(_, entry)| entry.clone())
                .collect();
            entries.sort_by(|a, b| a.time.cmp(&b.time));
            groups.push(DayGroup {
                date: date.clone(),
                entries,
            });
        }

        Ok(Self {
            month,
            year,
            generated_at: timestamp(),
            groups,
        })
    }

    pub fn groups(&self) -> &[DayGroup] {
        &self.groups
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn file_name(&self) -> String {
        format!("turnos_mes_{:02}_{}.txt", self.month, self.year)
    }

    /// Full report text, one trailing newline.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push("=".repeat(60));
        lines.push(format!(
            "INFORME DE TURNOS DEL MES {:02}/{}",
            self.month, self.year
        ));
        lines.push("=".repeat(60));
        lines.push(format!("Generado el: {}", self.generated_at));
        lines.push(String::new());

        if self.groups.is_empty() {
            lines.push("No hay turnos asignados para este mes.".into());
        } else {
            lines.push(format!("Total de turnos: {}", self.total()));
            lines.push(String::new());
            for group in &self.groups {
                lines.push(format!("TURNOS DEL {}:", group.date));
                lines.push("-".repeat(30));
                for entry in &group.entries {
                    lines.push(format!(
                        "  {} - {} (DNI: {})",
                        entry.time, entry.patient_name, entry.patient_dni
                    ));
                }
                lines.push(String::new());
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
