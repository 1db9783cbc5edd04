//! Slot ledger: generation, queries, assignment and cancellation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Store, SLOTS_DOC};
use crate::calendar;
use crate::error::{Error, Result};
use crate::models::{ScheduleConfig, Slot};

/// Persisted slot document: the collection plus the ID sequence counter.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SlotBook {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    pub(crate) slots: BTreeMap<String, Slot>,
}

fn first_id() -> u64 {
    1
}

impl SlotBook {
    fn empty() -> Self {
        Self {
            next_id: first_id(),
            slots: BTreeMap::new(),
        }
    }

    /// Documents written without a counter still get fresh IDs.
    fn clamp_counter(&mut self) {
        let max_id = self
            .slots
            .keys()
            .filter_map(|k| k.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
    }

    fn take_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}

/// Counts reported after generating a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub days: usize,
    pub slots_per_day: usize,
    pub total: usize,
}

impl Store {
    pub(crate) fn load_slot_book(&self) -> Result<SlotBook> {
        let mut book = match self.read_document(SLOTS_DOC)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => SlotBook::empty(),
        };
        book.clamp_counter();
        Ok(book)
    }

    pub(crate) fn save_slot_book(&self, book: &SlotBook) -> Result<()> {
        self.write_document(SLOTS_DOC, &serde_json::to_string_pretty(book)?)
    }

    /// Create one open slot per (working day x grid time) of the month.
    ///
    /// Rejected if any slot for that month/year already exists; IDs come
    /// from the persisted counter as one contiguous block.
    pub fn generate_month(
        &self,
        month: u32,
        year: i32,
        config: &ScheduleConfig,
    ) -> Result<GenerationSummary> {
        let days = calendar::working_days(month, year)?;
        let mut book = self.load_slot_book()?;

        let suffix = format!("/{month:02}/{year}");
        if book.slots.values().any(|s| s.date.ends_with(&suffix)) {
            return Err(Error::AlreadyGenerated { month, year });
        }

        let grid = config.time_grid();
        let mut total = 0;
        for date in &days {
            for time in &grid {
                let id = book.take_id();
                book.slots.insert(id, Slot::open(date.clone(), time.clone()));
                total += 1;
            }
        }
        self.save_slot_book(&book)?;
        tracing::info!(month, year, days = days.len(), total, "generated monthly slots");

        Ok(GenerationSummary {
            days: days.len(),
            slots_per_day: grid.len(),
            total,
        })
    }

    /// Open slots for an exact `DD/MM/YYYY` date, ascending by time.
    pub fn available_slots(&self, date: &str) -> Result<Vec<(String, Slot)>> {
        let book = self.load_slot_book()?;
        let mut found: Vec<(String, Slot)> = book
            .slots
            .into_iter()
            .filter(|(_, slot)| slot.date == date && slot.is_available())
            .collect();
        found.sort_by(|a, b| a.1.time.cmp(&b.1.time));
        Ok(found)
    }

    /// Slots currently assigned to `dni`, ascending by (date, time).
    pub fn slots_for_patient(&self, dni: &str) -> Result<Vec<(String, Slot)>> {
        let book = self.load_slot_book()?;
        let mut found: Vec<(String, Slot)> = book
            .slots
            .into_iter()
            .filter(|(_, slot)| slot.patient_dni == dni)
            .collect();
        found.sort_by(|a, b| (&a.1.date, &a.1.time).cmp(&(&b.1.date, &b.1.time)));
        Ok(found)
    }

    /// True iff at least one slot is currently assigned to `dni`.
    pub fn has_any_slot(&self, dni: &str) -> Result<bool> {
        let book = self.load_slot_book()?;
        Ok(book.slots.values().any(|slot| slot.patient_dni == dni))
    }

    /// Assign a slot to a patient. Overwrites unconditionally; callers
    /// list `available_slots` first (single-user system).
    pub fn assign_slot(&self, slot_id: &str, dni: &str, display_name: &str) -> Result<Slot> {
        let mut book = self.load_slot_book()?;
        let slot = book
            .slots
            .get_mut(slot_id)
            .ok_or_else(|| Error::NotFound(format!("slot {slot_id}")))?;
        slot.patient_dni = dni.to_string();
        slot.patient_name = display_name.to_string();
        let assigned = slot.clone();
        self.save_slot_book(&book)?;
        tracing::info!(slot_id, dni, "slot assigned");
        Ok(assigned)
    }

    /// Clear a slot's assignment, returning it to the open pool.
    /// Idempotent: cancelling an open slot is not an error.
    pub fn cancel_slot(&self, slot_id: &str) -> Result<Slot> {
        let mut book = self.load_slot_book()?;
        let slot = book
            .slots
            .get_mut(slot_id)
            .ok_or_else(|| Error::NotFound(format!("slot {slot_id}")))?;
        slot.patient_dni.clear();
        slot.patient_name.clear();
        let cancelled = slot.clone();
        self.save_slot_book(&book)?;
        tracing::info!(slot_id, "slot cancelled");
        Ok(cancelled)
    }
}
