use std::collections::HashMap;

use easypark_domain::{Mall, ParkingSlot, SlotStatus};

/// In-memory catalog of malls and their parking slots.
///
/// Constructed once per process and handed to the reservation engine by
/// reference; all counter updates go through `adjust_available` so the
/// `0 <= available_slots <= total_slots` invariant holds.
pub struct InventoryStore {
    malls: Vec<Mall>,
    slots: HashMap<String, Vec<ParkingSlot>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            malls: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Register a mall with an empty slot list
    pub fn add_mall(&mut self, mall: Mall) {
        self.slots.entry(mall.id.clone()).or_default();
        self.malls.push(mall);
    }

    /// Register a slot under its mall
    pub fn add_slot(&mut self, slot: ParkingSlot) {
        self.slots.entry(slot.mall_id.clone()).or_default().push(slot);
    }

    pub fn list_malls(&self) -> &[Mall] {
        &self.malls
    }

    pub fn get_mall(&self, mall_id: &str) -> Option<&Mall> {
        self.malls.iter().find(|m| m.id == mall_id)
    }

    pub fn list_slots(&self, mall_id: &str) -> Option<&[ParkingSlot]> {
        self.slots.get(mall_id).map(|s| s.as_slice())
    }

    pub fn get_slot(&self, mall_id: &str, slot_id: &str) -> Option<&ParkingSlot> {
        self.slots
            .get(mall_id)
            .and_then(|slots| slots.iter().find(|s| s.id == slot_id))
    }

    /// Set a slot's status
    pub fn set_slot_status(
        &mut self,
        mall_id: &str,
        slot_id: &str,
        status: SlotStatus,
    ) -> Result<(), InventoryError> {
        let slot = self
            .slots
            .get_mut(mall_id)
            .and_then(|slots| slots.iter_mut().find(|s| s.id == slot_id))
            .ok_or_else(|| InventoryError::SlotNotFound(slot_id.to_string()))?;

        slot.status = status;
        Ok(())
    }

    /// Adjust a mall's available-slot counter by `delta`, clamped to
    /// `[0, total_slots]`. Returns the new value.
    pub fn adjust_available(&mut self, mall_id: &str, delta: i64) -> Result<i64, InventoryError> {
        let mall = self
            .malls
            .iter_mut()
            .find(|m| m.id == mall_id)
            .ok_or_else(|| InventoryError::MallNotFound(mall_id.to_string()))?;

        mall.available_slots = (mall.available_slots + delta).clamp(0, mall.total_slots);
        Ok(mall.available_slots)
    }

    pub fn mall_count(&self) -> usize {
        self.malls.len()
    }

    pub fn total_slot_count(&self) -> usize {
        self.slots.values().map(|slots| slots.len()).sum()
    }

    /// Demo catalog: three Bandung malls with a handful of slots each.
    pub fn seed() -> Self {
        let mut store = Self::new();

        store.add_mall(mall("pvj", "PVJ", "Paris Van Java", "Jl. Sukajadi, Bandung", 5000, 200, 12));
        store.add_mall(mall("paskal", "Paskal 23", "Paskal Hyper Square", "Jl. Pasirkaliki, Bandung", 5000, 150, 8));
        store.add_mall(mall("sumaba", "Sumaba", "Summarecon Mall Bandung", "Jl. Raya Kopo, Bandung", 5000, 300, 15));

        store.add_slot(slot("pvj-1", "pvj", "A-101", SlotStatus::Available, "Lantai 2, Area A"));
        store.add_slot(slot("pvj-2", "pvj", "A-102", SlotStatus::Available, "Lantai 2, Area A"));
        store.add_slot(slot("pvj-3", "pvj", "B-201", SlotStatus::Occupied, "Lantai 2, Area B"));
        store.add_slot(slot("pvj-4", "pvj", "C-301", SlotStatus::Available, "Lantai 3, Area C"));
        store.add_slot(slot("pvj-5", "pvj", "D-401", SlotStatus::Available, "Lantai 4, Area D"));

        store.add_slot(slot("paskal-1", "paskal", "A-101", SlotStatus::Available, "Lantai 1, Area A"));
        store.add_slot(slot("paskal-2", "paskal", "A-102", SlotStatus::Occupied, "Lantai 1, Area A"));
        store.add_slot(slot("paskal-3", "paskal", "B-201", SlotStatus::Available, "Lantai 2, Area B"));
        store.add_slot(slot("paskal-4", "paskal", "C-301", SlotStatus::Available, "Lantai 3, Area C"));

        store.add_slot(slot("sumaba-1", "sumaba", "A-101", SlotStatus::Available, "Lantai 1, Area A"));
        store.add_slot(slot("sumaba-2", "sumaba", "A-102", SlotStatus::Available, "Lantai 1, Area A"));
        store.add_slot(slot("sumaba-3", "sumaba", "B-201", SlotStatus::Occupied, "Lantai 2, Area B"));
        store.add_slot(slot("sumaba-4", "sumaba", "C-301", SlotStatus::Available, "Lantai 3, Area C"));
        store.add_slot(slot("sumaba-5", "sumaba", "D-401", SlotStatus::Available, "Lantai 4, Area D"));

        store
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn mall(
    id: &str,
    name: &str,
    full_name: &str,
    address: &str,
    base_price: i64,
    total_slots: i64,
    available_slots: i64,
) -> Mall {
    Mall {
        id: id.to_string(),
        name: name.to_string(),
        full_name: Some(full_name.to_string()),
        address: Some(address.to_string()),
        base_price,
        total_slots,
        available_slots,
    }
}

fn slot(id: &str, mall_id: &str, name: &str, status: SlotStatus, location: &str) -> ParkingSlot {
    ParkingSlot {
        id: id.to_string(),
        mall_id: mall_id.to_string(),
        name: name.to_string(),
        status,
        location: Some(location.to_string()),
        slot_type: Some("regular".to_string()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Mall not found: {0}")]
    MallNotFound(String),

    #[error("Parking slot not found: {0}")]
    SlotNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let store = InventoryStore::seed();

        assert_eq!(store.mall_count(), 3);
        assert_eq!(store.total_slot_count(), 14);

        let pvj = store.get_mall("pvj").unwrap();
        assert_eq!(pvj.base_price, 5000);
        assert_eq!(pvj.available_slots, 12);

        assert_eq!(store.get_slot("pvj", "pvj-3").unwrap().status, SlotStatus::Occupied);
        assert!(store.get_slot("pvj", "paskal-1").is_none());
        assert!(store.get_mall("unknown").is_none());
    }

    #[test]
    fn test_set_slot_status() {
        let mut store = InventoryStore::seed();

        store.set_slot_status("pvj", "pvj-1", SlotStatus::Occupied).unwrap();
        assert_eq!(store.get_slot("pvj", "pvj-1").unwrap().status, SlotStatus::Occupied);

        assert!(store.set_slot_status("pvj", "nope", SlotStatus::Available).is_err());
    }

    #[test]
    fn test_adjust_available_clamps() {
        let mut store = InventoryStore::new();
        store.add_mall(mall("m1", "M1", "Mall One", "Somewhere", 5000, 10, 2));

        assert_eq!(store.adjust_available("m1", -1).unwrap(), 1);
        assert_eq!(store.adjust_available("m1", -5).unwrap(), 0);
        // floored at zero
        assert_eq!(store.adjust_available("m1", -1).unwrap(), 0);
        // capped at total_slots
        assert_eq!(store.adjust_available("m1", 100).unwrap(), 10);

        assert!(store.adjust_available("missing", 1).is_err());
    }
}
