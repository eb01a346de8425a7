use easypark_domain::time::{duration_hours, TimeError};
use easypark_domain::{Reservation, ReservationRequest, ReservationStatus, Role, SlotStatus, ParkingStats};
use easypark_store::{InventoryError, InventoryStore};

use crate::availability::check_conflicts;

/// Owns the reservation list and drives the lifecycle: validation,
/// availability check, pricing, creation, cancellation, and the slot/mall
/// counter side effects on the inventory store.
pub struct ReservationEngine {
    reservations: Vec<Reservation>,
}

impl ReservationEngine {
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
        }
    }

    /// Create a reservation for the requested slot and time window.
    ///
    /// The slot-status check is a coarse single-holder gate: a slot with any
    /// live reservation is blocked outright, regardless of the requested
    /// window. The per-window conflict check still runs after it.
    pub fn create(
        &mut self,
        inventory: &mut InventoryStore,
        req: &ReservationRequest,
        actor: &str,
    ) -> Result<Reservation, ReservationError> {
        let mall = inventory
            .get_mall(&req.mall_id)
            .ok_or_else(|| ReservationError::MallNotFound(req.mall_id.clone()))?;
        let base_price = mall.base_price;

        let slot = inventory
            .get_slot(&req.mall_id, &req.slot_id)
            .ok_or_else(|| ReservationError::SlotNotFound(req.slot_id.clone()))?;

        if slot.status != SlotStatus::Available {
            return Err(ReservationError::SlotUnavailable(req.slot_id.clone()));
        }

        let (available, conflicts) = check_conflicts(
            &req.slot_id,
            &req.time_slot.start_time,
            &req.time_slot.end_time,
            &self.reservations,
        )?;
        if !available {
            return Err(ReservationError::TimeConflict(conflicts));
        }

        let duration = duration_hours(&req.time_slot.start_time, &req.time_slot.end_time)?;
        let total_price = base_price * duration;

        let reservation = Reservation::new(req, duration, total_price, actor);

        inventory.set_slot_status(&req.mall_id, &req.slot_id, SlotStatus::Occupied)?;
        inventory.adjust_available(&req.mall_id, -1)?;

        tracing::info!(
            reservation_id = %reservation.id,
            slot_id = %reservation.slot_id,
            duration,
            total_price,
            "Reservation created"
        );

        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Cancel a confirmed reservation and release its slot.
    ///
    /// Only the creator or an admin may cancel, and only while the
    /// reservation is still `confirmed`.
    pub fn cancel(
        &mut self,
        inventory: &mut InventoryStore,
        reservation_id: &str,
        actor_username: &str,
        actor_role: Role,
    ) -> Result<(), ReservationError> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == reservation_id)
            .ok_or_else(|| ReservationError::ReservationNotFound(reservation_id.to_string()))?;

        if reservation.status != ReservationStatus::Confirmed {
            return Err(ReservationError::InvalidState {
                current: reservation.status.to_string(),
            });
        }

        if reservation.created_by != actor_username && actor_role != Role::Admin {
            return Err(ReservationError::Forbidden);
        }

        reservation.update_status(ReservationStatus::Cancelled);
        let mall_id = reservation.mall_id.clone();
        let slot_id = reservation.slot_id.clone();

        inventory.set_slot_status(&mall_id, &slot_id, SlotStatus::Available)?;
        inventory.adjust_available(&mall_id, 1)?;

        tracing::info!(reservation_id, slot_id = %slot_id, "Reservation cancelled");
        Ok(())
    }

    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn get(&self, reservation_id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == reservation_id)
    }

    /// Aggregate counters. Revenue sums over ALL reservations, cancelled
    /// included.
    pub fn stats(&self, inventory: &InventoryStore) -> ParkingStats {
        ParkingStats {
            total_reservations: self.reservations.len(),
            total_revenue: self.reservations.iter().map(|r| r.total_price).sum(),
            active_reservations: self
                .reservations
                .iter()
                .filter(|r| r.status.is_live())
                .count(),
            total_malls: inventory.mall_count(),
            total_slots: inventory.total_slot_count(),
        }
    }
}

impl Default for ReservationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("Mall not found: {0}")]
    MallNotFound(String),

    #[error("Parking slot not found: {0}")]
    SlotNotFound(String),

    #[error("Slot {0} is currently not available")]
    SlotUnavailable(String),

    #[error("Requested window conflicts with reservations: {}", .0.join(", "))]
    TimeConflict(Vec<String>),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Cannot cancel a reservation in state {current}, only confirmed ones")]
    InvalidState { current: String },

    #[error("Only the owner or an admin can cancel a reservation")]
    Forbidden,

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use easypark_domain::TimeWindow;

    fn request(mall_id: &str, slot_id: &str, start: &str, end: &str) -> ReservationRequest {
        ReservationRequest {
            mall_id: mall_id.to_string(),
            slot_id: slot_id.to_string(),
            user_name: "Budi".to_string(),
            vehicle_number: "D 1234 ABC".to_string(),
            phone: "0811223344".to_string(),
            time_slot: TimeWindow {
                start_time: start.to_string(),
                end_time: end.to_string(),
            },
        }
    }

    #[test]
    fn test_create_prices_and_occupies() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let reservation = engine
            .create(&mut inventory, &request("pvj", "pvj-1", "09:00", "12:00"), "user")
            .unwrap();

        assert_eq!(reservation.duration, 3);
        assert_eq!(reservation.total_price, 15000);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.created_by, "user");

        assert_eq!(inventory.get_slot("pvj", "pvj-1").unwrap().status, SlotStatus::Occupied);
        assert_eq!(inventory.get_mall("pvj").unwrap().available_slots, 11);
    }

    #[test]
    fn test_create_unknown_mall_or_slot() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let err = engine
            .create(&mut inventory, &request("nowhere", "pvj-1", "09:00", "12:00"), "user")
            .unwrap_err();
        assert!(matches!(err, ReservationError::MallNotFound(_)));

        let err = engine
            .create(&mut inventory, &request("pvj", "pvj-99", "09:00", "12:00"), "user")
            .unwrap_err();
        assert!(matches!(err, ReservationError::SlotNotFound(_)));
    }

    #[test]
    fn test_occupied_slot_is_fully_blocked() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        engine
            .create(&mut inventory, &request("pvj", "pvj-1", "09:00", "12:00"), "user")
            .unwrap();

        // even a disjoint window is rejected by the slot-status gate
        let err = engine
            .create(&mut inventory, &request("pvj", "pvj-1", "14:00", "16:00"), "user")
            .unwrap_err();
        assert!(matches!(err, ReservationError::SlotUnavailable(_)));

        // seeded occupied slot is blocked the same way
        let err = engine
            .create(&mut inventory, &request("pvj", "pvj-3", "09:00", "12:00"), "user")
            .unwrap_err();
        assert!(matches!(err, ReservationError::SlotUnavailable(_)));
    }

    #[test]
    fn test_malformed_time_rejected() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let err = engine
            .create(&mut inventory, &request("pvj", "pvj-1", "25:00", "12:00"), "user")
            .unwrap_err();
        assert!(matches!(err, ReservationError::Time(_)));
    }

    #[test]
    fn test_cancel_restores_inventory() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let before = inventory.get_mall("pvj").unwrap().available_slots;
        let reservation = engine
            .create(&mut inventory, &request("pvj", "pvj-1", "09:00", "12:00"), "user")
            .unwrap();

        engine
            .cancel(&mut inventory, &reservation.id, "user", Role::User)
            .unwrap();

        assert_eq!(engine.get(&reservation.id).unwrap().status, ReservationStatus::Cancelled);
        assert_eq!(inventory.get_slot("pvj", "pvj-1").unwrap().status, SlotStatus::Available);
        // conservation: a cancel exactly undoes its create
        assert_eq!(inventory.get_mall("pvj").unwrap().available_slots, before);
    }

    #[test]
    fn test_cancel_twice_fails_without_double_mutation() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let reservation = engine
            .create(&mut inventory, &request("pvj", "pvj-1", "09:00", "12:00"), "user")
            .unwrap();
        engine
            .cancel(&mut inventory, &reservation.id, "user", Role::User)
            .unwrap();

        let after_first = inventory.get_mall("pvj").unwrap().available_slots;
        let err = engine
            .cancel(&mut inventory, &reservation.id, "user", Role::User)
            .unwrap_err();
        assert!(matches!(err, ReservationError::InvalidState { .. }));
        assert_eq!(inventory.get_mall("pvj").unwrap().available_slots, after_first);
    }

    #[test]
    fn test_cancel_authorization() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let reservation = engine
            .create(&mut inventory, &request("pvj", "pvj-1", "09:00", "12:00"), "user")
            .unwrap();

        let err = engine
            .cancel(&mut inventory, &reservation.id, "somebody-else", Role::User)
            .unwrap_err();
        assert!(matches!(err, ReservationError::Forbidden));

        // an admin may cancel someone else's reservation
        engine
            .cancel(&mut inventory, &reservation.id, "admin", Role::Admin)
            .unwrap();
    }

    #[test]
    fn test_cancel_unknown_reservation() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let err = engine
            .cancel(&mut inventory, "missing-id", "user", Role::User)
            .unwrap_err();
        assert!(matches!(err, ReservationError::ReservationNotFound(_)));
    }

    #[test]
    fn test_stats_revenue_includes_cancelled() {
        let mut inventory = InventoryStore::seed();
        let mut engine = ReservationEngine::new();

        let first = engine
            .create(&mut inventory, &request("pvj", "pvj-1", "09:00", "12:00"), "user")
            .unwrap();
        engine
            .create(&mut inventory, &request("pvj", "pvj-2", "10:00", "11:00"), "user")
            .unwrap();
        engine
            .cancel(&mut inventory, &first.id, "user", Role::User)
            .unwrap();

        let stats = engine.stats(&inventory);
        assert_eq!(stats.total_reservations, 2);
        // 15000 (cancelled) + 5000 still counted
        assert_eq!(stats.total_revenue, 20000);
        assert_eq!(stats.active_reservations, 1);
        assert_eq!(stats.total_malls, 3);
        assert_eq!(stats.total_slots, 14);
    }
}
