use easypark_domain::time::TimeError;
use easypark_domain::{Mall, ParkingSlot, ParkingStats, Reservation, ReservationRequest, Role};
use easypark_store::InventoryStore;

use crate::availability::check_conflicts;
use crate::reservation::{ReservationEngine, ReservationError};

/// Facade over the inventory store and reservation engine.
///
/// One value per process, behind a single mutex in the API state: every
/// create/cancel runs its whole read-modify-write against slot status, mall
/// counters and the reservation list without interleaving.
pub struct ParkingService {
    inventory: InventoryStore,
    engine: ReservationEngine,
}

impl ParkingService {
    pub fn new(inventory: InventoryStore) -> Self {
        Self {
            inventory,
            engine: ReservationEngine::new(),
        }
    }

    /// Service over the seeded demo catalog
    pub fn seed() -> Self {
        Self::new(InventoryStore::seed())
    }

    pub fn malls(&self) -> &[Mall] {
        self.inventory.list_malls()
    }

    pub fn mall(&self, mall_id: &str) -> Option<&Mall> {
        self.inventory.get_mall(mall_id)
    }

    pub fn slots(&self, mall_id: &str) -> Option<&[ParkingSlot]> {
        self.inventory.list_slots(mall_id)
    }

    pub fn slot(&self, mall_id: &str, slot_id: &str) -> Option<&ParkingSlot> {
        self.inventory.get_slot(mall_id, slot_id)
    }

    /// Time-window availability for a slot against stored reservations
    pub fn check_availability(
        &self,
        slot_id: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<(bool, Vec<String>), TimeError> {
        check_conflicts(slot_id, start_time, end_time, self.engine.list())
    }

    pub fn create_reservation(
        &mut self,
        req: &ReservationRequest,
        actor: &str,
    ) -> Result<Reservation, ReservationError> {
        self.engine.create(&mut self.inventory, req, actor)
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.engine.list()
    }

    pub fn reservation(&self, reservation_id: &str) -> Option<&Reservation> {
        self.engine.get(reservation_id)
    }

    pub fn cancel_reservation(
        &mut self,
        reservation_id: &str,
        actor_username: &str,
        actor_role: Role,
    ) -> Result<(), ReservationError> {
        self.engine
            .cancel(&mut self.inventory, reservation_id, actor_username, actor_role)
    }

    pub fn admin_stats(&self) -> ParkingStats {
        self.engine.stats(&self.inventory)
    }
}
