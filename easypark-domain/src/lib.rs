pub mod enums;
pub mod models;
pub mod time;

pub use enums::{ReservationStatus, Role, SlotStatus};
pub use models::{Mall, ParkingSlot, ParkingStats, Reservation, ReservationRequest, TimeWindow};
pub use time::TimeError;
