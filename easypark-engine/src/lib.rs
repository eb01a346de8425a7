pub mod availability;
pub mod reservation;
pub mod service;

pub use availability::check_conflicts;
pub use reservation::{ReservationEngine, ReservationError};
pub use service::ParkingService;
