use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::enums::{ReservationStatus, SlotStatus};

/// A mall with a fixed pool of parking slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mall {
    pub id: String,
    pub name: String,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub base_price: i64,
    pub total_slots: i64,
    pub available_slots: i64,
}

/// A single physical parking space, uniquely identified within a mall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSlot {
    pub id: String,
    pub mall_id: String,
    pub name: String,
    pub status: SlotStatus,
    pub location: Option<String>,
    pub slot_type: Option<String>,
}

/// Requested time window, "HH:MM" wall-clock times
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_time: String,
    pub end_time: String,
}

/// Incoming reservation request
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationRequest {
    pub mall_id: String,
    pub slot_id: String,
    pub user_name: String,
    pub vehicle_number: String,
    pub phone: String,
    pub time_slot: TimeWindow,
}

/// A confirmed parking reservation. Immutable once created except for `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub mall_id: String,
    pub slot_id: String,
    pub user_name: String,
    pub vehicle_number: String,
    pub phone: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: i64,
    pub total_price: i64,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl Reservation {
    pub fn new(req: &ReservationRequest, duration: i64, total_price: i64, created_by: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mall_id: req.mall_id.clone(),
            slot_id: req.slot_id.clone(),
            user_name: req.user_name.clone(),
            vehicle_number: req.vehicle_number.clone(),
            phone: req.phone.clone(),
            start_time: req.time_slot.start_time.clone(),
            end_time: req.time_slot.end_time.clone(),
            duration,
            total_price,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
            created_by: created_by.to_string(),
        }
    }

    /// Update reservation status
    pub fn update_status(&mut self, new_status: ReservationStatus) {
        self.status = new_status;
    }
}

/// Aggregate counters for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingStats {
    pub total_reservations: usize,
    pub total_revenue: i64,
    pub active_reservations: usize,
    pub total_malls: usize,
    pub total_slots: usize,
}
