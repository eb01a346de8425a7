use easypark_domain::time::{normalize_interval, time_to_minutes, TimeError};
use easypark_domain::Reservation;

/// Scan existing reservations on a slot for time-window conflicts.
///
/// Both the requested interval and every stored interval are normalized
/// across midnight independently before the half-open overlap test
/// `[s1, e1)` vs `[s2, e2)`. Only live reservations (confirmed or active)
/// can conflict. Conflict ids come back in iteration order.
pub fn check_conflicts(
    slot_id: &str,
    start_time: &str,
    end_time: &str,
    reservations: &[Reservation],
) -> Result<(bool, Vec<String>), TimeError> {
    let new_s = time_to_minutes(start_time)?;
    let new_e = time_to_minutes(end_time)?;
    let (new_s, new_e) = normalize_interval(new_s, new_e);

    let mut conflicts = Vec::new();

    for reservation in reservations {
        if reservation.slot_id != slot_id {
            continue;
        }
        if !reservation.status.is_live() {
            continue;
        }

        let existing_s = time_to_minutes(&reservation.start_time)?;
        let existing_e = time_to_minutes(&reservation.end_time)?;
        let (existing_s, existing_e) = normalize_interval(existing_s, existing_e);

        if !(new_e <= existing_s || new_s >= existing_e) {
            conflicts.push(reservation.id.clone());
        }
    }

    Ok((conflicts.is_empty(), conflicts))
}
