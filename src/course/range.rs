pub const YARDS_PER_METER: f64 = 1.09361;
pub const METERS_PER_YARD: f64 = 0.9144;

/// Editing the yards field recomputes meters (and vice versa); each edit
/// converts one way only. The ratios are not exact inverses once rounded,
/// so a yards -> meters -> yards trip can drift by one yard. That drift is
/// accepted, not corrected.
#[must_use]
pub fn yards_to_meters(yards: i32) -> i32 {
    (f64::from(yards) * METERS_PER_YARD).round() as i32
}

#[must_use]
pub fn meters_to_yards(meters: i32) -> i32 {
    (f64::from(meters) * YARDS_PER_METER).round() as i32
}
