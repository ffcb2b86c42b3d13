//! Angle arithmetic on the ecliptic circle.
//!
//! All angles are degrees. Nothing in here touches trigonometry; that lives
//! in [`crate::projection`] only.

/// Degrees in a full turn.
pub const FULL_CIRCLE: f64 = 360.0;

/// Width of one zodiac sign.
pub const SIGN_WIDTH: f64 = 30.0;

/// Normalize any finite angle to `[0, 360)`.
///
/// Non-finite input yields `NaN`.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return f64::NAN;
    }
    let wrapped = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= FULL_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Midpoint of the forward arc from `start` to `end`, normalized.
///
/// Callers must unwrap arcs that cross 0° first: when `end < start`, pass
/// `end + 360`. See [`forward_end`].
pub fn midpoint(start: f64, end: f64) -> f64 {
    normalize_angle((start + end) / 2.0)
}

/// Unwrap `end` so that `start..end` runs in increasing-degree direction.
pub fn forward_end(start: f64, end: f64) -> f64 {
    if end < start {
        end + FULL_CIRCLE
    } else {
        end
    }
}

/// Whether `angle` lies on the forward arc `[start, end)`, wraparound aware.
pub fn arc_contains(start: f64, end: f64, angle: f64) -> bool {
    let start = normalize_angle(start);
    let end = normalize_angle(end);
    let angle = normalize_angle(angle);
    if end < start {
        angle >= start || angle < end
    } else {
        angle >= start && angle < end
    }
}

/// Sign index (0 = Aries .. 11 = Pisces) for a longitude.
pub fn sign_index(longitude: f64) -> u8 {
    let normalized = normalize_angle(longitude);
    ((normalized / SIGN_WIDTH).floor() as u8).min(11)
}
