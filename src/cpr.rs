//! Compact Position Reporting codec.
//!
//! CPR packs a latitude/longitude into 17 (airborne) or 19 (surface) bits
//! per axis by encoding only the position within a latitude/longitude zone.
//! Airborne zones span the full circle, surface zones a quarter circle;
//! the surface encoding therefore repeats every 90 degrees and needs a
//! coarse receiver position to pick the right quarter of the globe.
//!
//! Two decode modes exist:
//! - local: one frame plus a reference within half a zone of the truth
//! - global: an even/odd frame pair, unambiguous without a reference
//!   except for the surface quarter-globe choice
//!
//! Decode failures are ordinary feed conditions, not errors: the `try_`
//! entry points name the refusal cause, the plain ones collapse to `None`.

use std::sync::LazyLock;

use crate::types::{AdsbError, CprCoordinate, GlobalCoordinate, Result};

/// Number of even latitude zones between the equator and a pole.
const NZ: f64 = 15.0;

/// Fixed-point scale for the exact longitude path, 1e-15 degree units.
const FIXED_SCALE: i128 = 1_000_000_000_000_000;

// ---------------------------------------------------------------------------
// NL zone count
// ---------------------------------------------------------------------------

/// Transition latitudes for zone counts 59 down to 2, from the
/// spherical-cap zone geometry. A latitude below entry `i` has at least
/// `59 - i` longitude zones.
static NL_TRANSITIONS: LazyLock<[f64; 58]> = LazyLock::new(|| {
    use std::f64::consts::PI;
    let numerator = 1.0 - (PI / (2.0 * NZ)).cos();
    let mut table = [0.0; 58];
    for (i, transition) in table.iter_mut().enumerate() {
        let count = 59.0 - i as f64;
        let denominator = 1.0 - (2.0 * PI / count).cos();
        *transition = (numerator / denominator).sqrt().acos().to_degrees();
    }
    table
});

/// Longitude zone count for a latitude, 1 to 59.
///
/// Latitudes beyond 87 degrees share a single polar zone. Exactly 87
/// belongs to zone count 2: the count-2 transition computes to 87 degrees
/// on the nose, so 87.0 falls through the table scan while anything
/// greater is caught by the polar test first.
pub fn nl(latitude: f64) -> u32 {
    let latitude = latitude.abs();
    if latitude > 87.0 {
        return 1;
    }
    for (i, &transition) in NL_TRANSITIONS.iter().enumerate() {
        if latitude < transition {
            return 59 - i as u32;
        }
    }
    2
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode a coordinate into the zone-relative CPR form.
///
/// Encoding always works over the full 360 degree circle; this entry
/// point exists for simulation and test traffic, not the live decode
/// pipeline, which only ever extracts raw coordinates off the air.
pub fn encode(position: &GlobalCoordinate, odd_format: bool, encoding_bits: u8) -> CprCoordinate {
    let scale = (1u64 << encoding_bits) as f64;
    let parity = if odd_format { 1.0 } else { 0.0 };

    let dlat = 360.0 / (60.0 - parity);
    let yz = (scale * position.latitude.rem_euclid(dlat) / dlat + 0.5).floor();
    let recovered_latitude = dlat * (yz / scale + (position.latitude / dlat).floor());

    let zones = (nl(recovered_latitude) as f64 - parity).max(1.0);
    let dlon = 360.0 / zones;
    let xz = (scale * position.longitude.rem_euclid(dlon) / dlon + 0.5).floor();

    CprCoordinate::new(
        yz.rem_euclid(scale) as u32,
        xz.rem_euclid(scale) as u32,
        odd_format,
        encoding_bits,
    )
}

// ---------------------------------------------------------------------------
// Local decode
// ---------------------------------------------------------------------------

/// Resolve a single frame against a reference position known to lie
/// within half a zone of the truth.
pub fn decode_local(coordinate: &CprCoordinate, reference: &GlobalCoordinate) -> GlobalCoordinate {
    let scale = (1u64 << coordinate.encoding_bits) as f64;
    let base = if coordinate.is_surface() { 90.0 } else { 360.0 };
    let parity = if coordinate.odd_format { 1.0 } else { 0.0 };

    let dlat = base / (60.0 - parity);
    let lat_fraction = coordinate.raw_latitude as f64 / scale;
    let j = (reference.latitude / dlat).floor()
        + (0.5 + reference.latitude.rem_euclid(dlat) / dlat - lat_fraction).floor();
    let latitude = dlat * (j + lat_fraction);

    let zones = (nl(latitude) as f64 - parity).max(1.0);
    let longitude = if coordinate.raw_longitude == 0 {
        // A raw longitude of zero sits exactly on a zone edge, where the
        // rounding term can land on an integer and one ulp decides the
        // zone. Fixed-point arithmetic keeps the offset selection exact.
        zero_longitude_exact(reference.longitude, base, zones)
    } else {
        let dlon = base / zones;
        let lon_fraction = coordinate.raw_longitude as f64 / scale;
        let m = (reference.longitude / dlon).floor()
            + (0.5 + reference.longitude.rem_euclid(dlon) / dlon - lon_fraction).floor();
        dlon * (m + lon_fraction)
    };

    GlobalCoordinate::new(latitude, longitude)
}

/// The zone-offset formula for an encoded fraction of exactly zero,
/// computed in i128 fixed point. Behaviorally identical to the floating
/// point path, minus its rounding.
fn zero_longitude_exact(reference_longitude: f64, base: f64, zones: f64) -> f64 {
    let reference = (reference_longitude * FIXED_SCALE as f64).round() as i128;
    let dlon = (base as i128 * FIXED_SCALE) / zones as i128;
    let remainder = reference.rem_euclid(dlon);
    let m = reference.div_euclid(dlon)
        + (FIXED_SCALE / 2 + remainder * FIXED_SCALE / dlon).div_euclid(FIXED_SCALE);
    (dlon * m) as f64 / FIXED_SCALE as f64
}

// ---------------------------------------------------------------------------
// Global decode
// ---------------------------------------------------------------------------

/// Resolve an opposite-parity frame pair, `later` being the more recent.
/// Returns `None` when the pair cannot produce a fix; callers retry with
/// a later pair.
pub fn decode_global(
    early: &CprCoordinate,
    later: &CprCoordinate,
    receiver: Option<&GlobalCoordinate>,
) -> Option<GlobalCoordinate> {
    try_decode_global(early, later, receiver).ok()
}

/// As `decode_global`, but names the reason a pair produced no fix.
pub fn try_decode_global(
    early: &CprCoordinate,
    later: &CprCoordinate,
    receiver: Option<&GlobalCoordinate>,
) -> Result<GlobalCoordinate> {
    if early.odd_format == later.odd_format {
        return Err(AdsbError::CprParityMismatch);
    }
    if early.encoding_bits != later.encoding_bits {
        return Err(AdsbError::CprBitWidthMismatch {
            early: early.encoding_bits,
            later: later.encoding_bits,
        });
    }

    let surface = early.is_surface();
    let hint = match (surface, receiver) {
        (true, None) => return Err(AdsbError::CprMissingReceiverPosition),
        (true, Some(hint)) => Some(hint),
        (false, _) => None,
    };

    let (even, odd) = if early.odd_format {
        (later, early)
    } else {
        (early, later)
    };

    let scale = (1u64 << even.encoding_bits) as f64;
    let base = if surface { 90.0 } else { 360.0 };
    let lat_even_fraction = even.raw_latitude as f64 / scale;
    let lat_odd_fraction = odd.raw_latitude as f64 / scale;

    // Combined zone index from both frames
    let j = (59.0 * lat_even_fraction - 60.0 * lat_odd_fraction + 0.5).floor();

    let mut rlat_even = (base / 60.0) * (j.rem_euclid(60.0) + lat_even_fraction);
    let mut rlat_odd = (base / 59.0) * (j.rem_euclid(59.0) + lat_odd_fraction);
    if rlat_even >= 270.0 {
        rlat_even -= 360.0;
    }
    if rlat_odd >= 270.0 {
        rlat_odd -= 360.0;
    }

    // Surface latitude repeats every quarter circle; the receiver decides
    // between the northern candidate and its 90-degree shift
    if let Some(hint) = hint {
        if (hint.latitude - rlat_even).abs() > (hint.latitude - (rlat_even - 90.0)).abs() {
            rlat_even -= 90.0;
            rlat_odd -= 90.0;
        }
    }

    let nl_even = nl(rlat_even);
    let nl_odd = nl(rlat_odd);
    if nl_even != nl_odd {
        // The frames straddle a latitude zone transition; no fix from
        // this pair
        return Err(AdsbError::CprZoneBoundary { nl_even, nl_odd });
    }

    let lon_even_fraction = even.raw_longitude as f64 / scale;
    let lon_odd_fraction = odd.raw_longitude as f64 / scale;
    let m = (lon_even_fraction * (nl_even as f64 - 1.0) - lon_odd_fraction * nl_even as f64 + 0.5)
        .floor();

    let (latitude, lon_fraction, parity) = if later.odd_format {
        (rlat_odd, lon_odd_fraction, 1.0)
    } else {
        (rlat_even, lon_even_fraction, 0.0)
    };
    let zones = (nl_even as f64 - parity).max(1.0);
    let mut longitude = (base / zones) * (m.rem_euclid(zones) + lon_fraction);

    if let Some(hint) = hint {
        longitude = resolve_surface_longitude(longitude, hint.longitude);
    } else if longitude >= 180.0 {
        longitude -= 360.0;
    }

    Ok(GlobalCoordinate::new(latitude, longitude))
}

/// Pick the quarter-circle rotation of a surface longitude candidate
/// whose 0-360 bearing is the shortest arc from the receiver's own.
fn resolve_surface_longitude(candidate: f64, receiver_longitude: f64) -> f64 {
    let receiver_bearing = receiver_longitude.rem_euclid(360.0);
    let mut best = candidate;
    let mut best_distance = f64::INFINITY;
    for rotation in 0..4 {
        let rotated = candidate - 90.0 * rotation as f64;
        let mut distance = (rotated.rem_euclid(360.0) - receiver_bearing).abs();
        if distance > 180.0 {
            distance = 360.0 - distance;
        }
        if distance < best_distance {
            best_distance = distance;
            best = rotated;
        }
    }
    if best < -180.0 {
        best += 360.0;
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
