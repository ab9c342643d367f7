//! Altitude code conversion for extended squitter fields.
//!
//! Two encodings share the altitude fields, selected by the Q-bit:
//! - Q=1: binary, 25 ft resolution with a -1000 ft offset
//! - Q=0: 100 ft Gillham gray code, as used by older transponders
//!
//! An unresolvable Gillham code yields `None`, not an error; garbage
//! altitude codes are routine in a live RF feed.

/// Decode the 11-bit binary altitude code (Q-bit already stripped).
pub fn binary_altitude(code: u32) -> i32 {
    code as i32 * 25 - 1000
}

/// Decode a 12-bit altitude code from an airborne position message.
pub fn altitude_12bit(code: u32) -> Option<i32> {
    if code == 0 {
        return None;
    }

    let q_bit = (code >> 4) & 1;
    if q_bit == 1 {
        // Remove the Q-bit to recover the 11-bit binary code
        let n = ((code >> 5) << 4) | (code & 0x0F);
        Some(binary_altitude(n))
    } else {
        gillham_altitude(code)
    }
}

/// Decode a 13-bit Mode-C style altitude code (TCAS threat identity).
///
/// The M-bit selects metric altitude, which is not transmitted by ADS-B
/// equipage and decodes to `None`; Q and Gillham handling follow the
/// 12-bit field after stripping M.
pub fn altitude_13bit(code: u32) -> Option<i32> {
    if code == 0 {
        return None;
    }

    let m_bit = (code >> 6) & 1;
    if m_bit == 1 {
        return None;
    }

    let q_bit = (code >> 4) & 1;
    if q_bit == 1 {
        let n = ((code & 0x1F80) >> 2) | ((code & 0x0020) >> 1) | (code & 0x000F);
        Some(binary_altitude(n))
    } else {
        gillham_altitude(code)
    }
}

/// Decode a 100-ft resolution Gillham gray code altitude.
///
/// Bit order is C1 A1 C2 A2 C4 A4 (M) B1 (Q/D1) B2 D2 B4 D4; the D digit
/// only matters above the altitudes ADS-B reports this way and is left out.
pub fn gillham_altitude(code: u32) -> Option<i32> {
    let c1 = (code >> 12) & 1;
    let a1 = (code >> 11) & 1;
    let c2 = (code >> 10) & 1;
    let a2 = (code >> 9) & 1;
    let c4 = (code >> 8) & 1;
    let a4 = (code >> 7) & 1;
    let b1 = (code >> 5) & 1;
    let b2 = (code >> 3) & 1;
    let b4 = (code >> 1) & 1;

    // 100-ft component: gray-coded C digit
    let mut c_bin = c4 * 4 + c2 * 2 + c1;
    c_bin ^= c_bin >> 2;
    c_bin ^= c_bin >> 1;

    if c_bin == 0 || c_bin >= 6 {
        return None;
    }

    // 500-ft component: gray code over the combined A and B digits
    let ab_gray = (a4 * 4 + a2 * 2 + a1) << 3 | (b4 * 4 + b2 * 2 + b1);
    let mut ab_bin = ab_gray;
    ab_bin ^= ab_bin >> 4;
    ab_bin ^= ab_bin >> 2;
    ab_bin ^= ab_bin >> 1;

    let altitude = ab_bin as i32 * 500 + c_bin as i32 * 100 - 1200;

    if !(-1200..=126750).contains(&altitude) {
        return None;
    }

    Some(altitude)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
