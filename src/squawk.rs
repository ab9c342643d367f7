//! Mode-A identity (squawk) decoding.

/// Decode a 13-bit identity code into the four octal squawk digits.
///
/// Bit order is C1 A1 C2 A2 C4 A4 (X) B1 D1 B2 D2 B4 D4. The result keeps
/// the familiar reading form, e.g. `7700`, one octal digit per decimal
/// place.
pub fn decode(code: u32) -> u16 {
    let c1 = (code >> 12) & 1;
    let a1 = (code >> 11) & 1;
    let c2 = (code >> 10) & 1;
    let a2 = (code >> 9) & 1;
    let c4 = (code >> 8) & 1;
    let a4 = (code >> 7) & 1;
    // bit 6 is the X/SPI spare
    let b1 = (code >> 5) & 1;
    let d1 = (code >> 4) & 1;
    let b2 = (code >> 3) & 1;
    let d2 = (code >> 2) & 1;
    let b4 = (code >> 1) & 1;
    let d4 = code & 1;

    let a = a4 * 4 + a2 * 2 + a1;
    let b = b4 * 4 + b2 * 2 + b1;
    let c = c4 * 4 + c2 * 2 + c1;
    let d = d4 * 4 + d2 * 2 + d1;

    (a * 1000 + b * 100 + c * 10 + d) as u16
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
