//! Decode 56-bit extended squitter payloads into typed messages.
//!
//! The 5-bit format type code selects one of seven message families:
//! - TC 1-4:   Aircraft identification and emitter category
//! - TC 5-8:   Surface position (movement, track, 19-bit CPR)
//! - TC 0, 9-18, 20-22: Airborne position (altitude + 17-bit CPR)
//! - TC 19:    Airborne velocity (ground vector or airspeed/heading)
//! - TC 28:    Aircraft status (emergency or TCAS resolution advisory)
//! - TC 29:    Target state and status (version 1 or 2 layout)
//! - TC 31:    Aircraft operational status
//!
//! The payload is assumed CRC-valid; every bit pattern in every field is a
//! legal (if garbage) value, so decoding never fails once the length check
//! passes. Reserved type codes classify as `Unknown` with no sub-message.

use std::sync::LazyLock;

use crate::altitude;
use crate::cursor::BitCursor;
use crate::squawk;
use crate::stats::SquitterStatistics;
use crate::types::*;

/// Extended squitter payload length in bytes.
pub const PAYLOAD_BYTES: usize = 7;

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Emitter categories keyed by (type code - 1, 3-bit category).
/// Reserved cells carry their raw table index verbatim.
const EMITTER_CATEGORIES: [[EmitterCategory; 8]; 4] = {
    use crate::types::EmitterCategory::*;
    [
        // Set D (type 1): entirely reserved
        [
            Reserved(0),
            Reserved(1),
            Reserved(2),
            Reserved(3),
            Reserved(4),
            Reserved(5),
            Reserved(6),
            Reserved(7),
        ],
        // Set C (type 2)
        [
            None,
            SurfaceEmergencyVehicle,
            Reserved(10),
            SurfaceServiceVehicle,
            PointObstacle,
            ClusterObstacle,
            LineObstacle,
            Reserved(15),
        ],
        // Set B (type 3)
        [
            None,
            Glider,
            LighterThanAir,
            Parachutist,
            Ultralight,
            Reserved(21),
            UnmannedAerialVehicle,
            SpaceVehicle,
        ],
        // Set A (type 4)
        [
            None,
            LightAircraft,
            SmallAircraft,
            LargeAircraft,
            HighVortexLargeAircraft,
            HeavyAircraft,
            HighPerformanceAircraft,
            Rotorcraft,
        ],
    ]
};

/// Ground speeds in knots for movement values 1-124, interpolated across
/// the eight documented sub-ranges of the movement table. Value 0 (no
/// information) and 125-127 (reserved / reversing) are handled before the
/// table is consulted.
static SURFACE_SPEEDS: LazyLock<[f64; 125]> = LazyLock::new(|| {
    // (first movement value, entries, base speed, step)
    const RANGES: [(usize, usize, f64, f64); 8] = [
        (1, 1, 0.0, 0.0),
        (2, 7, 0.125, 0.125),
        (9, 4, 1.0, 0.25),
        (13, 26, 2.0, 0.5),
        (39, 55, 15.0, 1.0),
        (94, 15, 70.0, 2.0),
        (109, 15, 100.0, 5.0),
        (124, 1, 175.0, 0.0),
    ];
    let mut table = [0.0; 125];
    for (first, entries, base, step) in RANGES {
        for i in 0..entries {
            table[first + i] = base + step * i as f64;
        }
    }
    table
});

/// Maximum aircraft length in metres per 4-bit length/width class.
const MAXIMUM_LENGTHS: [f64; 16] = [
    15.0, 15.0, 25.0, 25.0, 35.0, 35.0, 45.0, 45.0, 55.0, 55.0, 65.0, 65.0, 75.0, 75.0, 85.0, 85.0,
];

/// Maximum aircraft width in metres per 4-bit length/width class.
const MAXIMUM_WIDTHS: [f64; 16] = [
    11.5, 23.0, 28.5, 34.0, 33.0, 38.0, 39.5, 45.0, 45.0, 52.0, 59.5, 67.0, 72.5, 80.0, 80.0, 90.0,
];

// ---------------------------------------------------------------------------
// Character extraction
// ---------------------------------------------------------------------------

/// Read `count` 6-bit characters from the cursor using the Mode-S
/// character alphabet. Reserved codes come through as `#`.
pub fn extract_characters(cursor: &mut BitCursor<'_>, count: usize) -> String {
    let mut result = String::with_capacity(count);
    for _ in 0..count {
        let index = cursor.read_bits(6) as usize;
        result.push(CALLSIGN_CHARSET[index] as char);
    }
    result
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Stateless extended squitter decoder.
///
/// The decoder keeps no per-call state; a fresh bit cursor is scoped to
/// each `decode` invocation so concurrent calls from many receiver threads
/// never interleave. The statistics sink is the only shared collaborator
/// and serializes its own updates.
#[derive(Debug)]
pub struct SquitterDecoder<S> {
    statistics: S,
}

impl<S: SquitterStatistics> SquitterDecoder<S> {
    pub fn new(statistics: S) -> SquitterDecoder<S> {
        SquitterDecoder { statistics }
    }

    /// Decode a 7-byte extended squitter payload.
    ///
    /// Returns `None` for any other payload length without touching the
    /// statistics sink; a 7-byte payload always decodes, and the sink is
    /// notified exactly once per result.
    pub fn decode(&self, payload: &[u8]) -> Option<DecodedMessage> {
        if payload.len() != PAYLOAD_BYTES {
            return None;
        }

        let mut cursor = BitCursor::new(payload);
        let type_code = cursor.read_bits(5) as u8;
        let format = MessageFormat::from_type_code(type_code);

        let message = match format {
            MessageFormat::IdentificationAndCategory => MessageVariant::IdentifierAndCategory(
                decode_identification(&mut cursor, type_code),
            ),
            MessageFormat::SurfacePosition => {
                MessageVariant::SurfacePosition(decode_surface_position(&mut cursor))
            }
            MessageFormat::AirbornePosition | MessageFormat::NoPositionInformation => {
                MessageVariant::AirbornePosition(decode_airborne_position(&mut cursor, type_code))
            }
            MessageFormat::AirborneVelocity => {
                MessageVariant::AirborneVelocity(decode_airborne_velocity(&mut cursor))
            }
            MessageFormat::AircraftStatus => {
                MessageVariant::AircraftStatus(decode_aircraft_status(&mut cursor))
            }
            MessageFormat::TargetStateAndStatus => {
                MessageVariant::TargetStateAndStatus(decode_target_state(&mut cursor))
            }
            MessageFormat::AircraftOperationalStatus => MessageVariant::AircraftOperationalStatus(
                decode_operational_status(&mut cursor),
            ),
            MessageFormat::Unknown => MessageVariant::None,
        };

        self.statistics.record_decode(format, type_code);

        Some(DecodedMessage {
            type_code,
            format,
            message,
        })
    }
}

// ---------------------------------------------------------------------------
// Family decoders
// ---------------------------------------------------------------------------

/// TC 1-4: emitter category + 8-character identification.
fn decode_identification(cursor: &mut BitCursor<'_>, type_code: u8) -> IdentifierAndCategory {
    let category = cursor.read_bits(3) as usize;
    IdentifierAndCategory {
        emitter_category: EMITTER_CATEGORIES[(type_code - 1) as usize][category],
        identification: extract_characters(cursor, 8),
    }
}

/// TC 5-8: movement, ground track and the 19-bit class CPR coordinate.
fn decode_surface_position(cursor: &mut BitCursor<'_>) -> SurfacePosition {
    let movement = cursor.read_bits(7);

    let (ground_speed, ground_speed_exceeded, is_reversing) = match movement {
        0 | 125 | 126 => (None, None, None),
        127 => (None, None, Some(true)),
        _ => (
            Some(SURFACE_SPEEDS[movement as usize]),
            Some(movement == 124),
            Some(false),
        ),
    };

    let track_valid = cursor.read_bit();
    let track_raw = cursor.read_bits(7);
    let ground_track = track_valid.then(|| track_raw as f64 * 2.8125);

    let position_time_is_exact = cursor.read_bit();
    let compact_position = extract_cpr(cursor, 19);

    SurfacePosition {
        ground_speed,
        ground_speed_exceeded,
        is_reversing,
        ground_track,
        position_time_is_exact,
        compact_position,
    }
}

/// TC 0 or 9-18/20-22: surveillance status, altitude and 17-bit CPR.
///
/// Type 0 shares the bit layout but reports no position: its altitude and
/// CPR fields are invalid and left absent, and the NIC supplement slot is
/// a reserved bit.
fn decode_airborne_position(cursor: &mut BitCursor<'_>, type_code: u8) -> AirbornePosition {
    let surveillance_status = SurveillanceStatus::from_bits(cursor.read_bits(2) as u8);

    let nic_b = if type_code == 0 {
        cursor.skip(1);
        None
    } else {
        Some(cursor.read_bit())
    };

    let altitude_code = cursor.read_bits(12);
    let altitude = altitude::altitude_12bit(altitude_code);
    let (barometric_altitude, geometric_altitude) = match type_code {
        9..=18 => (altitude, None),
        20..=22 => (None, altitude),
        _ => (None, None),
    };

    let position_time_is_exact = cursor.read_bit();
    let cpr = extract_cpr(cursor, 17);
    let compact_position = (type_code != 0).then_some(cpr);

    AirbornePosition {
        surveillance_status,
        nic_b,
        barometric_altitude,
        geometric_altitude,
        position_time_is_exact,
        compact_position,
    }
}

/// TC 19: velocity over ground or through the air, by subtype.
fn decode_airborne_velocity(cursor: &mut BitCursor<'_>) -> AirborneVelocity {
    let subtype = cursor.read_bits(3) as u8;

    let velocity_type = match subtype {
        1 => VelocityType::GroundSpeedSubsonic,
        2 => VelocityType::GroundSpeedSupersonic,
        3 => VelocityType::AirspeedSubsonic,
        4 => VelocityType::AirspeedSupersonic,
        _ => VelocityType::Reserved(subtype),
    };

    let mut message = AirborneVelocity {
        velocity_type,
        change_of_intent: None,
        horizontal_velocity_error: None,
        vector_velocity: None,
        heading: None,
        airspeed_is_true_airspeed: None,
        airspeed: None,
        airspeed_exceeded: None,
        vertical_rate_is_barometric: None,
        vertical_rate: None,
        vertical_rate_exceeded: None,
        geometric_altitude_delta: None,
        geometric_altitude_delta_exceeded: None,
    };

    if !(1..=4).contains(&subtype) {
        return message;
    }

    // Supersonic subtypes scale speed fields by four
    let unit = if subtype == 2 || subtype == 4 { 4 } else { 1 };

    message.change_of_intent = Some(cursor.read_bit());
    cursor.skip(1); // IFR capability, not carried
    message.horizontal_velocity_error = match cursor.read_bits(3) {
        1 => Some(10.0),
        2 => Some(3.0),
        3 => Some(1.0),
        4 => Some(0.3),
        _ => None,
    };

    if subtype <= 2 {
        let westerly = cursor.read_bit();
        let east_west_raw = cursor.read_bits(10);
        let southerly = cursor.read_bit();
        let north_south_raw = cursor.read_bits(10);

        let component = |raw: u32, negative: bool| -> Option<i32> {
            if raw == 0 {
                return None;
            }
            let speed = (raw as i32 - 1) * unit;
            Some(if negative { -speed } else { speed })
        };

        message.vector_velocity = Some(VectorVelocity {
            east_west: component(east_west_raw, westerly),
            east_west_exceeded: east_west_raw == 1023,
            north_south: component(north_south_raw, southerly),
            north_south_exceeded: north_south_raw == 1023,
        });
    } else {
        let heading_valid = cursor.read_bit();
        let heading_raw = cursor.read_bits(10);
        message.heading = heading_valid.then(|| heading_raw as f64 * 0.3515625);

        message.airspeed_is_true_airspeed = Some(cursor.read_bit());
        let airspeed_raw = cursor.read_bits(10);
        if airspeed_raw != 0 {
            message.airspeed = Some(((airspeed_raw as i32 - 1) * unit) as f64);
            message.airspeed_exceeded = Some(airspeed_raw == 1023);
        }
    }

    message.vertical_rate_is_barometric = Some(cursor.read_bit());
    let rate_downward = cursor.read_bit();
    let rate_raw = cursor.read_bits(9);
    if rate_raw != 0 {
        let rate = (rate_raw as i32 - 1) * 64;
        message.vertical_rate = Some(if rate_downward { -rate } else { rate });
        message.vertical_rate_exceeded = Some(rate_raw == 511);
    }

    cursor.skip(2);

    let delta_below = cursor.read_bit();
    let delta_raw = cursor.read_bits(7);
    if delta_raw != 0 {
        let delta = (delta_raw as i32 - 1) * 25;
        message.geometric_altitude_delta = Some(if delta_below { -delta } else { delta });
        message.geometric_altitude_delta_exceeded = Some(delta_raw == 127);
    }

    message
}

/// TC 28: emergency status or TCAS resolution advisory broadcast.
fn decode_aircraft_status(cursor: &mut BitCursor<'_>) -> AircraftStatus {
    let subtype = cursor.read_bits(3) as u8;

    match subtype {
        0 => AircraftStatus {
            status_type: AircraftStatusType::NoInformation,
            emergency_status: None,
            tcas_advisory: None,
        },
        1 => {
            let emergency_state = EmergencyState::from_bits(cursor.read_bits(3) as u8);
            let squawk_raw = cursor.read_bits(13);
            let squawk = (squawk_raw != 0).then(|| squawk::decode(squawk_raw));
            AircraftStatus {
                status_type: AircraftStatusType::EmergencyStatus,
                emergency_status: Some(EmergencyStatus {
                    emergency_state,
                    squawk,
                }),
                tcas_advisory: None,
            }
        }
        2 => AircraftStatus {
            status_type: AircraftStatusType::TcasResolutionAdvisory,
            emergency_status: None,
            tcas_advisory: Some(decode_tcas_advisory(cursor)),
        },
        _ => AircraftStatus {
            status_type: AircraftStatusType::Reserved(subtype),
            emergency_status: None,
            tcas_advisory: None,
        },
    }
}

fn decode_tcas_advisory(cursor: &mut BitCursor<'_>) -> TcasResolutionAdvisory {
    // The leading ARA bit selects how the shared 13-bit value reads: set
    // means a single-threat advisory, clear with the multiple-threat
    // encounter flag means per-threat bits.
    let single_threat_coding = cursor.read_bit();
    let advisory = cursor.read_bits(13) as u16;
    let advisory_complement = cursor.read_bits(4) as u8;
    let advisory_terminated = cursor.read_bit();
    let multiple_threat_encounter = cursor.read_bit();

    let (single_threat_advisory, multiple_threat_advisory) = if single_threat_coding {
        (Some(advisory), None)
    } else if multiple_threat_encounter {
        (None, Some(advisory))
    } else {
        (None, None)
    };

    let mut threat_icao = None;
    let mut threat_altitude = None;
    let mut threat_range = None;
    let mut threat_range_exceeded = false;
    let mut threat_bearing = None;

    match cursor.read_bits(2) {
        1 => {
            threat_icao = Some(cursor.read_bits(24));
            cursor.skip(2);
        }
        2 => {
            // Mode-C altitude, needs the Gillham path after bit stripping
            threat_altitude = altitude::altitude_13bit(cursor.read_bits(13));
            match cursor.read_bits(7) {
                0 => {}
                127 => threat_range_exceeded = true,
                range_raw => threat_range = Some((range_raw as f64 - 1.0) / 10.0 + 0.05),
            }
            let bearing_raw = cursor.read_bits(6);
            if bearing_raw != 0 {
                threat_bearing = Some((bearing_raw as f64 - 1.0) * 6.0);
            }
        }
        _ => cursor.skip(26),
    }

    TcasResolutionAdvisory {
        single_threat_advisory,
        multiple_threat_advisory,
        advisory_complement,
        advisory_terminated,
        multiple_threat_encounter,
        threat_icao,
        threat_altitude,
        threat_range,
        threat_range_exceeded,
        threat_bearing,
    }
}

/// TC 29: target state and status, version 1 or 2 layout.
fn decode_target_state(cursor: &mut BitCursor<'_>) -> TargetStateAndStatus {
    let subtype = cursor.read_bits(2) as u8;

    match subtype {
        0 => {
            // The backwards-compatibility bit flags an ADS-B version 0
            // transmitter using the old register layout; those are
            // discarded on purpose, not an error.
            if cursor.read_bit() {
                TargetStateAndStatus {
                    status_type: TargetStateAndStatusType::Version1,
                    version1: None,
                    version2: None,
                }
            } else {
                TargetStateAndStatus {
                    status_type: TargetStateAndStatusType::Version1,
                    version1: Some(decode_target_state_v1(cursor)),
                    version2: None,
                }
            }
        }
        1 => TargetStateAndStatus {
            status_type: TargetStateAndStatusType::Version2,
            version1: None,
            version2: Some(decode_target_state_v2(cursor)),
        },
        _ => TargetStateAndStatus {
            status_type: TargetStateAndStatusType::Reserved(subtype),
            version1: None,
            version2: None,
        },
    }
}

fn decode_target_state_v1(cursor: &mut BitCursor<'_>) -> TargetStateVersion1 {
    let vertical_data_source = cursor.read_bits(2) as u8;
    let target_altitude_is_msl = cursor.read_bit();
    let target_altitude_capability = cursor.read_bits(2) as u8;
    let vertical_mode_indicator = cursor.read_bits(2) as u8;

    let altitude_raw = cursor.read_bits(10);
    let target_altitude = (altitude_raw <= 1010).then(|| altitude_raw as i32 * 100 - 1000);

    let horizontal_data_source = cursor.read_bits(2) as u8;
    let heading_raw = cursor.read_bits(9);
    let target_heading = (heading_raw <= 359).then_some(heading_raw as u16);
    let target_heading_is_track = cursor.read_bit();
    let horizontal_mode_indicator = cursor.read_bits(2) as u8;

    let nac_p = cursor.read_bits(4) as u8;
    let nic_baro = cursor.read_bit();
    let sil = cursor.read_bits(2) as u8;

    TargetStateVersion1 {
        vertical_data_source,
        target_altitude_is_msl,
        target_altitude_capability,
        vertical_mode_indicator,
        target_altitude,
        horizontal_data_source,
        target_heading,
        target_heading_is_track,
        horizontal_mode_indicator,
        nac_p,
        nic_baro,
        sil,
    }
}

fn decode_target_state_v2(cursor: &mut BitCursor<'_>) -> TargetStateVersion2 {
    let sil_supplement = cursor.read_bit();
    let selected_altitude_is_fms = cursor.read_bit();

    let altitude_raw = cursor.read_bits(11);
    let selected_altitude = (altitude_raw != 0).then(|| (altitude_raw as i32 - 1) * 32);

    let pressure_raw = cursor.read_bits(9);
    let barometric_pressure_setting =
        (pressure_raw != 0).then(|| (pressure_raw as f64 - 1.0) * 0.8 + 800.0);

    let heading_valid = cursor.read_bit();
    let heading_raw = cursor.read_bits(9);
    let selected_heading = heading_valid.then(|| heading_raw as f64 * 0.703125);

    let nac_p = cursor.read_bits(4) as u8;
    let nic_baro = cursor.read_bit();
    let sil = cursor.read_bits(2) as u8;

    // The four autopilot-state flags are only meaningful when the mode
    // validity bit is set; otherwise their raw values are discarded.
    let modes_valid = cursor.read_bit();
    let autopilot = cursor.read_bit();
    let vnav = cursor.read_bit();
    let altitude_hold = cursor.read_bit();
    cursor.skip(1); // reserved for ADS-R
    let approach = cursor.read_bit();
    let tcas_operational = cursor.read_bit();

    TargetStateVersion2 {
        sil_supplement,
        selected_altitude_is_fms,
        selected_altitude,
        barometric_pressure_setting,
        selected_heading,
        nac_p,
        nic_baro,
        sil,
        autopilot_engaged: modes_valid.then_some(autopilot),
        vnav_engaged: modes_valid.then_some(vnav),
        altitude_hold_active: modes_valid.then_some(altitude_hold),
        approach_mode_active: modes_valid.then_some(approach),
        tcas_operational,
    }
}

/// TC 31: aircraft operational status.
fn decode_operational_status(cursor: &mut BitCursor<'_>) -> AircraftOperationalStatus {
    let subtype = cursor.read_bits(3) as u8;

    let status_type = match subtype {
        0 => AircraftOperationalStatusType::Airborne,
        1 => AircraftOperationalStatusType::Surface,
        _ => AircraftOperationalStatusType::Reserved(subtype),
    };

    let mut message = AircraftOperationalStatus {
        status_type,
        adsb_version: 0,
        airborne_capability: None,
        surface_capability: None,
        maximum_length: None,
        maximum_width: None,
        operational_mode: None,
        system_design_assurance: None,
        gps_lateral_offset: None,
        gps_longitudinal_offset: None,
        gps_offset_applied_by_sensor: None,
        nic_a: None,
        nac_p: None,
        gva: None,
        sil: None,
        nic_baro: None,
        track_angle_is_heading: None,
        horizontal_reference_is_magnetic: None,
        sil_supplement: None,
    };

    if subtype > 1 {
        // Reserved subtypes define no capability layout; only the version
        // field sits at a known position.
        cursor.skip(32);
        message.adsb_version = cursor.read_bits(3) as u8;
        return message;
    }

    let surface = subtype == 1;

    let (airborne_capability, surface_capability, length_width) = if surface {
        let capability = cursor.read_bits(12) as u16;
        let length_width = cursor.read_bits(4) as usize;
        (None, Some(capability), Some(length_width))
    } else {
        (Some(cursor.read_bits(16) as u16), None, None)
    };

    let operational_mode = cursor.read_bits(16) as u16;
    let version = cursor.read_bits(3) as u8;
    message.adsb_version = version;

    let nic_a = cursor.read_bit();
    let nac_p = cursor.read_bits(4) as u8;
    let gva = cursor.read_bits(2) as u8;
    let sil = cursor.read_bits(2) as u8;
    let baro_or_track = cursor.read_bit();
    let hrd = cursor.read_bit();
    let sil_supplement = cursor.read_bit();

    // Version 0 transmitters predate every field after the capability
    // code; versions 3 and up are reserved and treated the same way.
    message.airborne_capability = airborne_capability;
    message.surface_capability = surface_capability;
    if version == 0 || version > 2 {
        return message;
    }

    message.operational_mode = Some(operational_mode);
    message.nic_a = Some(nic_a);
    message.nac_p = Some(nac_p);
    message.sil = Some(sil);
    message.horizontal_reference_is_magnetic = Some(hrd);
    if surface {
        message.track_angle_is_heading = Some(baro_or_track);
        if let Some(length_width) = length_width {
            message.maximum_length = Some(MAXIMUM_LENGTHS[length_width]);
            message.maximum_width = Some(MAXIMUM_WIDTHS[length_width]);
        }
    } else {
        message.nic_baro = Some(baro_or_track);
        message.gva = Some(gva);
    }

    if version == 2 {
        message.sil_supplement = Some(sil_supplement);
        message.system_design_assurance = Some(((operational_mode >> 8) & 0x03) as u8);

        if surface {
            // GPS antenna offset lives in the low byte of the
            // operational-mode word
            let lateral_raw = (operational_mode >> 5) & 0x07;
            message.gps_lateral_offset = match lateral_raw {
                0 => None,
                1..=3 => Some(-(2 * lateral_raw as i8)),
                _ => Some(2 * (lateral_raw as i8 - 4)),
            };

            let longitudinal_raw = operational_mode & 0x1F;
            match longitudinal_raw {
                0 => {}
                1 => message.gps_offset_applied_by_sensor = Some(true),
                _ => {
                    message.gps_offset_applied_by_sensor = Some(false);
                    message.gps_longitudinal_offset = Some((longitudinal_raw as u8 - 1) * 2);
                }
            }
        }
    }

    message
}

// ---------------------------------------------------------------------------
// CPR extraction
// ---------------------------------------------------------------------------

/// Read the odd/even flag and the two 17-bit axes. Surface coordinates are
/// stored shifted into a true 19-bit encoding; the two missing high bits
/// are the quarter-globe ambiguity resolved during global decode.
fn extract_cpr(cursor: &mut BitCursor<'_>, encoding_bits: u8) -> CprCoordinate {
    let odd_format = cursor.read_bit();
    let shift = encoding_bits - 17;
    let raw_latitude = cursor.read_bits(17) << shift;
    let raw_longitude = cursor.read_bits(17) << shift;
    CprCoordinate::new(raw_latitude, raw_longitude, odd_format, encoding_bits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DecodeCounters;

    fn decoder() -> SquitterDecoder<DecodeCounters> {
        SquitterDecoder::new(DecodeCounters::new())
    }

    /// Decode a hex-encoded 7-byte payload.
    fn decode_hex(hex: &str) -> DecodedMessage {
        let payload = hex_bytes(hex);
        decoder().decode(&payload).expect("7-byte payload")
    }

    fn hex_bytes(hex: &str) -> Vec<u8> {
        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
            .collect()
    }

    /// Pack (value, width) fields MSB-first into a 7-byte payload.
    fn build(fields: &[(u32, u32)]) -> [u8; 7] {
        let mut bits = 0u64;
        let mut used = 0;
        for &(value, width) in fields {
            bits = (bits << width) | value as u64;
            used += width;
        }
        assert_eq!(used, 56, "field widths must total 56 bits");
        let mut payload = [0u8; 7];
        for (i, byte) in payload.iter_mut().enumerate() {
            *byte = (bits >> (48 - i * 8)) as u8;
        }
        payload
    }

    // -- Length precondition --

    #[test]
    fn test_wrong_length_is_none() {
        let decoder = decoder();
        assert!(decoder.decode(&[]).is_none());
        assert!(decoder.decode(&[0u8; 6]).is_none());
        assert!(decoder.decode(&[0u8; 8]).is_none());
        assert!(decoder.decode(&[0u8; 14]).is_none());
    }

    #[test]
    fn test_any_7_byte_payload_decodes() {
        let decoder = decoder();
        for seed in 0..=255u8 {
            let payload = [seed, seed ^ 0x55, seed ^ 0xAA, 0xFF, 0x00, seed, !seed];
            assert!(decoder.decode(&payload).is_some());
        }
    }

    #[test]
    fn test_statistics_once_per_decode() {
        let counters = DecodeCounters::new();
        let decoder = SquitterDecoder::new(&counters);
        decoder.decode(&hex_bytes("202CC371C32CE0")).unwrap();
        assert!(decoder.decode(&[0u8; 3]).is_none()); // wrong length, no increment
        assert_eq!(counters.total(), 1);
        assert_eq!(
            counters.format_count(MessageFormat::IdentificationAndCategory),
            1
        );
    }

    // -- Identification (ME of the KLM1023 reference frame) --

    #[test]
    fn test_identification_klm1023() {
        let msg = decode_hex("202CC371C32CE0");
        assert_eq!(msg.type_code, 4);
        assert_eq!(msg.format, MessageFormat::IdentificationAndCategory);
        let ident = msg.identifier_and_category().unwrap();
        assert_eq!(ident.identification, "KLM1023 ");
        assert_eq!(ident.emitter_category, EmitterCategory::None);
    }

    #[test]
    fn test_identification_category_table_entry() {
        // type 4, category 2 must hit the (3, 2) table cell
        let payload = build(&[
            (4, 5),
            (2, 3),
            (11, 6), // K
            (12, 6), // L
            (13, 6), // M
            (48, 6), // 0
            (49, 6), // 1
            (50, 6), // 2
            (51, 6), // 3
            (32, 6), // space
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let ident = msg.identifier_and_category().unwrap();
        assert_eq!(ident.emitter_category, EmitterCategory::SmallAircraft);
        assert_eq!(ident.identification, "KLM0123 ");
    }

    #[test]
    fn test_identification_reserved_set_d() {
        let payload = build(&[(1, 5), (5, 3), (0, 48)]);
        let msg = decoder().decode(&payload).unwrap();
        assert_eq!(
            msg.identifier_and_category().unwrap().emitter_category,
            EmitterCategory::Reserved(5)
        );
    }

    // -- Airborne position (1090MHz Riddle reference pair) --

    #[test]
    fn test_airborne_position_even() {
        let msg = decode_hex("58C382D690C8AC");
        assert_eq!(msg.type_code, 11);
        assert_eq!(msg.format, MessageFormat::AirbornePosition);
        let position = msg.airborne_position().unwrap();
        assert_eq!(position.barometric_altitude, Some(38000));
        assert_eq!(position.geometric_altitude, None);
        let cpr = position.compact_position.unwrap();
        assert!(!cpr.odd_format);
        assert_eq!(cpr.encoding_bits, 17);
        assert_eq!(cpr.raw_latitude, 93000);
        assert_eq!(cpr.raw_longitude, 51372);
    }

    #[test]
    fn test_airborne_position_odd() {
        let msg = decode_hex("58C386435CC412");
        let position = msg.airborne_position().unwrap();
        assert_eq!(position.barometric_altitude, Some(38000));
        let cpr = position.compact_position.unwrap();
        assert!(cpr.odd_format);
        assert_eq!(cpr.raw_latitude, 74158);
        assert_eq!(cpr.raw_longitude, 50194);
    }

    #[test]
    fn test_airborne_position_altitude_split_at_type_20() {
        // Same body, type codes 9-18 report barometric, 20-22 geometric
        for tc in (9..=18).chain(20..=22) {
            let payload = build(&[(tc, 5), (0, 2), (1, 1), (0xC38, 12), (0, 36)]);
            let msg = decoder().decode(&payload).unwrap();
            assert_eq!(msg.format, MessageFormat::AirbornePosition);
            let position = msg.airborne_position().unwrap();
            if tc <= 18 {
                assert_eq!(position.barometric_altitude, Some(38000), "tc {tc}");
                assert_eq!(position.geometric_altitude, None, "tc {tc}");
            } else {
                assert_eq!(position.barometric_altitude, None, "tc {tc}");
                assert_eq!(position.geometric_altitude, Some(38000), "tc {tc}");
            }
        }
    }

    #[test]
    fn test_type_zero_no_position_information() {
        let payload = build(&[(0, 5), (2, 2), (1, 1), (0xC38, 12), (0, 36)]);
        let msg = decoder().decode(&payload).unwrap();
        assert_eq!(msg.format, MessageFormat::NoPositionInformation);
        let position = msg.airborne_position().unwrap();
        assert_eq!(position.surveillance_status, SurveillanceStatus::TemporaryAlert);
        assert_eq!(position.nic_b, None);
        assert_eq!(position.barometric_altitude, None);
        assert_eq!(position.geometric_altitude, None);
        assert!(position.compact_position.is_none());
        assert!(msg.compact_position().is_none());
    }

    // -- Surface position --

    #[test]
    fn test_surface_position_movement_and_track() {
        // movement 50 -> 15 + 11 * 1 = 26 kt; track 8 -> 22.5 degrees
        let payload = build(&[
            (6, 5),
            (50, 7),
            (1, 1),
            (8, 7),
            (0, 1),
            (1, 1),
            (0x0ABCD, 17),
            (0x1F00F, 17),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        assert_eq!(msg.format, MessageFormat::SurfacePosition);
        let surface = msg.surface_position().unwrap();
        assert_eq!(surface.ground_speed, Some(26.0));
        assert_eq!(surface.ground_speed_exceeded, Some(false));
        assert_eq!(surface.is_reversing, Some(false));
        assert_eq!(surface.ground_track, Some(22.5));
        let cpr = surface.compact_position;
        assert!(cpr.odd_format);
        assert_eq!(cpr.encoding_bits, 19);
        assert_eq!(cpr.raw_latitude, 0x0ABCD << 2);
        assert_eq!(cpr.raw_longitude, 0x1F00F << 2);
    }

    #[test]
    fn test_surface_speed_table_bands() {
        let cases = [
            (1u32, 0.0),
            (2, 0.125),
            (8, 0.875),
            (9, 1.0),
            (12, 1.75),
            (13, 2.0),
            (38, 14.5),
            (39, 15.0),
            (93, 69.0),
            (94, 70.0),
            (108, 98.0),
            (109, 100.0),
            (123, 170.0),
            (124, 175.0),
        ];
        for (movement, expected) in cases {
            let payload = build(&[(5, 5), (movement, 7), (0, 1), (0, 7), (0, 2), (0, 34)]);
            let msg = decoder().decode(&payload).unwrap();
            let surface = msg.surface_position().unwrap();
            assert_eq!(surface.ground_speed, Some(expected), "movement {movement}");
            assert_eq!(surface.ground_speed_exceeded, Some(movement == 124));
        }
    }

    #[test]
    fn test_surface_movement_special_values() {
        for (movement, reversing) in [(0u32, None), (125, None), (126, None), (127, Some(true))] {
            let payload = build(&[(5, 5), (movement, 7), (0, 44)]);
            let msg = decoder().decode(&payload).unwrap();
            let surface = msg.surface_position().unwrap();
            assert_eq!(surface.ground_speed, None, "movement {movement}");
            assert_eq!(surface.is_reversing, reversing, "movement {movement}");
        }
    }

    #[test]
    fn test_surface_track_invalid() {
        let payload = build(&[(7, 5), (1, 7), (0, 1), (99, 7), (0, 2), (0, 34)]);
        let msg = decoder().decode(&payload).unwrap();
        assert_eq!(msg.surface_position().unwrap().ground_track, None);
    }

    // -- Airborne velocity (1090MHz Riddle reference frame) --

    #[test]
    fn test_velocity_ground_vector() {
        let msg = decode_hex("99440994083817");
        assert_eq!(msg.type_code, 19);
        let velocity = msg.airborne_velocity().unwrap();
        assert_eq!(velocity.velocity_type, VelocityType::GroundSpeedSubsonic);
        assert_eq!(velocity.change_of_intent, Some(false));
        assert_eq!(velocity.horizontal_velocity_error, None);

        let vector = velocity.vector_velocity.unwrap();
        assert_eq!(vector.east_west, Some(-8)); // 8 kt westerly
        assert_eq!(vector.north_south, Some(-159)); // 159 kt southerly
        assert!(!vector.east_west_exceeded);
        assert!(!vector.north_south_exceeded);

        assert_eq!(velocity.vertical_rate_is_barometric, Some(false));
        assert_eq!(velocity.vertical_rate, Some(-832));
        assert_eq!(velocity.geometric_altitude_delta, Some(550));
    }

    #[test]
    fn test_velocity_airspeed_subtype() {
        // subtype 3: heading valid 320 raw, TAS, airspeed raw 251 -> 250 kt
        let payload = build(&[
            (19, 5),
            (3, 3),
            (0, 1),
            (0, 1),
            (2, 3),
            (1, 1),
            (320, 10),
            (1, 1),
            (251, 10),
            (1, 1), // barometric source
            (0, 1),
            (0, 9),
            (0, 2),
            (0, 1),
            (0, 7),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let velocity = msg.airborne_velocity().unwrap();
        assert_eq!(velocity.velocity_type, VelocityType::AirspeedSubsonic);
        assert_eq!(velocity.horizontal_velocity_error, Some(3.0));
        assert_eq!(velocity.heading, Some(112.5));
        assert_eq!(velocity.airspeed_is_true_airspeed, Some(true));
        assert_eq!(velocity.airspeed, Some(250.0));
        assert_eq!(velocity.airspeed_exceeded, Some(false));
        assert_eq!(velocity.vector_velocity, None);
        assert_eq!(velocity.vertical_rate, None);
        assert_eq!(velocity.vertical_rate_is_barometric, Some(true));
    }

    #[test]
    fn test_velocity_supersonic_scaling_and_exceeded() {
        // subtype 2, both components at the 1023 ceiling
        let payload = build(&[
            (19, 5),
            (2, 3),
            (0, 5),
            (0, 1),
            (1023, 10),
            (1, 1),
            (1023, 10),
            (0, 2),
            (511, 9),
            (0, 2),
            (0, 8),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let velocity = msg.airborne_velocity().unwrap();
        let vector = velocity.vector_velocity.unwrap();
        assert_eq!(vector.east_west, Some(4088)); // (1023-1) * 4
        assert!(vector.east_west_exceeded);
        assert_eq!(vector.north_south, Some(-4088));
        assert!(vector.north_south_exceeded);
        assert_eq!(velocity.vertical_rate, Some(32640));
        assert_eq!(velocity.vertical_rate_exceeded, Some(true));
    }

    #[test]
    fn test_velocity_reserved_subtype() {
        let payload = build(&[(19, 5), (7, 3), (0, 48)]);
        let msg = decoder().decode(&payload).unwrap();
        let velocity = msg.airborne_velocity().unwrap();
        assert_eq!(velocity.velocity_type, VelocityType::Reserved(7));
        assert_eq!(velocity.vector_velocity, None);
        assert_eq!(velocity.vertical_rate, None);
        assert_eq!(velocity.change_of_intent, None);
    }

    // -- Aircraft status --

    #[test]
    fn test_emergency_status_with_squawk() {
        // subtype 1, state general, squawk 7700
        let payload = build(&[(28, 5), (1, 3), (1, 3), (0b0101010101010, 13), (0, 32)]);
        let msg = decoder().decode(&payload).unwrap();
        assert_eq!(msg.format, MessageFormat::AircraftStatus);
        let status = msg.aircraft_status().unwrap();
        assert_eq!(status.status_type, AircraftStatusType::EmergencyStatus);
        let emergency = status.emergency_status.as_ref().unwrap();
        assert_eq!(emergency.emergency_state, EmergencyState::General);
        assert_eq!(emergency.squawk, Some(7700));
        assert!(status.tcas_advisory.is_none());
    }

    #[test]
    fn test_emergency_status_zero_squawk_absent() {
        let payload = build(&[(28, 5), (1, 3), (0, 3), (0, 13), (0, 32)]);
        let msg = decoder().decode(&payload).unwrap();
        let emergency = msg.aircraft_status().unwrap().emergency_status.clone().unwrap();
        assert_eq!(emergency.emergency_state, EmergencyState::None);
        assert_eq!(emergency.squawk, None);
    }

    #[test]
    fn test_tcas_advisory_threat_icao() {
        // subtype 2, single-threat coding, threat identity type 1
        let payload = build(&[
            (28, 5),
            (2, 3),
            (1, 1),
            (0x1234, 13),
            (0x9, 4),
            (1, 1),
            (0, 1),
            (1, 2),
            (0xABCDEF, 24),
            (0, 2),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let advisory = msg.aircraft_status().unwrap().tcas_advisory.clone().unwrap();
        assert_eq!(advisory.single_threat_advisory, Some(0x1234));
        assert_eq!(advisory.multiple_threat_advisory, None);
        assert_eq!(advisory.advisory_complement, 0x9);
        assert!(advisory.advisory_terminated);
        assert!(!advisory.multiple_threat_encounter);
        assert_eq!(advisory.threat_icao, Some(0xABCDEF));
        assert_eq!(advisory.threat_altitude, None);
    }

    #[test]
    fn test_tcas_advisory_threat_position() {
        // threat identity type 2: 38 000 ft scatters to 0x1838 in the
        // Mode-C bit order (Q set, M clear); range 101, bearing 16
        let payload = build(&[
            (28, 5),
            (2, 3),
            (0, 1),
            (0x0155, 13),
            (0, 4),
            (0, 1),
            (1, 1),
            (2, 2),
            (0x1838, 13),
            (101, 7),
            (16, 6),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let advisory = msg.aircraft_status().unwrap().tcas_advisory.clone().unwrap();
        assert_eq!(advisory.single_threat_advisory, None);
        assert_eq!(advisory.multiple_threat_advisory, Some(0x0155));
        assert_eq!(advisory.threat_altitude, Some(38000));
        let range = advisory.threat_range.unwrap();
        assert!((range - 10.05).abs() < 1e-9);
        assert!(!advisory.threat_range_exceeded);
        assert_eq!(advisory.threat_bearing, Some(90.0));
    }

    #[test]
    fn test_tcas_advisory_range_exceeded() {
        let payload = build(&[
            (28, 5),
            (2, 3),
            (0, 1),
            (0, 13),
            (0, 4),
            (0, 1),
            (0, 1),
            (2, 2),
            (0, 13),
            (127, 7),
            (0, 6),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let advisory = msg.aircraft_status().unwrap().tcas_advisory.clone().unwrap();
        assert_eq!(advisory.threat_range, None);
        assert!(advisory.threat_range_exceeded);
        assert_eq!(advisory.threat_bearing, None);
    }

    // -- Target state and status --

    #[test]
    fn test_target_state_version0_discarded() {
        // subtype 0 with the backwards-compatibility bit set
        let payload = build(&[(29, 5), (0, 2), (1, 1), (0, 48)]);
        let msg = decoder().decode(&payload).unwrap();
        assert_eq!(msg.format, MessageFormat::TargetStateAndStatus);
        let state = msg.target_state_and_status().unwrap();
        assert_eq!(state.status_type, TargetStateAndStatusType::Version1);
        assert!(state.version1.is_none());
        assert!(state.version2.is_none());
    }

    #[test]
    fn test_target_state_version1() {
        let payload = build(&[
            (29, 5),
            (0, 2),
            (0, 1),  // backwards compat clear
            (1, 2),  // vertical data source
            (1, 1),  // MSL
            (2, 2),  // altitude capability
            (1, 2),  // vertical mode
            (360, 10), // 360 * 100 - 1000 = 35000 ft
            (2, 2),  // horizontal data source
            (270, 9),
            (1, 1),  // heading is track
            (2, 2),  // horizontal mode
            (9, 4),  // NACp
            (1, 1),  // NIC baro
            (2, 2),  // SIL
            (0, 10),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let v1 = msg.target_state_and_status().unwrap().version1.clone().unwrap();
        assert_eq!(v1.vertical_data_source, 1);
        assert!(v1.target_altitude_is_msl);
        assert_eq!(v1.target_altitude, Some(35000));
        assert_eq!(v1.target_heading, Some(270));
        assert!(v1.target_heading_is_track);
        assert_eq!(v1.nac_p, 9);
        assert!(v1.nic_baro);
        assert_eq!(v1.sil, 2);
    }

    #[test]
    fn test_target_state_version1_invalid_fields_absent() {
        let payload = build(&[
            (29, 5),
            (0, 2),
            (0, 1),
            (0, 2),
            (0, 1),
            (0, 2),
            (0, 2),
            (1011, 10), // above the valid altitude range
            (0, 2),
            (400, 9), // above the valid heading range
            (0, 1),
            (0, 2),
            (0, 4),
            (0, 1),
            (0, 2),
            (0, 10),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let v1 = msg.target_state_and_status().unwrap().version1.clone().unwrap();
        assert_eq!(v1.target_altitude, None);
        assert_eq!(v1.target_heading, None);
    }

    #[test]
    fn test_target_state_version2() {
        let payload = build(&[
            (29, 5),
            (1, 2),   // subtype: version 2
            (1, 1),   // SIL supplement
            (0, 1),   // MCP/FCU source
            (1001, 11), // (1001-1)*32 = 32000 ft
            (214, 9), // (214-1)*0.8 + 800 = 970.4 mb
            (1, 1),   // heading valid
            (256, 9), // 256 * 0.703125 = 180 degrees
            (10, 4),  // NACp
            (1, 1),   // NIC baro
            (3, 2),   // SIL
            (1, 1),   // modes valid
            (1, 1),   // autopilot
            (0, 1),   // VNAV
            (1, 1),   // altitude hold
            (0, 1),   // reserved
            (0, 1),   // approach
            (1, 1),   // TCAS
            (0, 3),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let v2 = msg.target_state_and_status().unwrap().version2.clone().unwrap();
        assert!(v2.sil_supplement);
        assert!(!v2.selected_altitude_is_fms);
        assert_eq!(v2.selected_altitude, Some(32000));
        let pressure = v2.barometric_pressure_setting.unwrap();
        assert!((pressure - 970.4).abs() < 1e-9);
        assert_eq!(v2.selected_heading, Some(180.0));
        assert_eq!(v2.nac_p, 10);
        assert_eq!(v2.autopilot_engaged, Some(true));
        assert_eq!(v2.vnav_engaged, Some(false));
        assert_eq!(v2.altitude_hold_active, Some(true));
        assert_eq!(v2.approach_mode_active, Some(false));
        assert!(v2.tcas_operational);
    }

    #[test]
    fn test_target_state_version2_modes_gated() {
        // validity clear: the four autopilot flags must be absent even
        // though their raw bits are set
        let payload = build(&[
            (29, 5),
            (1, 2),
            (0, 2),
            (0, 11),
            (0, 9),
            (0, 1),
            (0, 9),
            (0, 4),
            (0, 1),
            (0, 2),
            (0, 1), // modes valid clear
            (1, 1),
            (1, 1),
            (1, 1),
            (0, 1),
            (1, 1),
            (1, 1),
            (0, 3),
        ]);
        let msg = decoder().decode(&payload).unwrap();
        let v2 = msg.target_state_and_status().unwrap().version2.clone().unwrap();
        assert_eq!(v2.autopilot_engaged, None);
        assert_eq!(v2.vnav_engaged, None);
        assert_eq!(v2.altitude_hold_active, None);
        assert_eq!(v2.approach_mode_active, None);
        assert_eq!(v2.selected_altitude, None);
        assert_eq!(v2.barometric_pressure_setting, None);
        assert_eq!(v2.selected_heading, None);
        assert!(v2.tcas_operational);
    }

    // -- Aircraft operational status --

    fn operational_payload(subtype: u32, version: u32, om: u32) -> [u8; 7] {
        if subtype == 1 {
            build(&[
                (31, 5),
                (1, 3),
                (0x123, 12), // surface capability
                (7, 4),      // length/width class
                (om, 16),
                (version, 3),
                (1, 1),  // NIC-A
                (8, 4),  // NACp
                (0, 2),
                (3, 2),  // SIL
                (1, 1),  // track angle is heading
                (1, 1),  // magnetic reference
                (1, 1),  // SIL supplement
                (0, 1),
            ])
        } else {
            build(&[
                (31, 5),
                (0, 3),
                (0x4567, 16), // airborne capability
                (om, 16),
                (version, 3),
                (0, 1),
                (9, 4),
                (2, 2), // GVA
                (1, 2),
                (1, 1), // NIC baro
                (0, 1),
                (1, 1),
                (0, 1),
            ])
        }
    }

    #[test]
    fn test_operational_status_version0_capability_only() {
        let msg = decoder().decode(&operational_payload(0, 0, 0x0200)).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.status_type, AircraftOperationalStatusType::Airborne);
        assert_eq!(status.adsb_version, 0);
        assert_eq!(status.airborne_capability, Some(0x4567));
        assert_eq!(status.operational_mode, None);
        assert_eq!(status.nac_p, None);
        assert_eq!(status.system_design_assurance, None);
    }

    #[test]
    fn test_operational_status_airborne_version2() {
        let msg = decoder().decode(&operational_payload(0, 2, 0x0200)).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.adsb_version, 2);
        assert_eq!(status.operational_mode, Some(0x0200));
        assert_eq!(status.system_design_assurance, Some(2));
        assert_eq!(status.nac_p, Some(9));
        assert_eq!(status.gva, Some(2));
        assert_eq!(status.sil, Some(1));
        assert_eq!(status.nic_baro, Some(true));
        assert_eq!(status.track_angle_is_heading, None);
        assert_eq!(status.sil_supplement, Some(true));
        // GPS offsets are surface-only
        assert_eq!(status.gps_lateral_offset, None);
        assert_eq!(status.gps_longitudinal_offset, None);
    }

    #[test]
    fn test_operational_status_surface_version2() {
        // OM low byte: lateral 0b101 (right 2 m), longitudinal 11 -> 20 m
        let om = 0x0100 | (0b101 << 5) | 11;
        let msg = decoder().decode(&operational_payload(1, 2, om)).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.status_type, AircraftOperationalStatusType::Surface);
        assert_eq!(status.surface_capability, Some(0x123));
        assert_eq!(status.airborne_capability, None);
        assert_eq!(status.maximum_length, Some(45.0));
        assert_eq!(status.maximum_width, Some(45.0));
        assert_eq!(status.system_design_assurance, Some(1));
        assert_eq!(status.gps_lateral_offset, Some(2));
        assert_eq!(status.gps_longitudinal_offset, Some(20));
        assert_eq!(status.gps_offset_applied_by_sensor, Some(false));
        assert_eq!(status.track_angle_is_heading, Some(true));
        assert_eq!(status.nic_baro, None);
        assert_eq!(status.gva, None);
    }

    #[test]
    fn test_operational_status_surface_lateral_left() {
        let om = 0b011 << 5; // left 6 m
        let msg = decoder().decode(&operational_payload(1, 2, om)).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.gps_lateral_offset, Some(-6));
        assert_eq!(status.gps_longitudinal_offset, None);
    }

    #[test]
    fn test_operational_status_surface_offset_by_sensor() {
        let om = 1; // longitudinal code 1
        let msg = decoder().decode(&operational_payload(1, 2, om)).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.gps_offset_applied_by_sensor, Some(true));
        assert_eq!(status.gps_longitudinal_offset, None);
    }

    #[test]
    fn test_operational_status_version1_no_v2_fields() {
        let msg = decoder().decode(&operational_payload(1, 1, 0x03FF)).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.adsb_version, 1);
        assert_eq!(status.operational_mode, Some(0x03FF));
        assert_eq!(status.maximum_length, Some(45.0));
        assert_eq!(status.system_design_assurance, None);
        assert_eq!(status.gps_lateral_offset, None);
        assert_eq!(status.sil_supplement, None);
    }

    #[test]
    fn test_operational_status_reserved_subtype() {
        let payload = build(&[(31, 5), (4, 3), (0, 32), (2, 3), (0, 13)]);
        let msg = decoder().decode(&payload).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.status_type, AircraftOperationalStatusType::Reserved(4));
        assert_eq!(status.adsb_version, 2);
        assert_eq!(status.airborne_capability, None);
        assert_eq!(status.surface_capability, None);
        assert_eq!(status.operational_mode, None);
    }

    #[test]
    fn test_operational_status_reserved_version() {
        let msg = decoder().decode(&operational_payload(0, 5, 0)).unwrap();
        let status = msg.aircraft_operational_status().unwrap();
        assert_eq!(status.adsb_version, 5);
        assert_eq!(status.airborne_capability, Some(0x4567));
        assert_eq!(status.operational_mode, None);
    }

    // -- Unknown type codes --

    #[test]
    fn test_reserved_type_codes_unknown() {
        for tc in [23u32, 24, 25, 26, 27, 30] {
            let payload = build(&[(tc, 5), (0, 51)]);
            let msg = decoder().decode(&payload).unwrap();
            assert_eq!(msg.format, MessageFormat::Unknown, "tc {tc}");
            assert_eq!(msg.message, MessageVariant::None, "tc {tc}");
        }
    }
}
