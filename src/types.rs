//! Shared types, error enum, and decoded message types for squitter-core.

use serde::Serialize;
use thiserror::Error;

/// All errors produced by squitter-core.
///
/// Every variant describes an expected steady-state condition of a live
/// surveillance feed, surfaced through the `try_` codec entry points for
/// callers that want the refusal cause. The plain entry points collapse
/// them to `None`.
#[derive(Debug, Error)]
pub enum AdsbError {
    #[error("global decode needs one even and one odd frame")]
    CprParityMismatch,
    #[error("global decode frames use different encodings: {early} and {later} bits")]
    CprBitWidthMismatch { early: u8, later: u8 },
    #[error("surface global decode needs a receiver position")]
    CprMissingReceiverPosition,
    #[error("frames straddle a latitude zone boundary: NL {nl_even} vs {nl_odd}")]
    CprZoneBoundary { nl_even: u32, nl_odd: u32 },
}

pub type Result<T> = std::result::Result<T, AdsbError>;

// ---------------------------------------------------------------------------
// Message format classification
// ---------------------------------------------------------------------------

/// Message family derived from the 5-bit format type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageFormat {
    IdentificationAndCategory,
    SurfacePosition,
    AirbornePosition,
    NoPositionInformation,
    AirborneVelocity,
    AircraftStatus,
    TargetStateAndStatus,
    AircraftOperationalStatus,
    Unknown,
}

impl MessageFormat {
    /// Classify a 5-bit format type code. Reserved codes map to `Unknown`.
    pub fn from_type_code(type_code: u8) -> MessageFormat {
        match type_code {
            0 => MessageFormat::NoPositionInformation,
            1..=4 => MessageFormat::IdentificationAndCategory,
            5..=8 => MessageFormat::SurfacePosition,
            9..=18 | 20..=22 => MessageFormat::AirbornePosition,
            19 => MessageFormat::AirborneVelocity,
            28 => MessageFormat::AircraftStatus,
            29 => MessageFormat::TargetStateAndStatus,
            31 => MessageFormat::AircraftOperationalStatus,
            _ => MessageFormat::Unknown,
        }
    }

    /// Stable index for statistics counters.
    pub fn index(&self) -> usize {
        match self {
            MessageFormat::IdentificationAndCategory => 0,
            MessageFormat::SurfacePosition => 1,
            MessageFormat::AirbornePosition => 2,
            MessageFormat::NoPositionInformation => 3,
            MessageFormat::AirborneVelocity => 4,
            MessageFormat::AircraftStatus => 5,
            MessageFormat::TargetStateAndStatus => 6,
            MessageFormat::AircraftOperationalStatus => 7,
            MessageFormat::Unknown => 8,
        }
    }
}

/// Number of distinct `MessageFormat` values, for counter sizing.
pub const MESSAGE_FORMAT_COUNT: usize = 9;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GlobalCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> GlobalCoordinate {
        GlobalCoordinate {
            latitude,
            longitude,
        }
    }
}

/// A CPR-encoded position as extracted from a message, not yet resolved.
///
/// `encoding_bits` is one of 12, 14, 17 or 19. Surface positions carry 17
/// bits per axis on the wire but are stored shifted left by two, so the
/// value is a true 19-bit encoding whose two missing high bits are the
/// quarter-globe ambiguity resolved during global decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CprCoordinate {
    pub raw_latitude: u32,
    pub raw_longitude: u32,
    pub odd_format: bool,
    pub encoding_bits: u8,
}

impl CprCoordinate {
    pub fn new(
        raw_latitude: u32,
        raw_longitude: u32,
        odd_format: bool,
        encoding_bits: u8,
    ) -> CprCoordinate {
        debug_assert!(matches!(encoding_bits, 12 | 14 | 17 | 19));
        CprCoordinate {
            raw_latitude,
            raw_longitude,
            odd_format,
            encoding_bits,
        }
    }

    /// True for surface (19-bit, quarter-circle base) coordinates.
    pub fn is_surface(&self) -> bool {
        self.encoding_bits == 19
    }
}

// ---------------------------------------------------------------------------
// ADS-B callsign character set
// ---------------------------------------------------------------------------

/// ADS-B character set for identification encoding (6 bits per character).
/// Reserved codes decode to `#` and are preserved verbatim.
pub const CALLSIGN_CHARSET: &[u8; 64] =
    b"#ABCDEFGHIJKLMNOPQRSTUVWXYZ##### ###############0123456789######";

// ---------------------------------------------------------------------------
// Identification and category (types 1-4)
// ---------------------------------------------------------------------------

/// Emitter category from the 4x8 table keyed by (type code - 1, category).
///
/// Reserved cells keep their raw table index so nothing is lost for
/// downstream consumers that understand later editions of the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmitterCategory {
    None,
    LightAircraft,
    SmallAircraft,
    LargeAircraft,
    HighVortexLargeAircraft,
    HeavyAircraft,
    HighPerformanceAircraft,
    Rotorcraft,
    Glider,
    LighterThanAir,
    Parachutist,
    Ultralight,
    UnmannedAerialVehicle,
    SpaceVehicle,
    SurfaceEmergencyVehicle,
    SurfaceServiceVehicle,
    PointObstacle,
    ClusterObstacle,
    LineObstacle,
    Reserved(u8),
}

/// Type 1-4: aircraft identification and category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifierAndCategory {
    pub emitter_category: EmitterCategory,
    /// 8 characters, padded with spaces; `#` marks reserved codes.
    pub identification: String,
}

// ---------------------------------------------------------------------------
// Surface position (types 5-8)
// ---------------------------------------------------------------------------

/// Type 5-8: surface position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfacePosition {
    /// Ground speed in knots from the 125-entry movement table.
    pub ground_speed: Option<f64>,
    /// Set when the movement field reports 175 kt or more.
    pub ground_speed_exceeded: Option<bool>,
    pub is_reversing: Option<bool>,
    /// Ground track in degrees, 2.8125 degree resolution.
    pub ground_track: Option<f64>,
    pub position_time_is_exact: bool,
    pub compact_position: CprCoordinate,
}

// ---------------------------------------------------------------------------
// Airborne position (types 0, 9-18, 20-22)
// ---------------------------------------------------------------------------

/// 2-bit surveillance status from airborne position messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurveillanceStatus {
    NoInformation,
    PermanentAlert,
    TemporaryAlert,
    SpecialPositionIdentification,
}

impl SurveillanceStatus {
    pub fn from_bits(bits: u8) -> SurveillanceStatus {
        match bits & 0x03 {
            0 => SurveillanceStatus::NoInformation,
            1 => SurveillanceStatus::PermanentAlert,
            2 => SurveillanceStatus::TemporaryAlert,
            _ => SurveillanceStatus::SpecialPositionIdentification,
        }
    }
}

/// Type 0 or 9-18/20-22: airborne position.
///
/// Types 9-18 carry barometric altitude, 20-22 geometric; type 0 carries
/// neither and no position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirbornePosition {
    pub surveillance_status: SurveillanceStatus,
    /// NIC supplement B. Absent for type 0, which has a reserved bit here.
    pub nic_b: Option<bool>,
    pub barometric_altitude: Option<i32>,
    pub geometric_altitude: Option<i32>,
    pub position_time_is_exact: bool,
    pub compact_position: Option<CprCoordinate>,
}

// ---------------------------------------------------------------------------
// Airborne velocity (type 19)
// ---------------------------------------------------------------------------

/// Velocity subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VelocityType {
    GroundSpeedSubsonic,
    GroundSpeedSupersonic,
    AirspeedSubsonic,
    AirspeedSupersonic,
    Reserved(u8),
}

/// East/west and north/south velocity components in knots.
/// West and south are negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VectorVelocity {
    pub east_west: Option<i32>,
    pub east_west_exceeded: bool,
    pub north_south: Option<i32>,
    pub north_south_exceeded: bool,
}

/// Type 19: airborne velocity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirborneVelocity {
    pub velocity_type: VelocityType,
    pub change_of_intent: Option<bool>,
    /// NACv expressed as the velocity error bound in metres per second.
    pub horizontal_velocity_error: Option<f64>,
    /// Populated for subtypes 1-2.
    pub vector_velocity: Option<VectorVelocity>,
    /// Populated for subtypes 3-4: magnetic heading in degrees.
    pub heading: Option<f64>,
    pub airspeed_is_true_airspeed: Option<bool>,
    pub airspeed: Option<f64>,
    pub airspeed_exceeded: Option<bool>,
    pub vertical_rate_is_barometric: Option<bool>,
    /// Feet per minute, negative descending.
    pub vertical_rate: Option<i32>,
    pub vertical_rate_exceeded: Option<bool>,
    /// Geometric minus barometric altitude in feet.
    pub geometric_altitude_delta: Option<i32>,
    pub geometric_altitude_delta_exceeded: Option<bool>,
}

// ---------------------------------------------------------------------------
// Aircraft status (type 28)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AircraftStatusType {
    NoInformation,
    EmergencyStatus,
    TcasResolutionAdvisory,
    Reserved(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmergencyState {
    None,
    General,
    Lifeguard,
    MinimumFuel,
    NoCommunications,
    UnlawfulInterference,
    DownedAircraft,
    Reserved,
}

impl EmergencyState {
    pub fn from_bits(bits: u8) -> EmergencyState {
        match bits & 0x07 {
            0 => EmergencyState::None,
            1 => EmergencyState::General,
            2 => EmergencyState::Lifeguard,
            3 => EmergencyState::MinimumFuel,
            4 => EmergencyState::NoCommunications,
            5 => EmergencyState::UnlawfulInterference,
            6 => EmergencyState::DownedAircraft,
            _ => EmergencyState::Reserved,
        }
    }
}

/// Type 28 subtype 1: emergency / priority status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergencyStatus {
    pub emergency_state: EmergencyState,
    /// Mode-A squawk as four octal digits, absent when not transmitted.
    pub squawk: Option<u16>,
}

/// Type 28 subtype 2: TCAS resolution advisory broadcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TcasResolutionAdvisory {
    /// 13-bit advisory when the coding bit selects the single-threat form.
    pub single_threat_advisory: Option<u16>,
    /// The same 13 bits under the multiple-threat interpretation.
    pub multiple_threat_advisory: Option<u16>,
    pub advisory_complement: u8,
    pub advisory_terminated: bool,
    pub multiple_threat_encounter: bool,
    /// Threat identity as a 24-bit ICAO address.
    pub threat_icao: Option<u32>,
    /// Threat altitude in feet from the stripped Mode-C code.
    pub threat_altitude: Option<i32>,
    /// Threat range in nautical miles.
    pub threat_range: Option<f64>,
    pub threat_range_exceeded: bool,
    /// Threat bearing in degrees.
    pub threat_bearing: Option<f64>,
}

/// Type 28: aircraft status. At most one of the payloads is populated,
/// selected by the subtype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftStatus {
    pub status_type: AircraftStatusType,
    pub emergency_status: Option<EmergencyStatus>,
    pub tcas_advisory: Option<TcasResolutionAdvisory>,
}

// ---------------------------------------------------------------------------
// Target state and status (type 29)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetStateAndStatusType {
    Version1,
    Version2,
    Reserved(u8),
}

/// Type 29 subtype 0 (ADS-B version 1 layout).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetStateVersion1 {
    pub vertical_data_source: u8,
    pub target_altitude_is_msl: bool,
    pub target_altitude_capability: u8,
    pub vertical_mode_indicator: u8,
    /// Target altitude in feet, -1000 to 100000.
    pub target_altitude: Option<i32>,
    pub horizontal_data_source: u8,
    /// Target heading or track in degrees.
    pub target_heading: Option<u16>,
    pub target_heading_is_track: bool,
    pub horizontal_mode_indicator: u8,
    pub nac_p: u8,
    pub nic_baro: bool,
    pub sil: u8,
}

/// Type 29 subtype 1 (ADS-B version 2 layout).
///
/// The four autopilot-state flags are gated by a validity bit; when it is
/// clear they are absent rather than carrying their raw values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetStateVersion2 {
    pub sil_supplement: bool,
    pub selected_altitude_is_fms: bool,
    /// MCP/FCU or FMS selected altitude in feet.
    pub selected_altitude: Option<i32>,
    /// Barometric pressure setting in millibars, QNH minus 800 offset.
    pub barometric_pressure_setting: Option<f64>,
    /// Selected heading in degrees.
    pub selected_heading: Option<f64>,
    pub nac_p: u8,
    pub nic_baro: bool,
    pub sil: u8,
    pub autopilot_engaged: Option<bool>,
    pub vnav_engaged: Option<bool>,
    pub altitude_hold_active: Option<bool>,
    pub approach_mode_active: Option<bool>,
    pub tcas_operational: bool,
}

/// Type 29: target state and status. Version 0 messages are detected via
/// the backwards-compatibility bit and discarded, leaving both payloads
/// absent on purpose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetStateAndStatus {
    pub status_type: TargetStateAndStatusType,
    pub version1: Option<TargetStateVersion1>,
    pub version2: Option<TargetStateVersion2>,
}

// ---------------------------------------------------------------------------
// Aircraft operational status (type 31)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AircraftOperationalStatusType {
    Airborne,
    Surface,
    Reserved(u8),
}

/// Type 31: aircraft operational status.
///
/// The 3-bit ADS-B version gates almost every field: version 0 keeps only
/// the raw capability, version 1 adds the operational mode and quality
/// indicators, version 2 additionally unpacks design assurance and (for
/// surface) the GPS antenna offset out of the operational-mode word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftOperationalStatus {
    pub status_type: AircraftOperationalStatusType,
    pub adsb_version: u8,
    /// 16-bit capability class, airborne subtype.
    pub airborne_capability: Option<u16>,
    /// 12-bit capability class, surface subtype.
    pub surface_capability: Option<u16>,
    /// Maximum aircraft length in metres from the length/width class.
    pub maximum_length: Option<f64>,
    /// Maximum aircraft width in metres from the length/width class.
    pub maximum_width: Option<f64>,
    pub operational_mode: Option<u16>,
    pub system_design_assurance: Option<u8>,
    /// GPS antenna offset from the roll axis in metres, negative left.
    pub gps_lateral_offset: Option<i8>,
    /// GPS antenna offset aft of the nose in metres.
    pub gps_longitudinal_offset: Option<u8>,
    /// Set when the position sensor applies the offset itself.
    pub gps_offset_applied_by_sensor: Option<bool>,
    pub nic_a: Option<bool>,
    pub nac_p: Option<u8>,
    pub gva: Option<u8>,
    pub sil: Option<u8>,
    pub nic_baro: Option<bool>,
    /// Surface subtype reports track angle vs heading instead of NIC baro.
    pub track_angle_is_heading: Option<bool>,
    pub horizontal_reference_is_magnetic: Option<bool>,
    pub sil_supplement: Option<bool>,
}

// ---------------------------------------------------------------------------
// Decoded message
// ---------------------------------------------------------------------------

/// The single populated sub-message of a decoded extended squitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum MessageVariant {
    IdentifierAndCategory(IdentifierAndCategory),
    SurfacePosition(SurfacePosition),
    AirbornePosition(AirbornePosition),
    AirborneVelocity(AirborneVelocity),
    AircraftStatus(AircraftStatus),
    TargetStateAndStatus(TargetStateAndStatus),
    AircraftOperationalStatus(AircraftOperationalStatus),
    /// Reserved type codes and intentionally discarded layouts.
    None,
}

/// One decoded 56-bit extended squitter payload.
///
/// `format` is fully determined by `type_code`; `message` holds exactly the
/// variant matching `format` (or `None` for unknown/discarded layouts).
/// The typed accessors return `None` on a mismatched read instead of ever
/// yielding the wrong arm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedMessage {
    /// 5-bit format type code, 0-31.
    pub type_code: u8,
    pub format: MessageFormat,
    pub message: MessageVariant,
}

impl DecodedMessage {
    pub fn identifier_and_category(&self) -> Option<&IdentifierAndCategory> {
        match &self.message {
            MessageVariant::IdentifierAndCategory(m) => Some(m),
            _ => None,
        }
    }

    pub fn surface_position(&self) -> Option<&SurfacePosition> {
        match &self.message {
            MessageVariant::SurfacePosition(m) => Some(m),
            _ => None,
        }
    }

    pub fn airborne_position(&self) -> Option<&AirbornePosition> {
        match &self.message {
            MessageVariant::AirbornePosition(m) => Some(m),
            _ => None,
        }
    }

    pub fn airborne_velocity(&self) -> Option<&AirborneVelocity> {
        match &self.message {
            MessageVariant::AirborneVelocity(m) => Some(m),
            _ => None,
        }
    }

    pub fn aircraft_status(&self) -> Option<&AircraftStatus> {
        match &self.message {
            MessageVariant::AircraftStatus(m) => Some(m),
            _ => None,
        }
    }

    pub fn target_state_and_status(&self) -> Option<&TargetStateAndStatus> {
        match &self.message {
            MessageVariant::TargetStateAndStatus(m) => Some(m),
            _ => None,
        }
    }

    pub fn aircraft_operational_status(&self) -> Option<&AircraftOperationalStatus> {
        match &self.message {
            MessageVariant::AircraftOperationalStatus(m) => Some(m),
            _ => None,
        }
    }

    /// The raw CPR coordinate embedded in this message, if any.
    pub fn compact_position(&self) -> Option<&CprCoordinate> {
        match &self.message {
            MessageVariant::SurfacePosition(m) => Some(&m.compact_position),
            MessageVariant::AirbornePosition(m) => m.compact_position.as_ref(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
