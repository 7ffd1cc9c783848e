//! Passive data carried between the engine and its host: the broadcast
//! message that establishes a forwarding area, the per-vehicle state the
//! host tracks alongside a `Trace`, and the warning a relevance decision
//! produces. None of these types have behavior of their own -- they're
//! containers the host fills in and the engine reads.

use crate::geometry::Vec2;
use crate::trace::{RelevanceArea, Trace};
use crate::trace_match::TraceMatch;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardingType {
    Broadcast,
    Unicast,
    GeocastCircle,
    GeocastRectangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medium {
    Pwlan,
    Cwlan,
    Umts,
}

/// A virtual V2X DEN (decentralized environmental notification) message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DenMessage {
    pub source_id: u64,
    pub action_id: u64,
    pub forwarding_type: ForwardingType,
    pub medium: Medium,
    pub forwarding_area: Option<RelevanceArea>,
    pub sending_time: f64,
    pub validity_time: f64,
    pub reference_position: Vec2,
    pub acceleration: f64,
    pub speed: f64,
    pub trace: Option<Trace>,
    pub cause_code: u32,
    pub sub_cause: u32,
    pub direct_cause: u32,
    pub cancelation: bool,
    pub reliability: f64,
    pub priority: f64,
    pub payload: Vec<u8>,
}

impl DenMessage {
    pub fn new(
        source_id: u64,
        action_id: u64,
        forwarding_type: ForwardingType,
        medium: Medium,
        reference_position: Vec2,
        sending_time: f64,
    ) -> Self {
        DenMessage {
            source_id,
            action_id,
            forwarding_type,
            medium,
            forwarding_area: None,
            sending_time,
            validity_time: 0.0,
            reference_position,
            acceleration: 0.0,
            speed: 0.0,
            trace: None,
            cause_code: 0,
            sub_cause: 0,
            direct_cause: 0,
            cancelation: false,
            reliability: 0.0,
            priority: 0.0,
            payload: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    None_,
    Warned,
    BrokenDown,
    InJam,
    CamJamRecognition,
    Approach,
    InConstructionSite,
    Reset,
}

/// Extended per-vehicle state the host keeps alongside a `Trace`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleData {
    pub desired_speed: f64,
    pub desired_lane: u32,
    pub old_position: Option<Vec2>,
    pub current_position: Option<Vec2>,
    pub trace: Trace,
    pub status: VehicleStatus,
    pub driveability: f64,
}

impl VehicleData {
    pub fn new(desired_speed: f64, trace: Trace, driveability: f64) -> Self {
        VehicleData {
            desired_speed,
            desired_lane: 0,
            old_position: None,
            current_position: None,
            trace,
            status: VehicleStatus::None_,
            driveability,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningLevel {
    Information,
    Warning,
}

/// Everything a host needs to derive driving behavior from a relevance
/// decision: when it applies, how urgent it is, and how far away.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Warning {
    pub time_start: f64,
    pub time_end: f64,
    pub level: WarningLevel,
    pub current_prioritization: f64,
    pub distance_to_event: f64,
    pub warning_type: u32,
}

impl Warning {
    pub const MAX_DISTANCE: f64 = 9999.0;

    pub fn new(warning_type: u32) -> Self {
        Warning {
            time_start: 0.0,
            time_end: 0.0,
            level: WarningLevel::Information,
            current_prioritization: 0.0,
            distance_to_event: Self::MAX_DISTANCE,
            warning_type,
        }
    }
}

/// One tick's relevance result for a single vehicle, as printed by the demo
/// binary and as a host would log per-vehicle decisions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvalData {
    pub vehicle_id: u64,
    pub tick: f64,
    pub result: TraceMatch,
}

impl EvalData {
    pub fn new(vehicle_id: u64, tick: f64, result: TraceMatch) -> Self {
        EvalData {
            vehicle_id,
            tick,
            result,
        }
    }
}
