//! Deciding whether a hazard broadcast from one vehicle is relevant to
//! another, given its recent driving trajectory.
//!
//! Three pieces work together: [`trace`] maintains a bounded, self-pruning
//! polyline of where a vehicle has been; its forwarding-area methods turn
//! that polyline into a circular or rectangular region a broadcast should
//! reach; and [`trace::Trace::match_position`] scores a candidate
//! position/heading against the polyline to decide whether a given vehicle
//! is plausibly on it. [`messages`] carries the passive data these pieces
//! exchange with a host simulation.

pub mod error;
pub mod geometry;
pub mod messages;
pub mod trace;
pub mod trace_match;

pub use error::EngineError;
pub use geometry::{angle_from_y_axis, direction, Area, Circle, Rectangle, Vec2};
pub use messages::{
    DenMessage, EvalData, ForwardingType, Medium, VehicleData, VehicleStatus, Warning,
    WarningLevel,
};
pub use trace::{RelevanceArea, Trace, TracePoint};
pub use trace_match::{MatchStatus, TraceMatch};
