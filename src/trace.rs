use crate::error::EngineError;
use crate::geometry::{direction, Area, Circle, Rectangle, Vec2};
use crate::trace_match::{MatchStatus, TraceMatch};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f64::consts::PI;

/// A single admitted point on a [`Trace`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub position: Vec2,
    pub timestamp: f64,
    pub speed: f64,
    pub vehicle_id: u64,
}

/// Either concrete forwarding-area shape, stored on a `Trace` as its current
/// relevance area. Any future shape only needs to implement [`Area`]; this
/// enum exists so `Trace` can own one without a `Box<dyn Area>`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RelevanceArea {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Area for RelevanceArea {
    fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            RelevanceArea::Circle(c) => c.contains(x, y),
            RelevanceArea::Rectangle(r) => r.contains(x, y),
        }
    }
}

fn signum_or_zero(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Perpendicular distance from `p` to the infinite line through `e1`, `e2`.
///
/// This is distance to the line, not the segment -- the match sweep in
/// [`Trace::match_position`] relies on that so that `raw_dist` accumulation
/// stays monotone.
pub fn edge_distance(e1: Vec2, e2: Vec2, p: Vec2) -> Result<f64, EngineError> {
    if e1.x != e2.x {
        let a = (e2.y - e1.y) / (e2.x - e1.x);
        let b = 1.0;
        let c = a * e1.x - e1.y;
        Ok((-a * p.x + b * p.y + c).abs() / (a * a + b * b).sqrt())
    } else if e1.y != e2.y {
        Ok((p.x - e1.x).abs())
    } else {
        Err(EngineError::DegenerateEdge)
    }
}

/// Walk `points` (newest first) and return the heading from `reference`
/// toward the first point farther than `d`, or toward the farthest point if
/// none qualifies. Never called on an empty trace.
fn heading_forwarding_area(points: &VecDeque<TracePoint>, reference: Vec2, d: f64) -> f64 {
    let mut last = None;
    for tp in points.iter() {
        last = Some(tp.position);
        if Vec2::distance(tp.position, reference) > d {
            return direction(reference, tp.position);
        }
    }
    match last {
        Some(p) => direction(reference, p),
        None => 0.0,
    }
}

/// A bounded, self-pruning polyline summarizing a vehicle's recent path,
/// plus the forwarding-area synthesis and position matching built on top of
/// it. See the crate-level docs for the admission and matching algorithms.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trace {
    points: VecDeque<TracePoint>,
    virtual_evaluation_points: VecDeque<TracePoint>,
    reference_position: Vec2,
    odometer: f64,
    alpha_min: f64,
    alpha_max: f64,
    current_position: Option<Vec2>,
    relevance_area: Option<RelevanceArea>,
    vehicle_id: u64,
    trace_n_max: u32,
    trace_length_max: f64,
    total_point_counter: u64,
    logical_time: f64,
}

impl Trace {
    pub const TRACE_MIN_DIST: f64 = 10.0;
    pub const TRACE_MAX_DIST: f64 = 200.0;
    pub const TRACE_MAX_OFFSET: f64 = 10.0;
    pub const TRACE_MAX_HEADING_DELTA: f64 = 45.0 * PI / 180.0;
    pub const TRACE_N_MAX_DEFAULT: u32 = 16;
    pub const TRACE_LENGTH_MAX_DEFAULT: f64 = 2500.0;
    pub const MATCH_MAX_OFFSET: f64 = 20.0;
    pub const MATCH_MAX_HEADING_DELTA: f64 = 60.0 * PI / 180.0;
    pub const MATCH_DIST_SMOOTH: f64 = 20.0;
    pub const MATCH_MIN_QUALITY: f64 = 0.8;
    pub const AREA_WIDTH_OVERFLOW: f64 = 30.0;
    pub const QUALITY_DELTA: f64 = 0.01;
    pub const MIN_EVALUATION_TRACE_LENGTH: f64 = 1000.0;

    /// Construct a trace anchored at `ref_pos`, admitting it as the first
    /// point immediately (the host's first tick then starts from there).
    pub fn new(ref_pos: Vec2, init_time: f64, init_speed: f64, vehicle_id: u64) -> Self {
        let mut trace = Trace {
            points: VecDeque::new(),
            virtual_evaluation_points: VecDeque::new(),
            reference_position: ref_pos,
            odometer: 0.0,
            alpha_min: 0.0,
            alpha_max: 2.0 * PI,
            current_position: None,
            relevance_area: None,
            vehicle_id,
            trace_n_max: Self::TRACE_N_MAX_DEFAULT,
            trace_length_max: Self::TRACE_LENGTH_MAX_DEFAULT,
            total_point_counter: 0,
            logical_time: init_time,
        };
        trace.admit_point(ref_pos, init_speed);
        trace
    }

    fn oldest_point_position(&self) -> Option<Vec2> {
        self.points.back().map(|tp| tp.position)
    }

    fn admit_point(&mut self, pos: Vec2, speed: f64) {
        if self.points.len() as u32 == self.trace_n_max {
            let live_length = self.trace_length();
            if let Some(evicted) = self.points.pop_back() {
                if live_length < Self::MIN_EVALUATION_TRACE_LENGTH {
                    self.virtual_evaluation_points.push_front(evicted);
                }
            }
        }
        let point = TracePoint {
            position: pos,
            timestamp: self.logical_time,
            speed,
            vehicle_id: self.vehicle_id,
        };
        self.points.push_front(point);
        self.odometer = 0.0;
        self.alpha_min = 0.0;
        self.alpha_max = 2.0 * PI;
        self.total_point_counter += 1;
        log::trace!(
            "trace {} admitted point #{} at ({:.2}, {:.2})",
            self.vehicle_id,
            self.total_point_counter,
            pos.x,
            pos.y
        );
    }

    /// Admit `pos` unconditionally, bypassing every admission predicate.
    pub fn force_point_creation(&mut self, pos: Vec2, speed: f64) {
        self.admit_point(pos, speed);
    }

    /// Feed the current position at this tick. Admits at most one point and
    /// always updates the tracked current position on exit.
    pub fn process_new_position(&mut self, new_pos: Vec2, speed: f64) {
        self.logical_time += 1.0;

        let cur = match self.current_position {
            None => {
                self.current_position = Some(new_pos);
                return;
            }
            Some(c) => c,
        };
        let edge = Vec2::distance(cur, new_pos);

        if self.points.is_empty() {
            self.admit_point(cur, speed);
        } else if self.odometer >= Self::TRACE_MIN_DIST {
            let last = self.points[0].position;
            let dir = direction(last, new_pos);
            let new_pos_heading = direction(cur, new_pos);
            let heading_delta = (dir - new_pos_heading).abs();
            if self.odometer + edge >= Self::TRACE_MAX_DIST
                || heading_delta > Self::TRACE_MAX_HEADING_DELTA
                || dir < self.alpha_min
                || dir > self.alpha_max
            {
                log::debug!(
                    "trace {} admitting corner point, odometer={:.1} heading_delta={:.3}",
                    self.vehicle_id,
                    self.odometer,
                    heading_delta
                );
                self.admit_point(cur, speed);
            }
        }
        self.odometer += edge;

        if let Some(newest) = self.points.front() {
            let dist = Vec2::distance(newest.position, new_pos);
            let dir = direction(newest.position, new_pos);
            if dist > Self::MATCH_MAX_OFFSET {
                let beta = (Self::TRACE_MAX_OFFSET / dist).asin();
                self.alpha_min = self.alpha_min.max(dir - beta);
                self.alpha_max = self.alpha_max.min(dir + beta);
            }
        }

        self.current_position = Some(new_pos);
    }

    /// `process_new_position(pos, 0.0)`. The source's own
    /// `processNewPositionWithoutSpeed` passed `self` as the position
    /// argument by mistake; this is the corrected form.
    pub fn process_new_position_without_speed(&mut self, new_pos: Vec2) {
        self.process_new_position(new_pos, 0.0);
    }

    /// Override the per-instance point-count and length caps. Takes effect
    /// on the next admission, not retroactively.
    pub fn override_max_trace_length(&mut self, max_n: Option<u32>, max_length: Option<f64>) {
        if let Some(n) = max_n {
            self.trace_n_max = n;
        }
        if let Some(l) = max_length {
            self.trace_length_max = l;
        }
    }

    pub fn max_points(&self) -> u32 {
        self.trace_n_max
    }

    pub fn max_trace_length(&self) -> f64 {
        self.trace_length_max
    }

    fn heading_along_trace(&self, d: f64) -> f64 {
        heading_forwarding_area(&self.points, self.reference_position, d)
    }

    pub fn circular_area(&self, radius: f64, offset: f64) -> Circle {
        if offset == 0.0 {
            return Circle::new(self.reference_position, radius);
        }
        let d = radius - offset;
        let h = self.heading_along_trace(d);
        let center = self.reference_position + Vec2::new(offset * h.sin(), offset * h.cos());
        Circle::new(center, radius)
    }

    pub fn rectangular_area(&self, width: f64, length: f64, offset: f64) -> Rectangle {
        let mut length = length;
        let mut width = width;
        let rect_heading;

        match self.oldest_point_position() {
            Some(oldest) => {
                let trace_dist = Vec2::distance(self.reference_position, oldest);
                if length > trace_dist {
                    length = trace_dist - offset;
                }
                let d = length - offset;
                rect_heading = self.heading_along_trace(d);

                if width < 0.0 {
                    let max_offset = self
                        .points
                        .iter()
                        .filter_map(|tp| {
                            edge_distance(self.reference_position, oldest, tp.position).ok()
                        })
                        .fold(0.0_f64, f64::max);
                    width = 2.0 * (max_offset + Self::AREA_WIDTH_OVERFLOW);
                }
            }
            None => {
                rect_heading = 0.0;
                if width <= 0.0 {
                    width = length;
                }
            }
        }

        let s = rect_heading.sin();
        let c = rect_heading.cos();
        let sign = if s * c == 0.0 {
            signum_or_zero(s + c)
        } else {
            signum_or_zero(s * c)
        };
        let w_signed = sign * width;

        let half_w_vec = Vec2::new(w_signed / 2.0 * s, w_signed / 2.0 * c);
        let offset_vec = Vec2::new(offset * s, -offset * c);
        let p1 = self.reference_position + half_w_vec - offset_vec;
        let length_vec = Vec2::new(length * s, -length * c);
        let p2 = p1 - length_vec;

        Rectangle::new(p1, p2, width)
    }

    pub fn wide_rectangular_area(&self, length: f64, offset: f64) -> Rectangle {
        self.rectangular_area(-1.0, length, offset)
    }

    /// Match a candidate `(position, heading)` against this trace within
    /// `area`, optionally smoothing against a prior tick's match.
    pub fn match_position(
        &self,
        position: Vec2,
        heading: f64,
        area: &dyn Area,
        prior: Option<TraceMatch>,
    ) -> TraceMatch {
        if self.points.len() < 2 {
            return TraceMatch::default();
        }
        if !area.contains(position.x, position.y) {
            return TraceMatch::new(0.0, 9999.0, MatchStatus::NoMatchRelevanceArea);
        }

        let dir_to_ref = direction(position, self.reference_position);
        let cur_head = direction(self.points[1].position, self.points[0].position);
        if dir_to_ref > cur_head + PI / 2.0 || dir_to_ref < cur_head - PI / 2.0 {
            return TraceMatch::new(0.0, 9999.0, MatchStatus::NoMatchHeading);
        }

        let (prior_distance, prior_quality) = match prior {
            Some(p) => (p.distance, p.quality),
            None => (9999.0, 0.0),
        };

        let points: Vec<TracePoint> = self.points.iter().copied().collect();
        let mut raw_dist = 0.0;
        let mut best: Option<(f64, f64, Vec2)> = None; // (quality, raw_dist_at_anchor, anchor)
        let mut best_quality = 0.0;

        for pair in points.windows(2) {
            let (rp1, rp2) = (pair[0], pair[1]);
            if let Ok(offset) = edge_distance(rp1.position, rp2.position, position) {
                let trace_dir = direction(rp2.position, rp1.position);
                let hd_delta = (heading - trace_dir).abs();
                if offset <= Self::MATCH_MAX_OFFSET && hd_delta <= Self::MATCH_MAX_HEADING_DELTA {
                    let single = 0.7 * (1.0 - offset / Self::MATCH_MAX_OFFSET)
                        + 0.3 * (1.0 - hd_delta / Self::MATCH_MAX_HEADING_DELTA);
                    let q = if prior.is_some() {
                        let sf = (1.0 - prior_distance / Self::MATCH_DIST_SMOOTH).max(0.0);
                        sf * prior_quality + (1.0 - sf) * single
                    } else {
                        single
                    };
                    // The +QUALITY_DELTA gate applies uniformly, including to the
                    // first candidate pair: a boundary-quality pair (quality 0)
                    // must not win by default.
                    if q > best_quality + Self::QUALITY_DELTA {
                        best_quality = q;
                        best = Some((q, raw_dist, rp1.position));
                    }
                }
            }
            raw_dist += Vec2::distance(rp1.position, rp2.position);
        }

        let (quality, anchor_raw_dist, anchor) = match best {
            Some(b) => b,
            None => return TraceMatch::new(0.0, 9999.0, MatchStatus::NoMatchTrace),
        };

        let match_dist = Vec2::distance(position, anchor) + anchor_raw_dist;

        let result = if prior.is_some() && prior_distance < match_dist {
            TraceMatch::new(prior_quality, prior_distance, MatchStatus::Match)
        } else {
            TraceMatch::new(quality, match_dist, MatchStatus::Match)
        };

        if result.quality < Self::MATCH_MIN_QUALITY {
            log::warn!(
                "trace {} match quality {:.3} below MATCH_MIN_QUALITY",
                self.vehicle_id,
                result.quality
            );
        }
        result
    }

    /// Fraction of `self`'s edges that find a nearby point on `other`,
    /// scaled down by their average offset, clamped to `[0,1]`.
    ///
    /// `other`'s points are shifted by `other.reference_position -
    /// self.reference_position` before distance is measured, so two traces
    /// recorded in different local reference frames compare correctly. The
    /// inner cursor into `other`'s points is never reset between outer
    /// edges -- faithful to the source's double-pointer walk, which
    /// "consumes" points as it advances (kept as-is per the parity
    /// requirement, not a bug this port fixes).
    pub fn match_to_other_trace(&self, other: &Trace) -> f64 {
        let self_pts: Vec<TracePoint> = self.points.iter().copied().collect();
        let other_pts: Vec<TracePoint> = other.points.iter().copied().collect();
        if self_pts.len() < 2 || other_pts.len() < 2 {
            return 0.0;
        }

        let shift = other.reference_position - self.reference_position;

        let mut i2 = 0usize;
        let mut total_matches = 0usize;
        let mut offset_sum = 0.0;

        for pair in self_pts.windows(2) {
            let (rp1, rp2) = (pair[0], pair[1]);

            while i2 < other_pts.len() {
                let op = other_pts[i2].position - shift;
                let matched = match edge_distance(rp1.position, rp2.position, op) {
                    Ok(offset) if offset < Self::MATCH_MAX_OFFSET => {
                        total_matches += 1;
                        offset_sum += offset;
                        true
                    }
                    _ => false,
                };
                i2 += 1;
                if matched {
                    break;
                }
            }
        }

        if total_matches == 0 {
            return 0.0;
        }

        let avg_offset = offset_sum / total_matches as f64;
        ((total_matches as f64 / other_pts.len() as f64) * (1.0 - avg_offset / Self::MATCH_MAX_OFFSET))
            .clamp(0.0, 1.0)
    }

    /// Direction of the newest edge, `P[1] -> P[0]`.
    pub fn current_trace_heading(&self) -> Result<f64, EngineError> {
        if self.points.len() < 2 {
            return Err(EngineError::NotEnoughTracePoints(self.points.len()));
        }
        Ok(direction(self.points[1].position, self.points[0].position))
    }

    pub fn trace_length(&self) -> f64 {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| Vec2::distance(a.position, b.position))
            .sum()
    }

    /// Concatenation of the live points and the evicted-but-retained
    /// virtual evaluation points, preserving newest-first order across the
    /// join. The source's equivalent method returned `None` by mistake
    /// (it called `list.extend`, which mutates in place); this returns the
    /// intended concatenation.
    pub fn evaluation_points(&self) -> Vec<TracePoint> {
        self.points
            .iter()
            .chain(self.virtual_evaluation_points.iter())
            .copied()
            .collect()
    }

    pub fn evaluation_trace_length(&self) -> f64 {
        let pts = self.evaluation_points();
        pts.windows(2)
            .map(|w| Vec2::distance(w[0].position, w[1].position))
            .sum()
    }

    pub fn nr_of_points(&self) -> u32 {
        self.points.len() as u32
    }

    pub fn nr_of_evaluation_points(&self) -> u32 {
        self.evaluation_points().len() as u32
    }

    pub fn points(&self) -> impl Iterator<Item = &TracePoint> {
        self.points.iter()
    }

    pub fn current_position(&self) -> Option<Vec2> {
        self.current_position
    }

    pub fn vehicle_id(&self) -> u64 {
        self.vehicle_id
    }

    pub fn reference_position(&self) -> Vec2 {
        self.reference_position
    }

    pub fn set_reference_position(&mut self, pos: Vec2) {
        self.reference_position = pos;
    }

    pub fn relevance_area(&self) -> Option<&RelevanceArea> {
        self.relevance_area.as_ref()
    }

    pub fn set_relevance_area(&mut self, area: RelevanceArea) {
        self.relevance_area = Some(area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seeded(x: f64, y: f64) -> Trace {
        Trace::new(Vec2::new(x, y), 0.0, 10.0, 1)
    }

    #[test]
    fn straight_line_travel_does_not_over_admit() {
        let mut t = seeded(0.0, 0.0);
        for y in [15.0, 30.0, 60.0, 120.0] {
            t.process_new_position(Vec2::new(0.0, y), 10.0);
        }
        // A straight path well under TRACE_MAX_DIST needs no interior
        // points: the admission predicates (heading delta, angular tube)
        // never fire when the travel direction never changes, since the
        // tube recomputed from the one retained point always re-centers
        // on that same direction.
        assert_eq!(t.nr_of_points(), 1);
    }

    #[test]
    fn turn_is_detected_by_angular_tube_violation() {
        let mut t = seeded(0.0, 0.0);
        t.process_new_position(Vec2::new(0.0, 50.0), 10.0);
        t.process_new_position(Vec2::new(0.0, 100.0), 10.0);
        // The tube narrowed around "due north" while driving straight;
        // turning hard east blows far outside it.
        t.process_new_position(Vec2::new(100.0, 100.0), 10.0);
        assert_eq!(t.nr_of_points(), 2);
    }

    #[test]
    fn history_is_bounded_at_trace_n_max() {
        let mut t = seeded(0.0, 0.0);
        for i in 1..=20 {
            t.force_point_creation(Vec2::new(0.0, i as f64 * 15.0), 10.0);
        }
        assert_eq!(t.nr_of_points(), Trace::TRACE_N_MAX_DEFAULT);
    }

    #[test]
    fn match_on_trace_vs_off_trace() {
        let mut t = seeded(0.0, 0.0);
        for y in (15..=150).step_by(15) {
            t.force_point_creation(Vec2::new(0.0, y as f64), 10.0);
        }
        // Anchor the reference far ahead along the same heading the trace
        // was built with, so the coarse heading gate (direction from the
        // candidate back to the reference vs. the trace's newest edge)
        // passes cleanly.
        t.set_reference_position(Vec2::new(0.0, 1000.0));
        let area = Rectangle::new(Vec2::new(-5.0, -5.0), Vec2::new(-5.0, 160.0), 10.0);

        let on = t.match_position(Vec2::new(1.0, 75.0), 0.0, &area, None);
        assert_eq!(on.status, MatchStatus::Match);
        assert!(on.quality >= Trace::MATCH_MIN_QUALITY);

        let off = t.match_position(Vec2::new(25.0, 75.0), 0.0, &area, None);
        assert_eq!(off.status, MatchStatus::NoMatchRelevanceArea);
    }

    #[test]
    fn match_with_too_few_points_is_undefined() {
        let t = seeded(0.0, 0.0);
        let area = Circle::new(Vec2::new(0.0, 0.0), 1000.0);
        let m = t.match_position(Vec2::new(0.0, 0.0), 0.0, &area, None);
        assert_eq!(m.status, MatchStatus::NoMatchUndefined);
    }

    #[test]
    fn monotone_match_distance_while_following_trace() {
        let mut t = seeded(0.0, 0.0);
        for y in (15..=225).step_by(15) {
            t.force_point_creation(Vec2::new(0.0, y as f64), 10.0);
        }
        t.set_reference_position(Vec2::new(0.0, 1000.0));
        let area = Rectangle::new(Vec2::new(-5.0, -5.0), Vec2::new(-5.0, 235.0), 10.0);

        let mut prior: Option<TraceMatch> = None;
        let mut last_distance = f64::INFINITY;
        for y in (10..=220).step_by(20) {
            let m = t.match_position(Vec2::new(1.0, y as f64), 0.0, &area, prior);
            assert_eq!(m.status, MatchStatus::Match);
            assert!(m.distance <= last_distance + 1e-9);
            last_distance = m.distance;
            prior = Some(m);
        }
    }

    #[test]
    fn override_max_trace_length_affects_only_future_admissions() {
        let mut t = seeded(0.0, 0.0);
        t.force_point_creation(Vec2::new(0.0, 15.0), 10.0);
        assert_eq!(t.nr_of_points(), 2);

        t.override_max_trace_length(Some(3), None);
        assert_eq!(t.nr_of_points(), 2, "existing points are not trimmed retroactively");

        for y in [30.0, 45.0, 60.0, 75.0] {
            t.force_point_creation(Vec2::new(0.0, y), 10.0);
        }
        assert_eq!(t.nr_of_points(), 3);
    }

    #[test]
    fn match_to_other_trace_identical_traces_match_ratio() {
        let mut a = seeded(0.0, 0.0);
        let mut b = seeded(0.0, 0.0);
        for y in [15.0, 30.0, 60.0, 120.0] {
            a.force_point_creation(Vec2::new(0.0, y), 10.0);
            b.force_point_creation(Vec2::new(0.0, y), 10.0);
        }
        let q = a.match_to_other_trace(&b);
        // Zero offset on every matched edge, so quality is exactly the match
        // ratio: 4 edges in a 5-point trace, all matching one-for-one against
        // `b`'s 5 points, is 4/5.
        assert_abs_diff_eq!(q, 0.8, epsilon = 1e-9);
    }

    #[test]
    fn match_to_other_trace_accounts_for_reference_offset() {
        let mut a = seeded(0.0, 0.0);
        let mut b = seeded(100.0, 0.0);
        for y in [15.0, 30.0, 60.0, 120.0] {
            a.force_point_creation(Vec2::new(0.0, y), 10.0);
            b.force_point_creation(Vec2::new(100.0, y), 10.0);
        }
        // `b`'s points are all offset +100 in x from `a`'s, matching its
        // reference position's own +100 offset -- once that shift is
        // subtracted back out the two traces are geometrically identical,
        // so this must score the same as the zero-offset case above rather
        // than falling outside MATCH_MAX_OFFSET and scoring zero.
        let q = a.match_to_other_trace(&b);
        assert_abs_diff_eq!(q, 0.8, epsilon = 1e-9);
    }

    #[test]
    fn match_to_other_trace_empty_is_zero() {
        let a = seeded(0.0, 0.0);
        let b = seeded(0.0, 0.0);
        assert_eq!(a.match_to_other_trace(&b), 0.0);
    }

    #[test]
    fn rectangular_area_along_reference_axis() {
        let mut t = seeded(0.0, 0.0);
        for y in [15.0, 30.0, 60.0, 120.0] {
            t.process_new_position(Vec2::new(0.0, y), 10.0);
        }
        // Decouple the reference from the trace's own oldest point, as a
        // host would when anchoring the area at a remote event location;
        // otherwise `trace_dist` is 0 and `length` clamps to it.
        t.set_reference_position(Vec2::new(0.0, -200.0));
        let r = t.rectangular_area(10.0, 50.0, 0.0);
        assert_abs_diff_eq!(r.length(), 50.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.width, 10.0);
    }

    #[test]
    fn current_trace_heading_needs_two_points() {
        let t = seeded(0.0, 0.0);
        let err = t.current_trace_heading().unwrap_err();
        assert_eq!(err, EngineError::NotEnoughTracePoints(1));
    }
}
