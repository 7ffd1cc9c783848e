//! Scripted demo: drives one vehicle's `Trace` through a sequence of
//! positions, derives a forwarding area from it, then checks a handful of
//! candidate positions against that trace tick by tick.

use anyhow::Result;
use trace_relevance::{MatchStatus, Rectangle, Trace, Vec2};

fn main() -> Result<()> {
    env_logger::init();

    // Forced admission builds a deterministic, well-populated polyline for
    // the demo without depending on whether the scripted ticks happen to
    // cross an admission threshold (`process_new_position` below is used
    // for the candidate instead, where only the final decision matters).
    let mut source = Trace::new(Vec2::new(0.0, 0.0), 0.0, 12.0, 1);
    for y in [20.0, 45.0, 90.0, 140.0, 200.0] {
        source.force_point_creation(Vec2::new(0.0, y), 12.0);
    }
    source.set_reference_position(Vec2::new(0.0, 500.0));
    println!(
        "source trace: {} points, {:.1} m",
        source.nr_of_points(),
        source.trace_length()
    );

    let synthesized: Rectangle = source.wide_rectangular_area(180.0, 0.0);
    println!(
        "wide_rectangular_area: {:?} -> {:?}, width {:.1}",
        synthesized.p1, synthesized.p2, synthesized.width
    );

    // Corridor a host would actually attach to a broadcast covering the
    // corridor `source` just drove, used below for `match_position`'s
    // relevance-area gate. `wide_rectangular_area` above derives its own
    // (narrower, trailing) area from the trace's own oldest point, which
    // is informative to print but not the shape this demo wants to match
    // candidates against.
    let area = Rectangle::new(Vec2::new(-5.0, -5.0), Vec2::new(-5.0, 205.0), 10.0);

    let mut candidate = Trace::new(Vec2::new(1.0, 0.0), 0.0, 11.0, 2);
    let mut prior = None;
    for tick in 1..=8 {
        let y = tick as f64 * 20.0;
        candidate.process_new_position(Vec2::new(1.0, y), 11.0);
        let result = source.match_position(Vec2::new(1.0, y), 0.0, &area, prior);
        println!(
            "tick {tick}: position (1.0, {y:.1}) -> {:?} quality={:.3} distance={:.1}",
            result.status, result.quality, result.distance
        );
        if result.status == MatchStatus::Match {
            prior = Some(result);
        } else {
            prior = None;
        }
    }

    Ok(())
}
