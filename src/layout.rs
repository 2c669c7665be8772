//! Layout of the axis box: data bounds, display scales, plane placement and tick positions.
//!
//! Everything here is plain math; [`crate::builder`] turns a [`CubeLayout`] into entities.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::components::Face;
use crate::components::LabelEdge;
use crate::config::GraphCubeConfig;
use crate::planes::GraphPlanes;

// ============================================================================
// Bounds
// ============================================================================

/// Integer-aligned bounds of a data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphBounds {
    pub low:  Vec3,
    pub high: Vec3,
}

impl GraphBounds {
    /// Floors/ceils the per-axis extremes of `points`. An axis with no extent is widened by
    /// one unit on each side. Returns `None` for empty input.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (low, high) = points
            .iter()
            .fold((first, first), |(low, high), point| (low.min(*point), high.max(*point)));

        let mut low = low.floor();
        let mut high = high.ceil();
        for axis in 0..3 {
            if low[axis] == high[axis] {
                low[axis] -= 1.0;
                high[axis] += 1.0;
            }
        }

        Some(Self { low, high })
    }

    pub fn extent(&self) -> Vec3 { self.high - self.low }
}

// ============================================================================
// Scales
// ============================================================================

/// Linear map from a data domain onto a display range.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LinearScale {
    pub domain: (f32, f32),
    pub range:  (f32, f32),
}

impl LinearScale {
    pub const fn new(domain: (f32, f32), range: (f32, f32)) -> Self { Self { domain, range } }

    pub fn apply(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Nicely rounded values inside the domain. Never empty: when no round step fits
    /// (`count` of 0, or a step coarser than the domain) the domain endpoints are used.
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        let (start, stop) = self.domain;
        let ticks = nice_ticks(start, stop, count);
        if !ticks.is_empty() {
            ticks
        } else if start == stop {
            vec![start]
        } else {
            vec![start, stop]
        }
    }
}

/// Per-axis scales from data space into the cube's local display space.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct AxisScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub z: LinearScale,
}

impl AxisScales {
    /// Maps a data point into cube-local display space.
    /// Display axes are swizzled: display `x` carries data `z` and display `z` carries data `x`.
    pub fn to_display(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            self.z.apply(point.z),
            self.y.apply(point.y),
            self.x.apply(point.x),
        )
    }
}

// ============================================================================
// Ticks
// ============================================================================

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Step between ticks. Negative values mean "divide by the magnitude", which keeps
/// fractional steps exact.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Roughly `count` evenly spaced, human-friendly values (1, 2 or 5 times a power of ten)
/// between `start` and `stop`, inclusive.
pub fn nice_ticks(start: f32, stop: f32, count: usize) -> Vec<f32> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse {
        (f64::from(stop), f64::from(start))
    } else {
        (f64::from(start), f64::from(stop))
    };

    let increment = tick_increment(lo, hi, count);
    if increment == 0.0 || !increment.is_finite() {
        return Vec::new();
    }

    let mut ticks: Vec<f32> = if increment > 0.0 {
        let first = (lo / increment).ceil() as i64;
        let last = (hi / increment).floor() as i64;
        (first..=last)
            .map(|i| (i as f64 * increment) as f32)
            .collect()
    } else {
        let divisor = -increment;
        let first = (lo * divisor).ceil() as i64;
        let last = (hi * divisor).floor() as i64;
        (first..=last)
            .map(|i| (i as f64 / divisor) as f32)
            .collect()
    };

    if reverse {
        ticks.reverse();
    }
    ticks
}

// ============================================================================
// Planes
// ============================================================================

/// Tick positions for one label group, in plane-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct TickGroupLayout {
    pub edge:      LabelEdge,
    pub positions: Vec<Vec3>,
    pub values:    Vec<f32>,
}

/// Placement of one plane inside the cube's local space.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneLayout {
    pub face:        Face,
    pub translation: Vec3,
    pub rotation:    Quat,
    pub size:        Vec2,
    pub labels:      Vec<TickGroupLayout>,
}

impl PlaneLayout {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(self.rotation)
    }

    pub fn label(&self, edge: LabelEdge) -> Option<&TickGroupLayout> {
        self.labels.iter().find(|group| group.edge == edge)
    }
}

/// Full layout of a graph cube derived from data bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeLayout {
    /// Per-axis lengths after aspect clamping, in data order `(x, y, z)`
    pub delta:        Vec3,
    pub scales:       AxisScales,
    /// Uniform scale for the cube root so the longest axis spans `extent`
    pub scale_factor: f32,
    pub planes:       GraphPlanes<PlaneLayout>,
}

impl CubeLayout {
    pub fn from_bounds(bounds: GraphBounds, config: &GraphCubeConfig) -> Self {
        let delta = clamp_aspect(bounds, config.aspect_threshold);

        let scale = |axis: usize| {
            LinearScale::new(
                (bounds.low[axis], bounds.high[axis]),
                (-delta[axis] * 0.5, delta[axis] * 0.5),
            )
        };
        let scales = AxisScales {
            x: scale(0),
            y: scale(1),
            z: scale(2),
        };

        let longest = delta.max_element();
        let scale_factor = if longest > 0.0 {
            config.extent / longest
        } else {
            1.0
        };

        let planes = GraphPlanes::from_fn(|face| plane_layout(face, delta, &scales, config.tick_count));

        Self {
            delta,
            scales,
            scale_factor,
            planes,
        }
    }
}

/// Shrinks any axis longer than `threshold` times the shortest one down to that ratio.
fn clamp_aspect(bounds: GraphBounds, threshold: f32) -> Vec3 {
    let mut low = bounds.low;
    let mut high = bounds.high;
    let extent = bounds.extent();
    let limit = extent.min_element() * threshold;

    for axis in 0..3 {
        if extent[axis] > limit {
            let factor = limit / extent[axis];
            low[axis] *= factor;
            high[axis] *= factor;
        }
    }

    high - low
}

fn plane_layout(face: Face, delta: Vec3, scales: &AxisScales, tick_count: usize) -> PlaneLayout {
    // (horizontal scale, vertical scale) in plane-local axes
    let (horizontal, vertical) = match face {
        Face::Top | Face::Bottom => (scales.z, scales.x),
        Face::Left | Face::Right => (scales.x, scales.y),
        Face::Front | Face::Back => (scales.z, scales.y),
    };
    let size = Vec2::new(
        horizontal.range.1 - horizontal.range.0,
        vertical.range.1 - vertical.range.0,
    );

    let (translation, rotation) = match face {
        Face::Top => (Vec3::new(0.0, delta.y * 0.5, 0.0), Quat::from_rotation_x(FRAC_PI_2)),
        Face::Bottom => (Vec3::new(0.0, -delta.y * 0.5, 0.0), Quat::from_rotation_x(FRAC_PI_2)),
        Face::Left => (Vec3::new(-delta.z * 0.5, 0.0, 0.0), Quat::from_rotation_y(-FRAC_PI_2)),
        Face::Right => (Vec3::new(delta.z * 0.5, 0.0, 0.0), Quat::from_rotation_y(-FRAC_PI_2)),
        Face::Front => (Vec3::new(0.0, 0.0, delta.x * 0.5), Quat::IDENTITY),
        Face::Back => (Vec3::new(0.0, 0.0, -delta.x * 0.5), Quat::IDENTITY),
    };

    let half = size * 0.5;
    let mut labels = Vec::with_capacity(4);

    if face.has_x_labels() {
        let values = horizontal.ticks(tick_count);
        for (edge, y) in [(LabelEdge::XTop, half.y), (LabelEdge::XBottom, -half.y)] {
            labels.push(TickGroupLayout {
                edge,
                positions: values
                    .iter()
                    .map(|value| Vec3::new(horizontal.apply(*value), y, 0.0))
                    .collect(),
                values: values.clone(),
            });
        }
    }

    let values = vertical.ticks(tick_count);
    for (edge, x) in [(LabelEdge::YLeft, -half.x), (LabelEdge::YRight, half.x)] {
        labels.push(TickGroupLayout {
            edge,
            positions: values
                .iter()
                .map(|value| Vec3::new(x, vertical.apply(*value), 0.0))
                .collect(),
            values: values.clone(),
        });
    }

    PlaneLayout {
        face,
        translation,
        rotation,
        size,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_ticks(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPSILON, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn bounds_floor_and_ceil_extremes() {
        let bounds = GraphBounds::from_points(&[
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(-2.0, -9.0, -2.0),
            Vec3::new(1.5, 0.2, 1.0),
        ])
        .unwrap();
        assert_eq!(bounds.low, Vec3::new(-2.0, -9.0, -2.0));
        assert_eq!(bounds.high, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn flat_axis_is_widened() {
        let bounds = GraphBounds::from_points(&[Vec3::new(0.0, 3.0, 1.0), Vec3::new(4.0, 3.0, 2.0)]).unwrap();
        assert_eq!(bounds.low.y, 2.0);
        assert_eq!(bounds.high.y, 4.0);
        assert_eq!(bounds.low.x, 0.0);
        assert_eq!(bounds.high.x, 4.0);
    }

    #[test]
    fn empty_data_has_no_bounds() {
        assert!(GraphBounds::from_points(&[]).is_none());
    }

    #[test]
    fn nice_ticks_pick_round_steps() {
        assert_ticks(&nice_ticks(0.0, 10.0, 4), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_ticks(&nice_ticks(-9.0, 2.0, 4), &[-8.0, -6.0, -4.0, -2.0, 0.0, 2.0]);
        assert_ticks(&nice_ticks(0.0, 1.0, 4), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_ticks(&nice_ticks(0.0, 100.0, 4), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn nice_ticks_handle_degenerate_input() {
        assert_ticks(&nice_ticks(3.0, 3.0, 4), &[3.0]);
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
        assert_ticks(&nice_ticks(10.0, 0.0, 4), &[10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn scale_ticks_fall_back_to_domain_endpoints() {
        let scale = LinearScale::new((1.0, 9.0), (-1.0, 1.0));
        assert!(nice_ticks(1.0, 9.0, 1).is_empty());
        assert_ticks(&scale.ticks(1), &[1.0, 9.0]);
        assert_ticks(&scale.ticks(0), &[1.0, 9.0]);
        assert_ticks(&scale.ticks(4), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn every_label_group_gets_a_tick_with_a_single_requested_tick() {
        let bounds = GraphBounds::from_points(&[Vec3::ONE, Vec3::splat(9.0)]).unwrap();
        let config = GraphCubeConfig {
            tick_count: 1,
            ..default()
        };
        let layout = CubeLayout::from_bounds(bounds, &config);
        for (face, plane) in layout.planes.iter() {
            for group in &plane.labels {
                assert!(!group.positions.is_empty(), "{face:?} {:?} has no ticks", group.edge);
            }
        }
    }

    #[test]
    fn long_axes_are_clamped_to_threshold() {
        let bounds = GraphBounds {
            low:  Vec3::new(0.0, 0.0, 0.0),
            high: Vec3::new(2.0, 10.0, 2.0),
        };
        let layout = CubeLayout::from_bounds(bounds, &GraphCubeConfig::default());
        assert!((layout.delta.y - 3.0).abs() < EPSILON);
        assert!((layout.delta.x - 2.0).abs() < EPSILON);
        assert!((layout.scale_factor - 0.5 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn scales_map_domain_onto_centered_range() {
        let bounds = GraphBounds {
            low:  Vec3::new(-2.0, -2.0, -2.0),
            high: Vec3::new(2.0, 2.0, 2.0),
        };
        let layout = CubeLayout::from_bounds(bounds, &GraphCubeConfig::default());
        let display = layout.scales.to_display(Vec3::new(2.0, 0.0, -2.0));
        assert!((display - Vec3::new(-2.0, 0.0, 2.0)).length() < EPSILON);
    }

    #[test]
    fn planes_sit_on_the_box_faces() {
        let bounds = GraphBounds {
            low:  Vec3::new(0.0, 0.0, 0.0),
            high: Vec3::new(2.0, 3.0, 4.0),
        };
        let config = GraphCubeConfig {
            aspect_threshold: 10.0,
            ..default()
        };
        let layout = CubeLayout::from_bounds(bounds, &config);

        assert_eq!(layout.planes.top.translation, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(layout.planes.bottom.translation, Vec3::new(0.0, -1.5, 0.0));
        assert_eq!(layout.planes.left.translation, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(layout.planes.right.translation, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(layout.planes.front.translation, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(layout.planes.back.translation, Vec3::new(0.0, 0.0, -1.0));

        // Rotated planes must still span the box along the right world axes.
        let left = &layout.planes.left;
        let width_axis = left.rotation * Vec3::X * left.size.x;
        assert!((width_axis - Vec3::new(0.0, 0.0, 2.0)).length() < EPSILON);
        let top = &layout.planes.top;
        let depth_axis = top.rotation * Vec3::Y * top.size.y;
        assert!((depth_axis - Vec3::new(0.0, 0.0, 2.0)).length() < EPSILON);
    }

    #[test]
    fn only_top_and_bottom_carry_x_labels() {
        let bounds = GraphBounds {
            low:  Vec3::splat(-1.0),
            high: Vec3::splat(1.0),
        };
        let layout = CubeLayout::from_bounds(bounds, &GraphCubeConfig::default());

        for (face, plane) in layout.planes.iter() {
            assert_eq!(plane.label(LabelEdge::XTop).is_some(), face.has_x_labels());
            assert_eq!(plane.label(LabelEdge::XBottom).is_some(), face.has_x_labels());
            assert!(plane.label(LabelEdge::YLeft).is_some());
            assert!(plane.label(LabelEdge::YRight).is_some());
        }
    }

    #[test]
    fn tick_groups_run_along_their_edges() {
        let bounds = GraphBounds {
            low:  Vec3::splat(0.0),
            high: Vec3::splat(2.0),
        };
        let layout = CubeLayout::from_bounds(bounds, &GraphCubeConfig::default());
        let top = &layout.planes.top;
        let half = top.size * 0.5;

        let x_top = top.label(LabelEdge::XTop).unwrap();
        assert!(!x_top.positions.is_empty());
        assert_eq!(x_top.positions.len(), x_top.values.len());
        assert!(x_top.positions.iter().all(|p| (p.y - half.y).abs() < EPSILON));

        let y_left = top.label(LabelEdge::YLeft).unwrap();
        assert!(y_left.positions.iter().all(|p| (p.x + half.x).abs() < EPSILON));
        assert!((y_left.positions[0].y + half.y).abs() < EPSILON);
    }
}
