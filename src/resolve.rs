//! Camera-relative visibility decisions for the graph cube.
//!
//! These functions are pure: they take world-space anchors and a camera and return which
//! member of each pair should be shown. [`crate::systems`] feeds them from the ECS and
//! writes the answers back as `Visibility`.
//!
//! Two policies are used:
//! - **Farther wins**: of two opposing planes, or two label groups on one axis, the one
//!   farther from the camera is shown. Equal distances show the first member of the pair.
//! - **Leftmost wins**: among the y-axis label groups on visible side planes, the one whose
//!   leading tick projects to the smallest screen x is shown and all others are hidden.

use bevy::prelude::*;

use crate::components::Face;
use crate::components::FacePair;
use crate::error::ResolveError;
use crate::planes::GraphPlanes;
use crate::projection::ScreenProjector;

/// Which member of a two-element pair is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSide {
    First,
    Second,
}

impl PairSide {
    pub const fn shows_first(self) -> bool { matches!(self, Self::First) }

    pub const fn shows_second(self) -> bool { matches!(self, Self::Second) }
}

/// Picks the member of a pair that is farther from the camera. Ties go to `first`.
pub fn farther_side(first: Vec3, second: Vec3, camera_position: Vec3) -> PairSide {
    if camera_position.distance(first) >= camera_position.distance(second) {
        PairSide::First
    } else {
        PairSide::Second
    }
}

/// Decides which plane of each opposing pair is shown, given each plane's world-space anchor.
///
/// Exactly one member of every pair comes back `true`.
pub fn resolve_plane_visibility(
    anchors: &GraphPlanes<Vec3>,
    camera_position: Vec3,
) -> GraphPlanes<bool> {
    let mut shown = GraphPlanes::<bool>::default();
    for pair in FacePair::ALL {
        let (first, second) = pair.faces();
        let side = farther_side(*anchors.get(first), *anchors.get(second), camera_position);
        *shown.get_mut(first) = side.shows_first();
        *shown.get_mut(second) = side.shows_second();
    }
    shown
}

/// Returns the single visible face of the top/bottom pair.
pub const fn visible_top_bottom(top: bool, bottom: bool) -> Result<Face, ResolveError> {
    match (top, bottom) {
        (true, false) => Ok(Face::Top),
        (false, true) => Ok(Face::Bottom),
        (true, true) => Err(ResolveError::MissingPrecondition { visible: 2 }),
        (false, false) => Err(ResolveError::MissingPrecondition { visible: 0 }),
    }
}

/// World-space leading ticks of the label pairs on one plane.
/// An axis is `None` when the plane does not carry both of its groups.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelAnchors {
    /// `(x_top, x_bottom)`
    pub x: Option<(Vec3, Vec3)>,
    /// `(y_left, y_right)`
    pub y: Option<(Vec3, Vec3)>,
}

/// Per-axis outcome for a top/bottom plane. `None` axes are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelChoice {
    pub x: Option<PairSide>,
    pub y: Option<PairSide>,
}

/// Resolves the label groups of the visible top/bottom plane.
///
/// Each axis is decided independently: the group nearer the camera is hidden and the farther
/// one shown, with ties showing `x_top` / `y_left`.
pub fn resolve_top_bottom_labels(
    anchors: &LabelAnchors,
    camera: &impl ScreenProjector,
) -> LabelChoice {
    let camera_position = camera.position();
    LabelChoice {
        x: anchors
            .x
            .map(|(top, bottom)| farther_side(top, bottom, camera_position)),
        y: anchors
            .y
            .map(|(left, right)| farther_side(left, right, camera_position)),
    }
}

/// Index of the smallest value, keeping the first one seen on ties. NaNs are never chosen.
pub fn leftmost_candidate(screen_xs: impl IntoIterator<Item = f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, x) in screen_xs.into_iter().enumerate() {
        if x.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, best_x)| x < best_x) {
            best = Some((index, x));
        }
    }
    best.map(|(index, _)| index)
}

/// Projects each candidate's leading tick and returns the index of the leftmost one on screen.
pub fn resolve_side_labels(
    leading_ticks: &[Vec3],
    camera: &impl ScreenProjector,
) -> Option<usize> {
    leftmost_candidate(leading_ticks.iter().map(|tick| camera.project(*tick).x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::CameraView;

    fn camera_at(position: Vec3) -> CameraView {
        CameraView::from_camera(
            &GlobalTransform::from_translation(position),
            &Projection::Perspective(PerspectiveProjection::default()),
        )
    }

    fn box_anchors(half: Vec3) -> GraphPlanes<Vec3> {
        GraphPlanes {
            top:    Vec3::new(0.0, half.y, 0.0),
            bottom: Vec3::new(0.0, -half.y, 0.0),
            left:   Vec3::new(-half.x, 0.0, 0.0),
            right:  Vec3::new(half.x, 0.0, 0.0),
            front:  Vec3::new(0.0, 0.0, half.z),
            back:   Vec3::new(0.0, 0.0, -half.z),
        }
    }

    fn assert_pairs_exclusive(shown: &GraphPlanes<bool>) {
        for pair in FacePair::ALL {
            let (first, second) = shown.pair(pair);
            assert_ne!(first, second, "{pair:?} must show exactly one plane: {shown:?}");
        }
    }

    #[test]
    fn every_pair_shows_exactly_one_plane() {
        let anchors = box_anchors(Vec3::new(1.0, 0.75, 1.25));
        for yaw_step in 0..24 {
            for pitch_step in -5..=5 {
                let yaw = yaw_step as f32 * std::f32::consts::TAU / 24.0;
                let pitch = pitch_step as f32 * 0.3;
                let camera = Vec3::new(
                    5.0 * pitch.cos() * yaw.cos(),
                    5.0 * pitch.sin(),
                    5.0 * pitch.cos() * yaw.sin(),
                );
                assert_pairs_exclusive(&resolve_plane_visibility(&anchors, camera));
            }
        }
        // Inside the box and exactly on an anchor
        assert_pairs_exclusive(&resolve_plane_visibility(&anchors, Vec3::ZERO));
        assert_pairs_exclusive(&resolve_plane_visibility(&anchors, anchors.top));
    }

    #[test]
    fn farther_plane_is_shown() {
        let camera = Vec3::new(0.0, 0.0, 10.0);
        let mut anchors = box_anchors(Vec3::ONE);
        // left at distance 12, right at distance 8
        anchors.left = Vec3::new(0.0, 0.0, -2.0);
        anchors.right = Vec3::new(0.0, 0.0, 2.0);

        let shown = resolve_plane_visibility(&anchors, camera);
        assert!(shown.left);
        assert!(!shown.right);
        // front/back: back is farther from a camera on +z
        assert!(!shown.front);
        assert!(shown.back);
    }

    #[test]
    fn equal_distances_show_the_first_plane() {
        let camera = Vec3::new(0.0, 0.0, 10.0);
        let anchors = box_anchors(Vec3::new(1.0, 5.0, 1.0));
        let distance = camera.distance(anchors.top);
        assert!((distance - 11.18).abs() < 0.01);
        assert!((camera.distance(anchors.bottom) - distance).abs() < 1e-5);

        let shown = resolve_plane_visibility(&anchors, camera);
        assert!(shown.top);
        assert!(!shown.bottom);
        // left/right are also equidistant from a camera on the z axis
        assert!(shown.left);
        assert!(!shown.right);
    }

    #[test]
    fn camera_on_an_anchor_hides_that_plane() {
        let anchors = box_anchors(Vec3::ONE);
        let shown = resolve_plane_visibility(&anchors, anchors.front);
        assert!(!shown.front);
        assert!(shown.back);
    }

    #[test]
    fn top_bottom_precondition_requires_exactly_one() {
        assert_eq!(visible_top_bottom(true, false), Ok(Face::Top));
        assert_eq!(visible_top_bottom(false, true), Ok(Face::Bottom));
        assert_eq!(
            visible_top_bottom(true, true),
            Err(ResolveError::MissingPrecondition { visible: 2 })
        );
        assert_eq!(
            visible_top_bottom(false, false),
            Err(ResolveError::MissingPrecondition { visible: 0 })
        );
    }

    #[test]
    fn nearer_label_group_is_hidden() {
        let camera = Vec3::new(0.0, 0.0, 10.0);
        let anchors = LabelAnchors {
            // x_top at distance 6, x_bottom at distance 9
            x: Some((Vec3::new(0.0, 0.0, 4.0), Vec3::new(0.0, 0.0, 1.0))),
            // y_left at distance 9, y_right at distance 6
            y: Some((Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 4.0))),
        };
        let choice = resolve_top_bottom_labels(&anchors, &camera_at(camera));
        assert_eq!(choice.x, Some(PairSide::Second));
        assert_eq!(choice.y, Some(PairSide::First));
    }

    #[test]
    fn label_ties_show_top_and_left() {
        let camera = Vec3::ZERO;
        let anchors = LabelAnchors {
            x: Some((Vec3::X, Vec3::NEG_X)),
            y: Some((Vec3::Y, Vec3::NEG_Y)),
        };
        let choice = resolve_top_bottom_labels(&anchors, &camera_at(camera));
        assert_eq!(choice.x, Some(PairSide::First));
        assert_eq!(choice.y, Some(PairSide::First));
    }

    #[test]
    fn missing_axes_are_skipped() {
        let anchors = LabelAnchors {
            x: None,
            y: Some((Vec3::X, Vec3::NEG_X)),
        };
        let choice = resolve_top_bottom_labels(&anchors, &camera_at(Vec3::new(5.0, 0.0, 0.0)));
        assert_eq!(choice.x, None);
        assert_eq!(choice.y, Some(PairSide::Second));
    }

    #[test]
    fn leftmost_screen_x_wins() {
        assert_eq!(leftmost_candidate([0.3, -0.1, 0.5, 0.7]), Some(1));
    }

    #[test]
    fn leftmost_ties_keep_first_seen() {
        assert_eq!(leftmost_candidate([0.2, -0.4, -0.4, 0.1]), Some(1));
        assert_eq!(leftmost_candidate([f32::NAN, 0.5, 0.5]), Some(1));
    }

    #[test]
    fn no_candidates_selects_nothing() {
        assert_eq!(leftmost_candidate(std::iter::empty()), None);
    }

    #[test]
    fn side_labels_rank_by_projection() {
        let transform = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        );
        let camera = CameraView::from_camera(
            &transform,
            &Projection::Perspective(PerspectiveProjection::default()),
        );
        let ticks = [
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(-0.5, 0.0, 0.0),
            // Farther back but further left in world space; perspective pulls it inwards
            Vec3::new(-0.6, 0.0, -20.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        assert_eq!(resolve_side_labels(&ticks, &camera), Some(1));
        assert_eq!(resolve_side_labels(&[], &camera), None);
    }
}
