//! Camera abstraction used by the resolvers: a world-space position and a projection from
//! world space to normalized device coordinates.

use bevy::prelude::*;

/// Anything that can report a camera position and project world points to screen space.
pub trait ScreenProjector {
    /// World-space camera position
    fn position(&self) -> Vec3;

    /// Projects a world-space point to normalized device coordinates.
    ///
    /// Points behind the camera are still divided by their (negative) depth, so their
    /// coordinates come out mirrored. The ranking code accepts that.
    fn project(&self, world: Vec3) -> Vec2;
}

/// Snapshot of a camera's pose and projection for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    position:        Vec3,
    clip_from_world: Mat4,
}

impl CameraView {
    /// Builds the view from a camera's finalized `GlobalTransform` and its `Projection`.
    pub fn from_camera(camera_transform: &GlobalTransform, projection: &Projection) -> Self {
        Self::from_clip_from_view(camera_transform, projection.get_clip_from_view())
    }

    pub fn from_clip_from_view(camera_transform: &GlobalTransform, clip_from_view: Mat4) -> Self {
        let world_from_view = Mat4::from(camera_transform.affine());
        Self {
            position:        camera_transform.translation(),
            clip_from_world: clip_from_view * world_from_view.inverse(),
        }
    }
}

impl ScreenProjector for CameraView {
    fn position(&self) -> Vec3 { self.position }

    fn project(&self, world: Vec3) -> Vec2 { self.clip_from_world.project_point3(world).truncate() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_from(eye: Vec3, target: Vec3) -> CameraView {
        let transform = GlobalTransform::from(Transform::from_translation(eye).looking_at(target, Vec3::Y));
        let projection = Projection::Perspective(PerspectiveProjection::default());
        CameraView::from_camera(&transform, &projection)
    }

    #[test]
    fn looked_at_point_projects_to_center() {
        let view = view_from(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ndc = view.project(Vec3::ZERO);
        assert!(ndc.length() < 1e-5, "expected center, got {ndc:?}");
        assert_eq!(view.position(), Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn screen_x_follows_camera_right() {
        let view = view_from(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let left = view.project(Vec3::new(-1.0, 0.0, 0.0));
        let right = view.project(Vec3::new(1.0, 0.0, 0.0));
        assert!(left.x < 0.0);
        assert!(right.x > 0.0);
        assert!((left.x + right.x).abs() < 1e-5);
    }

    #[test]
    fn orbiting_the_camera_flips_screen_order() {
        // From behind the origin, world +x appears on the left of the screen.
        let view = view_from(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO);
        let plus_x = view.project(Vec3::new(1.0, 0.0, 0.0));
        let minus_x = view.project(Vec3::new(-1.0, 0.0, 0.0));
        assert!(plus_x.x < minus_x.x);
    }

    #[test]
    fn nearer_points_spread_wider() {
        let view = view_from(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let near = view.project(Vec3::new(1.0, 0.0, 5.0));
        let far = view.project(Vec3::new(1.0, 0.0, -5.0));
        assert!(near.x > far.x);
    }
}
