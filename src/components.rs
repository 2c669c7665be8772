//! Components that make up a graph cube in the ECS.
//!
//! A graph cube is a root entity carrying [`GraphCube`], six plane children carrying
//! [`AxisPlane`] and [`PlaneLabels`], and per-plane label groups carrying [`TickGroup`].
//! Only the `Visibility` of planes and label groups changes after construction.

use bevy::prelude::*;

use crate::layout::AxisScales;
use crate::planes::GraphPlanes;

/// One face of the axis box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::Front,
        Self::Back,
    ];

    /// Whether this face carries `x_top`/`x_bottom` label groups.
    pub const fn has_x_labels(self) -> bool { matches!(self, Self::Top | Self::Bottom) }
}

/// A pair of opposing faces. The first face of each pair wins distance ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum FacePair {
    TopBottom,
    LeftRight,
    FrontBack,
}

impl FacePair {
    pub const ALL: [Self; 3] = [Self::TopBottom, Self::LeftRight, Self::FrontBack];

    pub const fn faces(self) -> (Face, Face) {
        match self {
            Self::TopBottom => (Face::Top, Face::Bottom),
            Self::LeftRight => (Face::Left, Face::Right),
            Self::FrontBack => (Face::Front, Face::Back),
        }
    }
}

/// Which edge of a plane a label group runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum LabelEdge {
    XTop,
    XBottom,
    YLeft,
    YRight,
}

impl LabelEdge {
    /// Outward direction of the edge in plane-local space
    pub const fn outward(self) -> Vec3 {
        match self {
            Self::XTop => Vec3::Y,
            Self::XBottom => Vec3::NEG_Y,
            Self::YLeft => Vec3::NEG_X,
            Self::YRight => Vec3::X,
        }
    }
}

/// Root of a graph cube. Holds the six plane entities by name and the data-to-display scales.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct GraphCube {
    pub planes:       GraphPlanes<Entity>,
    pub scales:       AxisScales,
    /// Uniform scale applied to the root so the largest axis spans the configured extent
    pub scale_factor: f32,
}

/// Marks a plane entity and records its face and size in plane-local units.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct AxisPlane {
    pub face: Face,
    pub size: Vec2,
}

/// The label groups attached to a plane.
///
/// `x_top`/`x_bottom` only exist on the top and bottom planes; `y_left`/`y_right` exist on
/// every plane. A `None` means the axis does not apply to the plane.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct PlaneLabels {
    pub x_top:    Option<Entity>,
    pub x_bottom: Option<Entity>,
    pub y_left:   Option<Entity>,
    pub y_right:  Option<Entity>,
}

impl PlaneLabels {
    /// The `(x_top, x_bottom)` pair when both are present
    pub const fn x_pair(&self) -> Option<(Entity, Entity)> {
        match (self.x_top, self.x_bottom) {
            (Some(top), Some(bottom)) => Some((top, bottom)),
            _ => None,
        }
    }

    /// The `(y_left, y_right)` pair when both are present
    pub const fn y_pair(&self) -> Option<(Entity, Entity)> {
        match (self.y_left, self.y_right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}

/// Tick positions along one plane edge, in the group's local space.
/// Fixed at construction; the resolvers only read it.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct TickGroup {
    pub edge:      LabelEdge,
    pub positions: Vec<Vec3>,
    /// Data values the ticks stand for, index-aligned with `positions`
    pub values:    Vec<f32>,
}

impl TickGroup {
    /// World-space position of the first tick, if the group has any ticks.
    pub fn leading_tick(&self, global_transform: &GlobalTransform) -> Option<Vec3> {
        self.positions
            .first()
            .map(|tick| global_transform.transform_point(*tick))
    }
}

/// Marks the camera whose pose drives plane and label visibility.
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component)]
pub struct GraphCubeCamera;
