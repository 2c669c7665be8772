//! Spawns the entity hierarchy for a graph cube from a [`CubeLayout`].

use bevy::prelude::*;

use crate::components::AxisPlane;
use crate::components::GraphCube;
use crate::components::LabelEdge;
use crate::components::PlaneLabels;
use crate::components::TickGroup;
use crate::layout::CubeLayout;
use crate::layout::PlaneLayout;
use crate::planes::GraphPlanes;

/// Spawns a graph cube root at `transform` with its six planes and their label groups.
///
/// The root's scale is multiplied by the layout's scale factor so the longest axis spans the
/// configured extent. All planes and label groups start visible; the resolvers settle them on
/// the next frame.
pub fn spawn_graph_cube(commands: &mut Commands, layout: &CubeLayout, transform: Transform) -> Entity {
    let mut root_transform = transform;
    root_transform.scale *= layout.scale_factor;

    let root = commands
        .spawn((Name::new("GraphCube"), root_transform, Visibility::Visible))
        .id();

    let planes = GraphPlanes::from_fn(|face| spawn_plane(commands, root, layout.planes.get(face)));

    commands.entity(root).insert(GraphCube {
        planes,
        scales: layout.scales,
        scale_factor: layout.scale_factor,
    });

    root
}

fn spawn_plane(commands: &mut Commands, root: Entity, plane: &PlaneLayout) -> Entity {
    let plane_entity = commands
        .spawn((
            Name::new(format!("{:?}Plane", plane.face)),
            AxisPlane {
                face: plane.face,
                size: plane.size,
            },
            plane.transform(),
            Visibility::Visible,
            ChildOf(root),
        ))
        .id();

    let mut labels = PlaneLabels::default();
    for group in &plane.labels {
        let group_entity = commands
            .spawn((
                Name::new(format!("{:?}", group.edge)),
                TickGroup {
                    edge:      group.edge,
                    positions: group.positions.clone(),
                    values:    group.values.clone(),
                },
                Transform::IDENTITY,
                Visibility::Visible,
                ChildOf(plane_entity),
            ))
            .id();

        match group.edge {
            LabelEdge::XTop => labels.x_top = Some(group_entity),
            LabelEdge::XBottom => labels.x_bottom = Some(group_entity),
            LabelEdge::YLeft => labels.y_left = Some(group_entity),
            LabelEdge::YRight => labels.y_right = Some(group_entity),
        }
    }

    commands.entity(plane_entity).insert(labels);
    plane_entity
}
