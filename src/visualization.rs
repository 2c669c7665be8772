//! Gizmo drawing for graph cubes
//!
//! Draws the outline and tick grid of every visible plane, and short tick marks for the label
//! groups the resolvers left visible. Useful for checking plane/label culling without any text
//! rendering. Uses Bevy's `GizmoConfigGroup` pattern.

use bevy::prelude::*;

use crate::components::AxisPlane;
use crate::components::PlaneLabels;
use crate::components::TickGroup;
use crate::systems::GraphCubeSystems;

/// Gizmo config group for graph cube visualization.
/// Toggle via `GizmoConfigStore::config_mut::<GraphCubeGizmo>().enabled`
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct GraphCubeGizmo {}

/// Colors and sizes used by the graph cube gizmos
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct GraphCubeVisualizationConfig {
    pub outline_color: Color,
    pub grid_color:    Color,
    pub tick_color:    Color,
    /// World-space length of a tick mark
    pub tick_length:   f32,
    pub line_width:    f32,
}

impl Default for GraphCubeVisualizationConfig {
    fn default() -> Self {
        Self {
            outline_color: Color::srgb_u8(0x00, 0x74, 0xD9), // Blue
            grid_color:    Color::srgba(1.0, 1.0, 1.0, 0.6),
            tick_color:    Color::srgb(1.0, 1.0, 0.0), // Yellow
            tick_length:   0.02,
            line_width:    1.5,
        }
    }
}

/// Plugin that adds graph cube gizmo drawing
pub struct GraphCubeVisualizationPlugin;

impl Plugin for GraphCubeVisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<GraphCubeGizmo>()
            .init_resource::<GraphCubeVisualizationConfig>()
            .add_systems(Startup, init_graph_cube_gizmo)
            .add_systems(Update, sync_gizmo_line_width)
            .add_systems(
                PostUpdate,
                draw_graph_cube.after(GraphCubeSystems::ResolveLabels),
            );
    }
}

/// Initialize the graph cube gizmo config (disabled by default)
fn init_graph_cube_gizmo(
    mut config_store: ResMut<GizmoConfigStore>,
    viz_config: Res<GraphCubeVisualizationConfig>,
) {
    let (config, _) = config_store.config_mut::<GraphCubeGizmo>();
    config.enabled = false;
    config.line.width = viz_config.line_width;
}

fn sync_gizmo_line_width(
    mut config_store: ResMut<GizmoConfigStore>,
    viz_config: Res<GraphCubeVisualizationConfig>,
) {
    if !viz_config.is_changed() {
        return;
    }
    let (config, _) = config_store.config_mut::<GraphCubeGizmo>();
    config.line.width = viz_config.line_width;
}

/// Plane corners in plane-local space, counter-clockwise
fn plane_corners(size: Vec2) -> [Vec3; 4] {
    let half = size * 0.5;
    [
        Vec3::new(-half.x, -half.y, 0.0),
        Vec3::new(half.x, -half.y, 0.0),
        Vec3::new(half.x, half.y, 0.0),
        Vec3::new(-half.x, half.y, 0.0),
    ]
}

/// Lines joining matching ticks of two opposite label groups
fn draw_grid_lines(
    gizmos: &mut Gizmos<GraphCubeGizmo>,
    group_query: &Query<(&TickGroup, &GlobalTransform, &Visibility)>,
    pair: Option<(Entity, Entity)>,
    color: Color,
) {
    let Some((first, second)) = pair else {
        return;
    };
    let (Ok((first_ticks, first_transform, _)), Ok((second_ticks, second_transform, _))) =
        (group_query.get(first), group_query.get(second))
    else {
        return;
    };

    for (a, b) in first_ticks.positions.iter().zip(&second_ticks.positions) {
        gizmos.line(
            first_transform.transform_point(*a),
            second_transform.transform_point(*b),
            color,
        );
    }
}

fn draw_graph_cube(
    mut gizmos: Gizmos<GraphCubeGizmo>,
    config: Res<GraphCubeVisualizationConfig>,
    plane_query: Query<(&AxisPlane, &PlaneLabels, &GlobalTransform, &Visibility)>,
    group_query: Query<(&TickGroup, &GlobalTransform, &Visibility)>,
) {
    for (plane, labels, plane_transform, visibility) in &plane_query {
        if *visibility == Visibility::Hidden {
            continue;
        }

        let corners = plane_corners(plane.size).map(|corner| plane_transform.transform_point(corner));
        for i in 0..4 {
            let next = (i + 1) % 4;
            gizmos.line(corners[i], corners[next], config.outline_color);
        }

        draw_grid_lines(&mut gizmos, &group_query, labels.x_pair(), config.grid_color);
        draw_grid_lines(&mut gizmos, &group_query, labels.y_pair(), config.grid_color);

        let groups = [labels.x_top, labels.x_bottom, labels.y_left, labels.y_right];
        for group in groups.into_iter().flatten() {
            let Ok((ticks, group_transform, group_visibility)) = group_query.get(group) else {
                continue;
            };
            if *group_visibility == Visibility::Hidden {
                continue;
            }
            let outward = group_transform
                .affine()
                .transform_vector3(ticks.edge.outward())
                .normalize_or_zero()
                * config.tick_length;
            for tick in &ticks.positions {
                let start = group_transform.transform_point(*tick);
                gizmos.line(start, start + outward, config.tick_color);
            }
        }
    }
}
