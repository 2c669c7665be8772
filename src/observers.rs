//! Observers that wire events to graph cube construction.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::builder::spawn_graph_cube;
use crate::components::GraphCubeCamera;
use crate::config::GraphCubeConfig;
use crate::events::GraphCubeSpawned;
use crate::events::SpawnGraphCube;
use crate::layout::CubeLayout;
use crate::layout::GraphBounds;

/// Observer for `SpawnGraphCube` - lays out and spawns a cube around the data.
pub fn on_spawn_graph_cube(
    spawn: On<SpawnGraphCube>,
    mut commands: Commands,
    config: Res<GraphCubeConfig>,
) {
    let Some(bounds) = GraphBounds::from_points(&spawn.data) else {
        warn!("SpawnGraphCube: no data points, nothing to spawn");
        return;
    };

    let layout = CubeLayout::from_bounds(bounds, &config);
    let cube = spawn_graph_cube(&mut commands, &layout, spawn.transform);

    info!(
        "SpawnGraphCube: {} points, bounds {:.1?}..{:.1?}, delta={:.2?} scale={:.3}",
        spawn.data.len(),
        bounds.low,
        bounds.high,
        layout.delta,
        layout.scale_factor
    );

    commands.trigger(GraphCubeSpawned { cube });
}

/// Marks the first `PanOrbitCamera` as the camera that drives graph cube visibility,
/// unless some camera is already marked.
pub fn auto_mark_orbit_camera(
    add: On<Add, PanOrbitCamera>,
    mut commands: Commands,
    marked: Query<(), With<GraphCubeCamera>>,
) {
    if !marked.is_empty() {
        return;
    }
    commands.entity(add.entity).insert(GraphCubeCamera);
}
