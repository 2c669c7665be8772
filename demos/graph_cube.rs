//! Scatter plot inside a graph cube using `bevy_graph_cube`.
//!
//! - Orbit with the left mouse button, pan with the right, scroll to zoom
//! - The face between the camera and the data is culled so the points are always seen through
//!   the box, and only the label groups facing the camera stay visible
//! - Press 'D' to toggle gizmo visualization of planes, tick grid and visible ticks

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_graph_cube::GraphCubeGizmo;
use bevy_graph_cube::GraphCubeVisualizationPlugin;
use bevy_graph_cube::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

const DATA: [Vec3; 6] = [
    Vec3::new(2.0, 2.0, 2.0),
    Vec3::new(-2.0, -9.0, -2.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(2.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 1.0),
];
const PLANE_COLOR: Color = Color::srgba(0.0, 0.455, 0.851, 0.3);
const POINT_COLOR: Color = Color::srgb(0.83, 0.83, 0.83);
/// Point radius in world units, before the cube's scale is applied
const POINT_RADIUS: f32 = 0.015;
const CAMERA_START_YAW: f32 = 0.6;
const CAMERA_START_PITCH: f32 = 0.4;
const CAMERA_START_RADIUS: f32 = 1.2;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            PanOrbitCameraPlugin,
            GraphCubePlugin,
            GraphCubeVisualizationPlugin,
            BrpExtrasPlugin::default(),
        ))
        .add_systems(Startup, setup)
        .add_systems(Update, toggle_debug_visualization)
        .add_observer(decorate_graph_cube)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 1500.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, FRAC_PI_4, -FRAC_PI_4)),
    ));

    // Marked as the graph cube camera automatically
    commands.spawn(PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(CAMERA_START_RADIUS),
        yaw: Some(CAMERA_START_YAW),
        pitch: Some(CAMERA_START_PITCH),
        ..default()
    });

    commands.trigger(
        SpawnGraphCube::new(DATA).with_transform(Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_4))),
    );

    // Instructions
    commands.spawn((
        Text::new("Drag to orbit, scroll to zoom\n\nPress:\n'D' debug visualization"),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

/// Gives each plane a translucent face and places the data points inside the cube.
fn decorate_graph_cube(
    spawned: On<GraphCubeSpawned>,
    mut commands: Commands,
    cube_query: Query<&GraphCube>,
    plane_query: Query<&AxisPlane>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(cube) = cube_query.get(spawned.cube) else {
        return;
    };

    let plane_material = materials.add(StandardMaterial {
        base_color: PLANE_COLOR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for (_, plane) in cube.planes.iter() {
        let Ok(axis_plane) = plane_query.get(*plane) else {
            continue;
        };
        commands.spawn((
            Mesh3d(meshes.add(Rectangle::from_size(axis_plane.size))),
            MeshMaterial3d(plane_material.clone()),
            ChildOf(*plane),
        ));
    }

    let point_mesh = meshes.add(Sphere::new(POINT_RADIUS / cube.scale_factor));
    let point_material = materials.add(POINT_COLOR);
    for point in DATA {
        commands.spawn((
            Mesh3d(point_mesh.clone()),
            MeshMaterial3d(point_material.clone()),
            Transform::from_translation(cube.scales.to_display(point)),
            ChildOf(spawned.cube),
        ));
    }
}

fn toggle_debug_visualization(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    if keyboard.just_pressed(KeyCode::KeyD) {
        let (config, _) = config_store.config_mut::<GraphCubeGizmo>();
        config.enabled = !config.enabled;
    }
}
