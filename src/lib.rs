// bevy_graph_cube
// Axis box ("graph cube") for 3D scatter/surface plots providing:
// - Layout of the six bounding planes and their tick label groups from data bounds
// - Per-frame, camera-relative culling of opposing planes
// - Per-frame selection of the label groups that face the camera

use bevy::camera::visibility::VisibilitySystems;
use bevy::prelude::*;
use bevy::transform::TransformSystems;

mod builder;
mod components;
mod config;
mod error;
mod events;
mod layout;
mod observers;
mod planes;
pub mod prelude;
mod projection;
mod resolve;
mod systems;
#[cfg(feature = "visualization")]
mod visualization;

// Public API - Components
pub use components::AxisPlane;
pub use components::Face;
pub use components::FacePair;
pub use components::GraphCube;
pub use components::GraphCubeCamera;
pub use components::LabelEdge;
pub use components::PlaneLabels;
pub use components::TickGroup;
pub use planes::GraphPlanes;

// Public API - Events
pub use events::GraphCubeSpawned;
pub use events::SpawnGraphCube;

// Public API - Configuration resources
pub use config::GraphCubeConfig;

// Public API - Layout
pub use builder::spawn_graph_cube;
pub use layout::AxisScales;
pub use layout::CubeLayout;
pub use layout::GraphBounds;
pub use layout::LinearScale;
pub use layout::PlaneLayout;
pub use layout::TickGroupLayout;
pub use layout::nice_ticks;

// Public API - Resolvers (usable without an `App`)
pub use error::ResolveError;
pub use projection::CameraView;
pub use projection::ScreenProjector;
pub use resolve::LabelAnchors;
pub use resolve::LabelChoice;
pub use resolve::PairSide;
pub use resolve::farther_side;
pub use resolve::leftmost_candidate;
pub use resolve::resolve_plane_visibility;
pub use resolve::resolve_side_labels;
pub use resolve::resolve_top_bottom_labels;
pub use resolve::visible_top_bottom;

// Public API - Systems
pub use systems::GraphCubeSystems;
pub use systems::resolve_axis_label_visibility_system;
pub use systems::resolve_plane_visibility_system;

// Public API - Visualization
#[cfg(feature = "visualization")]
pub use visualization::GraphCubeGizmo;
#[cfg(feature = "visualization")]
pub use visualization::GraphCubeVisualizationConfig;
#[cfg(feature = "visualization")]
pub use visualization::GraphCubeVisualizationPlugin;

// Internal - used by plugin, not for external use
use observers::auto_mark_orbit_camera;
use observers::on_spawn_graph_cube;
use systems::labels_enabled;
use systems::planes_enabled;

/// Plugin that builds graph cubes and keeps their planes and labels facing the camera
pub struct GraphCubePlugin;

impl Plugin for GraphCubePlugin {
    fn build(&self, app: &mut App) {
        app
            // Register observers
            .add_observer(on_spawn_graph_cube)
            .add_observer(auto_mark_orbit_camera)
            // Resolve after the camera's transform is final, before visibility propagates
            .configure_sets(
                PostUpdate,
                (GraphCubeSystems::ResolvePlanes, GraphCubeSystems::ResolveLabels)
                    .chain()
                    .after(TransformSystems::Propagate)
                    .before(VisibilitySystems::VisibilityPropagate),
            )
            .add_systems(
                PostUpdate,
                (
                    resolve_plane_visibility_system
                        .in_set(GraphCubeSystems::ResolvePlanes)
                        .run_if(planes_enabled),
                    resolve_axis_label_visibility_system
                        .in_set(GraphCubeSystems::ResolveLabels)
                        .run_if(labels_enabled),
                ),
            )
            // Initialize resources
            .init_resource::<GraphCubeConfig>();
    }
}
