use bevy::prelude::*;

/// Configuration for building graph cubes and resolving their visibility
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct GraphCubeConfig {
    /// No axis may be longer than this multiple of the shortest axis
    pub aspect_threshold: f32,
    /// Approximate number of ticks per axis
    pub tick_count:       usize,
    /// Length of the longest axis in world units
    pub extent:           f32,
    /// Run the plane visibility resolver each frame
    pub resolve_planes:   bool,
    /// Run the axis label visibility resolver each frame
    pub resolve_labels:   bool,
}

impl Default for GraphCubeConfig {
    fn default() -> Self {
        Self {
            aspect_threshold: 1.5,
            tick_count:       4,
            extent:           0.5,
            resolve_planes:   true,
            resolve_labels:   true,
        }
    }
}
