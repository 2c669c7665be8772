//! Convenient re-exports for common types

pub use crate::GraphCubePlugin;
pub use crate::components::AxisPlane;
pub use crate::components::Face;
pub use crate::components::GraphCube;
pub use crate::components::GraphCubeCamera;
pub use crate::components::PlaneLabels;
pub use crate::components::TickGroup;
pub use crate::config::GraphCubeConfig;
pub use crate::events::GraphCubeSpawned;
pub use crate::events::SpawnGraphCube;
pub use crate::systems::GraphCubeSystems;
