//! Events for building graph cubes.

use bevy::prelude::*;

/// Request to build a graph cube around a data set.
///
/// The cube is laid out from the data bounds using the current `GraphCubeConfig` and placed at
/// `transform`. `GraphCubeSpawned` fires once the entities exist.
#[derive(Event, Reflect, Debug, Clone)]
pub struct SpawnGraphCube {
    pub data:      Vec<Vec3>,
    pub transform: Transform,
}

impl SpawnGraphCube {
    pub fn new(data: impl Into<Vec<Vec3>>) -> Self {
        Self {
            data:      data.into(),
            transform: Transform::IDENTITY,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// Fired after a graph cube and all of its planes and label groups have been spawned.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct GraphCubeSpawned {
    #[event_target]
    pub cube: Entity,
}
