//! Per-frame systems that apply the resolvers to graph cube entities.

use bevy::ecs::entity::EntityHashSet;
use bevy::prelude::*;

use crate::components::AxisPlane;
use crate::components::Face;
use crate::components::GraphCube;
use crate::components::GraphCubeCamera;
use crate::components::PlaneLabels;
use crate::components::TickGroup;
use crate::config::GraphCubeConfig;
use crate::error::ResolveError;
use crate::projection::CameraView;
use crate::resolve::LabelAnchors;
use crate::resolve::PairSide;
use crate::resolve::resolve_plane_visibility;
use crate::resolve::resolve_side_labels;
use crate::resolve::resolve_top_bottom_labels;
use crate::resolve::visible_top_bottom;

/// System sets for graph cube visibility, run in this order once per frame in `PostUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphCubeSystems {
    ResolvePlanes,
    ResolveLabels,
}

pub(crate) fn planes_enabled(config: Res<GraphCubeConfig>) -> bool { config.resolve_planes }

pub(crate) fn labels_enabled(config: Res<GraphCubeConfig>) -> bool { config.resolve_labels }

const fn visibility_for(show: bool) -> Visibility {
    if show {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

fn is_shown(visibility: &Visibility) -> bool { *visibility != Visibility::Hidden }

/// Shows the farther plane of each opposing pair on every graph cube.
pub fn resolve_plane_visibility_system(
    cube_query: Query<(Entity, &GraphCube)>,
    camera_query: Query<&GlobalTransform, With<GraphCubeCamera>>,
    mut plane_query: Query<(&GlobalTransform, &mut Visibility), With<AxisPlane>>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };
    let camera_position = camera_transform.translation();

    for (cube_entity, cube) in &cube_query {
        let Some(anchors) = cube.planes.try_map(|plane| {
            plane_query
                .get(plane)
                .ok()
                .map(|(global_transform, _)| global_transform.translation())
        }) else {
            warn!("Graph cube {cube_entity:?} is missing one of its planes, skipping");
            continue;
        };

        let shown = resolve_plane_visibility(&anchors, camera_position);

        for (face, (plane, show)) in cube.planes.zip(shown).iter() {
            let Ok((_, mut visibility)) = plane_query.get_mut(*plane) else {
                continue;
            };
            if visibility.set_if_neq(visibility_for(*show)) {
                debug!("Graph cube {cube_entity:?}: {face:?} plane shown={show}");
            }
        }
    }
}

/// Shows one label group per axis on the visible top/bottom plane, and the single leftmost
/// y-axis label group across the visible side planes.
pub fn resolve_axis_label_visibility_system(
    cube_query: Query<(Entity, &GraphCube)>,
    camera_query: Query<(&GlobalTransform, &Projection), With<GraphCubeCamera>>,
    plane_query: Query<(&Visibility, &PlaneLabels), With<AxisPlane>>,
    mut group_query: Query<(&TickGroup, &GlobalTransform, &mut Visibility), Without<AxisPlane>>,
    mut failing: Local<EntityHashSet>,
) {
    let Ok((camera_transform, projection)) = camera_query.single() else {
        return;
    };
    let camera = CameraView::from_camera(camera_transform, projection);

    for (cube_entity, cube) in &cube_query {
        match resolve_top_bottom(cube, &camera, &plane_query, &mut group_query) {
            Err(error) => {
                if precondition_changed(&mut failing, cube_entity, true) {
                    warn!("Graph cube {cube_entity:?}: skipping top/bottom labels: {error}");
                }
            },
            Ok(()) => {
                if precondition_changed(&mut failing, cube_entity, false) {
                    debug!("Graph cube {cube_entity:?}: top/bottom labels resolved again");
                }
            },
        }
        resolve_sides(cube, &camera, &plane_query, &mut group_query);
    }
}

/// Records whether `cube` is currently failing the top/bottom precondition and reports
/// whether that differs from the previous frame.
fn precondition_changed(failing: &mut EntityHashSet, cube: Entity, is_failing: bool) -> bool {
    if is_failing {
        failing.insert(cube)
    } else {
        failing.remove(&cube)
    }
}

fn leading_tick(
    group_query: &Query<(&TickGroup, &GlobalTransform, &mut Visibility), Without<AxisPlane>>,
    group: Entity,
) -> Option<Vec3> {
    let (ticks, global_transform, _) = group_query.get(group).ok()?;
    ticks.leading_tick(global_transform)
}

fn pair_anchors(
    group_query: &Query<(&TickGroup, &GlobalTransform, &mut Visibility), Without<AxisPlane>>,
    pair: Option<(Entity, Entity)>,
) -> Option<(Vec3, Vec3)> {
    let (first, second) = pair?;
    Some((leading_tick(group_query, first)?, leading_tick(group_query, second)?))
}

fn show_group(
    group_query: &mut Query<(&TickGroup, &GlobalTransform, &mut Visibility), Without<AxisPlane>>,
    group: Entity,
    show: bool,
) {
    let Ok((ticks, _, mut visibility)) = group_query.get_mut(group) else {
        return;
    };
    if visibility.set_if_neq(visibility_for(show)) {
        debug!("{:?} label group {group:?} shown={show}", ticks.edge);
    }
}

fn apply_pair(
    group_query: &mut Query<(&TickGroup, &GlobalTransform, &mut Visibility), Without<AxisPlane>>,
    pair: Option<(Entity, Entity)>,
    side: Option<PairSide>,
) {
    if let (Some((first, second)), Some(side)) = (pair, side) {
        show_group(group_query, first, side.shows_first());
        show_group(group_query, second, side.shows_second());
    }
}

fn resolve_top_bottom(
    cube: &GraphCube,
    camera: &CameraView,
    plane_query: &Query<(&Visibility, &PlaneLabels), With<AxisPlane>>,
    group_query: &mut Query<(&TickGroup, &GlobalTransform, &mut Visibility), Without<AxisPlane>>,
) -> Result<(), ResolveError> {
    let top = plane_query.get(cube.planes.top).ok();
    let bottom = plane_query.get(cube.planes.bottom).ok();
    let face = visible_top_bottom(
        top.is_some_and(|(visibility, _)| is_shown(visibility)),
        bottom.is_some_and(|(visibility, _)| is_shown(visibility)),
    )?;

    let labels = match face {
        Face::Bottom => bottom,
        _ => top,
    }
    .map(|(_, labels)| *labels)
    .unwrap_or_default();

    let x_pair = labels.x_pair();
    let y_pair = labels.y_pair();
    let anchors = LabelAnchors {
        x: pair_anchors(group_query, x_pair),
        y: pair_anchors(group_query, y_pair),
    };

    let choice = resolve_top_bottom_labels(&anchors, camera);
    apply_pair(group_query, x_pair, choice.x);
    apply_pair(group_query, y_pair, choice.y);
    Ok(())
}

fn resolve_sides(
    cube: &GraphCube,
    camera: &CameraView,
    plane_query: &Query<(&Visibility, &PlaneLabels), With<AxisPlane>>,
    group_query: &mut Query<(&TickGroup, &GlobalTransform, &mut Visibility), Without<AxisPlane>>,
) {
    // Flattened as y_left, y_right of each visible side plane in left, right, front, back order
    let candidates: Vec<Entity> = cube
        .planes
        .side_planes()
        .into_iter()
        .filter_map(|(_, plane)| plane_query.get(*plane).ok())
        .filter(|(visibility, _)| is_shown(visibility))
        .flat_map(|(_, labels)| [labels.y_left, labels.y_right])
        .flatten()
        .collect();

    if candidates.is_empty() {
        return;
    }

    // Groups without ticks cannot be ranked; they stay hidden.
    let ranked: Vec<(Entity, Vec3)> = candidates
        .iter()
        .filter_map(|group| leading_tick(group_query, *group).map(|tick| (*group, tick)))
        .collect();
    let ticks: Vec<Vec3> = ranked.iter().map(|(_, tick)| *tick).collect();
    let winner = resolve_side_labels(&ticks, camera).map(|index| ranked[index].0);

    for group in candidates {
        show_group(group_query, group, Some(group) == winner);
    }
}
