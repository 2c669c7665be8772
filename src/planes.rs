//! Named six-face record.

use bevy::prelude::*;

use crate::components::Face;
use crate::components::FacePair;

/// One value per face of the axis box, each in its own named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct GraphPlanes<T> {
    pub top:    T,
    pub bottom: T,
    pub left:   T,
    pub right:  T,
    pub front:  T,
    pub back:   T,
}

impl<T> GraphPlanes<T> {
    /// Builds the record by calling `f` once per face, in `Face::ALL` order.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self {
            top:    f(Face::Top),
            bottom: f(Face::Bottom),
            left:   f(Face::Left),
            right:  f(Face::Right),
            front:  f(Face::Front),
            back:   f(Face::Back),
        }
    }

    pub const fn get(&self, face: Face) -> &T {
        match face {
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    pub const fn get_mut(&mut self, face: Face) -> &mut T {
        match face {
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
        }
    }

    /// The two members of an opposing pair, first-indexed face first.
    pub const fn pair(&self, pair: FacePair) -> (&T, &T) {
        let (first, second) = pair.faces();
        (self.get(first), self.get(second))
    }

    /// Builds a record from `f` applied to each value, short-circuiting on the first `None`.
    pub fn try_map<U>(self, mut f: impl FnMut(T) -> Option<U>) -> Option<GraphPlanes<U>> {
        Some(GraphPlanes {
            top:    f(self.top)?,
            bottom: f(self.bottom)?,
            left:   f(self.left)?,
            right:  f(self.right)?,
            front:  f(self.front)?,
            back:   f(self.back)?,
        })
    }

    pub fn zip<U>(self, other: GraphPlanes<U>) -> GraphPlanes<(T, U)> {
        GraphPlanes {
            top:    (self.top, other.top),
            bottom: (self.bottom, other.bottom),
            left:   (self.left, other.left),
            right:  (self.right, other.right),
            front:  (self.front, other.front),
            back:   (self.back, other.back),
        }
    }

    /// Iterates `(face, value)` in `Face::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().map(move |face| (face, self.get(face)))
    }

    /// The four side planes in `left, right, front, back` order.
    pub fn side_planes(&self) -> [(Face, &T); 4] {
        [
            (Face::Left, &self.left),
            (Face::Right, &self.right),
            (Face::Front, &self.front),
            (Face::Back, &self.back),
        ]
    }
}
