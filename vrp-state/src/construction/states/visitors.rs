#[cfg(test)]
#[path = "../../../tests/unit/construction/states/visitors_test.rs"]
mod visitors_test;

use super::StateStore;
use crate::models::solution::{Activity, Route};

/// A visitor of route activities which reads route topology and writes derived values.
///
/// The start activity of the route is never visited: visitors get it through `begin`. All other
/// activities are visited, including the end one when the tour is closed (it has no job).
pub trait RouteVisitor: Send + Sync {
    /// Starts a new pass over the route.
    fn begin(&mut self, route: &Route, states: &mut StateStore);

    /// Visits the next activity of the route.
    fn visit(&mut self, activity: &mut Activity, states: &mut StateStore);

    /// Finishes the pass.
    fn finish(&mut self, states: &mut StateStore);
}

/// Specifies direction in which route activities are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitDirection {
    /// From the first activity to the last one.
    Forward,
    /// From the last activity to the first one.
    Reverse,
}

/// A route visitor together with its visit direction.
pub struct StateUpdater {
    /// A visit direction.
    pub direction: VisitDirection,
    /// A visitor.
    pub visitor: Box<dyn RouteVisitor>,
}

impl StateUpdater {
    /// Creates an updater which visits activities forward.
    pub fn forward(visitor: impl RouteVisitor + 'static) -> Self {
        Self { direction: VisitDirection::Forward, visitor: Box::new(visitor) }
    }

    /// Creates an updater which visits activities in reverse.
    pub fn reverse(visitor: impl RouteVisitor + 'static) -> Self {
        Self { direction: VisitDirection::Reverse, visitor: Box::new(visitor) }
    }
}

/// Holds an ordered list of visitors sharing the same direction and runs them in a single pass.
pub struct RouteVisitors {
    direction: VisitDirection,
    visitors: Vec<Box<dyn RouteVisitor>>,
}

impl RouteVisitors {
    /// Creates a new empty composite visitor with given direction.
    pub fn new(direction: VisitDirection) -> Self {
        Self { direction, visitors: Vec::default() }
    }

    /// Returns visit direction.
    pub fn direction(&self) -> VisitDirection {
        self.direction
    }

    /// Adds a visitor to the end of the list.
    pub fn add(&mut self, visitor: Box<dyn RouteVisitor>) {
        self.visitors.push(visitor);
    }

    /// Returns amount of visitors.
    pub fn size(&self) -> usize {
        self.visitors.len()
    }

    /// Runs all visitors over the route: `begin` on all, then `visit` on all per activity, then `finish` on all.
    pub fn visit(&mut self, route: &mut Route, states: &mut StateStore) {
        self.visitors.iter_mut().for_each(|visitor| visitor.begin(route, states));

        match self.direction {
            VisitDirection::Forward => route.tour.all_activities_mut().skip(1).for_each(|activity| {
                self.visitors.iter_mut().for_each(|visitor| visitor.visit(activity, states));
            }),
            VisitDirection::Reverse => route.tour.all_activities_mut().skip(1).rev().for_each(|activity| {
                self.visitors.iter_mut().for_each(|visitor| visitor.visit(activity, states));
            }),
        }

        self.visitors.iter_mut().for_each(|visitor| visitor.finish(states));
    }
}

/// Runs a single visitor over the route from the first activity to the last one.
pub fn visit_forward(route: &mut Route, visitor: &mut dyn RouteVisitor, states: &mut StateStore) {
    visitor.begin(route, states);
    route.tour.all_activities_mut().skip(1).for_each(|activity| visitor.visit(activity, states));
    visitor.finish(states);
}

/// Runs a single visitor over the route from the last activity to the first one.
pub fn visit_reverse(route: &mut Route, visitor: &mut dyn RouteVisitor, states: &mut StateStore) {
    visitor.begin(route, states);
    route.tour.all_activities_mut().skip(1).rev().for_each(|activity| visitor.visit(activity, states));
    visitor.finish(states);
}
