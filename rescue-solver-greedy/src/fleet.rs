//! Mutable per-vehicle state while a plan is built.

use rescue_core::{NodeId, Route, ShortestPath};

/// One vehicle: where it is, where it has been, and how far it drove.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Vehicle {
    pub(crate) index: usize,
    pub(crate) current: NodeId,
    path: Vec<NodeId>,
    distance: f64,
    served: Vec<NodeId>,
}

impl Vehicle {
    fn at_depot(index: usize, depot: NodeId) -> Self {
        Self {
            index,
            current: depot,
            path: vec![depot],
            distance: 0.0,
            served: Vec::new(),
        }
    }

    /// Distance accumulated so far.
    pub(crate) const fn distance(&self) -> f64 {
        self.distance
    }

    /// Whether any segment was appended beyond the depot.
    pub(crate) const fn has_moved(&self) -> bool {
        self.path.len() > 1
    }

    /// Drive `leg` to pick up the survivors waiting at `survivor`.
    #[expect(
        clippy::float_arithmetic,
        reason = "odometer accumulates floating-point leg costs"
    )]
    pub(crate) fn pick_up(&mut self, leg: &ShortestPath, survivor: NodeId) {
        self.path.extend_from_slice(leg.continuation());
        self.current = survivor;
        self.distance += leg.cost;
        self.served.push(survivor);
    }

    /// Drive the closing leg back to a pickup node.
    #[expect(
        clippy::float_arithmetic,
        reason = "odometer accumulates floating-point leg costs"
    )]
    pub(crate) fn return_via(&mut self, leg: &ShortestPath) {
        self.path.extend_from_slice(leg.continuation());
        self.distance += leg.cost;
        if let Some(&end) = leg.nodes.last() {
            self.current = end;
        }
    }

    fn into_route(self) -> Route {
        Route::new(self.index, self.path, self.distance, self.served)
    }
}

/// All vehicles of one plan, indexed by pickup position.
#[derive(Debug, Clone, Default)]
pub(crate) struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Start one vehicle at each pickup node.
    pub(crate) fn from_pickups(pickups: &[NodeId]) -> Self {
        Self {
            vehicles: pickups
                .iter()
                .enumerate()
                .map(|(index, &depot)| Vehicle::at_depot(index, depot))
                .collect(),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub(crate) const fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_slice()
    }

    pub(crate) fn vehicles_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> {
        self.vehicles.iter_mut()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(index)
    }

    /// Routes of the vehicles that moved, in pickup order.
    pub(crate) fn into_routes(self) -> Vec<Route> {
        self.vehicles
            .into_iter()
            .filter(Vehicle::has_moved)
            .map(Vehicle::into_route)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leg(cost: f64, nodes: &[NodeId]) -> ShortestPath {
        ShortestPath {
            cost,
            nodes: nodes.to_vec(),
        }
    }

    #[rstest]
    fn vehicles_start_at_their_depots() {
        let fleet = Fleet::from_pickups(&[4, 9]);
        let starts: Vec<(usize, NodeId)> = fleet
            .vehicles()
            .iter()
            .map(|vehicle| (vehicle.index, vehicle.current))
            .collect();
        assert_eq!(starts, vec![(0, 4), (1, 9)]);
        assert!(fleet.vehicles().iter().all(|vehicle| !vehicle.has_moved()));
    }

    #[rstest]
    fn pick_up_appends_without_duplicating_current_node() {
        let mut fleet = Fleet::from_pickups(&[1]);
        let vehicle = fleet.get_mut(0).expect("vehicle 0");
        vehicle.pick_up(&leg(2.0, &[1, 2, 3]), 3);
        vehicle.pick_up(&leg(1.5, &[3, 4]), 4);

        assert_eq!(vehicle.current, 4);
        assert!((vehicle.distance() - 3.5).abs() < 1e-9);
        let routes = fleet.into_routes();
        assert_eq!(routes, vec![Route::new(0, vec![1, 2, 3, 4], 3.5, vec![3, 4])]);
    }

    #[rstest]
    fn trivial_return_leg_changes_nothing() {
        let mut fleet = Fleet::from_pickups(&[1]);
        let vehicle = fleet.get_mut(0).expect("vehicle 0");
        vehicle.pick_up(&leg(1.0, &[1, 2]), 2);
        vehicle.return_via(&ShortestPath::trivial(2));

        let routes = fleet.into_routes();
        assert_eq!(routes, vec![Route::new(0, vec![1, 2], 1.0, vec![2])]);
    }

    #[rstest]
    fn idle_vehicles_produce_no_route() {
        let mut fleet = Fleet::from_pickups(&[1, 5]);
        fleet
            .get_mut(1)
            .expect("vehicle 1")
            .pick_up(&leg(1.0, &[5, 6]), 6);

        let routes = fleet.into_routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes.first().map(|route| route.vehicle), Some(1));
    }
}
