//! The 8-ray food and obstruction scan.

use slither_core::{Cell, Compass, Direction, SensorView, TileProbe, SENSOR_LEN, SENSOR_RAYS};
use slither_space::Board;

/// One ray's worth of raw (unrotated) readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct RayReading {
    food: bool,
    blocked: bool,
}

/// Walk one compass ray outward from `origin` and record what it hits.
///
/// The obstruction flag reads the adjacent cell only: a wall edge (on a
/// bordered board) or an occupied cell immediately next to the head.
/// The food flag looks further, stepping until it finds food, runs into
/// an occupied cell, leaves a bordered board, or exhausts the step cap.
/// Occupied cells are opaque to food, so food behind a body segment is
/// not reported.
fn cast_ray(board: &Board, probe: &dyn TileProbe, origin: Cell, heading: Compass) -> RayReading {
    let mut reading = RayReading::default();

    let Some(adjacent) = board.step(origin, heading) else {
        // Off a bordered edge: wall right next to the head, no food.
        reading.blocked = true;
        return reading;
    };
    reading.blocked = probe.blocked(adjacent);

    // Cap prevents a food-free ray from orbiting a torus forever.
    let mut cell = adjacent;
    for _ in 0..board.max_extent() {
        if probe.fruit(cell) {
            reading.food = true;
            break;
        }
        if probe.blocked(cell) {
            break;
        }
        match board.step(cell, heading) {
            Some(next) => cell = next,
            None => break,
        }
    }
    reading
}

/// Extract the heading-relative sensor view for an agent.
///
/// Casts one ray per compass heading from `head`, then rotates the
/// readings so that ray 0 lines up with `facing`: the view an agent
/// heading east gets is the same view it would get heading north on a
/// board rotated a quarter turn. Each ray contributes an interleaved
/// `[food, obstruction]` pair of 0/1 values.
///
/// `head` must be an in-range cell; the probe decides what counts as
/// occupied (callers typically exclude the agent's own head).
pub fn sense(board: &Board, probe: &dyn TileProbe, head: Cell, facing: Direction) -> SensorView {
    let mut raw = [RayReading::default(); SENSOR_RAYS];
    for (slot, heading) in raw.iter_mut().zip(Compass::ALL) {
        *slot = cast_ray(board, probe, head, heading);
    }

    // rotated ray i reads the raw ray i steps clockwise of the heading
    let shift = facing.compass().index();
    let mut values = [0.0_f32; SENSOR_LEN];
    for ray in 0..SENSOR_RAYS {
        let reading = raw[(ray + shift) % SENSOR_RAYS];
        values[2 * ray] = if reading.food { 1.0 } else { 0.0 };
        values[2 * ray + 1] = if reading.blocked { 1.0 } else { 0.0 };
    }
    SensorView::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_space::BoundaryMode;
    use std::collections::HashSet;

    #[derive(Default)]
    struct MapProbe {
        bodies: HashSet<(i32, i32)>,
        fruit: HashSet<(i32, i32)>,
    }

    impl MapProbe {
        fn with_fruit(cells: &[(i32, i32)]) -> Self {
            Self {
                fruit: cells.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn with_bodies(cells: &[(i32, i32)]) -> Self {
            Self {
                bodies: cells.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl TileProbe for MapProbe {
        fn blocked(&self, cell: Cell) -> bool {
            self.bodies.contains(&(cell.x, cell.y))
        }

        fn fruit(&self, cell: Cell) -> bool {
            self.fruit.contains(&(cell.x, cell.y))
        }
    }

    fn board(mode: BoundaryMode) -> Board {
        Board::new(10, 10, mode).unwrap()
    }

    // ── Ray semantics ───────────────────────────────────────────

    #[test]
    fn empty_board_senses_nothing_when_toroidal() {
        let view = sense(
            &board(BoundaryMode::Toroidal),
            &MapProbe::default(),
            Cell::new(5, 5),
            Direction::North,
        );
        assert_eq!(view, SensorView::default());
    }

    #[test]
    fn food_straight_ahead_sets_ray_zero() {
        // Bordered so the opposite ray cannot wrap around to the food.
        let probe = MapProbe::with_fruit(&[(5, 2)]);
        let view = sense(
            &board(BoundaryMode::Bordered),
            &probe,
            Cell::new(5, 5),
            Direction::North,
        );
        assert!(view.food(0));
        assert!(!view.blocked(0));
        for ray in 1..SENSOR_RAYS {
            assert!(!view.food(ray), "unexpected food on ray {ray}");
        }
    }

    #[test]
    fn body_hides_food_behind_it() {
        let probe = MapProbe {
            bodies: [(5, 3)].into_iter().collect(),
            fruit: [(5, 1)].into_iter().collect(),
        };
        let view = sense(
            &board(BoundaryMode::Toroidal),
            &probe,
            Cell::new(5, 5),
            Direction::North,
        );
        assert!(!view.food(0));
        // The body is two cells away, so the adjacent cell is clear.
        assert!(!view.blocked(0));
    }

    #[test]
    fn obstruction_reads_adjacent_cell_only() {
        let probe = MapProbe::with_bodies(&[(5, 4)]);
        let view = sense(
            &board(BoundaryMode::Toroidal),
            &probe,
            Cell::new(5, 5),
            Direction::North,
        );
        assert!(view.blocked(0));

        let far = MapProbe::with_bodies(&[(5, 2)]);
        let view = sense(
            &board(BoundaryMode::Toroidal),
            &far,
            Cell::new(5, 5),
            Direction::North,
        );
        assert!(!view.blocked(0));
    }

    #[test]
    fn bordered_wall_reads_as_adjacent_obstruction() {
        let view = sense(
            &board(BoundaryMode::Bordered),
            &MapProbe::default(),
            Cell::new(0, 0),
            Direction::North,
        );
        // Facing north in the corner: ahead, behind-left diagonals and
        // the west side all touch walls.
        assert!(view.blocked(0)); // north
        assert!(view.blocked(1)); // north-east
        assert!(view.blocked(5)); // south-west
        assert!(view.blocked(6)); // west
        assert!(view.blocked(7)); // north-west
        assert!(!view.blocked(2)); // east
        assert!(!view.blocked(4)); // south
    }

    #[test]
    fn toroidal_ray_wraps_to_find_food() {
        // Head near the north edge, food near the south edge on the
        // same column: only reachable by wrapping.
        let probe = MapProbe::with_fruit(&[(5, 9)]);
        let view = sense(
            &board(BoundaryMode::Toroidal),
            &probe,
            Cell::new(5, 0),
            Direction::North,
        );
        assert!(view.food(0));
    }

    #[test]
    fn bordered_ray_stops_at_the_wall() {
        let probe = MapProbe::with_fruit(&[(5, 9)]);
        let view = sense(
            &board(BoundaryMode::Bordered),
            &probe,
            Cell::new(5, 0),
            Direction::North,
        );
        assert!(!view.food(0));
        assert!(view.blocked(0));
    }

    // ── Rotation ────────────────────────────────────────────────

    #[test]
    fn rotation_keeps_ray_zero_forward() {
        // Food east of the head.
        let probe = MapProbe::with_fruit(&[(8, 5)]);
        let b = board(BoundaryMode::Toroidal);
        let head = Cell::new(5, 5);

        let east = sense(&b, &probe, head, Direction::East);
        assert!(east.food(0), "facing east, food is straight ahead");

        let north = sense(&b, &probe, head, Direction::North);
        assert!(north.food(2), "facing north, food is two rays clockwise");

        let south = sense(&b, &probe, head, Direction::South);
        assert!(south.food(6), "facing south, food is six rays clockwise");
    }

    #[test]
    fn facing_north_is_the_identity_rotation() {
        let probe = MapProbe {
            bodies: [(4, 4)].into_iter().collect(), // north-west of head
            fruit: [(7, 7)].into_iter().collect(),  // south-east of head
        };
        let view = sense(
            &board(BoundaryMode::Toroidal),
            &probe,
            Cell::new(5, 5),
            Direction::North,
        );
        assert!(view.blocked(7));
        assert!(view.food(3));
    }

    // ── Properties ──────────────────────────────────────────────

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rotation_permutes_rays(
            fx in 0i32..10, fy in 0i32..10,
            facing in 0usize..4,
        ) {
            let head = Cell::new(5, 5);
            prop_assume!((fx, fy) != (head.x, head.y));
            let probe = MapProbe::with_fruit(&[(fx, fy)]);
            let b = board(BoundaryMode::Toroidal);

            let north = sense(&b, &probe, head, Direction::North);
            let turned = sense(&b, &probe, head, Direction::ALL[facing]);

            let food_count = |v: &SensorView| (0..SENSOR_RAYS).filter(|&r| v.food(r)).count();
            prop_assert_eq!(food_count(&north), food_count(&turned));
        }
    }
}
