use battleship_solo::{
    BoardSize, ConfigError, Grid, Occupant, Orientation, ShipCategory, ShipSpec, BOARD_SIZES,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_new_grid_is_empty() {
    for size in BOARD_SIZES {
        let grid = Grid::new(size);
        assert_eq!(grid.side(), size.side());
        assert_eq!(grid.rows().count(), size.side());
        for row in grid.rows() {
            assert_eq!(row.len(), size.side());
            assert!(row.iter().all(|c| c.occupant == Occupant::Empty && !c.hit));
        }
        assert_eq!(grid.ship_cells(), 0);
    }
}

#[test]
fn test_can_place_bounds_and_overlap() {
    let mut grid = Grid::new(BoardSize::Four);
    assert!(grid.can_place(0, 1, 3, Orientation::Horizontal));
    assert!(!grid.can_place(0, 2, 3, Orientation::Horizontal));
    assert!(grid.can_place(1, 3, 3, Orientation::Vertical));
    assert!(!grid.can_place(2, 3, 3, Orientation::Vertical));
    assert!(!grid.can_place(4, 0, 1, Orientation::Vertical));

    grid.place(1, 0, 3, Orientation::Horizontal, ShipCategory::Large);
    assert!(!grid.can_place(0, 1, 2, Orientation::Vertical));
    assert!(grid.can_place(2, 0, 2, Orientation::Horizontal));
}

#[test]
fn test_place_marks_cells() {
    let mut grid = Grid::new(BoardSize::Five);
    grid.place(1, 2, 2, Orientation::Vertical, ShipCategory::Small);
    for r in 1..3 {
        let cell = grid.cell(r, 2).unwrap();
        assert_eq!(cell.occupant, Occupant::Ship(ShipCategory::Small));
        assert!(!cell.hit);
    }
    assert_eq!(grid.ship_cells(), 2);
    assert_eq!(grid.remaining_ship_cells(), 2);
    assert!(grid.cell(5, 0).is_none());
}

#[test]
fn test_place_all_fleet_for_each_size() {
    let mut rng = SmallRng::seed_from_u64(42);
    for size in BOARD_SIZES {
        let mut grid = Grid::new(size);
        let fleet = size.fleet();
        let placements = grid.place_all(&fleet, &mut rng, None).unwrap();
        assert_eq!(placements.len(), fleet.len());
        let expected: usize = fleet.iter().map(|s| s.size()).sum();
        assert_eq!(grid.ship_cells(), expected, "no overlap on {}", size);
        for p in &placements {
            for (r, c) in p.cells() {
                let cell = grid.cell(r, c).expect("ship cell in bounds");
                assert_eq!(cell.occupant, Occupant::Ship(p.spec.category()));
            }
        }
    }
}

#[test]
fn test_fleet_policy() {
    assert_eq!(BoardSize::Four.fleet(), vec![ShipSpec::LARGE, ShipSpec::SMALL]);
    assert_eq!(
        BoardSize::Five.fleet(),
        vec![ShipSpec::LARGE, ShipSpec::SMALL, ShipSpec::SMALL]
    );
    assert_eq!(
        BoardSize::Six.fleet(),
        vec![ShipSpec::LARGE, ShipSpec::LARGE, ShipSpec::SMALL, ShipSpec::SMALL]
    );
    assert_eq!(ShipSpec::LARGE.size(), 3);
    assert_eq!(ShipSpec::SMALL.category(), ShipCategory::Small);
}

#[test]
fn test_board_size_conversion() {
    assert_eq!(BoardSize::try_from(5), Ok(BoardSize::Five));
    assert_eq!(
        BoardSize::try_from(7),
        Err(ConfigError::UnsupportedBoardSize(7))
    );
    assert_eq!(BoardSize::from_menu_index(0), Some(BoardSize::Four));
    assert_eq!(BoardSize::from_menu_index(2), Some(BoardSize::Six));
    assert_eq!(BoardSize::from_menu_index(3), None);
    assert_eq!(BoardSize::Six.to_string(), "6x6");
}

#[test]
fn test_oversized_fleet_fails_fast() {
    let mut grid = Grid::new(BoardSize::Four);
    let fleet = vec![ShipSpec::LARGE; 6];
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        grid.place_all(&fleet, &mut rng, None),
        Err(ConfigError::FleetTooLarge {
            cells: 18,
            capacity: 16
        })
    );
    assert_eq!(grid.ship_cells(), 0);
}

#[test]
fn test_ship_longer_than_grid_fails_fast() {
    let mut grid = Grid::new(BoardSize::Four);
    let fleet = vec![ShipSpec::new(5, ShipCategory::Large)];
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        grid.place_all(&fleet, &mut rng, None),
        Err(ConfigError::ShipTooLong {
            category: ShipCategory::Large,
            size: 5,
            side: 4
        })
    );
}

#[test]
fn test_attempt_cap_reports_exhaustion() {
    let mut grid = Grid::new(BoardSize::Four);
    for r in 0..4 {
        grid.place(r, 0, 4, Orientation::Horizontal, ShipCategory::Large);
    }
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        grid.place_all(&[ShipSpec::SMALL], &mut rng, Some(200)),
        Err(ConfigError::PlacementExhausted {
            category: ShipCategory::Small,
            attempts: 200
        })
    );
}

#[test]
fn test_zero_cap_never_samples() {
    let grid = Grid::new(BoardSize::Six);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        grid.random_placement(&ShipSpec::SMALL, &mut rng, Some(0)),
        Err(ConfigError::PlacementExhausted {
            category: ShipCategory::Small,
            attempts: 0
        })
    );
}

#[test]
fn test_same_seed_same_board() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let mut g1 = Grid::new(BoardSize::Six);
    let mut g2 = Grid::new(BoardSize::Six);
    let p1 = g1.place_all(&BoardSize::Six.fleet(), &mut rng1, None).unwrap();
    let p2 = g2.place_all(&BoardSize::Six.fleet(), &mut rng2, None).unwrap();
    assert_eq!(p1, p2);
    assert_eq!(g1, g2);
}
