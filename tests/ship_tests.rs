use broadside::{Orientation, Ship, ShipDef, FLEET};
use proptest::prelude::*;

#[test]
fn test_new_ship_is_afloat() {
    let ship = Ship::new("Destroyer", 2);
    assert_eq!(ship.name(), "Destroyer");
    assert_eq!(ship.length(), 2);
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());
}

#[test]
fn test_hit_and_sunk() {
    let mut ship = Ship::new("Destroyer", 2);
    ship.hit();
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(ship.is_sunk());
    // extra hits are counted but the ship stays sunk
    ship.hit();
    assert_eq!(ship.hits(), 3);
    assert!(ship.is_sunk());
}

#[test]
fn test_ship_def_builds_fresh_ship() {
    let def = ShipDef::new("Cruiser", 3);
    let ship = def.build();
    assert_eq!(ship.name(), def.name());
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.hits(), 0);
    assert_eq!(FLEET.iter().map(|d| d.length()).sum::<usize>(), 17);
}

#[test]
fn test_orientation_toggle() {
    assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
    assert_eq!(Orientation::Vertical.toggled().toggled(), Orientation::Vertical);
}

proptest! {
    #[test]
    fn sunk_tracks_hit_count(length in 1usize..8, n in 0usize..12) {
        let mut ship = Ship::new("Test", length);
        for _ in 0..n {
            ship.hit();
        }
        prop_assert_eq!(ship.hits(), n);
        prop_assert_eq!(ship.is_sunk(), n >= length);
    }
}
