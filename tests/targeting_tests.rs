use broadside::{
    AttackError, AttackOutcome, Coord, Gameboard, Orientation, Player, PlayerKind, Ship,
    TargetMode, Targeting,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_neighbors_skip_negative_coordinates() {
    let corner: Vec<Coord> = Coord::new(0, 0).neighbors().collect();
    assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    let inner: Vec<Coord> = Coord::new(4, 4).neighbors().collect();
    assert_eq!(inner.len(), 4);
    assert!(inner.iter().all(|c| c.is_adjacent(Coord::new(4, 4))));
}

#[test]
fn test_record_transitions() {
    let mut t = Targeting::new();
    assert_eq!(t.mode(), TargetMode::Hunt);
    t.record(Coord::new(1, 1), AttackOutcome::Miss);
    assert_eq!(t.mode(), TargetMode::Hunt);
    t.record(Coord::new(2, 2), AttackOutcome::Hit);
    assert_eq!(t.mode(), TargetMode::Target);
    t.record(Coord::new(2, 3), AttackOutcome::Hit);
    assert_eq!(t.anchor(), Some(Coord::new(2, 3)));
    t.record(Coord::new(9, 9), AttackOutcome::Miss);
    assert_eq!(t.previous_hits(), &[Coord::new(2, 2), Coord::new(2, 3)]);
    t.record(Coord::new(2, 4), AttackOutcome::Sunk);
    assert_eq!(t.mode(), TargetMode::Hunt);
    assert!(t.previous_hits().is_empty());
}

#[test]
fn test_hit_is_followed_by_neighbor() {
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut enemy = Gameboard::new(10);
        enemy
            .place_ship(Ship::new("Carrier", 5), 2, 5, Orientation::Horizontal)
            .unwrap();
        let mut t = Targeting::new();
        assert_eq!(enemy.receive_attack(4, 5), Ok(AttackOutcome::Hit));
        t.record(Coord::new(4, 5), AttackOutcome::Hit);

        let next = t.select(&mut rng, &enemy).unwrap();
        assert!(next.is_adjacent(Coord::new(4, 5)), "seed {}: {}", seed, next);
    }
}

#[test]
fn test_corner_anchor_only_uses_open_neighbor() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut enemy = Gameboard::new(10);
    enemy
        .place_ship(Ship::new("Destroyer", 2), 0, 0, Orientation::Vertical)
        .unwrap();
    enemy.receive_attack(0, 0).unwrap();
    enemy.receive_attack(1, 0).unwrap();
    let mut t = Targeting::new();
    t.record(Coord::new(0, 0), AttackOutcome::Hit);
    for _ in 0..16 {
        assert_eq!(t.select(&mut rng, &enemy), Ok(Coord::new(0, 1)));
    }
}

#[test]
fn test_blocked_anchor_falls_back_to_hunt() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut enemy = Gameboard::new(10);
    for c in Coord::new(5, 5).neighbors() {
        enemy.receive_attack(c.x, c.y).unwrap();
    }
    let mut t = Targeting::new();
    t.record(Coord::new(5, 5), AttackOutcome::Hit);
    let next = t.select(&mut rng, &enemy).unwrap();
    assert!(enemy.is_valid_move(next.x, next.y));
    assert!(!next.is_adjacent(Coord::new(5, 5)));
}

#[test]
fn test_hunt_finds_last_open_cell() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut enemy = Gameboard::new(10);
    for y in 0..10 {
        for x in 0..10 {
            if (x, y) != (7, 3) {
                enemy.receive_attack(x, y).unwrap();
            }
        }
    }
    let t = Targeting::new();
    assert_eq!(t.select(&mut rng, &enemy), Ok(Coord::new(7, 3)));
}

#[test]
fn test_saturated_board_terminates() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut enemy = Gameboard::new(4);
    for y in 0..4 {
        for x in 0..4 {
            enemy.receive_attack(x, y).unwrap();
        }
    }
    let mut player = Player::computer();
    assert_eq!(
        player.random_attack(&mut rng, &mut enemy),
        Err(AttackError::NoValidMoves)
    );
    assert_eq!(
        player.random_attack(&mut rng, &mut Gameboard::new(0)),
        Err(AttackError::NoValidMoves)
    );
}

#[test]
fn test_sunk_clears_memory() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut enemy = Gameboard::new(10);
    enemy
        .place_ship(Ship::new("PT", 1), 0, 0, Orientation::Horizontal)
        .unwrap();
    let mut player = Player::new(PlayerKind::Computer);
    loop {
        let report = player.random_attack(&mut rng, &mut enemy).unwrap();
        if report.outcome == AttackOutcome::Sunk {
            assert_eq!(report.coord, Coord::new(0, 0));
            break;
        }
        assert_eq!(report.outcome, AttackOutcome::Miss);
        assert_eq!(player.mode(), TargetMode::Hunt);
    }
    assert!(player.previous_hits().is_empty());
    assert_eq!(player.mode(), TargetMode::Hunt);
}

#[test]
fn test_reset_replaces_board_and_memory() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = Player::with_board_size(PlayerKind::Computer, 8);
    player
        .place_fleet_randomly(&mut rng, &broadside::FLEET)
        .unwrap();
    let mut enemy = Gameboard::new(10);
    enemy
        .place_ship(Ship::new("Carrier", 5), 0, 0, Orientation::Horizontal)
        .unwrap();
    while player.previous_hits().is_empty() {
        player.random_attack(&mut rng, &mut enemy).unwrap();
    }
    player.reset();
    assert_eq!(player.gameboard().size(), 8);
    assert!(player.gameboard().ships().is_empty());
    assert!(player.previous_hits().is_empty());
    assert_eq!(player.kind(), PlayerKind::Computer);
}
