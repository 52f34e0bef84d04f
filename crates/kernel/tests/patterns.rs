//! Known Life patterns on the torus.

use toruslife_kernel::{Cell, GridSize, World};

fn world(size: i64, pairs: &[(i64, i64)]) -> World {
    World::new(size, Some(pairs)).unwrap()
}

fn sorted(pairs: &[(usize, usize)]) -> Vec<Cell> {
    let mut v: Vec<Cell> = pairs.iter().copied().map(Cell::from).collect();
    v.sort();
    v
}

fn shifted(pairs: &[(i64, i64)], by: i64, size: i64) -> Vec<Cell> {
    let moved: Vec<(usize, usize)> = pairs
        .iter()
        .map(|&(r, c)| ((r + by).rem_euclid(size) as usize, (c + by).rem_euclid(size) as usize))
        .collect();
    sorted(&moved)
}

const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

#[test]
fn still_lifes_do_not_change() {
    let block: [(i64, i64); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];
    let beehive: [(i64, i64); 6] = [(1, 2), (1, 3), (2, 1), (2, 4), (3, 2), (3, 3)];
    let loaf: [(i64, i64); 7] = [(1, 2), (1, 3), (2, 1), (2, 4), (3, 2), (3, 4), (4, 3)];

    for pattern in [&block[..], &beehive[..], &loaf[..]] {
        let mut w = world(8, pattern);
        let before = w.alive_cells();
        w.advance_by(5);
        assert_eq!(w.alive_cells(), before);
        assert_eq!(w.generation(), 6);
    }
}

#[test]
fn block_across_the_corner_seam_is_still() {
    let mut w = world(6, &[(0, 0), (0, 5), (5, 0), (5, 5)]);
    let before = w.alive_cells();
    w.advance();
    assert_eq!(w.alive_cells(), before);
}

#[test]
fn blinker_two_step_cycle() {
    let mut w = world(5, &[(2, 1), (2, 2), (2, 3)]);
    let start = w.generation();
    w.advance();
    assert_eq!(w.alive_cells(), sorted(&[(1, 2), (2, 2), (3, 2)]));
    w.advance();
    assert_eq!(w.alive_cells(), sorted(&[(2, 1), (2, 2), (2, 3)]));
    assert_eq!(w.generation(), start + 2);
}

#[test]
fn blinker_straddling_the_edge_wraps() {
    let mut w = world(7, &[(0, 6), (0, 0), (0, 1)]);
    w.advance();
    assert_eq!(w.alive_cells(), sorted(&[(6, 0), (0, 0), (1, 0)]));
    w.advance();
    assert_eq!(w.alive_cells(), sorted(&[(0, 6), (0, 0), (0, 1)]));
}

#[test]
fn toad_has_period_two() {
    let toad = [(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)];
    let mut w = world(8, &toad);
    let start = w.alive_cells();
    w.advance();
    assert_ne!(w.alive_cells(), start);
    w.advance();
    assert_eq!(w.alive_cells(), start);
}

#[test]
fn glider_moves_one_diagonal_every_four_generations() {
    let mut w = world(8, &GLIDER);
    w.advance_by(4);
    assert_eq!(w.alive_cells(), shifted(&GLIDER, 1, 8));
    assert_eq!(w.population(), 5);
}

#[test]
fn glider_laps_the_torus() {
    let size = 8;
    let mut w = world(size, &GLIDER);
    let start = w.alive_cells();
    w.advance_by(4 * size as u64);
    assert_eq!(w.alive_cells(), start);
    assert_eq!(w.generation(), 1 + 4 * size as u64);
}

#[test]
fn determinism_for_fixed_input() {
    let r_pentomino = [(4, 5), (4, 6), (5, 4), (5, 5), (6, 5)];
    let run = || {
        let mut w = world(12, &r_pentomino);
        w.advance_by(40);
        (w.alive_cells(), w.generation(), w.state_hash())
    };
    assert_eq!(run(), run());
}

#[test]
fn seeded_random_worlds_replay_identically() {
    let size = GridSize::new(40).unwrap();
    for seed in [0, 1, 7, 1234] {
        let mut a = World::with_seed(size, seed);
        let mut b = World::with_seed(size, seed);
        a.advance_by(20);
        b.advance_by(20);
        assert_eq!(a.alive_cells(), b.alive_cells());
        assert_eq!(a.generation(), 21);
    }
}

#[test]
fn population_never_escapes_the_grid() {
    let size = GridSize::new(3).unwrap();
    for seed in 0..30 {
        let mut w = World::with_seed(size, seed);
        for _ in 0..10 {
            w.advance();
            assert!(w.alive_cells().iter().all(|c| size.contains(*c)));
        }
    }
}
