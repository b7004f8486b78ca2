use neighborvis::{NeighborTable, Particle, ParticleStore, ViewerError};

fn particle(id: u64, x: f64, y: f64) -> Particle {
    Particle {
        id,
        x,
        y,
        radius: 0.0,
    }
}

fn store_of(particles: Vec<Particle>) -> ParticleStore {
    ParticleStore::new(particles, NeighborTable::new())
}

#[test]
fn find_nearest_matches_brute_force_oracle() {
    let particles: Vec<Particle> = (0..40)
        .map(|i| {
            // Deterministic pseudo-random-ish spread, no RNG needed.
            let x = ((i * 37) % 23) as f64 * 0.7 - 8.0;
            let y = ((i * 61) % 19) as f64 * 1.3 - 12.0;
            particle(i, x, y)
        })
        .collect();
    let store = store_of(particles.clone());

    for &(cx, cy) in &[(0.0, 0.0), (-3.2, 7.7), (14.0, -2.5), (0.35, 0.35)] {
        let nearest = store.find_nearest(cx, cy).expect("store is non-empty");
        let d2 = nearest.dist_sq(cx, cy);
        for p in &particles {
            assert!(
                d2 <= p.dist_sq(cx, cy),
                "particle {} at distance² {} beats reported nearest {} at {}",
                p.id,
                p.dist_sq(cx, cy),
                nearest.id,
                d2
            );
        }
    }
}

#[test]
fn find_nearest_breaks_ties_by_insertion_order() {
    // Two particles equidistant from the origin; the first one wins.
    let store = store_of(vec![particle(7, 1.0, 0.0), particle(3, -1.0, 0.0)]);
    let nearest = store.find_nearest(0.0, 0.0).unwrap();
    assert_eq!(
        nearest.id, 7,
        "exact-distance ties should keep the first particle in insertion order"
    );

    // Same pair, opposite order.
    let store = store_of(vec![particle(3, -1.0, 0.0), particle(7, 1.0, 0.0)]);
    let nearest = store.find_nearest(0.0, 0.0).unwrap();
    assert_eq!(nearest.id, 3);
}

#[test]
fn find_nearest_on_empty_store_is_empty_input() {
    let store = store_of(vec![]);
    match store.find_nearest(1.0, 2.0) {
        Err(ViewerError::EmptyInput) => {}
        other => panic!("expected EmptyInput, got {other:?}"),
    }
}

#[test]
fn neighbors_of_absent_id_is_empty() {
    let mut table = NeighborTable::new();
    table.add_neighbors(1, vec![2, 3]);
    let store = ParticleStore::new(vec![particle(1, 0.0, 0.0)], table);

    assert_eq!(store.neighbors_of(1), &[2, 3]);
    assert!(
        store.neighbors_of(99).is_empty(),
        "absent ids must yield an empty neighbor list, not an error"
    );
}

#[test]
fn neighbor_lists_keep_duplicates_and_self_references() {
    let mut table = NeighborTable::new();
    table.add_neighbors(1, vec![1, 2, 2]);
    let store = ParticleStore::new(vec![particle(1, 0.0, 0.0)], table);
    assert_eq!(
        store.neighbors_of(1),
        &[1, 2, 2],
        "the store must keep neighbor lists exactly as given"
    );
}
