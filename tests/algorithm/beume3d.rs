use hypervolume::algorithm::{Beume3d, HvAlgorithm, Wfg};

use crate::{InclusionExclusion, assert_agrees, assert_close, simplex_front, uniform_cloud};

#[test]
fn test_matches_inclusion_exclusion_on_fronts() {
    for seed in 0..15 {
        let points = simplex_front(9, 3, seed);
        assert_agrees(&Beume3d::new(), &InclusionExclusion, &points, &[1.0, 1.0, 1.0]);
    }
}

#[test]
fn test_matches_inclusion_exclusion_on_clouds() {
    for seed in 0..15 {
        let points = uniform_cloud(10, 3, 200 + seed);
        assert_agrees(&Beume3d::new(), &InclusionExclusion, &points, &[1.0, 1.0, 1.0]);
    }
}

#[test]
fn test_matches_wfg_on_large_fronts() {
    let points = simplex_front(120, 3, 11);
    let reference = [1.2, 1.2, 1.2];
    let beume = Beume3d::new().compute(&mut points.clone(), &reference);
    let wfg = Wfg::new().compute(&mut points.clone(), &reference);
    assert_close(beume, wfg);
}

#[test]
fn test_shared_coordinates() {
    // Equal third objectives exercise zero-height slabs.
    let mut points = vec![
        vec![1.0, 2.0, 1.0],
        vec![2.0, 1.0, 1.0],
        vec![1.5, 1.5, 1.0],
        vec![0.5, 2.5, 2.0],
    ];
    let reference = [3.0, 3.0, 3.0];
    let expected = InclusionExclusion.compute(&mut points.clone(), &reference);
    assert_close(Beume3d::new().compute(&mut points, &reference), expected);
}

#[test]
fn test_tie_breaking_lowest_index() {
    let mut points = vec![
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
    ];
    let algo = Beume3d::new();
    assert_eq!(algo.least_contributor(&mut points.clone(), &[2.0, 2.0, 2.0]), 0);
    assert_eq!(algo.greatest_contributor(&mut points, &[2.0, 2.0, 2.0]), 0);
}
