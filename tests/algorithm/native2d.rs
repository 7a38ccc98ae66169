use hypervolume::algorithm::{HvAlgorithm, Native2d, Wfg};

use crate::{InclusionExclusion, assert_agrees, assert_close, simplex_front, uniform_cloud};

#[test]
fn test_matches_inclusion_exclusion_on_fronts() {
    for seed in 0..20 {
        let points = simplex_front(8, 2, seed);
        assert_agrees(&Native2d::new(), &InclusionExclusion, &points, &[1.1, 1.1]);
    }
}

#[test]
fn test_matches_inclusion_exclusion_on_clouds() {
    for seed in 0..20 {
        let points = uniform_cloud(10, 2, 100 + seed);
        assert_agrees(&Native2d::new(), &InclusionExclusion, &points, &[1.0, 1.0]);
    }
}

#[test]
fn test_matches_wfg_on_large_fronts() {
    let points = simplex_front(200, 2, 7);
    let reference = [1.0, 1.0];
    let native = Native2d::new().compute(&mut points.clone(), &reference);
    let wfg = Wfg::new().compute(&mut points.clone(), &reference);
    assert_close(native, wfg);

    let native = Native2d::new().contributions(&mut points.clone(), &reference);
    let wfg = Wfg::new().contributions(&mut points.clone(), &reference);
    for (a, b) in native.iter().zip(&wfg) {
        assert_close(*a, *b);
    }
}

#[test]
fn test_contributions_keep_caller_order() {
    let mut points = vec![vec![3.0, 1.0], vec![1.0, 3.0], vec![2.0, 1.5]];
    let c = Native2d::new().contributions(&mut points, &[4.0, 4.0]);
    // (3,1): [3,4)x[1,1.5) -> 0.5; (1,3): [1,2)x[3,4) -> 1; (2,1.5): [2,3)x[1.5,3) -> 1.5
    assert_close(c[0], 0.5);
    assert_close(c[1], 1.0);
    assert_close(c[2], 1.5);

    let algo = Native2d::new();
    assert_eq!(algo.least_contributor(&mut points.clone(), &[4.0, 4.0]), 0);
    assert_eq!(algo.greatest_contributor(&mut points, &[4.0, 4.0]), 2);
}

#[test]
fn test_negative_coordinates() {
    let mut points = vec![vec![-2.0, 0.0], vec![0.0, -2.0]];
    // 3x1 + 1x3 - 1x1
    assert_close(Native2d::new().compute(&mut points, &[1.0, 1.0]), 5.0);
}
