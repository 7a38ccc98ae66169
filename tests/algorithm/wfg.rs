use hypervolume::algorithm::{HvAlgorithm, Wfg};

use crate::{InclusionExclusion, assert_agrees, assert_close, simplex_front, uniform_cloud};

#[test]
fn test_matches_inclusion_exclusion_across_dimensions() {
    for d in 2..=6 {
        for seed in 0..5 {
            let points = simplex_front(8, d, seed * 10 + d as u64);
            let reference = vec![1.0; d];
            assert_agrees(&Wfg::new(), &InclusionExclusion, &points, &reference);
        }
    }
}

#[test]
fn test_matches_inclusion_exclusion_on_clouds() {
    for d in 2..=5 {
        for seed in 0..5 {
            let points = uniform_cloud(9, d, 300 + seed * 10 + d as u64);
            let reference = vec![1.0; d];
            assert_agrees(&Wfg::new(), &InclusionExclusion, &points, &reference);
        }
    }
}

#[test]
fn test_stop_dimensions_agree() {
    let wfg2 = Wfg::new();
    let wfg3 = Wfg::with_stop_dimension(3).unwrap();
    for d in 3..=5 {
        let points = simplex_front(30, d, 42 + d as u64);
        let reference = vec![1.1; d];
        let a = wfg2.compute(&mut points.clone(), &reference);
        let b = wfg3.compute(&mut points.clone(), &reference);
        assert_close(a, b);

        let a = wfg2.contributions(&mut points.clone(), &reference);
        let b = wfg3.contributions(&mut points.clone(), &reference);
        for (x, y) in a.iter().zip(&b) {
            assert_close(*x, *y);
        }
    }
}

#[test]
fn test_invalid_stop_dimension() {
    assert!(Wfg::with_stop_dimension(1).is_err());
    assert!(Wfg::with_stop_dimension(4).is_err());
    assert_eq!(Wfg::with_stop_dimension(3).unwrap().stop_dimension(), 3);
    assert_eq!(Wfg::default().stop_dimension(), 2);
}

#[test]
fn test_exclusive_does_not_depend_on_order() {
    let points = simplex_front(12, 4, 5);
    let reference = [1.0; 4];
    let wfg = Wfg::new();
    let contributions = wfg.contributions(&mut points.clone(), &reference);

    let mut reversed = points.clone();
    reversed.reverse();
    let reversed_contributions = wfg.contributions(&mut reversed, &reference);
    for (i, c) in contributions.iter().enumerate() {
        assert_close(*c, reversed_contributions[points.len() - 1 - i]);
        assert_close(wfg.exclusive(i, &mut points.clone(), &reference), *c);
    }
}
