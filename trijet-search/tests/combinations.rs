use std::collections::HashSet;
use trijet_kinematics::TrijetError;
use trijet_search::{binomial, combinations_combo_major, combinations_group_major};

#[test]
fn test_binomial_values() {
    assert_eq!(binomial(0, 0), 1);
    assert_eq!(binomial(5, 0), 1);
    assert_eq!(binomial(5, 5), 1);
    assert_eq!(binomial(12, 6), 924);
    assert_eq!(binomial(50, 3), 19600);
    assert_eq!(binomial(4, 5), 0);
}

#[test]
fn test_first_and_last_combination() {
    let c = combinations_combo_major(7, 3).unwrap();
    assert_eq!(c.first().unwrap(), &vec![0, 1, 2]);
    assert_eq!(c.last().unwrap(), &vec![4, 5, 6]);
}

// Exhaustive over every (s, k) with s <= 12: the enumeration yields exactly
// C(s, k) distinct strictly ascending k-tuples in lexicographic order, and
// the two layouts are element-wise transposes of each other.
#[test]
fn test_exhaustive_small_ranges() {
    for s in 0..=12usize {
        for k in 0..=s {
            let total = binomial(s, k) as usize;
            let gm = combinations_group_major(s, k).unwrap();
            let cm = combinations_combo_major(s, k).unwrap();

            assert_eq!(gm.len(), k, "group-major has k rows (s={}, k={})", s, k);
            for row in &gm {
                assert_eq!(row.len(), total);
            }
            assert_eq!(cm.len(), total, "combo-major has C(s,k) rows");

            let mut seen = HashSet::new();
            for combo in &cm {
                assert_eq!(combo.len(), k);
                for w in combo.windows(2) {
                    assert!(w[0] < w[1], "indices strictly ascending");
                }
                if let Some(&last) = combo.last() {
                    assert!(last < s);
                }
                assert!(seen.insert(combo.clone()), "duplicate combination");
            }
            assert_eq!(seen.len(), total, "every subset exactly once");

            for w in cm.windows(2) {
                assert!(w[0] < w[1], "lexicographic order");
            }

            for (i, combo) in cm.iter().enumerate() {
                for (p, &idx) in combo.iter().enumerate() {
                    assert_eq!(gm[p][i], idx, "layouts transpose (s={}, k={})", s, k);
                }
            }
        }
    }
}

#[test]
fn test_k_larger_than_s_is_rejected() {
    assert_eq!(
        combinations_group_major(3, 4),
        Err(TrijetError::InvalidCombination { s: 3, k: 4 })
    );
    assert_eq!(
        combinations_combo_major(0, 1),
        Err(TrijetError::InvalidCombination { s: 0, k: 1 })
    );
}

#[test]
fn test_k_zero_yields_single_empty_combination() {
    assert!(combinations_group_major(5, 0).unwrap().is_empty());
    assert_eq!(combinations_combo_major(5, 0).unwrap(), vec![Vec::<usize>::new()]);
}
