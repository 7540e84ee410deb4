//! Enumeration of k-subsets of the index range [0, s), in two memory
//! layouts.
//!
//! Both layouts hold the same C(s, k) combinations in the same
//! lexicographic order; they differ only in container shape. Group-major
//! stores k long parallel rows and suits a consumer that walks all
//! combinations at one advancing offset. Combo-major stores one short row
//! per combination, which for k = 3 over many jets means a large number of
//! small separately-located allocations.

use trijet_kinematics::TrijetError;

/// Binomial coefficient C(s, k) as the falling product
/// s * (s-1) * ... * (s-k+1) divided by k!. u128 keeps the falling product
/// exact for the ranges this crate deals with (s up to a few dozen, k
/// small).
pub fn binomial(s: usize, k: usize) -> u128 {
    if k > s {
        return 0;
    }
    let mut falling = 1u128;
    for m in (s - k + 1)..=s {
        falling *= m as u128;
    }
    let mut fact_k = 1u128;
    for i in 2..=k {
        fact_k *= i as u128;
    }
    falling / fact_k
}

/// Walks all k-subsets of [0, s) in lexicographic order, calling `emit` for
/// each. Starts from {0, 1, .., k-1} and repeatedly advances the rightmost
/// index still below its ceiling (index i may not exceed s - k + i),
/// resetting the suffix to consecutive successors. Terminal state is
/// {s-k, .., s-1}, where no index can advance.
fn walk_combinations<F: FnMut(&[usize])>(s: usize, k: usize, mut emit: F) {
    let mut indices: Vec<usize> = (0..k).collect();
    emit(&indices);

    loop {
        let mut advance = None;
        for i in (0..k).rev() {
            if indices[i] != i + s - k {
                advance = Some(i);
                break;
            }
        }
        let i = match advance {
            Some(i) => i,
            None => return,
        };
        indices[i] += 1;
        for j in (i + 1)..k {
            indices[j] = indices[j - 1] + 1;
        }
        emit(&indices);
    }
}

/// Group-major layout: k rows, each of length C(s, k), allocated to their
/// exact final size up front. Row p holds the p-th element of every
/// combination, in combination order.
pub fn combinations_group_major(s: usize, k: usize) -> Result<Vec<Vec<usize>>, TrijetError> {
    if k > s {
        return Err(TrijetError::InvalidCombination { s, k });
    }
    let total = binomial(s, k) as usize;
    let mut rows = vec![vec![0usize; total]; k];
    let mut offset = 0;
    walk_combinations(s, k, |combo| {
        for (p, &idx) in combo.iter().enumerate() {
            rows[p][offset] = idx;
        }
        offset += 1;
    });
    Ok(rows)
}

/// Combo-major layout: C(s, k) rows of length k, one row per combination.
pub fn combinations_combo_major(s: usize, k: usize) -> Result<Vec<Vec<usize>>, TrijetError> {
    if k > s {
        return Err(TrijetError::InvalidCombination { s, k });
    }
    let total = binomial(s, k) as usize;
    let mut rows = Vec::with_capacity(total);
    walk_combinations(s, k, |combo| {
        rows.push(combo.to_vec());
    });
    Ok(rows)
}
