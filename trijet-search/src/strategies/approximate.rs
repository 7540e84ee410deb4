use super::check_min_jets;
use trijet_kinematics::{FourVector, Trijet, TrijetError};

/// Near-linear heuristic: sort jet indices by each jet's own rest mass,
/// then run a 3sum-closest style two-pointer scan per leftmost position.
/// O(N log N + N^2) time, O(N) extra space for the sort permutation.
///
/// Not exact. The invariant mass of a summed triple is neither monotone nor
/// separable in the constituents' rest masses (a light back-to-back pair
/// can carry a huge pair mass), so the two-pointer narrowing can step past
/// the global optimum. The result is best-effort; callers that need the
/// true optimum must use one of the exact strategies. The test suite pins a
/// concrete counterexample where this function disagrees with them.
pub fn find_trijet(jets: &[FourVector], target_mass: f64) -> Result<Trijet, TrijetError> {
    check_min_jets(jets)?;

    let n = jets.len();
    let mut inds: Vec<usize> = (0..n).collect();
    inds.sort_by(|&a, &b| jets[a].mass().total_cmp(&jets[b].mass()));

    let mut distance = f64::INFINITY;
    let mut best = [inds[0], inds[1], inds[2]];

    for i in 0..=(n - 2) {
        let mut j = i + 1;
        let mut k = n - 1;
        while j < k {
            let tmp_mass = (jets[inds[i]] + jets[inds[j]] + jets[inds[k]]).mass();
            if tmp_mass == target_mass {
                return Ok(ordered([inds[i], inds[j], inds[k]]));
            }
            let tmp_distance = (tmp_mass - target_mass).abs();
            if tmp_distance < distance {
                distance = tmp_distance;
                best = [inds[i], inds[j], inds[k]];
            }
            if tmp_mass < target_mass {
                j += 1;
            } else {
                k -= 1;
            }
        }
    }

    Ok(ordered(best))
}

// The scan visits jets in mass order, so the winning indices come out
// unordered; results carry strictly ascending indices.
fn ordered(mut indices: [usize; 3]) -> Trijet {
    indices.sort_unstable();
    Trijet { indices }
}
