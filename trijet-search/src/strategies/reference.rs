use super::check_min_jets;
use itertools::Itertools;
use trijet_kinematics::{FourVector, Trijet, TrijetError};

/// Exact search using itertools' combination facility as the enumerator.
/// This is the baseline the custom generator variants are checked against.
pub fn find_trijet(jets: &[FourVector], target_mass: f64) -> Result<Trijet, TrijetError> {
    check_min_jets(jets)?;

    let mut distance = f64::INFINITY;
    let mut best = [0usize, 1, 2];
    for combo in (0..jets.len()).combinations(3) {
        let p = jets[combo[0]] + jets[combo[1]] + jets[combo[2]];
        let tmp_distance = (p.mass() - target_mass).abs();
        if tmp_distance < distance {
            distance = tmp_distance;
            best = [combo[0], combo[1], combo[2]];
        }
    }

    Ok(Trijet { indices: best })
}
