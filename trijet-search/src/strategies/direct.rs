use super::check_min_jets;
use trijet_kinematics::{FourVector, Trijet, TrijetError};

/// Exact search with three nested index loops. The combination count is
/// known, so no intermediate layout is materialized at all; O(1) extra
/// space beyond the running best.
pub fn find_trijet(jets: &[FourVector], target_mass: f64) -> Result<Trijet, TrijetError> {
    check_min_jets(jets)?;

    let n = jets.len();
    let mut distance = f64::INFINITY;
    let mut best = [0usize, 1, 2];

    for i in 0..=(n - 3) {
        let p1 = jets[i];
        for j in (i + 1)..=(n - 2) {
            let p2 = jets[j];
            for k in (j + 1)..=(n - 1) {
                let p = p1 + p2 + jets[k];
                let tmp_distance = (p.mass() - target_mass).abs();
                if tmp_distance < distance {
                    distance = tmp_distance;
                    best = [i, j, k];
                }
            }
        }
    }

    Ok(Trijet { indices: best })
}
