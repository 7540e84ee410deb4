use super::check_min_jets;
use crate::combinations::combinations_group_major;
use trijet_kinematics::{FourVector, Trijet, TrijetError};

/// Exact search over the group-major combination layout. The three rows are
/// read at the same advancing offset, so each loop iteration touches three
/// long contiguous rows in step.
pub fn find_trijet(jets: &[FourVector], target_mass: f64) -> Result<Trijet, TrijetError> {
    check_min_jets(jets)?;

    let c = combinations_group_major(jets.len(), 3)?;

    let mut distance = f64::INFINITY;
    let mut idx = 0;
    for i in 0..c[0].len() {
        let p = jets[c[0][i]] + jets[c[1][i]] + jets[c[2][i]];
        let tmp_distance = (p.mass() - target_mass).abs();
        if tmp_distance < distance {
            distance = tmp_distance;
            idx = i;
        }
    }

    Ok(Trijet {
        indices: [c[0][idx], c[1][idx], c[2][idx]],
    })
}
