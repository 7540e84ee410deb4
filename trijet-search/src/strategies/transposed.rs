use super::check_min_jets;
use crate::combinations::combinations_combo_major;
use trijet_kinematics::{FourVector, Trijet, TrijetError};

/// Exact search over the combo-major layout: one short heap row per
/// candidate triple. Same result as the group-major variant, worse memory
/// access pattern, kept as the contrast case for cache-aware layout.
pub fn find_trijet(jets: &[FourVector], target_mass: f64) -> Result<Trijet, TrijetError> {
    check_min_jets(jets)?;

    let c = combinations_combo_major(jets.len(), 3)?;

    let mut distance = f64::INFINITY;
    let mut idx = 0;
    for (i, combo) in c.iter().enumerate() {
        let p = jets[combo[0]] + jets[combo[1]] + jets[combo[2]];
        let tmp_distance = (p.mass() - target_mass).abs();
        if tmp_distance < distance {
            distance = tmp_distance;
            idx = i;
        }
    }

    Ok(Trijet {
        indices: [c[idx][0], c[idx][1], c[idx][2]],
    })
}
