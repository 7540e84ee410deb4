use crate::error::TrijetError;
use crate::event::{JetColumns, Trijet};
use crate::four_vector::FourVector;

fn rebuild(columns: &JetColumns, trijet: &Trijet) -> Result<FourVector, TrijetError> {
    let num_jets = columns.pt.len();
    let mut total = FourVector::from_xyzt(0.0, 0.0, 0.0, 0.0);
    for &i in &trijet.indices {
        if i >= num_jets {
            return Err(TrijetError::JetIndexOutOfBounds { index: i, num_jets });
        }
        total = total
            + FourVector::from_pt_eta_phi_m(columns.pt[i], columns.eta[i], columns.phi[i], columns.mass[i]);
    }
    Ok(total)
}

/// Transverse momentum of the summed triple, rebuilt from kinematic columns.
pub fn trijet_pt(columns: &JetColumns, trijet: &Trijet) -> Result<f64, TrijetError> {
    Ok(rebuild(columns, trijet)?.pt())
}

/// Invariant mass of the summed triple, rebuilt from kinematic columns.
pub fn trijet_mass(columns: &JetColumns, trijet: &Trijet) -> Result<f64, TrijetError> {
    Ok(rebuild(columns, trijet)?.mass())
}
