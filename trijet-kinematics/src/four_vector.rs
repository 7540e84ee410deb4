use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Energy-momentum four-vector of a single jet.
///
/// Stored in cartesian (px, py, pz, e) form; the polar view
/// (pt, eta, phi, mass) is available through accessors and the
/// [`FourVector::from_pt_eta_phi_m`] constructor. The two representations
/// convert into each other losslessly up to float rounding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FourVector {
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub e: f64,
}

impl FourVector {
    pub fn from_xyzt(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Builds a four-vector from detector coordinates: transverse momentum,
    /// pseudorapidity, azimuthal angle and rest mass.
    pub fn from_pt_eta_phi_m(pt: f64, eta: f64, phi: f64, m: f64) -> Self {
        let px = pt * phi.cos();
        let py = pt * phi.sin();
        let pz = pt * eta.sinh();
        let e = (m * m + px * px + py * py + pz * pz).sqrt();
        Self { px, py, pz, e }
    }

    fn p2(&self) -> f64 {
        self.px * self.px + self.py * self.py + self.pz * self.pz
    }

    /// Invariant mass, sqrt(e^2 - |p|^2), clamped to 0 when rounding pushes
    /// the mass-squared slightly negative.
    ///
    /// Not additive: `(a + b).mass()` differs from `a.mass() + b.mass()`
    /// whenever the summands are not co-moving. Every triplet-search
    /// strategy ultimately minimizes a distance in this quantity, and its
    /// non-additivity is what makes the approximate strategy a heuristic.
    pub fn mass(&self) -> f64 {
        let m2 = self.e * self.e - self.p2();
        if m2 > 0.0 {
            m2.sqrt()
        } else {
            0.0
        }
    }

    /// Transverse momentum, the component of |p| orthogonal to the beam axis.
    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    pub fn phi(&self) -> f64 {
        self.py.atan2(self.px)
    }

    pub fn eta(&self) -> f64 {
        (self.pz / self.pt()).asinh()
    }
}

impl Add for FourVector {
    type Output = FourVector;

    fn add(self, rhs: FourVector) -> FourVector {
        FourVector {
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
            e: self.e + rhs.e,
        }
    }
}

impl Sum for FourVector {
    fn sum<I: Iterator<Item = FourVector>>(iter: I) -> FourVector {
        iter.fold(FourVector::from_xyzt(0.0, 0.0, 0.0, 0.0), Add::add)
    }
}
