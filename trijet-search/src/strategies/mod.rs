//! Five interchangeable search strategies for the closest-to-target
//! triplet. The first four are exact and differ only in how they enumerate
//! candidate triples; the fifth trades exactness for a near-linear pass.

mod approximate;
mod direct;
mod equivalent;
mod reference;
mod transposed;

use std::str::FromStr;
use trijet_kinematics::{FourVector, Trijet, TrijetError, MIN_JETS};

pub use approximate::find_trijet as approximate_find_trijet;
pub use direct::find_trijet as direct_find_trijet;
pub use equivalent::find_trijet as equivalent_find_trijet;
pub use reference::find_trijet as reference_find_trijet;
pub use transposed::find_trijet as transposed_find_trijet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Reference,
    Equivalent,
    Transposed,
    Direct,
    Approximate,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Reference,
        Strategy::Equivalent,
        Strategy::Transposed,
        Strategy::Direct,
        Strategy::Approximate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Reference => "reference",
            Strategy::Equivalent => "equivalent",
            Strategy::Transposed => "transposed",
            Strategy::Direct => "direct",
            Strategy::Approximate => "approximate",
        }
    }

    /// True for the strategies whose result is guaranteed optimal.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Strategy::Approximate)
    }
}

impl FromStr for Strategy {
    type Err = TrijetError;

    /// Strategy names form a closed set; anything else is rejected rather
    /// than silently mapped to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reference" => Ok(Strategy::Reference),
            "equivalent" => Ok(Strategy::Equivalent),
            "transposed" => Ok(Strategy::Transposed),
            "direct" => Ok(Strategy::Direct),
            "approximate" => Ok(Strategy::Approximate),
            _ => Err(TrijetError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Runs the selected strategy over `jets`, returning the triple whose
/// combined invariant mass lies closest to `target_mass`. For the exact
/// strategies ties break to the first candidate in that strategy's own
/// enumeration order.
pub fn find_best_trijet(
    strategy: Strategy,
    jets: &[FourVector],
    target_mass: f64,
) -> Result<Trijet, TrijetError> {
    match strategy {
        Strategy::Reference => reference::find_trijet(jets, target_mass),
        Strategy::Equivalent => equivalent::find_trijet(jets, target_mass),
        Strategy::Transposed => transposed::find_trijet(jets, target_mass),
        Strategy::Direct => direct::find_trijet(jets, target_mass),
        Strategy::Approximate => approximate::find_trijet(jets, target_mass),
    }
}

pub(crate) fn check_min_jets(jets: &[FourVector]) -> Result<(), TrijetError> {
    if jets.len() < MIN_JETS {
        return Err(TrijetError::NotEnoughJets {
            num_jets: jets.len(),
        });
    }
    Ok(())
}
