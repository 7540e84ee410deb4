use crate::four_vector::FourVector;
use anyhow::{anyhow, Result};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};

/// Reference mass the search tries to match as closely as possible.
pub const DEFAULT_TARGET_MASS: f64 = 171.5;

/// A trijet search needs at least this many jets to have a candidate.
pub const MIN_JETS: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_jets: usize,
}

/// Three strictly increasing jet indices, the best-matching triple found by
/// a search strategy. Index positions refer into the owning event's jet
/// list, whose order is the stable identity used throughout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trijet {
    pub indices: [usize; 3],
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Event {
    pub seed: [u8; 32],
    pub jets: Vec<FourVector>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Batch {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub events: Vec<Event>,
}

/// Per-jet kinematic attributes in column form, one entry per jet index.
/// This is the shape the analysis driver hands back to the observable
/// helpers after a strategy has selected a triple.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JetColumns {
    pub pt: Vec<f64>,
    pub eta: Vec<f64>,
    pub phi: Vec<f64>,
    pub mass: Vec<f64>,
}

impl Batch {
    pub fn generate_instance(
        seed: &[u8; 32],
        difficulty: &Difficulty,
        num_events: usize,
    ) -> Result<Batch> {
        if difficulty.num_jets < MIN_JETS {
            return Err(anyhow!(
                "difficulty.num_jets ({}) must be at least {}",
                difficulty.num_jets,
                MIN_JETS
            ));
        }
        let mut rng = StdRng::from_seed(seed.clone());
        let mut events = Vec::new();
        for _ in 0..num_events {
            events.push(Event::generate_instance(&rng.gen(), difficulty)?);
        }

        Ok(Batch {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            events,
        })
    }
}

impl Event {
    /// Draws `num_jets` jets with kinematics in jet-like ranges: pt in
    /// [15, 250], eta in [-2.5, 2.5], phi in [-pi, pi], mass in [0.5, 40].
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Event> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let jets: Vec<FourVector> = (0..difficulty.num_jets)
            .map(|_| {
                let pt = rng.gen_range(15.0..=250.0);
                let eta = rng.gen_range(-2.5..=2.5);
                let phi = rng.gen_range(-std::f64::consts::PI..=std::f64::consts::PI);
                let m = rng.gen_range(0.5..=40.0);
                FourVector::from_pt_eta_phi_m(pt, eta, phi, m)
            })
            .collect();

        Ok(Event {
            seed: seed.clone(),
            jets,
        })
    }

    pub fn columns(&self) -> JetColumns {
        JetColumns {
            pt: self.jets.iter().map(|j| j.pt()).collect(),
            eta: self.jets.iter().map(|j| j.eta()).collect(),
            phi: self.jets.iter().map(|j| j.phi()).collect(),
            mass: self.jets.iter().map(|j| j.mass()).collect(),
        }
    }
}
