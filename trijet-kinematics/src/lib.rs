pub mod error;
pub mod event;
pub mod four_vector;
pub mod observables;

pub use error::TrijetError;
pub use event::{Batch, Difficulty, Event, JetColumns, Trijet, DEFAULT_TARGET_MASS, MIN_JETS};
pub use four_vector::FourVector;
pub use observables::{trijet_mass, trijet_pt};
