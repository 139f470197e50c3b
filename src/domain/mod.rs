pub mod reading;
pub mod recommendation;
pub mod simulation;

pub use reading::*;
pub use recommendation::*;
pub use simulation::*;
