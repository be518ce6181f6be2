// Scoring backend client: typed HTTP contracts for analysis and simulation.
//
// The backend owns every score, tier and recommendation. This module only
// moves requests out and snapshots back in.

pub mod client;
pub mod traits;
pub mod types;
