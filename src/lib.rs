// Virality: terminal virality meter for X posts and accounts
//
// This is the library root. Scoring lives in an external backend; the
// modules here talk to it, hold dashboard state, derive display metrics
// and render the results.

pub mod actionables;
pub mod api;
pub mod assessment;
pub mod config;
pub mod dashboard;
pub mod disclaimer;
pub mod output;
pub mod projection;
pub mod tiers;
