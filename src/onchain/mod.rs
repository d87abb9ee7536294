pub mod client;
pub mod constants;
pub mod derive;
pub mod ixs;
pub mod state;
pub mod typedefs;
