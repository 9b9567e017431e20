pub mod constants;
pub mod controller;
pub mod gesture;
pub mod state;
pub mod transform;

pub use constants::*;
pub use controller::*;
pub use gesture::*;
pub use state::*;
pub use transform::*;
