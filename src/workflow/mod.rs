pub mod gate;
pub mod wake_up;

pub use gate::Gate;
pub use wake_up::{WakeOutcome, WakeState, WakeUpController};
