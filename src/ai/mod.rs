mod agent;
mod capture_first;
mod random;

pub use agent::Agent;
pub use capture_first::CaptureFirstBot;
pub use random::RandomBot;
