mod simulator_service;

pub use simulator_service::{SimulatorService, SimulatorError};
