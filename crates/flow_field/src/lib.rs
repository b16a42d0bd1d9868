pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod flow;
pub mod grid;
pub mod integration;
pub mod los;
pub mod scenario;
pub mod step;

pub use error::{FlowFieldError, Result};
pub use flow::{DirectionField, flow_field};
pub use grid::Grid;
pub use integration::{CostField, IntegrationField};
