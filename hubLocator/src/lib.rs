// Main module declarations for windhub

// Placement pipeline
pub mod core {
    pub mod placement;
}

// Configuration modules
pub mod config {
    pub mod locator_config;
}

// Model definitions
pub mod models {
    pub mod wind_farm;
}

// Data loaders
pub mod data {
    pub mod farms_loader;
    pub mod poi;
}

// Analysis and reporting
pub mod analysis {
    pub mod median;
    pub mod cost;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::core::placement::{locate_control_center, Placement};
pub use crate::data::poi::GridPoint;
pub use crate::models::wind_farm::WindFarm;
