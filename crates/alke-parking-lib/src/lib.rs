pub mod calculator;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod parking;
pub mod shared;

pub use calculator::Calculator;
pub use config::ParkingConfig;
pub use data_structures::{ParkingReport, Vehicle, VehicleType};
pub use error::{CheckInError, CheckOutError};
pub use loader::{sample_roster, RosterLoader};
pub use parking::Parking;
pub use shared::SharedParking;

pub use anyhow::Result;
pub use chrono::{DateTime, Duration, Utc};

pub mod prelude {
    pub use crate::data_structures::{ParkingReport, Vehicle, VehicleType};
    pub use crate::error::{CheckInError, CheckOutError};
    pub use crate::parking::Parking;
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
}
