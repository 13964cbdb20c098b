use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Moto,
    MiniBus,
    Bus,
}

impl VehicleType {
    /// Flat base rate charged for any stay within the free threshold.
    pub fn rate(&self) -> u32 {
        match self {
            VehicleType::Car => 20,
            VehicleType::Moto => 15,
            VehicleType::MiniBus => 25,
            VehicleType::Bus => 30,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Moto => "moto",
            VehicleType::MiniBus => "mini_bus",
            VehicleType::Bus => "bus",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleType::Car),
            "moto" => Ok(VehicleType::Moto),
            "mini_bus" | "minibus" => Ok(VehicleType::MiniBus),
            "bus" => Ok(VehicleType::Bus),
            other => Err(anyhow::anyhow!("Unknown vehicle type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    plate: String,
    vehicle_type: VehicleType,
    #[serde(default = "Utc::now")]
    check_in_time: DateTime<Utc>,
    #[serde(default)]
    discount_card: Option<String>,
}

impl Vehicle {
    pub fn new(
        plate: impl Into<String>,
        vehicle_type: VehicleType,
        check_in_time: DateTime<Utc>,
        discount_card: Option<String>,
    ) -> Self {
        Self {
            plate: plate.into(),
            vehicle_type,
            check_in_time,
            discount_card,
        }
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn check_in_time(&self) -> DateTime<Utc> {
        self.check_in_time
    }

    pub fn discount_card(&self) -> Option<&str> {
        self.discount_card.as_deref()
    }

    pub fn has_discount_card(&self) -> bool {
        self.discount_card.is_some()
    }

    pub fn parked_minutes(&self) -> i64 {
        self.parked_minutes_at(Utc::now())
    }

    /// Whole minutes between check-in and `now`, never negative.
    pub fn parked_minutes_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.check_in_time).num_minutes().max(0)
    }
}

// Identity is the plate alone.
impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParkingReport {
    checked_out_count: u64,
    total_fees_collected: u64,
}

impl ParkingReport {
    pub fn new(checked_out_count: u64, total_fees_collected: u64) -> Self {
        Self {
            checked_out_count,
            total_fees_collected,
        }
    }

    pub fn checked_out_count(&self) -> u64 {
        self.checked_out_count
    }

    pub fn total_fees_collected(&self) -> u64 {
        self.total_fees_collected
    }

    pub(crate) fn record_checkout(&mut self, fee: u32) {
        self.checked_out_count += 1;
        self.total_fees_collected += u64::from(fee);
    }
}

impl fmt::Display for ParkingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vehicles have checked out and have earnings of {}",
            self.checked_out_count, self.total_fees_collected
        )
    }
}
