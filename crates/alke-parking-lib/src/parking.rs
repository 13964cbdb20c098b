use crate::calculator::Calculator;
use crate::data_structures::{ParkingReport, Vehicle};
use crate::error::{CheckInError, CheckOutError};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub const DEFAULT_CAPACITY: usize = 20;

pub struct Parking {
    vehicles: BTreeMap<String, Vehicle>,
    capacity: usize,
    report: ParkingReport,
    calculator: Calculator,
}

impl Parking {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vehicles: BTreeMap::new(),
            capacity,
            report: ParkingReport::default(),
            calculator: Calculator::new(),
        }
    }

    /// Admits `vehicle` unless its plate is already parked or the lot is full.
    pub fn check_in(&mut self, vehicle: Vehicle) -> Result<(), CheckInError> {
        if self.vehicles.contains_key(vehicle.plate()) {
            warn!(plate = vehicle.plate(), "check-in rejected, plate already parked");
            return Err(CheckInError::AlreadyParked(vehicle.plate().to_string()));
        }

        if self.vehicles.len() >= self.capacity {
            warn!(
                plate = vehicle.plate(),
                capacity = self.capacity,
                "check-in rejected, parking is full"
            );
            return Err(CheckInError::Full {
                capacity: self.capacity,
            });
        }

        debug!(
            plate = vehicle.plate(),
            vehicle_type = %vehicle.vehicle_type(),
            discount = vehicle.has_discount_card(),
            "vehicle checked in"
        );
        self.vehicles.insert(vehicle.plate().to_string(), vehicle);
        Ok(())
    }

    pub fn check_out(&mut self, plate: &str) -> Result<u32, CheckOutError> {
        self.check_out_at(plate, Utc::now())
    }

    /// Removes the vehicle and books its fee, with the stay measured up to `now`.
    pub fn check_out_at(
        &mut self,
        plate: &str,
        now: DateTime<Utc>,
    ) -> Result<u32, CheckOutError> {
        let Some(vehicle) = self.vehicles.remove(plate) else {
            info!(plate, "check-out rejected, plate not found");
            return Err(CheckOutError::NotFound(plate.to_string()));
        };

        let parked_minutes = vehicle.parked_minutes_at(now);
        let fee = self.calculator.calculate_vehicle_fee(&vehicle, now);
        self.report.record_checkout(fee);

        debug!(plate, parked_minutes, fee, "vehicle checked out");
        Ok(fee)
    }

    pub fn list_plates(&self) -> Vec<String> {
        self.vehicles.keys().cloned().collect()
    }

    pub fn report(&self) -> ParkingReport {
        self.report
    }

    pub fn get(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    pub fn contains(&self, plate: &str) -> bool {
        self.vehicles.contains_key(plate)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available_spots(&self) -> usize {
        self.capacity.saturating_sub(self.vehicles.len())
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl Default for Parking {
    fn default() -> Self {
        Self::new()
    }
}
