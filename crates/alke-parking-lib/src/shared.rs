use crate::data_structures::{ParkingReport, Vehicle};
use crate::error::{CheckInError, CheckOutError};
use crate::parking::Parking;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a [`Parking`] shared between threads.
///
/// Each operation holds the one lock for its whole check-then-act sequence,
/// so capacity checks and total updates never interleave.
#[derive(Clone)]
pub struct SharedParking {
    inner: Arc<Mutex<Parking>>,
}

impl SharedParking {
    pub fn new(parking: Parking) -> Self {
        Self {
            inner: Arc::new(Mutex::new(parking)),
        }
    }

    pub fn check_in(&self, vehicle: Vehicle) -> Result<(), CheckInError> {
        self.lock().check_in(vehicle)
    }

    pub fn check_out(&self, plate: &str) -> Result<u32, CheckOutError> {
        self.lock().check_out(plate)
    }

    pub fn check_out_at(
        &self,
        plate: &str,
        now: DateTime<Utc>,
    ) -> Result<u32, CheckOutError> {
        self.lock().check_out_at(plate, now)
    }

    pub fn list_plates(&self) -> Vec<String> {
        self.lock().list_plates()
    }

    pub fn report(&self) -> ParkingReport {
        self.lock().report()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panicking holder cannot leave a half-applied update behind.
    fn lock(&self) -> MutexGuard<'_, Parking> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedParking {
    fn default() -> Self {
        Self::new(Parking::new())
    }
}
