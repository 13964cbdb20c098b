use crate::data_structures::{Vehicle, VehicleType};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads vehicle rosters stored as JSON Lines, one vehicle per line.
pub struct RosterLoader;

impl RosterLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Vehicle>> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open roster: {}", path.as_ref().display()))?;

        let vehicles = self.load_from_reader(BufReader::new(file))?;
        debug!(
            path = %path.as_ref().display(),
            count = vehicles.len(),
            "roster loaded"
        );
        Ok(vehicles)
    }

    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Vehicle>> {
        let mut vehicles = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let vehicle = self
                .parse_line(&line)
                .with_context(|| format!("Invalid vehicle on line {}", line_num + 1))?;
            vehicles.push(vehicle);
        }

        Ok(vehicles)
    }

    fn parse_line(&self, line: &str) -> Result<Vehicle> {
        let vehicle: Vehicle = serde_json::from_str(line).context("Failed to parse JSON")?;

        if vehicle.plate().trim().is_empty() {
            anyhow::bail!("Plate cannot be empty");
        }

        Ok(vehicle)
    }
}

impl Default for RosterLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// The demo roster: twenty-one vehicles for a twenty spot lot.
pub fn sample_roster(now: DateTime<Utc>) -> Vec<Vehicle> {
    let entries: [(&str, VehicleType, Option<&str>); 21] = [
        ("AA111AA", VehicleType::Car, Some("DISCOUNT_CARD_001")),
        ("AA111JA", VehicleType::Moto, None),
        ("CC333CC", VehicleType::MiniBus, None),
        ("DD444DD", VehicleType::Bus, Some("DISCOUNT_CARD_002")),
        ("AA111BB", VehicleType::Car, Some("DISCOUNT_CARD_003")),
        ("B222CCC", VehicleType::Moto, Some("DISCOUNT_CARD_004")),
        ("CC333DD", VehicleType::MiniBus, None),
        ("DD444EE", VehicleType::Bus, Some("DISCOUNT_CARD_005")),
        ("AA111CC", VehicleType::Car, None),
        ("B222DDD", VehicleType::Moto, None),
        ("CC333EE", VehicleType::MiniBus, None),
        ("DD444GG", VehicleType::Bus, Some("DISCOUNT_CARD_006")),
        ("AA111DD", VehicleType::Car, Some("DISCOUNT_CARD_007")),
        ("B222EEE", VehicleType::Moto, None),
        ("CC331FF", VehicleType::MiniBus, None),
        ("CT333FF", VehicleType::MiniBus, None),
        ("CC333FF", VehicleType::MiniBus, None),
        ("CC331YF", VehicleType::MiniBus, None),
        ("LC333FF", VehicleType::MiniBus, None),
        ("CC383FF", VehicleType::MiniBus, None),
        ("ZC733FZZ", VehicleType::MiniBus, None),
    ];

    entries
        .into_iter()
        .map(|(plate, vehicle_type, card)| {
            Vehicle::new(plate, vehicle_type, now, card.map(str::to_string))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parking::Parking;
    use chrono::TimeZone;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_valid_line() {
        let loader = RosterLoader::new();
        let line = r#"{"plate": "AA111AA", "vehicle_type": "car", "check_in_time": "2024-01-01T12:00:00Z", "discount_card": "DISCOUNT_CARD_001"}"#;

        let vehicle = loader.parse_line(line).unwrap();
        assert_eq!(vehicle.plate(), "AA111AA");
        assert_eq!(vehicle.vehicle_type(), VehicleType::Car);
        assert_eq!(
            vehicle.check_in_time(),
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(vehicle.discount_card(), Some("DISCOUNT_CARD_001"));
    }

    #[test]
    fn test_missing_check_in_time_defaults_to_now() {
        let loader = RosterLoader::new();
        let before = Utc::now();

        let vehicle = loader
            .parse_line(r#"{"plate": "CC333CC", "vehicle_type": "mini_bus"}"#)
            .unwrap();
        assert!(vehicle.check_in_time() >= before);
        assert!(!vehicle.has_discount_card());
    }

    #[test]
    fn test_empty_plate_rejected() {
        let loader = RosterLoader::new();
        assert!(loader
            .parse_line(r#"{"plate": "  ", "vehicle_type": "car"}"#)
            .is_err());
    }

    #[test]
    fn test_unknown_vehicle_type_rejected() {
        let loader = RosterLoader::new();
        assert!(loader
            .parse_line(r#"{"plate": "AA111AA", "vehicle_type": "truck"}"#)
            .is_err());
    }

    #[test]
    fn test_load_from_file_with_empty_lines() {
        let loader = RosterLoader::new();
        let mut temp_file = NamedTempFile::new().unwrap();

        let content = r#"{"plate": "AA111AA", "vehicle_type": "car"}

{"plate": "DD444DD", "vehicle_type": "bus", "discount_card": "DISCOUNT_CARD_002"}"#;
        temp_file.write_all(content.as_bytes()).unwrap();

        let vehicles = loader.load_from_file(temp_file.path()).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[1].plate(), "DD444DD");
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let loader = RosterLoader::new();
        let mut temp_file = NamedTempFile::new().unwrap();

        let content = "{\"plate\": \"AA111AA\", \"vehicle_type\": \"car\"}\n{\"plate\": ";
        temp_file.write_all(content.as_bytes()).unwrap();

        let error = loader.load_from_file(temp_file.path()).unwrap_err();
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file() {
        let loader = RosterLoader::new();
        assert!(loader.load_from_file("/nonexistent/roster.jsonl").is_err());
    }

    #[test]
    fn test_sample_roster_overflows_lot() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let roster = sample_roster(now);
        assert_eq!(roster.len(), 21);

        let mut parking = Parking::new();
        let admitted = roster
            .into_iter()
            .filter(|vehicle| parking.check_in(vehicle.clone()).is_ok())
            .count();

        assert_eq!(admitted, 20);
        assert!(!parking.contains("ZC733FZZ"));
    }
}
