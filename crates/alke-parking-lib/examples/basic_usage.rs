use alke_parking_lot::prelude::*;
use alke_parking_lot::Duration;

fn main() -> Result<()> {
    let mut parking = Parking::new();
    let arrival = Utc::now() - Duration::minutes(135);

    let vehicles = [
        Vehicle::new("AA111AA", VehicleType::Car, arrival, None),
        Vehicle::new(
            "DD444DD",
            VehicleType::Bus,
            arrival,
            Some("DISCOUNT_CARD_002".to_string()),
        ),
        Vehicle::new("AA111AA", VehicleType::Moto, arrival, None),
    ];

    for vehicle in vehicles {
        let plate = vehicle.plate().to_string();
        match parking.check_in(vehicle) {
            Ok(()) => println!("Checked in {}", plate),
            Err(e) => println!("Could not check in {}: {}", plate, e),
        }
    }

    println!("{} of {} spots taken", parking.len(), parking.capacity());

    for plate in ["AA111AA", "DD444DD", "XX000XX"] {
        match parking.check_out(plate) {
            Ok(fee) => println!("{} paid ${}", plate, fee),
            Err(e) => println!("Could not check out {}: {}", plate, e),
        }
    }

    println!("{}", parking.report());

    Ok(())
}
