use alke_parking_lot::prelude::*;
use std::io::{self, Write};

/// Renders the lot's console output.
pub struct ConsoleReporter {
    lot_name: String,
}

impl ConsoleReporter {
    pub fn new(lot_name: &str) -> Self {
        Self {
            lot_name: lot_name.to_string(),
        }
    }

    pub fn section<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "//////////// {} ////////////", title)
    }

    pub fn check_in<W: Write>(
        &self,
        out: &mut W,
        place: usize,
        result: &Result<(), CheckInError>,
    ) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(out, "Welcome to {}! place -> {}", self.lot_name, place),
            Err(_) => writeln!(out, "Sorry, the check-in failed"),
        }
    }

    pub fn check_out<W: Write>(
        &self,
        out: &mut W,
        result: &Result<u32, CheckOutError>,
    ) -> io::Result<()> {
        match result {
            Ok(fee) => writeln!(out, "Your fee is ${}. Come back soon", fee),
            Err(_) => writeln!(out, "Sorry, the check-out failed"),
        }
    }

    pub fn plates<W: Write>(&self, out: &mut W, plates: &[String]) -> io::Result<()> {
        for plate in plates {
            writeln!(out, "{}", plate)?;
        }
        Ok(())
    }

    pub fn summary<W: Write>(&self, out: &mut W, report: &ParkingReport) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", report)
    }
}
