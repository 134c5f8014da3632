//! Export helpers for CSV and JSON artifacts.

pub mod windows {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str =
        "launch_date,arrival_date,flight_time_days,delta_v_km_s,fuel_required_kg,efficiency_score";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard window CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted per ranked window.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub launch_date: &'a str,
        pub arrival_date: &'a str,
        pub flight_time_days: u32,
        pub delta_v_km_s: f64,
        pub fuel_required_kg: f64,
        pub efficiency_score: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{:.2},{:.1},{:.2}",
                self.launch_date,
                self.arrival_date,
                self.flight_time_days,
                self.delta_v_km_s,
                self.fuel_required_kg,
                self.efficiency_score,
            )
        }
    }
}

pub mod outcome {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Write a pretty-printed JSON report, creating parent directories as needed.
    pub fn write_pretty<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, value)?;
        Ok(())
    }
}
