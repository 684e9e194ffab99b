//! Schedule file rendering
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hifitime::Epoch;
use itertools::Itertools;

use crate::cfg::AngleUnit;
use crate::command::{Command, CommandRecord};

/// UTC timestamp at seconds precision: `YYYY-MM-DD HH:MM:SS`.
fn format_epoch(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, _) = epoch.to_gregorian_utc();
    format!("{:04}-{:02}-{:02} {:02}:{:02}:{:02}", y, m, d, hh, mm, ss)
}

/// Renders one command line. Target coordinates are converted from
/// radians to the requested unit and printed as fixed six-decimal values.
pub fn render_command(record: &CommandRecord, unit: AngleUnit) -> String {
    let stamp = format_epoch(record.epoch);
    match &record.command {
        Command::Startup => format!("{}  STARTUP", stamp),
        Command::Observing {
            source,
            ra_rad,
            dec_rad,
        } => format!(
            "{}  OBSERVING  ={{\"source\": \"{}\", \"dec\": \"{:.6}\", \"ra\": \"{:.6}\"}}",
            stamp,
            source,
            unit.from_radians(*dec_rad),
            unit.from_radians(*ra_rad),
        ),
        Command::Shutdown => format!("{}  SHUTDOWN", stamp),
    }
}

/// Writes the command stream, one line per command in emission order,
/// newline separated, with no trailing newline after the last line.
pub fn write_commands<W: Write>(
    w: &mut W,
    records: &[CommandRecord],
    unit: AngleUnit,
) -> std::io::Result<()> {
    let body = records
        .iter()
        .map(|record| render_command(record, unit))
        .join("\n");
    w.write_all(body.as_bytes())
}

/// Writes the command stream to a schedule file. The handle is held for
/// one write pass and released whether or not the pass completes; a
/// failed write may leave a partial file behind.
pub fn write_schedule<P: AsRef<Path>>(
    path: P,
    records: &[CommandRecord],
    unit: AngleUnit,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_commands(&mut writer, records, unit)?;
    writer.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;
    use std::fs;

    fn observing(epoch: Epoch) -> CommandRecord {
        CommandRecord::new(
            epoch,
            Command::Observing {
                source: "Crab".to_string(),
                ra_rad: 1.25,
                dec_rad: 0.5,
            },
        )
    }

    #[rstest]
    #[case(Command::Startup, "2023-03-01 20:15:00  STARTUP")]
    #[case(Command::Shutdown, "2023-03-01 20:15:00  SHUTDOWN")]
    fn renders_power_commands(#[case] command: Command, #[case] expected: &str) {
        let epoch = Epoch::from_gregorian_utc(2023, 3, 1, 20, 15, 0, 0);
        let record = CommandRecord::new(epoch, command);
        assert_eq!(render_command(&record, AngleUnit::Radians), expected);
    }

    #[test]
    fn renders_observing_command() {
        let epoch = Epoch::from_gregorian_utc(2023, 3, 1, 20, 30, 0, 0);
        assert_eq!(
            render_command(&observing(epoch), AngleUnit::Radians),
            "2023-03-01 20:30:00  OBSERVING  ={\"source\": \"Crab\", \"dec\": \"0.500000\", \"ra\": \"1.250000\"}"
        );
    }

    #[test]
    fn renders_in_degrees() {
        let epoch = Epoch::from_gregorian_utc(2023, 3, 1, 20, 30, 0, 0);
        let record = CommandRecord::new(
            epoch,
            Command::Observing {
                source: "zenith".to_string(),
                ra_rad: PI,
                dec_rad: PI / 4.0,
            },
        );
        assert_eq!(
            render_command(&record, AngleUnit::Degrees),
            "2023-03-01 20:30:00  OBSERVING  ={\"source\": \"zenith\", \"dec\": \"45.000000\", \"ra\": \"180.000000\"}"
        );
    }

    #[test]
    fn timestamps_are_zero_padded() {
        let epoch = Epoch::from_gregorian_utc(2023, 1, 5, 4, 5, 9, 0);
        let record = CommandRecord::new(epoch, Command::Startup);
        assert_eq!(
            render_command(&record, AngleUnit::Radians),
            "2023-01-05 04:05:09  STARTUP"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let epoch = Epoch::from_gregorian_utc(2023, 3, 1, 22, 0, 0, 0);
        let records = vec![observing(epoch), CommandRecord::new(epoch, Command::Shutdown)];

        let mut rendered = Vec::new();
        write_commands(&mut rendered, &records, AngleUnit::Radians).unwrap();
        let text = String::from_utf8(rendered).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("SHUTDOWN"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn writes_schedule_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");

        let epoch = Epoch::from_gregorian_utc(2023, 3, 1, 22, 0, 0, 0);
        let records = vec![CommandRecord::new(epoch, Command::Shutdown)];
        write_schedule(&path, &records, AngleUnit::Radians).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2023-03-01 22:00:00  SHUTDOWN"
        );
    }
}
