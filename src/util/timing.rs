//! Human-readable durations for the CLI drivers: picks the unit
//! (ns, us, ms, s, min) by magnitude.

use std::time::Duration;

pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{nanos} ns")
    } else if nanos < 1_000_000 {
        format!("{:.2} \u{00b5}s", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else if nanos < 60_000_000_000 {
        format!("{:.2} s", nanos as f64 / 1_000_000_000.0)
    } else {
        let total_secs = d.as_secs_f64();
        let mins = (total_secs / 60.0).floor();
        format!("{mins:.0} min {:.1} s", total_secs - mins * 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_selection_by_magnitude() {
        assert_eq!(format_duration(Duration::from_nanos(512)), "512 ns");
        assert_eq!(format_duration(Duration::from_micros(24)), "24.00 \u{00b5}s");
        assert_eq!(format_duration(Duration::from_millis(7)), "7.00 ms");
        assert_eq!(format_duration(Duration::from_secs(3)), "3.00 s");
        assert_eq!(format_duration(Duration::from_secs(135)), "2 min 15.0 s");
    }
}
