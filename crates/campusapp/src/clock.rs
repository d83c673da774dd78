//! Server-local date and time formatting shared by the rules layer.

use chrono::Local;

/// Today's calendar day as `YYYY-MM-DD`, in the server's local timezone.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Current wall-clock time as `H:MM AM/PM`, matching the format the
/// portal has always shown on orders and alerts.
pub fn wall_time() -> String {
    Local::now().format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_iso_day() {
        let day = today();
        assert_eq!(day.len(), 10);
        let parts: Vec<&str> = day.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
    }

    #[test]
    fn test_wall_time_has_meridiem() {
        let time = wall_time();
        assert!(time.ends_with("AM") || time.ends_with("PM"), "{}", time);
        assert!(time.contains(':'));
    }
}
