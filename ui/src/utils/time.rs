use jiff::{Timestamp, Zoned};

/// Zone every calendar event is displayed in.
pub const CALENDAR_TZ: &str = "America/Argentina/Buenos_Aires";

/// Parse an ISO-8601 instant (an explicit `Z` or offset is required) and
/// localize it to `tz_name`.
pub fn instant_in_tz(iso: &str, tz_name: &str) -> Result<Zoned, jiff::Error> {
    let timestamp: Timestamp = iso.parse()?;
    timestamp.in_tz(tz_name)
}

/// Format a zoned timestamp for display in RFC 2822 format
pub fn format_zoned_timestamp(zoned: &Zoned) -> String {
    zoned.strftime("%a, %d %b %Y %H:%M:%S %Z").to_string()
}
