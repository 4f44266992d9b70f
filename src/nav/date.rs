use chrono::{DateTime, NaiveDateTime, Utc};

/// `yyyy-MM-ddTHH:mm:ss.SSSZ`, always UTC.
const RFC3339_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const RFC3339_LEN: usize = 24;

/// Parse an RFC 3339 timestamp with millisecond precision and a literal `Z`.
///
/// Returns `None` when the text does not match the fixed layout.
pub fn parse_rfc3339(input: &str) -> Option<DateTime<Utc>> {
	if input.len() != RFC3339_LEN || input.as_bytes().get(19) != Some(&b'.') {
		return None;
	}
	NaiveDateTime::parse_from_str(input, RFC3339_FORMAT).ok().map(|naive| naive.and_utc())
}

/// Format an instant as an RFC 3339 UTC timestamp with millisecond precision.
pub fn format_rfc3339(date: &DateTime<Utc>) -> String {
	date.format(RFC3339_FORMAT).to_string()
}
