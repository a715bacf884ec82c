const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Format a stored `YYYY-MM-DD` upload date for display (e.g. "May 1, 2024").
/// Anything else is shown as-is.
pub fn format_upload_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if let [year, month, day] = parts.as_slice() {
        if let (Ok(y), Ok(m), Ok(d)) = (year.parse::<u32>(), month.parse::<usize>(), day.parse::<u32>()) {
            if let Some(name) = m.checked_sub(1).and_then(|i| MONTHS.get(i)) {
                return format!("{} {}, {}", name, d, y);
            }
        }
    }
    date.to_string()
}

/// Local wall-clock time of the last successful list fetch, as HH:MM:SS
pub fn sync_time() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}
