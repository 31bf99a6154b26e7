use chrono::{NaiveDate, NaiveDateTime, Utc};

pub fn format_relative_time(datetime: &NaiveDateTime) -> String {
    relative_to(datetime, &Utc::now().naive_utc())
}

fn relative_to(datetime: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "hace un momento".to_string()
    } else if minutes < 60 {
        format!("hace {} minuto{}", minutes, plural(minutes))
    } else if hours < 24 {
        format!("hace {} hora{}", hours, plural(hours))
    } else if days < 30 {
        format!("hace {} día{}", days, plural(days))
    } else if days < 365 {
        let months = days / 30;
        format!("hace {} mes{}", months, if months == 1 { "" } else { "es" })
    } else {
        let years = days / 365;
        format!("hace {} año{}", years, plural(years))
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Amount with two decimals and a `RD$` prefix
pub fn format_money(amount: f64) -> String {
    format!("RD$ {:.2}", amount)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}

/// Value for an `<input type="datetime-local">`
pub fn to_input_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parses an `<input type="datetime-local">` value, with or without seconds
pub fn parse_input_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Parses an `<input type="date">` value
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Splits a comma separated field into trimmed, non-empty entries
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::{format_money, parse_input_datetime, relative_to, split_list};

    #[test]
    /// Expect Spanish relative times with singular and plural units
    fn test_relative_time() {
        let now = NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        assert_eq!(relative_to(&now, &now), "hace un momento");
        assert_eq!(relative_to(&(now - Duration::minutes(1)), &now), "hace 1 minuto");
        assert_eq!(relative_to(&(now - Duration::hours(3)), &now), "hace 3 horas");
        assert_eq!(relative_to(&(now - Duration::days(60)), &now), "hace 2 meses");
        assert_eq!(relative_to(&(now - Duration::days(400)), &now), "hace 1 año");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(25.0), "RD$ 25.00");
    }

    #[test]
    /// Expect browser datetime-local values with and without seconds
    fn test_parse_input_datetime() {
        assert!(parse_input_datetime("2026-03-10T09:00").is_some());
        assert!(parse_input_datetime("2026-03-10T09:00:30").is_some());
        assert!(parse_input_datetime("10/03/2026").is_none());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" 5A, 5B ,,6A"), vec!["5A", "5B", "6A"]);
    }
}
