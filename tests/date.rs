#[cfg(test)]
mod tests {
    use taskdeck::libs::date::Date;

    #[test]
    fn test_validate_full_date() {
        let normalized = Date::validate("01/15/2024").unwrap();
        assert_eq!(normalized, "01/15/2024");
    }

    #[test]
    fn test_validate_dash_separator() {
        assert_eq!(Date::validate("12-25-1999").unwrap(), "12-25-1999");
    }

    #[test]
    fn test_validate_too_short() {
        assert!(Date::validate("").is_none());
        assert!(Date::validate("1/5/24").is_none());
        assert!(Date::validate("13/2024").is_none());
    }

    #[test]
    fn test_validate_pads_both_fields() {
        // 8 characters: both month and day are missing their leading zero.
        assert_eq!(Date::validate("1/5/2024").unwrap(), "01/05/2024");
    }

    #[test]
    fn test_validate_pads_single_field() {
        // 9 characters: only one field is missing its zero.
        assert_eq!(Date::validate("1/15/2024").unwrap(), "01/15/2024");
        assert_eq!(Date::validate("5/10/2024").unwrap(), "05/10/2024");
        assert_eq!(Date::validate("05/1/2024").unwrap(), "05/01/2024");
    }

    #[test]
    fn test_validate_month_range() {
        assert!(Date::validate("00/10/2024").is_none());
        assert!(Date::validate("13/01/2024").is_none());
        assert!(Date::validate("12/01/2024").is_some());
    }

    #[test]
    fn test_validate_day_range() {
        assert!(Date::validate("01/00/2024").is_none());
        assert!(Date::validate("01/32/2024").is_none());
        assert!(Date::validate("01/31/2024").is_some());
    }

    #[test]
    fn test_validate_year_bounds() {
        assert!(Date::validate("01/01/1969").is_none());
        assert!(Date::validate("01/01/1970").is_some());
        assert!(Date::validate("12/31/2199").is_some());
        assert!(Date::validate("01/01/2200").is_none());
    }

    #[test]
    fn test_validate_february_leap_years() {
        // Divisible by 4 and not by 100.
        assert!(Date::validate("02/29/2024").is_some());
        assert!(Date::validate("02/29/2023").is_none());
        // Divisible by 400 is a leap year, by 100 alone is not.
        assert!(Date::validate("02/29/2000").is_some());
        assert!(Date::validate("02/29/2100").is_none());
        // Day 30 never exists in February.
        assert!(Date::validate("02/30/2024").is_none());
        assert!(Date::validate("02/28/2023").is_some());
    }

    #[test]
    fn test_validate_thirty_day_months() {
        // April, June, September, and November cap at day 30.
        for month in ["04", "06", "09", "11"] {
            assert!(Date::validate(&format!("{}/15/2024", month)).is_some());
            assert!(Date::validate(&format!("{}/30/2024", month)).is_some());
            assert!(Date::validate(&format!("{}/31/2024", month)).is_none());
        }
    }

    #[test]
    fn test_validate_bad_separators() {
        assert!(Date::validate("01.15.2024").is_none());
        assert!(Date::validate("01 15 2024").is_none());
        assert!(Date::validate("0a/15/2024").is_none());
    }

    #[test]
    fn test_parse_valid_string() {
        let date = Date::parse("4/4/2024");
        assert_eq!(date.month(), 4);
        assert_eq!(date.day(), 4);
        assert_eq!(date.year(), 2024);
        assert!(date.is_set());
    }

    #[test]
    fn test_parse_invalid_string_is_unset() {
        let date = Date::parse("not a date");
        assert_eq!(date.month(), 0);
        assert_eq!(date.day(), 0);
        assert_eq!(date.year(), 0);
        assert!(!date.is_set());
    }

    #[test]
    fn test_new_clamps_each_field_independently() {
        let date = Date::new(13, 10, 2024);
        assert_eq!(date.month(), 0);
        assert_eq!(date.day(), 10);
        assert_eq!(date.year(), 2024);

        let date = Date::new(5, 32, 2024);
        assert_eq!(date.month(), 5);
        assert_eq!(date.day(), 0);
        assert_eq!(date.year(), 2024);

        let date = Date::new(5, 10, 1969);
        assert_eq!(date.month(), 5);
        assert_eq!(date.day(), 10);
        assert_eq!(date.year(), 0);
    }

    #[test]
    fn test_new_skips_calendar_checks() {
        // The numeric constructor does not cross-validate day against
        // month; only string validation enforces the calendar.
        let date = Date::new(2, 30, 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 30);
        assert!(date.is_set());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Date::new(4, 4, 2024).to_string(), "04/04/2024");
        assert_eq!(Date::unset().to_string(), "00/00/0000");
    }
}
