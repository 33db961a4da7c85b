#[cfg(test)]
mod tests {
    use worktime::libs::time::{parse_time_to_seconds, TimeOfDay, TimeParseError};

    #[test]
    fn test_parse_full_time() {
        assert_eq!(parse_time_to_seconds("09:15:00").unwrap(), Some(33300));
        assert_eq!(parse_time_to_seconds("23:59:59").unwrap(), Some(86399));
    }

    #[test]
    fn test_parse_without_seconds() {
        assert_eq!(parse_time_to_seconds("17:00").unwrap(), Some(61200));
        assert_eq!(parse_time_to_seconds("7:5").unwrap(), Some(7 * 3600 + 5 * 60));
    }

    #[test]
    fn test_blank_input_is_absent() {
        assert_eq!(parse_time_to_seconds("").unwrap(), None);
        assert_eq!(parse_time_to_seconds("   ").unwrap(), None);
        assert_eq!(TimeOfDay::parse_optional("\t").unwrap(), None);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_time_to_seconds(" 08:00 ").unwrap(), Some(28800));
    }

    #[test]
    fn test_invalid_components_fail() {
        for raw in ["aa:bb", "08:xx", "08:00:zz", "08:-1", "08:00:1.5", ":", "08:"] {
            let err = parse_time_to_seconds(raw).unwrap_err();
            assert!(matches!(err, TimeParseError::InvalidComponent { .. }), "{}", raw);
        }
    }

    #[test]
    fn test_wrong_component_count_fails() {
        for raw in ["0800", "08:00:00:00", "1:2:3:4:5"] {
            let err = parse_time_to_seconds(raw).unwrap_err();
            assert!(matches!(err, TimeParseError::WrongComponentCount(_)), "{}", raw);
        }
    }

    #[test]
    fn test_error_messages_name_the_input() {
        let err = "08:xx".parse::<TimeOfDay>().unwrap_err();
        assert_eq!(err.to_string(), "'xx' in '08:xx' is not a whole number");
    }

    #[test]
    fn test_display_pads_components() {
        let time: TimeOfDay = "7:5".parse().unwrap();
        assert_eq!(time, TimeOfDay::new(7, 5, 0));
        assert_eq!(time.to_string(), "07:05:00");
    }
}
