#[cfg(test)]
mod tests {
    use worktime::libs::calculator::{
        calculate, calculate_with, Balance, BreakEntry, WorkPolicy, WorkdayEntry, REQUIRED_WORK_SECONDS,
    };
    use worktime::libs::error::CalcError;
    use worktime::libs::time::{parse_time_to_seconds, TimeOfDay};

    fn seconds(raw: &str) -> i64 {
        parse_time_to_seconds(raw).unwrap().unwrap()
    }

    #[test]
    fn test_full_day_without_breaks_is_one_hour_surplus() {
        let summary = calculate(&WorkdayEntry::new("08:00:00", "17:00:00")).unwrap();

        assert_eq!(summary.effective_work_seconds, 32400);
        assert_eq!(summary.remaining_seconds, -3600);
        assert_eq!(summary.balance, Balance::Surplus);
        assert_eq!(summary.duration, "01:00:00");
        assert!(!summary.penalty);
        assert_eq!(
            summary.message,
            "You have met or exceeded the 8-hour work requirement by 01:00:00. Total break time: 00:00:00."
        );
    }

    #[test]
    fn test_late_short_day_is_deficit_with_penalty() {
        let summary = calculate(&WorkdayEntry::new("09:30:00", "17:00:00")).unwrap();

        assert_eq!(summary.effective_work_seconds, 27000);
        assert_eq!(summary.remaining_seconds, 1800);
        assert_eq!(summary.balance, Balance::Deficit);
        assert_eq!(summary.duration, "00:30:00");
        assert!(summary.penalty);
        assert_eq!(
            summary.lines(),
            vec![
                "You need to work for 00:30:00 more to complete the 8-hour work requirement",
                "Total break time: 00:00:00",
                "You have incurred a penalty for not being on time",
            ]
        );
    }

    #[test]
    fn test_lunch_break_is_subtracted() {
        let entry = WorkdayEntry::new("08:00:00", "17:00:00").with_break(BreakEntry::new("12:00:00", "12:30:00"));
        let summary = calculate(&entry).unwrap();

        assert_eq!(summary.total_break_seconds, 1800);
        assert_eq!(summary.total_break, "00:30:00");
        assert_eq!(summary.effective_work_seconds, 30600);
        assert_eq!(summary.remaining_seconds, -1800);
        assert_eq!(summary.balance, Balance::Surplus);
        assert_eq!(summary.duration, "00:30:00");
        assert_eq!(summary.workday.breaks.len(), 1);
    }

    #[test]
    fn test_logout_before_login_is_rejected() {
        let err = calculate(&WorkdayEntry::new("08:00:00", "07:00:00")).unwrap_err();
        assert_eq!(err, CalcError::InvalidOrdering);
        assert_eq!(err.to_string(), "Logout time must be after login time.");
    }

    #[test]
    fn test_exactly_eight_hours_counts_as_met() {
        let summary = calculate(&WorkdayEntry::new("09:00", "17:00")).unwrap();
        assert_eq!(summary.remaining_seconds, 0);
        assert_eq!(summary.balance, Balance::Surplus);
        assert_eq!(summary.duration, "00:00:00");
    }

    #[test]
    fn test_remaining_without_breaks_follows_formula() {
        let cases = [("06:00", "10:00"), ("07:45:10", "16:02:59"), ("00:00", "23:59:59"), ("08:00", "16:00:01")];
        for (login, logout) in cases {
            let summary = calculate(&WorkdayEntry::new(login, logout)).unwrap();
            let expected = REQUIRED_WORK_SECONDS - (seconds(logout) - seconds(login));
            assert_eq!(summary.remaining_seconds, expected, "{} - {}", login, logout);
            assert_eq!(summary.balance == Balance::Deficit, expected > 0);
        }
    }

    #[test]
    fn test_adding_break_increases_remaining_by_its_duration() {
        let base = WorkdayEntry::new("08:00", "18:00");
        let without = calculate(&base).unwrap();

        for (out, back) in [("10:00", "10:15"), ("12:00", "13:00"), ("08:00", "08:00:01"), ("17:30", "18:00")] {
            let with = calculate(&base.clone().with_break(BreakEntry::new(out, back))).unwrap();
            assert_eq!(with.remaining_seconds - without.remaining_seconds, seconds(back) - seconds(out));
        }
    }

    #[test]
    fn test_ordering_error_wins_over_break_errors() {
        let entry = WorkdayEntry::new("17:00", "17:00").with_break(BreakEntry::new("nonsense", "12:00"));
        assert_eq!(calculate(&entry).unwrap_err(), CalcError::InvalidOrdering);

        let entry = WorkdayEntry::new("18:00", "08:00").with_break(BreakEntry::new("12:00", "12:30"));
        assert_eq!(calculate(&entry).unwrap_err(), CalcError::InvalidOrdering);
    }

    #[test]
    fn test_break_outside_work_period_is_rejected() {
        let before_login = WorkdayEntry::new("08:00", "17:00").with_break(BreakEntry::new("07:59:59", "08:30"));
        assert_eq!(calculate(&before_login).unwrap_err(), CalcError::InvalidBreakOrdering { index: 0 });

        let after_logout = WorkdayEntry::new("08:00", "17:00").with_break(BreakEntry::new("16:30", "17:00:01"));
        assert_eq!(calculate(&after_logout).unwrap_err(), CalcError::InvalidBreakOrdering { index: 0 });
    }

    #[test]
    fn test_break_on_work_boundaries_is_accepted() {
        let entry = WorkdayEntry::new("08:00", "17:00")
            .with_break(BreakEntry::new("08:00", "08:30"))
            .with_break(BreakEntry::new("16:30", "17:00"));
        assert_eq!(calculate(&entry).unwrap().total_break_seconds, 3600);
    }

    #[test]
    fn test_empty_or_reversed_break_is_rejected() {
        let zero_length = WorkdayEntry::new("08:00", "17:00").with_break(BreakEntry::new("12:00", "12:00"));
        assert_eq!(calculate(&zero_length).unwrap_err().to_string(), "Invalid break times.");

        let reversed = WorkdayEntry::new("08:00", "17:00").with_break(BreakEntry::new("12:30", "12:00"));
        assert_eq!(calculate(&reversed).unwrap_err(), CalcError::InvalidBreakOrdering { index: 0 });
    }

    #[test]
    fn test_first_invalid_break_stops_validation() {
        let entry = WorkdayEntry::new("08:00", "17:00")
            .with_break(BreakEntry::new("10:00", "10:15"))
            .with_break(BreakEntry::new("xx:00", "12:30"))
            .with_break(BreakEntry::new("19:00", "20:00"));
        let err = calculate(&entry).unwrap_err();
        assert_eq!(err, CalcError::InvalidBreakFormat { index: 1 });
        assert_eq!(err.break_index(), Some(1));
        assert_eq!(err.to_string(), "Invalid break times.");
    }

    #[test]
    fn test_overlapping_breaks_are_summed_independently() {
        let entry = WorkdayEntry::new("08:00", "17:00")
            .with_break(BreakEntry::new("12:00", "13:00"))
            .with_break(BreakEntry::new("12:30", "13:30"));
        assert_eq!(calculate(&entry).unwrap().total_break_seconds, 7200);
    }

    #[test]
    fn test_missing_fields_are_reported_first() {
        let missing_logout = WorkdayEntry {
            login: Some("08:00".to_string()),
            ..Default::default()
        };
        assert_eq!(calculate(&missing_logout).unwrap_err(), CalcError::MissingRequiredField);

        let blank_login = WorkdayEntry::new("", "garbage");
        let err = calculate(&blank_login).unwrap_err();
        assert_eq!(err.to_string(), "Please enter login and logout times.");
    }

    #[test]
    fn test_unreadable_login_or_logout() {
        for (login, logout) in [("8", "17:00"), ("08:00", "17h00"), ("08:aa", "17:00"), ("08:00", "17:00:00:00")] {
            let err = calculate(&WorkdayEntry::new(login, logout)).unwrap_err();
            assert_eq!(err, CalcError::InvalidTimeFormat, "{} - {}", login, logout);
            assert_eq!(err.to_string(), "Invalid login or logout time format.");
        }
    }

    #[test]
    fn test_penalty_threshold_is_strict() {
        assert!(!calculate(&WorkdayEntry::new("09:15:00", "18:00")).unwrap().penalty);
        assert!(calculate(&WorkdayEntry::new("09:15:01", "18:00")).unwrap().penalty);
    }

    #[test]
    fn test_penalty_does_not_change_balance() {
        let summary = calculate(&WorkdayEntry::new("10:00", "19:00")).unwrap();
        assert!(summary.penalty);
        assert_eq!(summary.balance, Balance::Surplus);
        assert_eq!(summary.duration, "01:00:00");
        assert!(summary.message.ends_with("You have incurred a penalty for not being on time."));
    }

    #[test]
    fn test_custom_policy() {
        let policy = WorkPolicy {
            required_work_seconds: 7 * 3600 + 30 * 60,
            penalty_threshold: TimeOfDay::new(8, 0, 0),
        };
        let summary = calculate_with(&WorkdayEntry::new("08:30", "15:00"), &policy).unwrap();

        assert!(summary.penalty);
        assert_eq!(summary.balance, Balance::Deficit);
        assert_eq!(summary.duration, "01:00:00");
        assert!(summary
            .message
            .starts_with("You need to work for 01:00:00 more to complete the 07:30:00 work requirement."));
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let entry = WorkdayEntry::new("09:30", "17:00").with_break(BreakEntry::new("12:00", "12:15"));
        let summary = calculate(&entry).unwrap();
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["login"], "09:30:00");
        assert_eq!(value["logout"], "17:00:00");
        assert_eq!(value["breaks"][0]["break_out"], "12:00:00");
        assert_eq!(value["balance"], "deficit");
        assert_eq!(value["duration"], "00:45:00");
        assert_eq!(value["total_break"], "00:15:00");
        assert_eq!(value["penalty"], true);
    }
}
