use fiscal::{Calendar, Weekday, YearDivision};

use crate::threeten::Result;

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (test_chronology_of_name / badChronology)
#[test]
fn missing_settings() {
    let err = Calendar::builder().build().unwrap_err();
    assert!(err.is_configuration());

    let err = Calendar::builder()
        .ends_on(Weekday::Monday)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());

    let err = Calendar::builder()
        .ends_on(Weekday::Monday)
        .nearest_end_of(8)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());

    let err = Calendar::builder()
        .ends_on(Weekday::Monday)
        .nearest_end_of(8)
        .division(YearDivision::Quarters454)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn invalid_end_month() {
    for month in [0, 13, -1] {
        let err = Calendar::builder()
            .ends_on(Weekday::Monday)
            .nearest_end_of(month)
            .division(YearDivision::Quarters454)
            .leap_week_in_month(12)
            .build()
            .unwrap_err();
        assert!(err.is_configuration(), "for end month {month}");

        let err = Calendar::builder()
            .ends_on(Weekday::Monday)
            .in_last_week_of(month)
            .division(YearDivision::Quarters454)
            .leap_week_in_month(12)
            .build()
            .unwrap_err();
        assert!(err.is_configuration(), "for end month {month}");
    }
}

#[test]
fn leap_week_month_must_fit_division() {
    let err = Calendar::builder()
        .ends_on(Weekday::Monday)
        .nearest_end_of(8)
        .division(YearDivision::Quarters445)
        .leap_week_in_month(13)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());

    let err = Calendar::builder()
        .ends_on(Weekday::Monday)
        .nearest_end_of(8)
        .division(YearDivision::ThirteenEvenMonths)
        .leap_week_in_month(14)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());

    let err = Calendar::builder()
        .ends_on(Weekday::Monday)
        .nearest_end_of(8)
        .division(YearDivision::Quarters544)
        .leap_week_in_month(0)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn all_divisions_build() -> Result {
    for division in [
        YearDivision::Quarters445,
        YearDivision::Quarters454,
        YearDivision::Quarters544,
        YearDivision::ThirteenEvenMonths,
    ] {
        let cal = Calendar::builder()
            .ends_on(Weekday::Friday)
            .in_last_week_of(3)
            .division(division)
            .leap_week_in_month(1)
            .build()?;
        assert_eq!(cal.months_in_year(), division.months_in_year());
    }
    Ok(())
}

/// Setters replace earlier values instead of accumulating.
#[test]
fn later_settings_win() -> Result {
    let cal = Calendar::builder()
        .ends_on(Weekday::Monday)
        .ends_on(Weekday::Sunday)
        .in_last_week_of(3)
        .nearest_end_of(8)
        .division(YearDivision::Quarters445)
        .leap_week_in_month(12)
        .build()?;
    assert_eq!(cal.anchor_weekday(), Weekday::Sunday);
    assert_eq!(cal, crate::threeten::sunday_nearest_august_445());
    Ok(())
}
