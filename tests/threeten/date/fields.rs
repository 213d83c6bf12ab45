use fiscal::{Era, Field, Weekday};

use crate::threeten::{
    sunday_nearest_august_445, wednesday_last_december_thirteen, Result,
};

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_lengthOfMonth)
#[test]
fn length_of_month() -> Result {
    let cal = sunday_nearest_august_445();
    // Common year: every quarter is 4+4+5 weeks.
    let common = [28, 28, 35, 28, 28, 35, 28, 28, 35, 28, 28, 35];
    for (i, &len) in common.iter().enumerate() {
        let month = (i + 1) as i8;
        assert_eq!(cal.days_in_month(2011, month)?, len, "month {month}");
        assert_eq!(cal.date(2011, month, 1)?.days_in_month(), len);
    }
    // Leap year: only the designated month grows.
    for month in 1..=11 {
        assert_eq!(
            cal.days_in_month(2012, month)?,
            common[(month - 1) as usize],
        );
    }
    assert_eq!(cal.days_in_month(2012, 12)?, 42);

    let cal = wednesday_last_december_thirteen();
    for month in 1..=12 {
        assert_eq!(cal.days_in_month(2014, month)?, 28);
    }
    assert_eq!(cal.days_in_month(2014, 13)?, 35);
    assert_eq!(cal.days_in_month(2013, 13)?, 28);
    Ok(())
}

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (test_isLeapYear / lengthOfYear)
#[test]
fn length_of_year() {
    let cal = sunday_nearest_august_445();
    for (year, leap) in [
        (2006, true),
        (2007, false),
        (2008, false),
        (2009, false),
        (2010, false),
        (2011, false),
        (2012, true),
        (2013, false),
    ] {
        assert_eq!(cal.is_leap_year(year), leap, "year {year}");
        assert_eq!(
            cal.days_in_year(year),
            if leap { 371 } else { 364 },
            "year {year}",
        );
    }
}

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_prolepticYear)
#[test]
fn era_and_proleptic_year() -> Result {
    let cal = sunday_nearest_august_445();
    for (era, year_of_era, year) in [
        (Era::CE, 2011, 2011),
        (Era::CE, 1, 1),
        (Era::BCE, 1, 0),
        (Era::BCE, 2, -1),
        (Era::BCE, 2012, -2011),
    ] {
        let date = cal.date_from_era(era, year_of_era, 1, 1)?;
        assert_eq!(date.year(), year);
        assert_eq!(date.era_year(), (era, year_of_era));
        assert_eq!(date, cal.date(year, 1, 1)?);
    }
    assert!(cal.date_from_era(Era::BCE, 0, 1, 1).is_err());
    assert!(cal.date_from_era(Era::CE, 0, 1, 1).is_err());
    Ok(())
}

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_getLong)
#[test]
fn get_fields_on_leap_week() -> Result {
    let cal = sunday_nearest_august_445();
    // The very last day of the 53-week year 2012.
    let date = cal.date(2012, 12, 42)?;
    assert_eq!(date.weekday(), Weekday::Sunday);
    assert_eq!(date.get(Field::DayOfWeek)?, 7);
    assert_eq!(date.get(Field::DayOfMonth)?, 42);
    assert_eq!(date.get(Field::DayOfYear)?, 371);
    assert_eq!(date.get(Field::AlignedDayOfWeekInMonth)?, 7);
    assert_eq!(date.get(Field::AlignedWeekOfMonth)?, 6);
    assert_eq!(date.get(Field::AlignedDayOfWeekInYear)?, 7);
    assert_eq!(date.get(Field::AlignedWeekOfYear)?, 53);
    assert_eq!(date.get(Field::MonthOfYear)?, 12);
    assert_eq!(date.get(Field::QuarterOfYear)?, 4);
    assert_eq!(date.get(Field::Year)?, 2012);
    assert_eq!(date.get(Field::Era)?, 1);
    Ok(())
}

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_range)
#[test]
fn field_ranges() -> Result {
    let cal = sunday_nearest_august_445();
    // Calendar-wide ranges carry both maxima.
    let range = cal.range(Field::DayOfYear)?;
    assert_eq!((range.min(), range.smallest_max()), (1, 364));
    assert_eq!(range.largest_max(), 371);
    let range = cal.range(Field::DayOfMonth)?;
    assert_eq!(range.smallest_max(), 28);
    assert_eq!(range.largest_max(), 42);
    // Date-level ranges are exact.
    assert_eq!(cal.date(2011, 12, 1)?.range(Field::DayOfMonth)?.largest_max(), 35);
    assert_eq!(cal.date(2012, 12, 1)?.range(Field::DayOfMonth)?.largest_max(), 42);
    assert_eq!(cal.date(2011, 1, 1)?.range(Field::DayOfYear)?.largest_max(), 364);
    assert_eq!(cal.date(2012, 1, 1)?.range(Field::DayOfYear)?.largest_max(), 371);
    assert_eq!(cal.date(2012, 1, 1)?.range(Field::AlignedWeekOfYear)?.largest_max(), 53);
    Ok(())
}

/// Quarter fields exist only for quartered divisions.
#[test]
fn quarters_only_where_meaningful() -> Result {
    let cal = sunday_nearest_august_445();
    assert_eq!(cal.date(2011, 1, 1)?.quarter()?, 1);
    assert_eq!(cal.date(2011, 6, 1)?.quarter()?, 2);
    assert_eq!(cal.date(2011, 12, 35)?.quarter()?, 4);

    let cal = wednesday_last_december_thirteen();
    let err = cal.date(2013, 7, 1)?.get(Field::QuarterOfYear).unwrap_err();
    assert!(err.is_unsupported());
    let err = cal.range(Field::QuarterOfYear).unwrap_err();
    assert!(err.is_unsupported());
    Ok(())
}

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_with)
#[test]
fn with_field() -> Result {
    let cal = sunday_nearest_august_445();
    let date = cal.date(2012, 12, 42)?;
    // Moving the last day of the long month into a common year clamps.
    assert_eq!(date.with(Field::Year, 2011)?, cal.date(2011, 12, 35)?);
    assert_eq!(date.with(Field::MonthOfYear, 11)?, cal.date(2012, 11, 28)?);
    // Setting a field to its current value is a no-op.
    assert_eq!(date.with(Field::DayOfMonth, 42)?, date);
    assert_eq!(date.with(Field::DayOfYear, 371)?, date);
    // Out-of-range values are rejected against the exact range.
    assert!(date.with(Field::DayOfMonth, 43).is_err());
    assert!(cal.date(2011, 12, 35)?.with(Field::DayOfYear, 371).is_err());
    // Day-of-week moves within the week.
    let date = cal.date(2011, 5, 17)?; // a Wednesday
    assert_eq!(date.with(Field::DayOfWeek, 1)?, cal.date(2011, 5, 15)?);
    assert_eq!(date.with(Field::DayOfWeek, 7)?, cal.date(2011, 5, 21)?);
    Ok(())
}
