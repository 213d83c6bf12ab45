use fiscal::Unit;

use crate::threeten::{sunday_nearest_august_445, Result};

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_plus)
#[test]
fn plus_days_and_weeks() -> Result {
    let cal = sunday_nearest_august_445();
    let date = cal.date(2011, 12, 35)?;
    assert_eq!(date.checked_add(0, Unit::Day)?, date);
    assert_eq!(date.checked_add(1, Unit::Day)?, cal.date(2012, 1, 1)?);
    assert_eq!(date.checked_add(35, Unit::Day)?, cal.date(2012, 2, 7)?);
    assert_eq!(date.checked_add(-34, Unit::Day)?, cal.date(2011, 12, 1)?);
    assert_eq!(date.checked_add(1, Unit::Week)?, cal.date(2012, 1, 7)?);
    assert_eq!(date.checked_add(-52, Unit::Week)?, cal.date(2010, 12, 35)?);
    Ok(())
}

#[test]
fn plus_months_clamps() -> Result {
    let cal = sunday_nearest_august_445();
    let date = cal.date(2011, 3, 35)?;
    assert_eq!(date.checked_add(1, Unit::Month)?, cal.date(2011, 4, 28)?);
    assert_eq!(date.checked_add(3, Unit::Month)?, cal.date(2011, 6, 35)?);
    assert_eq!(date.checked_add(10, Unit::Month)?, cal.date(2012, 1, 28)?);
    assert_eq!(date.checked_add(-4, Unit::Month)?, cal.date(2010, 11, 28)?);
    // A quarter is exactly three months.
    assert_eq!(
        date.checked_add(1, Unit::Quarter)?,
        date.checked_add(3, Unit::Month)?,
    );
    Ok(())
}

#[test]
fn plus_years_clamps_leap_week() -> Result {
    let cal = sunday_nearest_august_445();
    let date = cal.date(2012, 12, 42)?;
    assert_eq!(date.checked_add(1, Unit::Year)?, cal.date(2013, 12, 35)?);
    assert_eq!(date.checked_add(-1, Unit::Year)?, cal.date(2011, 12, 35)?);
    // 2006 was also a leap year, so the day survives intact.
    assert_eq!(date.checked_add(-6, Unit::Year)?, cal.date(2006, 12, 42)?);
    assert_eq!(
        date.checked_add(1, Unit::Decade)?,
        cal.date(2022, 12, 35)?,
    );
    assert_eq!(
        date.checked_add(1, Unit::Century)?,
        date.checked_add(100, Unit::Year)?,
    );
    Ok(())
}

/// Adding and subtracting the same amount of months is not always a
/// round trip: the clamp loses the days past the shorter month's end.
#[test]
fn plus_minus_months_truncates() -> Result {
    let cal = sunday_nearest_august_445();
    let date = cal.date(2011, 3, 35)?;
    let there_and_back = date
        .checked_add(1, Unit::Month)?
        .checked_sub(1, Unit::Month)?;
    assert_eq!(there_and_back, cal.date(2011, 3, 28)?);
    Ok(())
}

#[test]
fn add_out_of_range() -> Result {
    let cal = sunday_nearest_august_445();
    let date = cal.date(2011, 1, 1)?;
    assert!(date.checked_add(8000, Unit::Year).is_err());
    assert!(date.checked_add(-13_000, Unit::Year).is_err());
    assert!(date.checked_add(i64::MAX, Unit::Day).is_err());
    assert!(date.checked_add(i64::MIN, Unit::Day).is_err());
    assert!(date.checked_add(i64::MAX, Unit::Millennium).is_err());
    // The failed operation leaves the original untouched, and the
    // boundary itself is fine.
    assert_eq!(date.checked_add(7988, Unit::Year)?.year(), 9999);
    Ok(())
}
