use fiscal::Unit;

use crate::threeten::{
    sunday_nearest_august_445, wednesday_last_december_thirteen, Result,
};

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_until)
#[test]
fn whole_units() -> Result {
    let cal = sunday_nearest_august_445();
    let d1 = cal.date(2011, 12, 35)?;
    let d2 = cal.date(2012, 12, 42)?;
    assert_eq!(d1.until(&d2, Unit::Day)?, 371);
    assert_eq!(d1.until(&d2, Unit::Week)?, 53);
    assert_eq!(d1.until(&d2, Unit::Month)?, 12);
    assert_eq!(d1.until(&d2, Unit::Quarter)?, 4);
    assert_eq!(d1.until(&d2, Unit::Year)?, 1);
    assert_eq!(d1.until(&d2, Unit::Decade)?, 0);
    assert_eq!(d1.until(&d2, Unit::Era)?, 0);
    assert_eq!(d2.until(&d1, Unit::Day)?, -371);
    assert_eq!(d2.until(&d1, Unit::Year)?, -1);
    Ok(())
}

/// Whole-month counts respect clamping: landing on a clamped month end
/// still counts as a whole month, but one day less does not.
#[test]
fn months_with_clamping() -> Result {
    let cal = sunday_nearest_august_445();
    let d1 = cal.date(2011, 3, 35)?;
    assert_eq!(d1.until(&cal.date(2011, 4, 28)?, Unit::Month)?, 1);
    assert_eq!(d1.until(&cal.date(2011, 4, 27)?, Unit::Month)?, 0);
    assert_eq!(d1.until(&cal.date(2011, 5, 28)?, Unit::Month)?, 2);
    // And going backward.
    let d2 = cal.date(2011, 4, 28)?;
    assert_eq!(d2.until(&cal.date(2011, 3, 28)?, Unit::Month)?, -1);
    assert_eq!(d2.until(&cal.date(2011, 3, 29)?, Unit::Month)?, 0);
    Ok(())
}

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_periodUntil)
#[test]
fn period_decomposition() -> Result {
    let cal = sunday_nearest_august_445();
    let d1 = cal.date(2012, 1, 1)?;
    let d2 = cal.date(2012, 3, 5)?;
    let period = d1.until_period(&d2)?;
    assert_eq!(
        (period.years(), period.months(), period.days()),
        (0, 2, 4),
    );
    assert_eq!(d1.checked_add_period(&period)?, d2);

    // The leftover days are counted inside the destination month, so
    // they can exceed four weeks in the leap-week month.
    let d1 = cal.date(2011, 1, 1)?;
    let d2 = cal.date(2012, 12, 42)?;
    let period = d1.until_period(&d2)?;
    assert_eq!(
        (period.years(), period.months(), period.days()),
        (1, 11, 41),
    );
    assert_eq!(d1.checked_add_period(&period)?, d2);

    // Backward decomposition keeps all components non-positive.
    let period = d2.until_period(&d1)?;
    assert!(period.years() <= 0);
    assert!(period.months() <= 0);
    assert!(period.days() <= 0);
    assert_eq!(d2.checked_add_period(&period)?, d1);

    let zero = d1.until_period(&d1)?;
    assert!(zero.is_zero());
    Ok(())
}

#[test]
fn period_subtraction() -> Result {
    let cal = sunday_nearest_august_445();
    let date = cal.date(2012, 3, 5)?;
    let period = cal.period(0, 2, 4);
    assert_eq!(
        date.checked_sub_period(&period)?,
        cal.date(2012, 1, 1)?,
    );
    Ok(())
}

/// Mixing calendars fails loudly rather than converting implicitly.
#[test]
fn cross_calendar_mismatch() -> Result {
    let cal = sunday_nearest_august_445();
    let other = wednesday_last_december_thirteen();
    let d1 = cal.date(2012, 1, 1)?;
    let d2 = other.date(2012, 1, 1)?;
    assert!(d1.until(&d2, Unit::Day).unwrap_err().is_mismatch());
    assert!(d1.until_period(&d2).unwrap_err().is_mismatch());
    let period = other.period(1, 0, 0);
    assert!(d1.checked_add_period(&period).unwrap_err().is_mismatch());
    assert!(d1.checked_sub_period(&period).unwrap_err().is_mismatch());
    // The same configuration built twice is the same calendar.
    let rebuilt = sunday_nearest_august_445();
    assert_eq!(d1.until(&rebuilt.date(2012, 1, 2)?, Unit::Day)?, 1);
    Ok(())
}
