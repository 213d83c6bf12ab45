use fiscal::IsoDate;

use crate::threeten::{
    sunday_nearest_august_445, wednesday_last_december_thirteen, Result,
};

/// Source: https://github.com/ThreeTen/threeten-extra/blob/master/src/test/java/org/threeten/extra/chrono/TestAccountingChronology.java
/// (data_samples)
#[test]
fn samples() -> Result {
    let cal = sunday_nearest_august_445();
    let samples: &[((i16, i8, i8), (i16, i8, i8))] = &[
        // Fiscal 2006 was a 53-week year ending 2006-09-03.
        ((2006, 1, 1), (2005, 8, 29)),
        ((2006, 12, 42), (2006, 9, 3)),
        // Fiscal 2011 was a common year: 2010-08-30 to 2011-08-28.
        ((2011, 1, 1), (2010, 8, 30)),
        ((2011, 1, 2), (2010, 8, 31)),
        ((2011, 2, 1), (2010, 9, 27)),
        ((2011, 3, 1), (2010, 10, 25)),
        ((2011, 4, 1), (2010, 11, 29)),
        ((2011, 12, 35), (2011, 8, 28)),
        // Fiscal 2012 was a 53-week year: 2011-08-29 to 2012-09-02.
        ((2012, 1, 1), (2011, 8, 29)),
        ((2012, 12, 1), (2012, 7, 23)),
        ((2012, 12, 42), (2012, 9, 2)),
        ((2013, 1, 1), (2012, 9, 3)),
    ];
    for &((fy, fm, fd), (iy, im, id)) in samples {
        let date = cal.date(fy, fm, fd)?;
        let iso = IsoDate::new(iy, im, id)?;
        assert_eq!(date.to_iso()?, iso, "fiscal {fy}-{fm}-{fd}");
        assert_eq!(
            cal.date_from_iso(iso)?,
            date,
            "iso {iy}-{im}-{id}",
        );
        assert_eq!(date.to_epoch_day(), iso.to_epoch_day());
        assert_eq!(cal.date_from_epoch_day(iso.to_epoch_day())?, date);
    }
    Ok(())
}

#[test]
fn thirteen_month_samples() -> Result {
    let cal = wednesday_last_december_thirteen();
    let samples: &[((i16, i8, i8), (i16, i8, i8))] = &[
        ((2013, 1, 1), (2012, 12, 27)),
        ((2014, 1, 1), (2013, 12, 26)),
        // 2014 is a leap year, so month 13 has five weeks and the year
        // runs all the way to the last Wednesday of December.
        ((2014, 13, 35), (2014, 12, 31)),
        ((2015, 1, 1), (2015, 1, 1)),
    ];
    for &((fy, fm, fd), (iy, im, id)) in samples {
        let date = cal.date(fy, fm, fd)?;
        let iso = IsoDate::new(iy, im, id)?;
        assert_eq!(date.to_iso()?, iso, "fiscal {fy}-{fm}-{fd}");
        assert_eq!(cal.date_from_iso(iso)?, date, "iso {iy}-{im}-{id}");
    }
    Ok(())
}

/// Every epoch day over a leap cycle converts to exactly one fiscal date
/// and back.
#[test]
fn epoch_day_roundtrip_window() -> Result {
    let cal = sunday_nearest_august_445();
    let start = cal.date(2006, 1, 1)?.to_epoch_day();
    let end = cal.date(2014, 1, 1)?.to_epoch_day();
    let mut prior = cal.date_from_epoch_day(start - 1)?;
    for epoch_day in start..=end {
        let date = cal.date_from_epoch_day(epoch_day)?;
        assert_eq!(date.to_epoch_day(), epoch_day);
        // Consecutive epoch days produce strictly increasing dates.
        assert!(prior < date, "{prior:?} not before {date:?}");
        prior = date;
    }
    Ok(())
}

/// The first day of every year follows the last day of the prior year.
#[test]
fn year_boundaries_are_adjacent() -> Result {
    for cal in
        [sunday_nearest_august_445(), wednesday_last_december_thirteen()]
    {
        for year in 1995..=2030 {
            let last = cal.date(year, 1, 1)?.last_of_year();
            let first = cal.date(year + 1, 1, 1)?;
            assert_eq!(
                last.to_epoch_day() + 1,
                first.to_epoch_day(),
                "between {year} and {} of {cal:?}",
                year + 1,
            );
        }
    }
    Ok(())
}
