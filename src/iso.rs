/*!
Proleptic Gregorian (ISO 8601) calendar arithmetic.

This module is the shared arithmetic substrate for every calendar in this
crate: a fiscal calendar anchors its year ends near Gregorian month ends,
and all cross-calendar interop goes through the epoch day defined here.

Epoch day `0` is 1970-01-01. Conversions between epoch days and Gregorian
dates are `O(1)` via Euclidean affine functions.

Algorithms are taken from
Neri C, Schneider L. "Euclidean affine functions and their application to
calendar algorithms":
- <https://github.com/cassioneri/eaf/>
- <http://howardhinnant.github.io/date_algorithms.html>
*/

use crate::{error::Error, weekday::Weekday};

/// The minimum supported Gregorian year.
pub(crate) const YEAR_MIN: i16 = -9999;

/// The maximum supported Gregorian year.
pub(crate) const YEAR_MAX: i16 = 9999;

/// Days in a full 400-year Gregorian cycle.
pub(crate) const DAYS_IN_CYCLE: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01 in the shifted-epoch form used by
/// the conversion routines below.
const DAYS_FROM_0000_01_01_TO_1970_01_01: i64 = 719_468;

/// A representation of a civil date in the proleptic Gregorian calendar.
///
/// Within this crate, an `IsoDate` is the "universal" date: every calendar
/// projects to and from the same epoch day, and `IsoDate` is that epoch
/// day's human readable form. A [`Date`](crate::Date) in any fiscal
/// calendar converts to an `IsoDate` losslessly via
/// [`Date::to_iso`](crate::Date::to_iso), and back via
/// [`Calendar::date_from_iso`](crate::Calendar::date_from_iso).
///
/// Every `IsoDate` value is guaranteed to be a valid Gregorian calendar
/// date with a year in the range `-9999..=9999`. Years may be zero or
/// negative; there is no era discontinuity.
///
/// # Example
///
/// ```
/// use fiscal::IsoDate;
///
/// let d = IsoDate::new(1970, 1, 1)?;
/// assert_eq!(d.to_epoch_day(), 0);
/// let d = IsoDate::new(1969, 12, 31)?;
/// assert_eq!(d.to_epoch_day(), -1);
///
/// # Ok::<(), fiscal::Error>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct IsoDate {
    year: i16,
    month: i8,
    day: i8,
}

impl IsoDate {
    /// The minimum representable Gregorian date.
    pub const MIN: IsoDate = IsoDate::constant(-9999, 1, 1);

    /// The maximum representable Gregorian date.
    pub const MAX: IsoDate = IsoDate::constant(9999, 12, 31);

    /// Creates a new `IsoDate` value from its component year, month and
    /// day values.
    ///
    /// # Errors
    ///
    /// This returns an error when the given year-month-day does not
    /// correspond to a valid date. Namely, all of the following must be
    /// true:
    ///
    /// * The year must be in the range `-9999..=9999`.
    /// * The month must be in the range `1..=12`.
    /// * The day must be at least `1` and must be at most the number of
    /// days in the corresponding month. So for example, `2024-02-29` is
    /// valid but `2023-02-29` is not.
    #[inline]
    pub fn new(year: i16, month: i8, day: i8) -> Result<IsoDate, Error> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(Error::range("year", year, YEAR_MIN, YEAR_MAX));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::range("month", month, 1, 12));
        }
        let max_day = days_in_month(i32::from(year), month);
        if !(1..=max_day).contains(&day) {
            return Err(Error::range("day", day, 1, max_day));
        }
        Ok(IsoDate { year, month, day })
    }

    /// Creates a new `IsoDate` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This routine panics when [`IsoDate::new`] would return an error.
    #[inline]
    pub const fn constant(year: i16, month: i8, day: i8) -> IsoDate {
        if year < YEAR_MIN || year > YEAR_MAX {
            panic!("invalid year");
        }
        if month < 1 || month > 12 {
            panic!("invalid month");
        }
        if day < 1 || day > days_in_month(year as i32, month) {
            panic!("invalid day");
        }
        IsoDate { year, month, day }
    }

    /// Returns the year for this date, in the range `-9999..=9999`.
    #[inline]
    pub fn year(self) -> i16 {
        self.year
    }

    /// Returns the month for this date, in the range `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day for this date, in the range `1..=31`.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the weekday corresponding to this date.
    #[inline]
    pub fn weekday(self) -> Weekday {
        weekday_from_epoch_day(self.to_epoch_day())
    }

    /// Returns true if and only if this date's year is a Gregorian leap
    /// year.
    #[inline]
    pub fn in_leap_year(self) -> bool {
        is_leap_year(i32::from(self.year))
    }

    /// Returns the number of days in this date's month, taking leap years
    /// into account.
    #[inline]
    pub fn days_in_month(self) -> i8 {
        days_in_month(i32::from(self.year), self.month)
    }

    /// Returns the number of days since the Unix epoch (1970-01-01) for
    /// this date. Dates before the epoch produce negative values.
    #[inline]
    pub fn to_epoch_day(self) -> i64 {
        epoch_day_from_gregorian(i32::from(self.year), self.month, self.day)
    }

    /// Converts a number of days since the Unix epoch (1970-01-01) to a
    /// Gregorian date.
    ///
    /// # Errors
    ///
    /// This returns an error when the given epoch day falls outside
    /// `IsoDate::MIN..=IsoDate::MAX`.
    #[inline]
    pub fn from_epoch_day(days: i64) -> Result<IsoDate, Error> {
        const MIN: i64 = epoch_day_from_gregorian(-9999, 1, 1);
        const MAX: i64 = epoch_day_from_gregorian(9999, 12, 31);
        if !(MIN..=MAX).contains(&days) {
            return Err(Error::range("epoch day", days, MIN, MAX));
        }
        let (year, month, day) = gregorian_from_epoch_day(days);
        Ok(IsoDate { year: year as i16, month, day })
    }
}

impl core::fmt::Debug for IsoDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Returns true if and only if the given year is a Gregorian leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Returns the number of days in the given Gregorian year and month.
///
/// This correctly returns `29` when the year is a leap year and the month
/// is February.
#[inline]
pub(crate) const fn days_in_month(year: i32, month: i8) -> i8 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Returns the number of days since the Unix epoch for the given
/// Gregorian date.
///
/// The inputs are not range checked. This is pure integer arithmetic and
/// remains exact for any year a fiscal calendar can ask about, including
/// the years just past the supported boundary that year-end resolution
/// needs to look at.
#[inline]
pub(crate) const fn epoch_day_from_gregorian(
    year: i32,
    month: i8,
    day: i8,
) -> i64 {
    let year = (year as i64) - if month <= 2 { 1 } else { 0 };
    let month = month as i64;
    let day = day as i64;

    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
        + day_of_year;
    era * DAYS_IN_CYCLE + day_of_era - DAYS_FROM_0000_01_01_TO_1970_01_01
}

/// Returns the Gregorian date for the given number of days since the Unix
/// epoch. The inverse of `epoch_day_from_gregorian`.
#[inline]
pub(crate) const fn gregorian_from_epoch_day(days: i64) -> (i32, i8, i8) {
    let days = days + DAYS_FROM_0000_01_01_TO_1970_01_01;
    let era = days.div_euclid(DAYS_IN_CYCLE);
    let day_of_era = days.rem_euclid(DAYS_IN_CYCLE);
    let year_of_era = (day_of_era - day_of_era / 1_460
        + day_of_era / 36_524
        - day_of_era / (DAYS_IN_CYCLE - 1))
        / 365;
    let year = year_of_era + era * 400;
    let day_of_year = day_of_era
        - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month + 2) / 5 + 1) as i8;
    let month = (if month < 10 { month + 3 } else { month - 9 }) as i8;
    let year = if month <= 2 { year + 1 } else { year };
    (year as i32, month, day)
}

/// Returns the weekday for the given number of days since the Unix epoch.
///
/// This works by using the knowledge that 1970-01-01 was a Thursday.
#[inline]
pub(crate) fn weekday_from_epoch_day(days: i64) -> Weekday {
    Weekday::from_monday_zero_offset_unchecked(
        ((days + 3).rem_euclid(7)) as i8,
    )
}
