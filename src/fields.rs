use crate::error::Error;

/// The era of a fiscal year.
///
/// Every calendar in this crate is proleptic: years extend indefinitely
/// (well, to `-9999`) before year 1, with year `0` and negative years
/// being perfectly valid. The era is a derived view of the year, not
/// extra state: `CE` is exactly the years `>= 1`, and `BCE` is everything
/// else, counted backwards so that year `0` is `1 BCE`, year `-1` is
/// `2 BCE` and so on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Era {
    /// The "before common era" era, for proleptic years less than 1.
    BCE,
    /// The "common era" era, for years greater than or equal to 1.
    CE,
}

impl Era {
    /// Returns the numeric value of this era, `0` for `BCE` and `1` for
    /// `CE`. This is the value reported by [`Field::Era`].
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Era::BCE => 0,
            Era::CE => 1,
        }
    }
}

/// A field of a fiscal calendar date.
///
/// Fields are the unit-less "coordinates" of a date: each one can be read
/// with [`Date::get`](crate::Date::get), written with
/// [`Date::with`](crate::Date::with) and interrogated for its valid range
/// with [`Date::range`](crate::Date::range) (or
/// [`Calendar::range`](crate::Calendar::range) for the range across all
/// dates of a calendar).
///
/// This is a closed set. Every field below is supported by every
/// calendar, with one exception: [`Field::QuarterOfYear`] is rejected by
/// calendars whose division is
/// [`YearDivision::ThirteenEvenMonths`](crate::YearDivision::ThirteenEvenMonths),
/// since thirteen months do not group into quarters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    /// The day of the week, using ISO 8601 numbering: Monday is `1` and
    /// Sunday is `7`.
    ///
    /// Note that unlike in the Gregorian calendar, the day of the week is
    /// rigidly aligned to the fiscal year: day 1 of every year falls on
    /// the weekday after the calendar's anchor weekday.
    DayOfWeek,
    /// The day of the week counted within the current 7-day slice of the
    /// month, in `1..=7`. Since fiscal months are whole numbers of weeks,
    /// this is `((day_of_month - 1) % 7) + 1`.
    AlignedDayOfWeekInMonth,
    /// The day of the week counted within the current 7-day slice of the
    /// year, in `1..=7`.
    AlignedDayOfWeekInYear,
    /// The week of the month, in `1..=4`, `1..=5` or `1..=6` depending on
    /// the month's length.
    AlignedWeekOfMonth,
    /// The week of the year, in `1..=52` (or `1..=53` in leap years).
    AlignedWeekOfYear,
    /// The day of the month, starting at `1`.
    DayOfMonth,
    /// The day of the year, starting at `1`.
    DayOfYear,
    /// The month of the year, in `1..=12` (or `1..=13` for thirteen-month
    /// calendars).
    MonthOfYear,
    /// The quarter of the year, in `1..=4`. Only supported by quartered
    /// divisions.
    QuarterOfYear,
    /// Months elapsed since month 1 of year 0, allowing month arithmetic
    /// to cross year boundaries without special cases. Month `m` of year
    /// `y` has proleptic month `y * months_in_year + (m - 1)`.
    ProlepticMonth,
    /// The proleptic year, in `-9999..=9999`.
    Year,
    /// The year within its era, starting at `1`. For `CE` this is the
    /// year itself; for `BCE` it is `1 - year`.
    YearOfEra,
    /// The era, `0` for BCE and `1` for CE. See [`Era`].
    Era,
    /// Days since the epoch 1970-01-01 (ISO), possibly negative. This is
    /// the interop field: it means the same thing in every calendar.
    EpochDay,
}

impl Field {
    /// Returns a short human readable name for this field.
    pub fn name(self) -> &'static str {
        use self::Field::*;

        match self {
            DayOfWeek => "day-of-week",
            AlignedDayOfWeekInMonth => "aligned-day-of-week-in-month",
            AlignedDayOfWeekInYear => "aligned-day-of-week-in-year",
            AlignedWeekOfMonth => "aligned-week-of-month",
            AlignedWeekOfYear => "aligned-week-of-year",
            DayOfMonth => "day-of-month",
            DayOfYear => "day-of-year",
            MonthOfYear => "month-of-year",
            QuarterOfYear => "quarter-of-year",
            ProlepticMonth => "proleptic-month",
            Year => "year",
            YearOfEra => "year-of-era",
            Era => "era",
            EpochDay => "epoch-day",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit of elapsed fiscal time, from days up to eras.
///
/// The variants are ordered by size, so `Unit::Day < Unit::Week` and so
/// on. Every unit is a whole number of days for any particular pair of
/// dates, which is what makes [`Date::until`](crate::Date::until)
/// well-defined for all of them.
///
/// [`Unit::Quarter`] is only supported by quartered divisions, mirroring
/// [`Field::QuarterOfYear`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    /// A single day.
    Day = 0,
    /// Seven days.
    Week = 1,
    /// A fiscal month: 4 or 5 weeks depending on the division pattern,
    /// plus the leap week in a leap year's designated month.
    Month = 2,
    /// A fiscal quarter: 3 months, i.e. 13 weeks (14 with a leap week).
    Quarter = 3,
    /// A fiscal year: 52 weeks, or 53 in a leap year.
    Year = 4,
    /// Ten fiscal years.
    Decade = 5,
    /// One hundred fiscal years.
    Century = 6,
    /// One thousand fiscal years.
    Millennium = 7,
    /// An era transition. There are only two eras, so only `-1`, `0` and
    /// `1` of these can ever be added to a date.
    Era = 8,
}

impl Unit {
    /// Returns the singular name of this unit, e.g. `"month"`.
    pub fn singular(&self) -> &'static str {
        use self::Unit::*;

        match *self {
            Day => "day",
            Week => "week",
            Month => "month",
            Quarter => "quarter",
            Year => "year",
            Decade => "decade",
            Century => "century",
            Millennium => "millennium",
            Era => "era",
        }
    }

    /// Returns the plural name of this unit, e.g. `"months"`.
    pub fn plural(&self) -> &'static str {
        use self::Unit::*;

        match *self {
            Day => "days",
            Week => "weeks",
            Month => "months",
            Quarter => "quarters",
            Year => "years",
            Decade => "decades",
            Century => "centuries",
            Millennium => "millennia",
            Era => "eras",
        }
    }
}

/// The envelope of valid values for a [`Field`].
///
/// Some fields have ranges that depend on context. Day-of-year runs to
/// 364 in a common year but 371 in a leap year, so the calendar-wide
/// answer to "what can day-of-year be" has two maxima: the largest value
/// that is valid in *some* year (the largest maximum) and the largest
/// value valid in *every* year (the smallest maximum). A range obtained
/// from a concrete date ([`Date::range`](crate::Date::range)) is always
/// exact, with the two maxima equal.
///
/// # Example
///
/// ```
/// use fiscal::{Calendar, Field, Weekday, YearDivision};
///
/// let cal = Calendar::builder()
///     .ends_on(Weekday::Sunday)
///     .nearest_end_of(8)
///     .division(YearDivision::Quarters445)
///     .leap_week_in_month(12)
///     .build()?;
/// let range = cal.range(Field::DayOfYear)?;
/// assert_eq!(range.min(), 1);
/// assert_eq!(range.smallest_max(), 364);
/// assert_eq!(range.largest_max(), 371);
/// assert!(!range.is_fixed());
///
/// # Ok::<(), fiscal::Error>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ValueRange {
    min: i64,
    smallest_max: i64,
    largest_max: i64,
}

impl ValueRange {
    /// Creates a range whose maximum is the same in every context.
    #[inline]
    pub(crate) fn fixed(
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> ValueRange {
        let (min, max) = (min.into(), max.into());
        ValueRange { min, smallest_max: max, largest_max: max }
    }

    /// Creates a range whose maximum varies with context.
    #[inline]
    pub(crate) fn variable(
        min: impl Into<i64>,
        smallest_max: impl Into<i64>,
        largest_max: impl Into<i64>,
    ) -> ValueRange {
        ValueRange {
            min: min.into(),
            smallest_max: smallest_max.into(),
            largest_max: largest_max.into(),
        }
    }

    /// Returns the minimum valid value.
    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Returns the largest value that is valid in every context.
    #[inline]
    pub fn smallest_max(&self) -> i64 {
        self.smallest_max
    }

    /// Returns the largest value that is valid in at least one context.
    #[inline]
    pub fn largest_max(&self) -> i64 {
        self.largest_max
    }

    /// Returns true when this range's maximum does not depend on context.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.smallest_max == self.largest_max
    }

    /// Returns true when the given value is possibly valid, i.e. within
    /// `min..=largest_max`.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.largest_max
    }

    /// Range-checks `value`, labeling the error with `what`.
    ///
    /// Callers validating a concrete value must pass an exact (fixed)
    /// range, since this accepts anything up to the largest maximum.
    #[inline]
    pub(crate) fn check(
        &self,
        what: &'static str,
        value: i64,
    ) -> Result<(), Error> {
        if !self.contains(value) {
            return Err(Error::range(what, value, self.min, self.largest_max));
        }
        Ok(())
    }
}

impl core::fmt::Debug for ValueRange {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_fixed() {
            write!(f, "{}..={}", self.min, self.largest_max)
        } else {
            write!(
                f,
                "{}..={}/{}",
                self.min, self.smallest_max, self.largest_max,
            )
        }
    }
}
