use alloc::sync::Arc;

use crate::{
    date::Date,
    division::YearDivision,
    error::{ConfigurationError, Error},
    fields::{Era, Field, ValueRange},
    iso::{self, IsoDate},
    period::Period,
    weekday::Weekday,
};

/// A builder for configuring a fiscal [`Calendar`].
///
/// A calendar needs four pieces of configuration, all mandatory:
///
/// 1. The anchor weekday every fiscal year ends on, via
/// [`CalendarBuilder::ends_on`].
/// 2. The year-end rule tying year ends to a Gregorian month, via either
/// [`CalendarBuilder::in_last_week_of`] or
/// [`CalendarBuilder::nearest_end_of`].
/// 3. The [`YearDivision`] pattern, via [`CalendarBuilder::division`].
/// 4. The month that receives the leap week in 53-week years, via
/// [`CalendarBuilder::leap_week_in_month`].
///
/// Nothing is validated until [`CalendarBuilder::build`] is called, and a
/// built [`Calendar`] can never be in an invalid state.
///
/// # Example
///
/// A retailer's calendar whose years end on the Saturday nearest to the
/// end of January, with 4-5-4 quarters:
///
/// ```
/// use fiscal::{Calendar, Weekday, YearDivision};
///
/// let cal = Calendar::builder()
///     .ends_on(Weekday::Saturday)
///     .nearest_end_of(1)
///     .division(YearDivision::Quarters454)
///     .leap_week_in_month(12)
///     .build()?;
/// assert_eq!(cal.months_in_year(), 12);
///
/// # Ok::<(), fiscal::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalendarBuilder {
    anchor: Option<Weekday>,
    rule: Option<YearEndRule>,
    division: Option<YearDivision>,
    leap_week_month: Option<i8>,
}

impl CalendarBuilder {
    /// Creates a builder with nothing configured.
    #[inline]
    pub fn new() -> CalendarBuilder {
        CalendarBuilder::default()
    }

    /// Sets the weekday every fiscal year ends on.
    #[inline]
    pub fn ends_on(self, weekday: Weekday) -> CalendarBuilder {
        CalendarBuilder { anchor: Some(weekday), ..self }
    }

    /// Sets the year-end rule to "the last occurrence of the anchor
    /// weekday within the given Gregorian month".
    ///
    /// `month` is a Gregorian month number in `1..=12`, validated at
    /// [`CalendarBuilder::build`] time. Fiscal year `y` then ends in
    /// Gregorian year `y`, never later than the month's last day.
    ///
    /// This replaces any previously set year-end rule.
    #[inline]
    pub fn in_last_week_of(self, month: i8) -> CalendarBuilder {
        CalendarBuilder { rule: Some(YearEndRule::LastInMonth(month)), ..self }
    }

    /// Sets the year-end rule to "the occurrence of the anchor weekday
    /// nearest to the given Gregorian month's last day".
    ///
    /// `month` is a Gregorian month number in `1..=12`, validated at
    /// [`CalendarBuilder::build`] time. The chosen day may fall up to
    /// three days *into the following month*: the nearest anchor weekday
    /// is always within three days of the month boundary on one side or
    /// the other.
    ///
    /// This replaces any previously set year-end rule.
    #[inline]
    pub fn nearest_end_of(self, month: i8) -> CalendarBuilder {
        CalendarBuilder { rule: Some(YearEndRule::NearestEndOf(month)), ..self }
    }

    /// Sets the year-division pattern.
    #[inline]
    pub fn division(self, division: YearDivision) -> CalendarBuilder {
        CalendarBuilder { division: Some(division), ..self }
    }

    /// Sets the month that grows by one week in 53-week years.
    ///
    /// `month` is a month of *this* calendar, in
    /// `1..=division.months_in_year()`, validated at
    /// [`CalendarBuilder::build`] time.
    #[inline]
    pub fn leap_week_in_month(self, month: i8) -> CalendarBuilder {
        CalendarBuilder { leap_week_month: Some(month), ..self }
    }

    /// Validates this configuration and builds a [`Calendar`] from it.
    ///
    /// # Errors
    ///
    /// This returns an error (for which
    /// [`Error::is_configuration`](crate::Error::is_configuration) is
    /// true) when any of the four settings is missing, when the year-end
    /// month is not a Gregorian month in `1..=12`, or when the leap-week
    /// month is not a month of the configured division.
    pub fn build(&self) -> Result<Calendar, Error> {
        let Some(anchor) = self.anchor else {
            return Err(Error::configuration(
                ConfigurationError::MissingAnchorWeekday,
            ));
        };
        let Some(rule) = self.rule else {
            return Err(Error::configuration(ConfigurationError::MissingYearEnd));
        };
        let end_month = rule.month();
        if !(1..=12).contains(&end_month) {
            return Err(Error::configuration(
                ConfigurationError::EndMonthOutOfRange {
                    given: i64::from(end_month),
                },
            ));
        }
        let Some(division) = self.division else {
            return Err(Error::configuration(
                ConfigurationError::MissingDivision,
            ));
        };
        let Some(leap_week_month) = self.leap_week_month else {
            return Err(Error::configuration(
                ConfigurationError::MissingLeapWeekMonth,
            ));
        };
        let months_in_year = division.months_in_year();
        if !(1..=months_in_year).contains(&leap_week_month) {
            return Err(Error::configuration(
                ConfigurationError::LeapWeekMonthOutOfRange {
                    given: i64::from(leap_week_month),
                    months_in_year,
                },
            ));
        }

        let year_zero_end = resolve_year_end(anchor, rule, 0);
        let min_epoch_day =
            resolve_year_end(anchor, rule, i32::from(iso::YEAR_MIN) - 1) + 1;
        let max_epoch_day =
            resolve_year_end(anchor, rule, i32::from(iso::YEAR_MAX));
        debug!(
            "built fiscal calendar: ends on {anchor:?} ({rule:?}), \
             division {division}, leap week in month {leap_week_month}, \
             year-0 end at epoch day {year_zero_end}",
        );
        Ok(Calendar {
            inner: Arc::new(Inner {
                anchor,
                rule,
                division,
                leap_week_month,
                year_zero_end,
                min_epoch_day,
                max_epoch_day,
            }),
        })
    }
}

/// How a year end is tied to a Gregorian month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum YearEndRule {
    /// The last anchor weekday falling inside the month.
    LastInMonth(i8),
    /// The anchor weekday nearest to the month's last day.
    NearestEndOf(i8),
}

impl YearEndRule {
    fn month(self) -> i8 {
        match self {
            YearEndRule::LastInMonth(month) => month,
            YearEndRule::NearestEndOf(month) => month,
        }
    }
}

/// Resolves the end of fiscal year `year` (a day of Gregorian year `year`,
/// or just past it) to an epoch day.
///
/// Both rules reduce to "the anchor weekday on or before a target day":
/// the month's last day for the last-in-month rule, and day 3 of the
/// following month for the nearest rule. The nearest anchor weekday to a
/// month end is at most 3 days after it, so widening the window by three
/// days is exactly the nearest-day tie broken toward the future.
fn resolve_year_end(anchor: Weekday, rule: YearEndRule, year: i32) -> i64 {
    let target = match rule {
        YearEndRule::LastInMonth(month) => iso::epoch_day_from_gregorian(
            year,
            month,
            iso::days_in_month(year, month),
        ),
        YearEndRule::NearestEndOf(month) => {
            let (year, month) =
                if month == 12 { (year + 1, 1) } else { (year, month + 1) };
            iso::epoch_day_from_gregorian(year, month, 3)
        }
    };
    target - i64::from(iso::weekday_from_epoch_day(target).since(anchor))
}

/// A fiscal (52/53-week) calendar.
///
/// A `Calendar` is an immutable, cheaply cloneable handle: cloning one is
/// a reference count bump, and every [`Date`] holds one. Build a calendar
/// with [`Calendar::builder`].
///
/// # Structure
///
/// A fiscal year is a whole number of weeks, 52 in common years and 53 in
/// leap years, ending on a fixed weekday near the end of a fixed Gregorian
/// month. Months are whole numbers of weeks too, laid out by a
/// [`YearDivision`]; in a leap year one configured month absorbs the
/// extra week. Because nothing is ever split mid-week, every derived
/// field (week-of-year, day-of-week alignment, quarter boundaries) is
/// exact in every year.
///
/// The calendar is proleptic over fiscal years `-9999..=9999`. Year `0`
/// and negative years are valid; [`Era`] is a derived view.
///
/// # Example
///
/// The classic accounting setup: years end on the Sunday nearest to the
/// end of August, 4-4-5 quarters, leap week in the last month.
///
/// ```
/// use fiscal::{Calendar, IsoDate, Weekday, YearDivision};
///
/// let cal = Calendar::builder()
///     .ends_on(Weekday::Sunday)
///     .nearest_end_of(8)
///     .division(YearDivision::Quarters445)
///     .leap_week_in_month(12)
///     .build()?;
///
/// // Fiscal 2011 runs from 2010-08-30 to 2011-08-28 and has 52 weeks.
/// let first = cal.date(2011, 1, 1)?;
/// assert_eq!(first.to_iso()?, IsoDate::new(2010, 8, 30)?);
/// assert!(!cal.is_leap_year(2011));
///
/// // Fiscal 2012 gets a 53rd week, ending 2012-09-02.
/// assert!(cal.is_leap_year(2012));
/// assert_eq!(cal.days_in_year(2012), 371);
///
/// # Ok::<(), fiscal::Error>(())
/// ```
#[derive(Clone)]
pub struct Calendar {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    anchor: Weekday,
    rule: YearEndRule,
    division: YearDivision,
    leap_week_month: i8,
    /// The epoch day of the last day of fiscal year 0, cached because
    /// `previous_leap_years` and the epoch-day factory lean on it.
    year_zero_end: i64,
    /// The epoch day of the first day of the minimum supported year.
    min_epoch_day: i64,
    /// The epoch day of the last day of the maximum supported year.
    max_epoch_day: i64,
}

impl Calendar {
    /// Returns a new builder with nothing configured.
    #[inline]
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::new()
    }

    /// Returns the weekday every year of this calendar ends on.
    #[inline]
    pub fn anchor_weekday(&self) -> Weekday {
        self.inner.anchor
    }

    /// Returns this calendar's year-division pattern.
    #[inline]
    pub fn division(&self) -> YearDivision {
        self.inner.division
    }

    /// Returns the month that grows by one week in leap years.
    #[inline]
    pub fn leap_week_month(&self) -> i8 {
        self.inner.leap_week_month
    }

    /// Returns the number of months in every year of this calendar.
    #[inline]
    pub fn months_in_year(&self) -> i8 {
        self.inner.division.months_in_year()
    }

    /// Returns true when the given fiscal year has 53 weeks instead
    /// of 52.
    ///
    /// Leap years are not periodic: they fall whenever the gap between
    /// two consecutive year ends stretches to 371 days, which depends on
    /// how the anchor weekday drifts against the Gregorian month ends.
    /// Roughly one year in 5.6 is a leap year.
    #[inline]
    pub fn is_leap_year(&self, year: i16) -> bool {
        self.is_leap(i32::from(year))
    }

    /// Returns the number of leap years between year 1 and the given
    /// year, exclusive of the year itself.
    ///
    /// For years before 1 the count is negative: it counts the leap years
    /// in `year..=0` with a minus sign, so that the difference
    /// `previous_leap_years(b) - previous_leap_years(a)` is the number of
    /// leap years in `a..b` for any two years.
    #[inline]
    pub fn previous_leap_years(&self, year: i16) -> i32 {
        let prior_end = self.year_end_epoch(i32::from(year) - 1);
        let weeks = prior_end
            - self.inner.year_zero_end
            - 364 * (i64::from(year) - 1);
        // Always a whole number of leap weeks.
        debug_assert_eq!(weeks % 7, 0);
        (weeks / 7) as i32
    }

    /// Returns the number of days in the given fiscal year: 364, or 371
    /// in a leap year.
    #[inline]
    pub fn days_in_year(&self, year: i16) -> i16 {
        if self.is_leap_year(year) {
            371
        } else {
            364
        }
    }

    /// Returns the number of days in the given month of the given year.
    ///
    /// # Errors
    ///
    /// This returns an error when the given month is not in the range
    /// `1..=self.months_in_year()`.
    #[inline]
    pub fn days_in_month(&self, year: i16, month: i8) -> Result<i8, Error> {
        self.inner.division.weeks_in_month(month)?;
        Ok(self.days_in_month_of(self.is_leap_year(year), month))
    }

    /// Returns the envelope of values the given field can take across all
    /// dates of this calendar.
    ///
    /// Fields whose maximum depends on the year or month come back as
    /// non-fixed ranges; see [`ValueRange`]. For the exact range at a
    /// specific date, use [`Date::range`].
    ///
    /// # Errors
    ///
    /// This returns an error when the field is
    /// [`Field::QuarterOfYear`] and this calendar's division is
    /// [`YearDivision::ThirteenEvenMonths`].
    pub fn range(&self, field: Field) -> Result<ValueRange, Error> {
        let division = self.inner.division;
        let months = i64::from(division.months_in_year());
        let range = match field {
            Field::DayOfWeek
            | Field::AlignedDayOfWeekInMonth
            | Field::AlignedDayOfWeekInYear => ValueRange::fixed(1, 7),
            Field::AlignedWeekOfMonth => {
                ValueRange::variable(1, 4, self.longest_month_weeks())
            }
            Field::AlignedWeekOfYear => ValueRange::variable(1, 52, 53),
            Field::DayOfMonth => {
                ValueRange::variable(1, 28, 7 * self.longest_month_weeks())
            }
            Field::DayOfYear => ValueRange::variable(1, 364, 371),
            Field::MonthOfYear => ValueRange::fixed(1, months),
            Field::QuarterOfYear => {
                if !division.supports_quarters() {
                    return Err(Error::unsupported_field(field, division));
                }
                ValueRange::fixed(1, 4)
            }
            Field::ProlepticMonth => ValueRange::fixed(
                i64::from(iso::YEAR_MIN) * months,
                i64::from(iso::YEAR_MAX) * months + (months - 1),
            ),
            Field::Year => {
                ValueRange::fixed(iso::YEAR_MIN, iso::YEAR_MAX)
            }
            Field::YearOfEra => ValueRange::variable(
                1,
                i64::from(iso::YEAR_MAX),
                1 - i64::from(iso::YEAR_MIN),
            ),
            Field::Era => ValueRange::fixed(0, 1),
            Field::EpochDay => ValueRange::fixed(
                self.inner.min_epoch_day,
                self.inner.max_epoch_day,
            ),
        };
        Ok(range)
    }

    /// Creates a date in this calendar from a year, month and day.
    ///
    /// # Errors
    ///
    /// This returns an error when the components do not name a valid date
    /// of this calendar: the year must be in `-9999..=9999`, the month in
    /// `1..=months_in_year`, and the day at least 1 and at most the
    /// number of days in that month of that year (28, 35 or 42).
    ///
    /// # Example
    ///
    /// ```
    /// use fiscal::{Calendar, Weekday, YearDivision};
    ///
    /// let cal = Calendar::builder()
    ///     .ends_on(Weekday::Sunday)
    ///     .nearest_end_of(8)
    ///     .division(YearDivision::Quarters445)
    ///     .leap_week_in_month(12)
    ///     .build()?;
    /// // Month 12 has 6 weeks in the 53-week year 2012...
    /// assert!(cal.date(2012, 12, 42).is_ok());
    /// // ...but only 5 in 2011.
    /// assert!(cal.date(2011, 12, 42).is_err());
    ///
    /// # Ok::<(), fiscal::Error>(())
    /// ```
    pub fn date(&self, year: i16, month: i8, day: i8) -> Result<Date, Error> {
        if !(iso::YEAR_MIN..=iso::YEAR_MAX).contains(&year) {
            return Err(Error::range(
                "year",
                year,
                iso::YEAR_MIN,
                iso::YEAR_MAX,
            ));
        }
        let months = self.months_in_year();
        if !(1..=months).contains(&month) {
            return Err(Error::range("month", month, 1, months));
        }
        let max_day = self.days_in_month_of(self.is_leap_year(year), month);
        if !(1..=max_day).contains(&day) {
            return Err(Error::range("day", day, 1, max_day));
        }
        Ok(Date::from_parts(self.clone(), year, month, day))
    }

    /// Creates a date in this calendar from a year and a day of that
    /// year.
    ///
    /// # Errors
    ///
    /// This returns an error when the year is out of range or the day of
    /// year is not in `1..=self.days_in_year(year)`.
    pub fn date_from_day_of_year(
        &self,
        year: i16,
        day_of_year: i16,
    ) -> Result<Date, Error> {
        if !(iso::YEAR_MIN..=iso::YEAR_MAX).contains(&year) {
            return Err(Error::range(
                "year",
                year,
                iso::YEAR_MIN,
                iso::YEAR_MAX,
            ));
        }
        let leap = self.is_leap_year(year);
        let max = if leap { 371 } else { 364 };
        if !(1..=max).contains(&day_of_year) {
            return Err(Error::range("day-of-year", day_of_year, 1, max));
        }
        let (month, day) = self.month_day_from_day_of_year(leap, day_of_year);
        Ok(Date::from_parts(self.clone(), year, month, day))
    }

    /// Creates a date in this calendar from an era, a year of that era,
    /// a month and a day.
    ///
    /// # Errors
    ///
    /// This returns an error when the year of era is less than 1, or when
    /// the resolved proleptic date would be invalid per
    /// [`Calendar::date`].
    pub fn date_from_era(
        &self,
        era: Era,
        year_of_era: i16,
        month: i8,
        day: i8,
    ) -> Result<Date, Error> {
        let max = match era {
            Era::CE => iso::YEAR_MAX,
            Era::BCE => 1 - iso::YEAR_MIN,
        };
        if !(1..=max).contains(&year_of_era) {
            return Err(Error::range("year-of-era", year_of_era, 1, max));
        }
        let year = match era {
            Era::CE => year_of_era,
            Era::BCE => 1 - year_of_era,
        };
        self.date(year, month, day)
    }

    /// Creates the date of this calendar falling on the given epoch day
    /// (days since 1970-01-01 in the ISO calendar).
    ///
    /// # Errors
    ///
    /// This returns an error when the epoch day falls outside this
    /// calendar's representable years. The bounds differ slightly from
    /// calendar to calendar; `self.range(Field::EpochDay)` reports them.
    ///
    /// # Example
    ///
    /// ```
    /// use fiscal::{Calendar, Weekday, YearDivision};
    ///
    /// let cal = Calendar::builder()
    ///     .ends_on(Weekday::Sunday)
    ///     .nearest_end_of(8)
    ///     .division(YearDivision::Quarters445)
    ///     .leap_week_in_month(12)
    ///     .build()?;
    /// // 2010-08-30 (ISO) is epoch day 14851 and fiscal 2011-01-01.
    /// let date = cal.date_from_epoch_day(14_851)?;
    /// assert_eq!((date.year(), date.month(), date.day()), (2011, 1, 1));
    /// assert_eq!(date.to_epoch_day(), 14_851);
    ///
    /// # Ok::<(), fiscal::Error>(())
    /// ```
    pub fn date_from_epoch_day(&self, epoch_day: i64) -> Result<Date, Error> {
        let inner = &*self.inner;
        if !(inner.min_epoch_day..=inner.max_epoch_day).contains(&epoch_day) {
            return Err(Error::range(
                "epoch day",
                epoch_day,
                inner.min_epoch_day,
                inner.max_epoch_day,
            ));
        }
        // Years average 146097/400 days exactly (the Gregorian cycle), so
        // this estimate is off by at most one year either way.
        let since_min = epoch_day - inner.min_epoch_day;
        let mut year = i64::from(iso::YEAR_MIN)
            + (since_min * 400) / iso::DAYS_IN_CYCLE;
        while epoch_day > self.year_end_epoch(year as i32) {
            year += 1;
        }
        while epoch_day <= self.year_end_epoch(year as i32 - 1) {
            year -= 1;
        }
        trace!("resolved epoch day {epoch_day} to fiscal year {year}");
        let year = year as i16;
        let day_of_year =
            (epoch_day - self.year_end_epoch(i32::from(year) - 1)) as i16;
        let (month, day) = self
            .month_day_from_day_of_year(self.is_leap_year(year), day_of_year);
        Ok(Date::from_parts(self.clone(), year, month, day))
    }

    /// Creates the date of this calendar falling on the same day as the
    /// given ISO date.
    ///
    /// This is the inverse of [`Date::to_iso`]; both directions go
    /// through the shared epoch day and are lossless.
    ///
    /// # Errors
    ///
    /// This returns an error when the day falls outside this calendar's
    /// representable years, as with [`Calendar::date_from_epoch_day`].
    #[inline]
    pub fn date_from_iso(&self, iso: IsoDate) -> Result<Date, Error> {
        self.date_from_epoch_day(iso.to_epoch_day())
    }

    /// Creates a period of this calendar from a number of years, months
    /// and days.
    ///
    /// Periods are calendar-scoped: a month of a 4-4-5 calendar is not a
    /// month of a thirteen-month calendar, so a period only applies to
    /// dates of the calendar that minted it.
    #[inline]
    pub fn period(&self, years: i32, months: i32, days: i32) -> Period {
        Period::new(self.clone(), years, months, days)
    }
}

/// Internal helpers shared with `Date`.
impl Calendar {
    /// The epoch day of the last day of the given fiscal year.
    #[inline]
    pub(crate) fn year_end_epoch(&self, year: i32) -> i64 {
        if year == 0 {
            return self.inner.year_zero_end;
        }
        resolve_year_end(self.inner.anchor, self.inner.rule, year)
    }

    /// The epoch day of the first day of the given fiscal year.
    #[inline]
    pub(crate) fn first_day_of_year_epoch(&self, year: i32) -> i64 {
        self.year_end_epoch(year - 1) + 1
    }

    #[inline]
    pub(crate) fn is_leap(&self, year: i32) -> bool {
        self.year_end_epoch(year) - self.year_end_epoch(year - 1) == 371
    }

    /// The number of weeks in a month, including the leap week when
    /// applicable.
    #[inline]
    pub(crate) fn weeks_in_month_of(&self, leap: bool, month: i8) -> i8 {
        let base = self.inner.division.weeks_in_month_unchecked(month);
        if leap && month == self.inner.leap_week_month {
            base + 1
        } else {
            base
        }
    }

    #[inline]
    pub(crate) fn days_in_month_of(&self, leap: bool, month: i8) -> i8 {
        7 * self.weeks_in_month_of(leap, month)
    }

    /// The number of weeks in the months before the given month,
    /// including the leap week when applicable.
    #[inline]
    pub(crate) fn weeks_at_start_of_month_of(
        &self,
        leap: bool,
        month: i8,
    ) -> i8 {
        let base =
            self.inner.division.weeks_at_start_of_month_unchecked(month);
        if leap && month > self.inner.leap_week_month {
            base + 1
        } else {
            base
        }
    }

    /// Converts a (month, day) of a year with the given leap status to a
    /// 1-based day of year.
    #[inline]
    pub(crate) fn day_of_year_of(&self, leap: bool, month: i8, day: i8) -> i16 {
        7 * i16::from(self.weeks_at_start_of_month_of(leap, month))
            + i16::from(day)
    }

    /// Converts a 1-based day of year to a (month, day) pair.
    pub(crate) fn month_day_from_day_of_year(
        &self,
        leap: bool,
        day_of_year: i16,
    ) -> (i8, i8) {
        debug_assert!(
            (1..=if leap { 371 } else { 364 }).contains(&day_of_year)
        );
        let mut month = 1;
        let mut rem = day_of_year;
        loop {
            let len = i16::from(self.days_in_month_of(leap, month));
            if rem <= len {
                return (month, rem as i8);
            }
            rem -= len;
            month += 1;
        }
    }

    /// The most weeks any month of this calendar can have, leap week
    /// included.
    fn longest_month_weeks(&self) -> i8 {
        let inner = &*self.inner;
        let base = if inner.division.supports_quarters() { 5 } else { 4 };
        let leap_month = inner
            .division
            .weeks_in_month_unchecked(inner.leap_week_month)
            + 1;
        base.max(leap_month)
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Calendar) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        let (a, b) = (&*self.inner, &*other.inner);
        a.anchor == b.anchor
            && a.rule == b.rule
            && a.division == b.division
            && a.leap_week_month == b.leap_week_month
    }
}

impl Eq for Calendar {}

impl core::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let inner = &*self.inner;
        f.debug_struct("Calendar")
            .field("ends_on", &inner.anchor)
            .field("year_end", &inner.rule)
            .field("division", &inner.division)
            .field("leap_week_in_month", &inner.leap_week_month)
            .finish()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Calendar {
    fn arbitrary(g: &mut quickcheck::Gen) -> Calendar {
        let anchor = Weekday::arbitrary(g);
        let end_month = (u8::arbitrary(g) % 12 + 1) as i8;
        let division = YearDivision::arbitrary(g);
        let leap_week_month =
            (u8::arbitrary(g) % (division.months_in_year() as u8) + 1) as i8;
        let builder = Calendar::builder()
            .ends_on(anchor)
            .division(division)
            .leap_week_in_month(leap_week_month);
        let builder = if bool::arbitrary(g) {
            builder.in_last_week_of(end_month)
        } else {
            builder.nearest_end_of(end_month)
        };
        builder.build().unwrap()
    }
}
