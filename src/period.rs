use crate::calendar::Calendar;

/// An amount of fiscal time: whole years, months and days.
///
/// A period is scoped to the [`Calendar`] that minted it (via
/// [`Calendar::period`] or [`Date::until_period`](crate::Date::until_period)),
/// because its meaning depends on the calendar's configuration. A "month"
/// of a 4-4-5 calendar is 4 or 5 weeks; a "month" of a thirteen-month
/// calendar is always 4. Applying a period to a date from a different
/// calendar fails with a mismatch error.
///
/// Components may be negative and are not normalized against each other:
/// 1 year and -1 month is applied as exactly that, first the years, then
/// the months, then the days.
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
/// let period = cal.period(1, 2, 3);
/// let date = cal.date(2011, 1, 1)?.checked_add_period(&period)?;
/// assert_eq!((date.year(), date.month(), date.day()), (2012, 3, 4));
///
/// # Ok::<(), fiscal::Error>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Period {
    calendar: Calendar,
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    #[inline]
    pub(crate) fn new(
        calendar: Calendar,
        years: i32,
        months: i32,
        days: i32,
    ) -> Period {
        Period { calendar, years, months, days }
    }

    /// Returns the calendar this period is scoped to.
    #[inline]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the years component.
    #[inline]
    pub fn years(&self) -> i32 {
        self.years
    }

    /// Returns the months component.
    #[inline]
    pub fn months(&self) -> i32 {
        self.months
    }

    /// Returns the days component.
    #[inline]
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Returns true when all three components are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}
