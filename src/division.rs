use crate::error::Error;

/// The pattern by which a fiscal year's 52 base weeks divide into months.
///
/// A 52/53-week calendar never splits a week across a month boundary.
/// Instead, each month spans a whole number of weeks, and the division
/// pattern fixes how many. The three quartered patterns give every quarter
/// 13 weeks, differing only in which month of the quarter gets the fifth
/// week. The thirteen-month pattern gives every month exactly four weeks
/// and has no quarters at all.
///
/// In a leap year, one designated month (chosen by
/// [`CalendarBuilder::leap_week_in_month`](crate::CalendarBuilder::leap_week_in_month))
/// gets one extra week on top of the pattern below. The operations on this
/// type describe the base pattern only.
///
/// # Example
///
/// ```
/// use fiscal::YearDivision;
///
/// let div = YearDivision::Quarters445;
/// assert_eq!(div.weeks_in_month(1)?, 4);
/// assert_eq!(div.weeks_in_month(3)?, 5);
/// assert_eq!(div.months_in_year(), 12);
///
/// let div = YearDivision::ThirteenEvenMonths;
/// assert_eq!(div.weeks_in_month(13)?, 4);
/// assert!(!div.supports_quarters());
///
/// # Ok::<(), fiscal::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum YearDivision {
    /// Twelve months in four 13-week quarters of 4, 4 and 5 weeks.
    Quarters445,
    /// Twelve months in four 13-week quarters of 4, 5 and 4 weeks.
    Quarters454,
    /// Twelve months in four 13-week quarters of 5, 4 and 4 weeks.
    Quarters544,
    /// Thirteen months of exactly 4 weeks each, with no quarters.
    ThirteenEvenMonths,
}

impl YearDivision {
    /// Returns the number of months in a year under this division.
    ///
    /// This is `12` for the quartered patterns and `13` for
    /// `ThirteenEvenMonths`.
    #[inline]
    pub fn months_in_year(self) -> i8 {
        match self {
            YearDivision::ThirteenEvenMonths => 13,
            _ => 12,
        }
    }

    /// Returns true when this division groups its months into quarters.
    ///
    /// Quarter based fields and units are only meaningful when this
    /// returns true.
    #[inline]
    pub fn supports_quarters(self) -> bool {
        !matches!(self, YearDivision::ThirteenEvenMonths)
    }

    /// Returns the number of base weeks in the given month.
    ///
    /// "Base" means before any leap week: the leap week a leap year adds
    /// to its designated month is a property of a full calendar
    /// configuration, not of the division pattern.
    ///
    /// # Errors
    ///
    /// This returns an error when the given month is not in the range
    /// `1..=self.months_in_year()`.
    #[inline]
    pub fn weeks_in_month(self, month: i8) -> Result<i8, Error> {
        self.check_month(month)?;
        Ok(self.weeks_in_month_unchecked(month))
    }

    /// Returns the number of base weeks in the months before the given
    /// month.
    ///
    /// `weeks_at_start_of_month(1)` is `0`, and the value for a
    /// hypothetical month past the end of the year would be `52`.
    ///
    /// # Errors
    ///
    /// This returns an error when the given month is not in the range
    /// `1..=self.months_in_year()`.
    #[inline]
    pub fn weeks_at_start_of_month(self, month: i8) -> Result<i8, Error> {
        self.check_month(month)?;
        Ok(self.weeks_at_start_of_month_unchecked(month))
    }

    /// Returns the month containing the week at the given offset from the
    /// start of the year.
    ///
    /// A week exactly on a month boundary belongs to the later month, so
    /// this is the inverse of [`YearDivision::weeks_at_start_of_month`]:
    /// for every valid `weeks`, the result `m` satisfies
    /// `weeks_at_start_of_month(m) <= weeks < weeks_at_start_of_month(m) +
    /// weeks_in_month(m)`.
    ///
    /// # Errors
    ///
    /// This returns an error when the given number of elapsed weeks is not
    /// in the range `0..=51`.
    #[inline]
    pub fn month_from_elapsed_weeks(self, weeks: i8) -> Result<i8, Error> {
        if !(0..=51).contains(&weeks) {
            return Err(Error::range("elapsed weeks", weeks, 0, 51));
        }
        Ok(self.month_from_elapsed_weeks_unchecked(weeks))
    }

    /// Returns a short human readable name for this division.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            YearDivision::Quarters445 => "4-4-5",
            YearDivision::Quarters454 => "4-5-4",
            YearDivision::Quarters544 => "5-4-4",
            YearDivision::ThirteenEvenMonths => "thirteen even months",
        }
    }

    #[inline]
    fn check_month(self, month: i8) -> Result<(), Error> {
        let max = self.months_in_year();
        if !(1..=max).contains(&month) {
            return Err(Error::range("month", month, 1, max));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn weeks_in_month_unchecked(self, month: i8) -> i8 {
        debug_assert!((1..=self.months_in_year()).contains(&month));
        let five_week_position = match self {
            YearDivision::Quarters445 => 0,
            YearDivision::Quarters454 => 2,
            YearDivision::Quarters544 => 1,
            YearDivision::ThirteenEvenMonths => return 4,
        };
        if month % 3 == five_week_position {
            5
        } else {
            4
        }
    }

    #[inline]
    pub(crate) fn weeks_at_start_of_month_unchecked(self, month: i8) -> i8 {
        debug_assert!((1..=self.months_in_year()).contains(&month));
        // 4 weeks per elapsed month, plus one for each five-week month
        // already passed. The divisions place their five-week months at a
        // fixed residue mod 3, which makes the count a single division.
        let five_week_months = match self {
            YearDivision::Quarters445 => (month - 1) / 3,
            YearDivision::Quarters454 => month / 3,
            YearDivision::Quarters544 => (month + 1) / 3,
            YearDivision::ThirteenEvenMonths => 0,
        };
        4 * (month - 1) + five_week_months
    }

    #[inline]
    pub(crate) fn month_from_elapsed_weeks_unchecked(self, weeks: i8) -> i8 {
        debug_assert!((0..=51).contains(&weeks));
        let mut month = 1;
        let mut start = 0;
        loop {
            let len = self.weeks_in_month_unchecked(month);
            if weeks < start + len {
                return month;
            }
            start += len;
            month += 1;
        }
    }
}

impl core::fmt::Display for YearDivision {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for YearDivision {
    fn arbitrary(g: &mut quickcheck::Gen) -> YearDivision {
        *g.choose(&[
            YearDivision::Quarters445,
            YearDivision::Quarters454,
            YearDivision::Quarters544,
            YearDivision::ThirteenEvenMonths,
        ])
        .unwrap()
    }
}
