use alloc::sync::Arc;

use crate::{
    division::YearDivision,
    fields::{Field, Unit},
};

/// An error that can occur in this crate.
///
/// All errors here are permanent input-validation failures. Calendrical
/// computation has no transient failure mode, so nothing is retryable and
/// nothing is logged or swallowed internally: every error is surfaced to
/// the caller that provided the offending input.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the `std`
/// feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides coarse
/// predicates only:
///
/// * [`Error::is_configuration`] for incomplete or self-inconsistent
/// builder state, raised only by [`CalendarBuilder::build`](crate::CalendarBuilder::build).
/// * [`Error::is_range`] for a field value, day-of-month or day-of-year
/// outside its valid range.
/// * [`Error::is_unsupported`] for a field or unit that is not meaningful
/// for a calendar's division.
/// * [`Error::is_mismatch`] for arithmetic mixing values owned by two
/// different calendars.
///
/// # Design
///
/// This crate follows the "one true error type" pattern, where a single
/// error type covers every fallible operation. Finer grained error types
/// compose poorly across a surface this interconnected.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// The `Arc` keeps an `Error` one word wide and makes clones cheap.
    /// Quite a few perf sensitive APIs here return `Result<T, Error>`, so
    /// the size matters.
    kind: Arc<ErrorKind>,
}

impl Error {
    /// Returns true when this error came from an incomplete or
    /// self-inconsistent calendar configuration.
    ///
    /// Configuration errors are raised only at
    /// [`CalendarBuilder::build`](crate::CalendarBuilder::build) time,
    /// never at date construction time.
    ///
    /// # Example
    ///
    /// ```
    /// use fiscal::Calendar;
    ///
    /// // Nothing was configured at all.
    /// let err = Calendar::builder().build().unwrap_err();
    /// assert!(err.is_configuration());
    /// ```
    pub fn is_configuration(&self) -> bool {
        matches!(*self.kind, ErrorKind::Configuration(_))
    }

    /// Returns true when this error came from a value being out of range.
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
    /// // 2011 is not a leap year, so month 12 has 35 days, not 42.
    /// assert!(cal.date(2011, 12, 42).unwrap_err().is_range());
    ///
    /// # Ok::<(), fiscal::Error>(())
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(*self.kind, ErrorKind::Range(_))
    }

    /// Returns true when this error came from asking a calendar about a
    /// field or unit that is not meaningful for its division.
    ///
    /// # Example
    ///
    /// ```
    /// use fiscal::{Calendar, Field, Weekday, YearDivision};
    ///
    /// let cal = Calendar::builder()
    ///     .ends_on(Weekday::Wednesday)
    ///     .in_last_week_of(12)
    ///     .division(YearDivision::ThirteenEvenMonths)
    ///     .leap_week_in_month(13)
    ///     .build()?;
    /// // Thirteen months do not divide into quarters.
    /// let err = cal.range(Field::QuarterOfYear).unwrap_err();
    /// assert!(err.is_unsupported());
    ///
    /// # Ok::<(), fiscal::Error>(())
    /// ```
    pub fn is_unsupported(&self) -> bool {
        matches!(*self.kind, ErrorKind::Unsupported(_))
    }

    /// Returns true when this error came from mixing values owned by two
    /// different calendars, e.g. adding a period minted by one calendar to
    /// a date from another.
    pub fn is_mismatch(&self) -> bool {
        matches!(*self.kind, ErrorKind::Mismatch(_))
    }
}

/// Internal constructors.
impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is
    /// out of range. (e.g., "day-of-month")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn configuration(err: ConfigurationError) -> Error {
        Error::from(ErrorKind::Configuration(err))
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn unsupported_field(
        field: Field,
        division: YearDivision,
    ) -> Error {
        Error::from(ErrorKind::Unsupported(UnsupportedError::Field {
            field,
            division,
        }))
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn unsupported_unit(
        unit: Unit,
        division: YearDivision,
    ) -> Error {
        Error::from(ErrorKind::Unsupported(UnsupportedError::Unit {
            unit,
            division,
        }))
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn mismatch(err: MismatchError) -> Error {
        Error::from(ErrorKind::Mismatch(err))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind: Arc::new(kind) }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.kind, f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Configuration(ConfigurationError),
    Range(RangeError),
    Unsupported(UnsupportedError),
    Mismatch(MismatchError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Configuration(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Unsupported(ref err) => err.fmt(f),
            Mismatch(ref err) => err.fmt(f),
        }
    }
}

/// An incomplete or self-inconsistent calendar configuration.
///
/// These are raised by `CalendarBuilder::build` only. A successfully built
/// calendar never produces one.
#[derive(Clone, Debug)]
pub(crate) enum ConfigurationError {
    MissingAnchorWeekday,
    MissingYearEnd,
    MissingDivision,
    MissingLeapWeekMonth,
    EndMonthOutOfRange { given: i64 },
    LeapWeekMonthOutOfRange { given: i64, months_in_year: i8 },
}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ConfigurationError::*;

        match *self {
            MissingAnchorWeekday => f.write_str(
                "calendar configuration is missing its anchor weekday \
                 (set it with `CalendarBuilder::ends_on`)",
            ),
            MissingYearEnd => f.write_str(
                "calendar configuration is missing its year-end rule \
                 (set it with `CalendarBuilder::in_last_week_of` or \
                 `CalendarBuilder::nearest_end_of`)",
            ),
            MissingDivision => f.write_str(
                "calendar configuration is missing its year division \
                 (set it with `CalendarBuilder::division`)",
            ),
            MissingLeapWeekMonth => f.write_str(
                "calendar configuration is missing its leap-week month \
                 (set it with `CalendarBuilder::leap_week_in_month`)",
            ),
            EndMonthOutOfRange { given } => write!(
                f,
                "year-end month {given} is out of range \
                 (must be a Gregorian month in 1..=12)",
            ),
            LeapWeekMonthOutOfRange { given, months_in_year } => write!(
                f,
                "leap-week month {given} is out of range for the \
                 configured division (must be in 1..={months_in_year})",
            ),
        }
    }
}

/// A value outside its valid range.
#[derive(Clone, Debug)]
pub(crate) struct RangeError {
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A field or unit that is not meaningful for a calendar's division.
#[derive(Clone, Debug)]
pub(crate) enum UnsupportedError {
    Field { field: Field, division: YearDivision },
    Unit { unit: Unit, division: YearDivision },
}

impl core::fmt::Display for UnsupportedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::UnsupportedError::*;

        match *self {
            Field { field, division } => write!(
                f,
                "field '{field}' is not supported by a calendar \
                 dividing its year as {division}",
                field = field.name(),
            ),
            Unit { unit, division } => write!(
                f,
                "unit '{unit}' is not supported by a calendar \
                 dividing its year as {division}",
                unit = unit.plural(),
            ),
        }
    }
}

/// Arithmetic mixing values owned by two different calendars.
#[derive(Clone, Debug)]
pub(crate) enum MismatchError {
    Period,
    Date,
}

impl core::fmt::Display for MismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::MismatchError::*;

        match *self {
            Period => f.write_str(
                "period belongs to a different calendar than the date \
                 it is being applied to (periods are calendar-scoped)",
            ),
            Date => f.write_str(
                "dates belong to two different calendars \
                 (convert through an epoch day instead)",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>(),
        );
    }

    #[test]
    fn range_message() {
        let err = Error::range("day-of-month", 36i64, 1i64, 35i64);
        assert_eq!(
            err.to_string(),
            "parameter 'day-of-month' with value 36 \
             is not in the required range of 1..=35",
        );
        assert!(err.is_range());
        assert!(!err.is_configuration());
    }
}
