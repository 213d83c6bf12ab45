use crate::error::Error;

/// A representation for the day of the week.
///
/// The default representation follows ISO 8601, where a week starts with
/// Monday and numbering starts at `1`. Fiscal calendars routinely anchor
/// their year ends on other weekdays, so conversion routines to and from
/// all four combinations of {Monday, Sunday} × {zero, one} indexing are
/// provided.
///
/// # Example
///
/// This example shows the result of converting to and from all supported
/// offsets:
///
/// ```
/// use fiscal::Weekday;
///
/// let wd = Weekday::Thursday;
/// assert_eq!(wd.to_monday_zero_offset(), 3);
/// assert_eq!(wd.to_monday_one_offset(), 4);
/// assert_eq!(wd.to_sunday_zero_offset(), 4);
/// assert_eq!(wd.to_sunday_one_offset(), 5);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Convert an offset to a weekday, where `0` corresponds to Monday.
    ///
    /// # Errors
    ///
    /// This returns an error when the given offset is not in the range
    /// `0..=6`.
    #[inline]
    pub fn from_monday_zero_offset(offset: i8) -> Result<Weekday, Error> {
        if !(0..=6).contains(&offset) {
            return Err(Error::range("weekday offset", offset, 0, 6));
        }
        Ok(Weekday::from_monday_zero_offset_unchecked(offset))
    }

    /// Convert an offset to a weekday, where `1` corresponds to Monday.
    ///
    /// # Errors
    ///
    /// This returns an error when the given offset is not in the range
    /// `1..=7`.
    #[inline]
    pub fn from_monday_one_offset(offset: i8) -> Result<Weekday, Error> {
        if !(1..=7).contains(&offset) {
            return Err(Error::range("weekday offset", offset, 1, 7));
        }
        Ok(Weekday::from_monday_zero_offset_unchecked(offset - 1))
    }

    /// Convert an offset to a weekday, where `0` corresponds to Sunday.
    ///
    /// # Errors
    ///
    /// This returns an error when the given offset is not in the range
    /// `0..=6`.
    #[inline]
    pub fn from_sunday_zero_offset(offset: i8) -> Result<Weekday, Error> {
        if !(0..=6).contains(&offset) {
            return Err(Error::range("weekday offset", offset, 0, 6));
        }
        Ok(Weekday::from_monday_zero_offset_unchecked(
            (offset - 1).rem_euclid(7),
        ))
    }

    /// Convert an offset to a weekday, where `1` corresponds to Sunday.
    ///
    /// # Errors
    ///
    /// This returns an error when the given offset is not in the range
    /// `1..=7`.
    #[inline]
    pub fn from_sunday_one_offset(offset: i8) -> Result<Weekday, Error> {
        if !(1..=7).contains(&offset) {
            return Err(Error::range("weekday offset", offset, 1, 7));
        }
        Weekday::from_sunday_zero_offset(offset - 1)
    }

    /// Returns this weekday as an offset, where `0` corresponds to Monday.
    #[inline]
    pub fn to_monday_zero_offset(self) -> i8 {
        self as i8
    }

    /// Returns this weekday as an offset, where `1` corresponds to Monday.
    ///
    /// This is the ISO 8601 day-of-week number, and the value reported by
    /// the day-of-week field on dates in every calendar in this crate.
    #[inline]
    pub fn to_monday_one_offset(self) -> i8 {
        self.to_monday_zero_offset() + 1
    }

    /// Returns this weekday as an offset, where `0` corresponds to Sunday.
    #[inline]
    pub fn to_sunday_zero_offset(self) -> i8 {
        (self.to_monday_zero_offset() + 1) % 7
    }

    /// Returns this weekday as an offset, where `1` corresponds to Sunday.
    #[inline]
    pub fn to_sunday_one_offset(self) -> i8 {
        self.to_sunday_zero_offset() + 1
    }

    /// Add the given number of days to this weekday, using wrapping
    /// arithmetic, and return the resulting weekday.
    ///
    /// # Example
    ///
    /// ```
    /// use fiscal::Weekday;
    ///
    /// assert_eq!(Weekday::Saturday.wrapping_add(2), Weekday::Monday);
    /// assert_eq!(Weekday::Sunday.wrapping_add(-1), Weekday::Saturday);
    /// ```
    #[inline]
    pub fn wrapping_add(self, days: i64) -> Weekday {
        let offset = i64::from(self.to_monday_zero_offset());
        let sum = (offset + days.rem_euclid(7)).rem_euclid(7);
        // OK because rem_euclid(7) above guarantees 0..=6.
        Weekday::from_monday_zero_offset_unchecked(sum as i8)
    }

    /// Returns the number of days from `other` to this weekday, walking
    /// forward through the week.
    ///
    /// The result is always in the range `0..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use fiscal::Weekday;
    ///
    /// assert_eq!(Weekday::Friday.since(Weekday::Tuesday), 3);
    /// assert_eq!(Weekday::Tuesday.since(Weekday::Friday), 4);
    /// assert_eq!(Weekday::Sunday.since(Weekday::Sunday), 0);
    /// ```
    #[inline]
    pub fn since(self, other: Weekday) -> i8 {
        (self.to_monday_zero_offset() - other.to_monday_zero_offset())
            .rem_euclid(7)
    }

    /// Returns the number of days from this weekday to `other`, walking
    /// forward through the week.
    ///
    /// The result is always in the range `0..=6`.
    #[inline]
    pub fn until(self, other: Weekday) -> i8 {
        other.since(self)
    }

    #[inline]
    pub(crate) fn from_monday_zero_offset_unchecked(offset: i8) -> Weekday {
        debug_assert!((0..=6).contains(&offset));
        match offset {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Weekday {
    fn arbitrary(g: &mut quickcheck::Gen) -> Weekday {
        Weekday::from_monday_zero_offset_unchecked(
            (u8::arbitrary(g) % 7) as i8,
        )
    }
}
