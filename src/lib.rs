/*!
A configurable proleptic fiscal (52/53-week) calendar.

Businesses that report by weeks rather than by Gregorian months use
"accounting" calendars: every fiscal year ends on the same weekday near
the end of a chosen Gregorian month, so a year is always a whole number
of weeks, 52 in common years and 53 in "leap" years. The year's weeks are
divided into months by a fixed pattern (4-4-5 and its rotations, or
thirteen even months), and the extra leap week always lands in one
designated month.

This crate lets you describe such a calendar with a builder and then work
with dates in it: construct them, read and set their fields, do day
through era arithmetic on them, measure differences and convert to and
from ISO dates through a shared epoch-day interop point.

# Example

```
use fiscal::{Calendar, Unit, Weekday, YearDivision};

// Years end on the Sunday nearest to the end of August, with 4-4-5
// quarters; the leap week goes into the last month.
let cal = Calendar::builder()
    .ends_on(Weekday::Sunday)
    .nearest_end_of(8)
    .division(YearDivision::Quarters445)
    .leap_week_in_month(12)
    .build()?;

// Fiscal 2012 is a 53-week year; its last month has 6 weeks.
assert!(cal.is_leap_year(2012));
let date = cal.date(2012, 12, 42)?;
assert_eq!(date.to_iso()?, fiscal::IsoDate::new(2012, 9, 2)?);

// Unit arithmetic clamps the day to the destination month.
let next = date.checked_add(1, Unit::Year)?;
assert_eq!((next.year(), next.month(), next.day()), (2013, 12, 35));

# Ok::<(), fiscal::Error>(())
```

# Overview

* [`Calendar`] — an immutable, cheaply cloneable handle to a calendar
configuration, built with [`CalendarBuilder`]. All dates are created by
its factory methods.
* [`Date`] — a day of a particular calendar, with field access
([`Field`], [`ValueRange`]), arithmetic ([`Unit`]) and differences
([`Period`]).
* [`IsoDate`] — a plain proleptic Gregorian date, the interop type every
calendar converts to and from losslessly.
* [`Error`] — the single error type used by every fallible operation.

# Crate features

* **std** (enabled by default) - Implements the `std::error::Error` trait
for this crate's error type. Disable for `no_std` + `alloc` use.
* **logging** - Emits some log messages through the `log` crate, mostly
tracing how calendar configurations resolve their year ends.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Dynamic memory allocation is only used for the error type (to keep it
// one word wide and cheap to clone) and for calendar handle sharing.
extern crate alloc;

pub use crate::{
    calendar::{Calendar, CalendarBuilder},
    date::Date,
    division::YearDivision,
    error::Error,
    fields::{Era, Field, Unit, ValueRange},
    iso::IsoDate,
    period::Period,
    weekday::Weekday,
};

#[macro_use]
mod logging;

mod calendar;
mod date;
mod division;
mod error;
mod fields;
mod iso;
mod period;
mod weekday;
