//! Selection date query parsing helpers.

use jiff::{Zoned, civil::Date};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Resolve the calendar day a selection runs against.
pub(crate) trait SelectionDateExt {
    fn into_selection_date(self) -> Result<Date, StatusError>;
}

impl SelectionDateExt for QueryParam<String, false> {
    /// Parses `?on=YYYY-MM-DD`, falling back to today in the server's time zone.
    fn into_selection_date(self) -> Result<Date, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Date>())
            .transpose()
            .or_400("could not parse \"on\" query parameter")
            .map(|on| on.unwrap_or_else(|| Zoned::now().date()))
    }
}
