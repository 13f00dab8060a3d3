//! Extension traits

mod depot;
mod result;
mod selection_date;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use selection_date::SelectionDateExt as _;
