//! Coupons

mod errors;
mod handlers;
mod payloads;
mod requests;
mod responses;

pub(crate) use handlers::*;
