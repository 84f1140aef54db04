//! Request and response bodies

pub mod customer;
