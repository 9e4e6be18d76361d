pub mod internal;
pub mod store;
