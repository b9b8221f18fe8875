pub mod accessor;
pub mod controller;
pub mod filter;
pub mod notify;
pub mod record;
pub mod stats;
