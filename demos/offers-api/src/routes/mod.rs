pub mod countries;
pub mod offers;
pub mod providers;
