pub mod calendar;
pub mod critical_date;
pub mod estimate;
pub mod register;
pub mod risk;
