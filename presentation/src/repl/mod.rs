pub mod gate;
pub mod reading;
