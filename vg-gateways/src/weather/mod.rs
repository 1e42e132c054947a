pub mod mock;
pub mod openweathermap;
