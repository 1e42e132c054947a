pub mod entities;
pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;
