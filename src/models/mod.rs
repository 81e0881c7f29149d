pub mod car;

pub use car::{Car, CarUpdate, NewCar};
