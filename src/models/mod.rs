pub mod booker;
pub mod reservation;

pub use booker::Booker;
pub use reservation::Reservation;
