pub mod audit;
pub mod participant;
pub mod results;
pub mod session;
pub mod transaction;
