pub mod admin;
pub mod appointments;
pub mod auth;
pub mod clients;
pub mod health;
pub mod stocks;
pub mod trading;
