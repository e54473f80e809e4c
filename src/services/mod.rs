pub mod advisor_service;
pub mod appointment_service;
pub mod client_service;
pub mod stock_service;
pub mod trading_service;
