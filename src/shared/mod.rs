pub mod api;
pub mod db;
pub mod lock;
pub mod patch;
pub mod validation;
