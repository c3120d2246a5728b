pub mod ports;
pub mod article_use_cases;
pub mod service;
