//! Application services

mod observation_service;

pub use observation_service::ObservationService;
