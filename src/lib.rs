pub mod backend_client;
pub mod configuration;
pub mod domain;
pub mod landing_page;
pub mod registration;
pub mod routes;
pub mod startup;
pub mod telemetry;
