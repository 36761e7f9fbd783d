pub mod denuncias;
pub mod health;
pub mod root;
pub mod status_reports;
pub mod vagas;
