pub mod annotations;
pub mod health;
