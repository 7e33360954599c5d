pub mod centers;
pub mod permissions;
pub mod roles;
