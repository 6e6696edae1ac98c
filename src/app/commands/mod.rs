pub mod environments;
pub mod extract;
