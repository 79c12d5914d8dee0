pub mod enums;
pub mod functions;
pub mod structs;
