pub mod attendance;
pub mod employee;
pub mod file_item;
pub mod navigation;
pub mod role;
