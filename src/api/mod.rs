pub mod attendance;
pub mod employee;
pub mod files;
pub mod navigation;

#[cfg(test)]
pub mod testing;
