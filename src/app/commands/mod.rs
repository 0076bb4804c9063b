pub mod fix;
pub mod menu;
pub mod scan;
