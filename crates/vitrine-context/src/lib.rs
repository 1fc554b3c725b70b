pub mod site;
pub mod theme;
