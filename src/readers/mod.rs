pub mod oxylabs;
pub mod web;


pub use oxylabs::OxylabsReader;
pub use web::OxylabsWebReader;
