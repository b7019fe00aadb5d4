pub mod entities;
pub mod normalizer;
pub mod ports;
pub mod query_builder;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
