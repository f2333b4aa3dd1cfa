/// Reactive property primitives shared by all services.
mod property;

pub use property::Property;
