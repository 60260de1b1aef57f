pub mod dispatcher;
pub mod math;
pub mod providers;

pub use dispatcher::execute;
