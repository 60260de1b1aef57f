pub mod envelope;
pub mod operation;

pub use envelope::Envelope;
pub use operation::{Operation, OperationOutput};
