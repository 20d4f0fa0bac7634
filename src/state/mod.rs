pub mod gesture;
pub mod readiness;
pub mod transform;

pub use gesture::Gesture;
pub use readiness::{Readiness, UploadTicket};
pub use transform::Transform;
