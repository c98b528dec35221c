//! Services backing the contact form seams

pub mod feedback;
pub mod transport;

pub use feedback::DomFeedback;
pub use transport::HttpTransport;
