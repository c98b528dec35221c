//! UI Components

pub mod toast;

pub use toast::DomToast;
