mod contact;
mod error;
mod health_check;
mod newsletter;
mod work_inquiry;

pub use contact::*;
pub use error::*;
pub use health_check::*;
pub use newsletter::*;
pub use work_inquiry::*;
