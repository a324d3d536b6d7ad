//! Row models exchanged across the session store boundary.

pub mod session;
pub mod session_user;

pub use session::SessionRecord;
pub use session_user::SessionUserRow;
