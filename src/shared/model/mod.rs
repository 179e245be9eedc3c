//! Domain models exchanged with the backend.
//!
//! All timestamps are ISO-8601 strings as delivered by the backend and
//! are parsed with chrono only where ordering or elapsed time matters.

pub mod contact;
pub mod message;
pub mod notification;
pub mod registrar;
pub mod session;

pub use contact::Contact;
pub use message::Message;
pub use notification::{Notification, NotificationCategory};
pub use registrar::{Career, GradeRecord, Payment, Subject, UserAccount};
pub use session::{Role, Session};
