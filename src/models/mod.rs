pub mod conversations;
pub mod gigs;
pub mod messages;
pub mod orders;
pub mod reviews;
pub mod users;
