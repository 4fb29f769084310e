pub mod body;
pub mod issue;
pub mod ticket;
