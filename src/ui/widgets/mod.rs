pub mod current;
pub mod daily;
pub mod details;
pub mod search;
