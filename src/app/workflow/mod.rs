pub mod details;
pub mod provinces;
pub mod recommend;
pub mod scores;
pub mod search;
pub mod sync;
