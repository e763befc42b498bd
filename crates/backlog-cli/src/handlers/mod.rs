pub mod add;
pub mod archive;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;
