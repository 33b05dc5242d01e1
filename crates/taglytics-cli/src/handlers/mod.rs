pub mod query_create;
pub mod query_list;
pub mod run;
pub mod tags;
