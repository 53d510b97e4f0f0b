pub mod jobs;
pub mod models;
pub mod persistence;
pub mod seed;
pub mod sqlite;
