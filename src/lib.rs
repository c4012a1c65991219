//! starblog - A small REST backend for Star Wars people, planets and
//! the favorites of a single user

pub mod cli;
pub mod db;
pub mod http_server;
pub mod observability;
