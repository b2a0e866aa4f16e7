pub mod db;
pub mod car;
