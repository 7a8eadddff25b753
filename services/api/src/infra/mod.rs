pub mod db;
pub mod external;
