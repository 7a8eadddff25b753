mod auth_test;
mod continent_test;
mod country_test;
mod http_test;
