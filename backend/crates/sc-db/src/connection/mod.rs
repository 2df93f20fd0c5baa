pub mod database_gateway;
