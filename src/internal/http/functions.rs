pub mod build_client;
