pub mod shared_secret;
