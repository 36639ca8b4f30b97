pub mod character_request;
