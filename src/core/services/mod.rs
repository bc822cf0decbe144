pub mod cipher_service;
