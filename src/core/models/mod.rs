pub mod cipher_kind;
pub mod key_matrix;
pub mod trace;
