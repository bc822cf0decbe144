use crate::core::models::cipher_kind::{CipherKind, Operation};
use crate::core::models::trace::Trace;

/// Port for the classical cipher engines.
///
/// Implementations live in `adapters::cipher` (Caesar, Vigenere, Playfair).
/// Every method is pure: same input, same output, no I/O and no errors.
pub trait ClassicalCipher: Send + Sync {
    /// Which cipher this is.
    fn kind(&self) -> CipherKind;

    /// Encrypt `text` with the key this cipher was built with.
    fn encrypt(&self, text: &str) -> String;

    /// Decrypt `text` with the key this cipher was built with.
    fn decrypt(&self, text: &str) -> String;

    /// Step-by-step record of `operation` over `text`.
    fn trace(&self, operation: Operation, text: &str) -> Trace;

    /// Run `operation` over `text`.
    fn apply(&self, operation: Operation, text: &str) -> String {
        match operation {
            Operation::Encrypt => self.encrypt(text),
            Operation::Decrypt => self.decrypt(text),
        }
    }
}
