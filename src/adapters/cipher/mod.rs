pub mod caesar;
pub mod playfair;
pub mod vigenere;
