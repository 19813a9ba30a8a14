pub mod error;
pub mod token;

pub use error::{Result, SigilError};
pub use token::{
    CANDIDATE_LEN, DigitSource, OsDigitSource, SeededDigitSource, Token, generate, hash_candidate,
};
