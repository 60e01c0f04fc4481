pub mod errors;
pub mod radix;
