// Plagiarism Detector: lexical overlap check between two essays
//
// This is the library root. The core pipeline is text -> similarity -> output;
// essays and config are the glue the binary uses to feed it.

pub mod config;
pub mod error;
pub mod essays;
pub mod output;
pub mod similarity;
pub mod text;
