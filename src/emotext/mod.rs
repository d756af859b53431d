//! Main module for emotext library functionality

pub mod ast;
pub mod coalesce;
pub mod convert;
pub mod lexicon;
pub mod lexing;
pub mod modify;
pub mod parsing;
pub mod process;
pub mod testing;
