pub mod error;
pub mod interpreter;
pub mod operators;
pub mod translate;

pub mod prelude {
    pub use super::{
        error::*,
        interpreter::*,
        operators::*,
        translate::*,
        parse_file,
        run_file,
        run_source
    };
}


use std::path::PathBuf;

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::Value,
    parser::prelude::{parse_module, parse_module_from_stream, Module},
    utils::prelude::Error
};
use interpreter::Interpreter;

/// Streams `path` through the parser. The text read so far is returned
/// alongside the module for diagnostics.
pub fn parse_file(path: PathBuf) -> Result<(Module, String), Error> {
    let file = std::fs::File::open(&path)?;

    let file_size = file.metadata()?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut io_error = None;
    let mut reader = std::io::BufReader::new(file);

    let stream = reader.chars()
        .map_while(|c| match c {
            Ok(c) => {
                src.push(c);
                Some(c)
            },
            Err(err) => {
                io_error = Some(err.kind());
                None
            }
        });

    let parsed = parse_module_from_stream(stream);

    if let Some(err) = io_error {
        return Err(Error::StdIo { err });
    }

    match parsed {
        Ok(module) => Ok((module, src)),
        Err(error) => Err(Error::Parse { path, src, error }),
    }
}

pub fn run_file(path: PathBuf, interpreter: &mut Interpreter) -> Result<Value, Error> {
    let (module, src) = parse_file(path.clone())?;

    interpreter.run(&module)
        .map_err(|error| Error::Runtime { path, src, error })
}

/// Parses and runs a piece of source held in memory.
pub fn run_source(path: PathBuf, src: &str, interpreter: &mut Interpreter) -> Result<Value, Error> {
    let module = parse_module(src)
        .map_err(|error| Error::Parse { path: path.clone(), src: src.to_string(), error })?;

    interpreter.run(&module)
        .map_err(|error| Error::Runtime { path, src: src.to_string(), error })
}
