use std::{path::PathBuf, rc::Rc};

use crate::{
    eval::prelude::{Interpreter, InterpreterOptions},
    parser::prelude::parse_module
};

use super::prelude::{ConsoleIO, Error, NullConsoleIO, SrcSpan, VectorConsoleIO};

fn runtime_error(src: &str) -> Error {
    let module = parse_module(src).unwrap();
    let mut interpreter = Interpreter::new(InterpreterOptions::default(), Rc::new(NullConsoleIO));

    Error::Runtime {
        path: PathBuf::from("test.emoji"),
        src: src.to_string(),
        error: interpreter.run(&module).unwrap_err(),
    }
}

#[test]
fn test_span_merge() {
    let left = SrcSpan::from(4, 8);
    let right = SrcSpan::from(10, 12);

    assert_eq!(left.merge(right), SrcSpan::from(4, 12));
    assert_eq!(right.merge(left), SrcSpan::from(4, 12));
    assert_eq!(left.to_string(), "4..8");
}

#[test]
fn test_parse_error_pretty() {
    let src = "📢 1\n📦 ➡️ 3";

    let err = Error::Parse {
        path: PathBuf::from("test.emoji"),
        src: src.to_string(),
        error: parse_module(src).unwrap_err(),
    };

    let pretty = err.pretty_string();

    assert!(pretty.contains("Syntax error"), "{pretty}");
    assert!(pretty.contains("test.emoji"), "{pretty}");
    assert!(pretty.contains("line 2"), "{pretty}");
    assert_eq!(err.to_string(), "failed to parse source code");
}

#[test]
fn test_unexpected_eof_points_at_end() {
    let src = "❓ ✅ 👉";

    let err = Error::Parse {
        path: PathBuf::from("test.emoji"),
        src: src.to_string(),
        error: parse_module(src).unwrap_err(),
    };

    let pretty = err.pretty_string();

    assert!(pretty.contains("Unexpected end of file"), "{pretty}");
    assert!(pretty.contains("`🔚` (END)"), "{pretty}");
}

#[test]
fn test_runtime_error_pretty() {
    let pretty = runtime_error("📢 1\n📢 missing").pretty_string();

    assert!(pretty.contains("NameError: Undefined variable"), "{pretty}");
    assert!(pretty.contains("Undefined variable: missing"), "{pretty}");
    assert!(pretty.contains("test.emoji"), "{pretty}");
}

#[test]
fn test_runtime_error_hints() {
    let pretty = runtime_error("📦 x ➡️ 1\n📦 x ➡️ 2").pretty_string();

    assert!(pretty.contains("RedeclarationError"), "{pretty}");
    assert!(pretty.contains("--no-strict"), "{pretty}");
}

#[test]
fn test_recursion_error_pretty() {
    let pretty = runtime_error("🎯 f 👉 ⬅️ f() 🔚\nf()").pretty_string();

    assert!(pretty.contains("RecursionError: Maximum call depth exceeded"), "{pretty}");
    assert!(pretty.contains("--max-call-depth"), "{pretty}");
}

#[test]
fn test_nesting_error_pretty() {
    let src = format!("📢 {}1", "(".repeat(500));

    let err = Error::Parse {
        path: PathBuf::from("test.emoji"),
        src: src.clone(),
        error: parse_module(&src).unwrap_err(),
    };

    assert!(err.pretty_string().contains("Nesting too deep"));
}

#[test]
fn test_end_of_input_is_clean() {
    assert!(runtime_error("📦 x ➡️ 📝").is_end_of_input());
    assert!(!runtime_error("📢 missing").is_end_of_input());
}

#[test]
fn test_io_error() {
    let err = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));

    assert_eq!(err, Error::StdIo { err: std::io::ErrorKind::NotFound });
    assert!(err.pretty_string().contains("Standard IO error"));
}

#[test]
fn test_vector_console() -> std::io::Result<()> {
    let console = VectorConsoleIO::with_input(["first", "second"]);

    console.write_line("out")?;
    console.prompt("> ")?;

    assert_eq!(console.read_line()?, Some("first".to_string()));
    assert_eq!(console.read_line()?, Some("second".to_string()));
    assert_eq!(console.read_line()?, None);

    assert_eq!(console.take(), vec!["out"]);
    assert_eq!(console.take_prompts(), vec!["> "]);
    assert!(console.take().is_empty());

    console.push_input(["again"]);
    console.reset();
    assert_eq!(console.read_line()?, None);

    Ok(())
}

#[test]
fn test_null_console() -> std::io::Result<()> {
    NullConsoleIO.write_line("ignored")?;

    assert_eq!(NullConsoleIO.read_line()?, None);

    Ok(())
}
