use crate::error::TinyError;
use crate::runner::{compile_program, expression_type};
use crate::types::ExpressionType;
use std::io::{self, Write};

/// Interactive checker. Accepted lines are kept as the session source, so
/// later lines can refer to variables bound earlier.
pub fn start() {
    println!("tinyc v{}", env!("CARGO_PKG_VERSION"));
    println!("Enter assignments like  x = 1 + 2;");
    println!(":type <expr> shows a type, :vars lists bindings, exit quits");
    println!();

    let mut session = String::new();

    loop {
        print!("> ");
        if let Err(error) = io::stdout().flush() {
            log::warn!("failed to flush stdout: {}", error);
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF reached (Ctrl+D or piped input ended)
                println!();
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    println!("Goodbye!");
                    break;
                }

                run_repl_command(line, &mut session);
            }
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                break;
            }
        }
    }
}

fn run_repl_command(line: &str, session: &mut String) {
    if line == ":vars" {
        match compile_program(session) {
            Ok(code) => {
                for (name, record) in code.symbols.iter() {
                    println!("{}: {}", name, record.ty);
                }
            }
            Err(error) => error.report(session, None),
        }
        return;
    }

    if let Some(expr) = line.strip_prefix(":type") {
        let expr = expr.trim();
        match type_in_session(session, expr) {
            Ok(ty) => println!("{}", ty),
            Err(SessionError::Session(error)) => error.report(session, None),
            Err(SessionError::Input(error)) => error.report(expr, None),
        }
        return;
    }

    let source = format!("{}\n{}", session, line);
    match compile_program(&source) {
        Ok(code) => {
            let before = compile_program(session)
                .map(|code| code.symbols.len())
                .unwrap_or(0);
            if code.symbols.len() == before {
                println!("(no new bindings)");
            }
            log::debug!("session now has {} binding(s)", code.symbols.len());
            *session = source;
        }
        Err(error) => error.report(&source, None),
    }
}

/// Which source a `SessionError` points into.
#[derive(Debug)]
pub enum SessionError {
    Session(TinyError),
    Input(TinyError),
}

/// Type of `expr` checked against the bindings made by `session`. Spans of
/// an `Input` error are relative to `expr` alone.
pub fn type_in_session(session: &str, expr: &str) -> Result<ExpressionType, SessionError> {
    let code = compile_program(session).map_err(SessionError::Session)?;
    expression_type(expr, &code.symbols).map_err(SessionError::Input)
}
