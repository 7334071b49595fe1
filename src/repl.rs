use crate::environment::Environment;
use crate::evaluator;
use crate::lexer::Lexer;
use crate::parser::Parser;
use log::debug;
use std::io::{self, BufRead, Write};

static PROMPT: &str = ">> ";

/// Reads one program per line until end of input. Bindings persist across
/// lines.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let env = Environment::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        debug!("read line {:?}", line.trim_end());

        match Parser::new(Lexer::new(line)).parse() {
            Err(errors) => {
                for err in errors.iter() {
                    writeln!(output, "\t{}", err)?;
                }
            }
            Ok(program) => match evaluator::eval_program(&program, &env) {
                Ok(val) => writeln!(output, "{}", val)?,
                Err(err) => writeln!(output, "ERROR: {}", err)?,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(input: &str) -> String {
        let mut output = vec![];
        start(input.as_bytes(), &mut output).expect("repl failed");
        String::from_utf8(output).expect("repl wrote invalid utf-8")
    }

    #[test]
    fn test_bindings_persist_between_lines() {
        assert_eq!(
            run("let a = 5;\nlet add = fn(x, y) { x + y };\nadd(a, 10)\n"),
            ">> 5\n>> fn(x, y) { (x + y) }\n>> 15\n>> "
        );
    }

    #[test]
    fn test_parse_errors_skip_evaluation() {
        assert_eq!(
            run("let x 1;\nx\n"),
            ">> \texpected next token to be Assign, got Int instead\n>> ERROR: identifier not found: x\n>> "
        );
    }

    #[test]
    fn test_runtime_errors_are_printed() {
        assert_eq!(
            run("\"a\" - \"b\"\n[1, 2][5]\n"),
            ">> ERROR: unknown operator: STRING - STRING\n>> null\n>> "
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), ">> ");
    }
}
