use monkey_walker::{evaluator::eval_program, logger, Environment, Lexer, Parser};
use std::time::Instant;

static INPUT: &str = "let fibonacci = fn(x) {
if (x == 0) { 0
     } else {
       if (x == 1) {
         return 1;
       } else {
         fibonacci(x - 1) + fibonacci(x - 2);
       }
} };
   fibonacci(25);";

fn main() {
    logger::init();

    let program = Parser::new(Lexer::new(INPUT.to_owned()))
        .parse()
        .expect("Parse errors found");

    let env = Environment::new();
    let start = Instant::now();
    let result = eval_program(&program, &env);
    let duration = start.elapsed();

    match result {
        Ok(result) => println!(
            "engine=eval, result={}, duration={}",
            result,
            duration.as_secs_f64(),
        ),
        Err(err) => eprintln!("ERROR: {}", err),
    }
}
