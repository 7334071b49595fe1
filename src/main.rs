use monkey_walker::{logger, repl};
use std::io;

fn main() {
    logger::init();

    println!("Hello! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    if let Err(err) = repl::start(stdin.lock(), io::stdout()) {
        eprintln!("repl stopped: {}", err);
    }
}
