use roster::Engine;
use std::io::{self, BufRead};

mod shell;
use shell::command::parse_command;
use shell::protocol::handle_command;

fn main() {
    println!("Roster - fair assignment for course staff");

    let stdin = io::stdin();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = line.unwrap();

        if let Some(cmd) = parse_command(&input) {
            if let Err(err) = handle_command(&cmd, &mut engine) {
                if engine.options.strict_mode {
                    panic!("{}", err);
                } else {
                    eprintln!("{}", err);
                }
            }
        }
    }
}
