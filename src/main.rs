use std::fmt::Display;
use std::process;

use log::info;

fn die(msg: impl Display) -> ! {
    eprintln!("{}", msg);
    process::exit(1);
}

fn main() {
    env_logger::init();
    let code = struct_assign::exit_code().unwrap_or_else(|e| die(e));
    info!("exit code {}", code);
    process::exit(i32::from(code));
}
