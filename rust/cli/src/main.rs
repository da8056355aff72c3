use std::io;
use std::process;

fn main() {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let stdin = io::stdin();
    let code = pig_cli::run(&mut stdout.lock(), &mut stderr.lock(), &mut stdin.lock());
    process::exit(code);
}
