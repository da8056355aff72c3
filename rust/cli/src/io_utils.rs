//! Input utilities for the interactive session.

use std::io::BufRead;

/// Read one line of input, blocking until available.
///
/// The line comes back trimmed of surrounding whitespace; an empty string is
/// a legal return (the user just pressed enter). `None` means the stream is
/// done: EOF or a read error, both of which end the session the same way.
///
/// # Example
///
/// ```rust,no_run
/// use std::io;
/// # use pig_cli::io_utils::read_input_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_input_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_input_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
