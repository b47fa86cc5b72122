use std::io::Write;

/// Progress line on stdout.
pub fn log_line(line: &str) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}", line);
}

/// Single `Error: ...` line on stderr.
pub fn log_error(e: &dyn std::error::Error) {
    let mut err = std::io::stderr().lock();
    let _ = writeln!(err, "{}", error_line(e));
}

fn error_line(e: &dyn std::error::Error) -> String {
    format!("Error: {}", e)
}
