use std::io::BufRead;

/// Asks a yes/no question on stderr and reads one line of the answer.
/// Anything other than `y` or `yes` counts as no.
pub fn prompt_confirm_default_no(
    message: &str,
    stdin: Option<&mut dyn BufRead>,
) -> std::io::Result<bool> {
    eprint!("{} [y/N] ", message);
    let response = read_answer(stdin)?;
    Ok(matches!(response.as_str(), "y" | "yes"))
}

/// Reads a single trimmed, lowercased line from `stdin`, or from the
/// process's standard input when `None`
pub fn read_answer(stdin: Option<&mut dyn BufRead>) -> std::io::Result<String> {
    let mut line = String::new();
    match stdin {
        Some(input) => input.read_line(&mut line)?,
        None => std::io::stdin().lock().read_line(&mut line)?,
    };
    Ok(line.trim().to_lowercase())
}
