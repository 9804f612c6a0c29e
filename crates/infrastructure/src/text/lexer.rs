use dnsp_record_domain::CodecError;

/// Splits presentation text into tokens.
///
/// Quoted strings stay one token with their quotes and escapes intact, so
/// later stages can tell `"a b"` from `a b`. Parentheses only group lines
/// and are dropped; `;` comments run to the end of the line.
pub fn tokenize(input: &str) -> Result<Vec<String>, CodecError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();
    let mut depth = 0usize;
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            current.push(c);
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => return Err(CodecError::unparsable("dangling escape in quoted string")),
                },
                '"' => {
                    in_quotes = false;
                    tokens.push(std::mem::take(&mut current));
                }
                _ => {}
            }
            continue;
        }

        match c {
            '"' if current.is_empty() => {
                in_quotes = true;
                current.push(c);
            }
            '\\' => {
                current.push(c);
                match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => return Err(CodecError::unparsable("dangling escape")),
                }
            }
            ';' => {
                flush(&mut current, &mut tokens);
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            '(' => {
                flush(&mut current, &mut tokens);
                depth += 1;
            }
            ')' => {
                flush(&mut current, &mut tokens);
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| CodecError::unparsable("unbalanced ')'"))?;
            }
            c if c.is_whitespace() => flush(&mut current, &mut tokens),
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(CodecError::unparsable("unterminated quoted string"));
    }
    if depth != 0 {
        return Err(CodecError::unparsable("unbalanced '('"));
    }
    flush(&mut current, &mut tokens);
    Ok(tokens)
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
