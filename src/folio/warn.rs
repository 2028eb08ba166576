fn sanitize_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
        } else if !ch.is_control() {
            out.push(ch);
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "na".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Emit a structured one-line warning to stderr. Values are collapsed to
/// single whitespace-free tokens.
pub fn emit(code: &str, folder: &str, file: &str, reason: &str, err: &str) {
    eprintln!(
        "FOLIO_WARN code={} folder={} file={} reason={} err={}",
        sanitize_value(code),
        sanitize_value(folder),
        sanitize_value(file),
        sanitize_value(reason),
        sanitize_value(err),
    );
}

#[cfg(test)]
mod tests {
    use super::sanitize_value;

    #[test]
    fn sanitize_value_rewrites_whitespace() {
        assert_eq!(sanitize_value("a b\tc"), "a_b_c");
    }

    #[test]
    fn sanitize_value_falls_back_for_empty() {
        assert_eq!(sanitize_value("   "), "na");
    }

    #[test]
    fn sanitize_value_strips_control_characters() {
        assert_eq!(sanitize_value("ok\u{7}fine"), "okfine");
    }
}
