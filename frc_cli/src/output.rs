use anyhow::Result;
use serde::Serialize;

/// Writes a value to stdout as JSON, pretty unless `compact`.
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_json_handles_both_layouts() {
        let value = serde_json::json!({"Schedule": []});
        assert!(print_json(&value, true).is_ok());
        assert!(print_json(&value, false).is_ok());
    }
}
