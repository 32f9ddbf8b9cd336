use std::io::Write;
use std::slice;

use serde::Serialize;
use serde_json::Value;

use crate::console::{Channel, Console};

/// Value type accepted by the host console
pub type HostValue = Value;

/// Convert a `log!` argument, owned or borrowed, into a console value
///
/// Values that cannot be represented as JSON are logged as their error text.
#[must_use]
pub fn to_host_value<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| Value::String(e.to_string()))
}

/// Console for non-wasm32 targets (tests, tools, etc.)
///
/// Renders each call the way a browser console would without styling and
/// writes it as one line: the standard channel goes to stdout, the debug
/// channel to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostConsole;

impl Console for HostConsole {
    type Value = Value;

    fn write(&self, channel: Channel, values: Vec<Value>) {
        let line = render_line(&values);
        // A console has nowhere to report its own write failures
        let _ = write_line(
            channel,
            &line,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        );
    }
}

/// Write one rendered line: the standard channel to `out`, debug to `err`
fn write_line(
    channel: Channel,
    line: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    match channel {
        Channel::Log => writeln!(out, "{line}"),
        Channel::Debug => writeln!(err, "{line}"),
    }
}

/// Render console arguments into a single line of plain text
///
/// A leading string is treated as a format string whose substitution
/// directives consume the following arguments. `%c` consumes its argument
/// and prints nothing. Whatever is left is appended, space separated.
#[must_use]
pub fn render_line(values: &[Value]) -> String {
    let mut rest = values.iter();
    let mut parts: Vec<String> = Vec::with_capacity(values.len());

    if let Some(Value::String(format)) = values.first() {
        rest.next();
        let head = apply_directives(format, &mut rest);
        if !head.is_empty() {
            parts.push(head);
        }
    }

    parts.extend(rest.map(display_value));
    parts.join(" ")
}

fn apply_directives(format: &str, args: &mut slice::Iter<'_, Value>) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&directive) = chars.peek() else {
            out.push('%');
            break;
        };
        match directive {
            '%' => {
                chars.next();
                out.push('%');
            }
            'c' | 's' | 'd' | 'i' | 'f' | 'o' | 'O' => {
                chars.next();
                if let Some(arg) = args.next() {
                    substitute(directive, arg, &mut out);
                } else {
                    out.push('%');
                    out.push(directive);
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

#[allow(clippy::cast_possible_truncation)]
fn substitute(directive: char, arg: &Value, out: &mut String) {
    match directive {
        'c' => {}
        's' => out.push_str(&display_value(arg)),
        'd' | 'i' => match (arg.as_i64(), arg.as_f64()) {
            (Some(n), _) => out.push_str(&n.to_string()),
            (None, Some(n)) if n.is_finite() => out.push_str(&(n.trunc() as i64).to_string()),
            _ => out.push_str("NaN"),
        },
        'f' => match arg.as_f64() {
            Some(n) => out.push_str(&n.to_string()),
            None => out.push_str("NaN"),
        },
        _ => out.push_str(&arg.to_string()),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STYLE: &str = "border-radius: 0.3em; font-weight: 700; padding: 2px 0.33em; background-color: #1273d7; color: #fff;";

    #[test]
    fn test_standard_channel_writes_to_stdout() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_line(Channel::Log, "[holdmypics] visible", &mut out, &mut err)
            .expect("write to buffer should succeed");
        assert_eq!(String::from_utf8_lossy(&out), "[holdmypics] visible\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_debug_channel_writes_to_stderr() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_line(Channel::Debug, "[holdmypics] quiet", &mut out, &mut err)
            .expect("write to buffer should succeed");
        assert!(out.is_empty());
        assert_eq!(String::from_utf8_lossy(&err), "[holdmypics] quiet\n");
    }

    #[test]
    fn test_to_host_value_accepts_owned_and_borrowed() {
        let name = String::from("banner.png");
        let width = 300;
        assert_eq!(to_host_value(&name), json!("banner.png"));
        assert_eq!(to_host_value(name.clone()), json!("banner.png"));
        assert_eq!(to_host_value(&width), json!(300));
        assert_eq!(to_host_value(&format!("{width}px")), json!("300px"));
        assert_eq!(to_host_value(Some(1.5)), json!(1.5));
        assert_eq!(to_host_value(vec!["a", "b"]), json!(["a", "b"]));
    }

    #[test]
    fn test_to_host_value_reports_unrepresentable_values() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "pair keys");
        assert!(to_host_value(&map).is_string());
    }

    #[test]
    fn test_style_directive_is_consumed() {
        let line = render_line(&[json!("%c[holdmypics]"), json!(STYLE), json!("hello"), json!(42)]);
        assert_eq!(line, "[holdmypics] hello 42");
    }

    #[test]
    fn test_prefix_only() {
        assert_eq!(render_line(&[json!("%c[holdmypics]"), json!(STYLE)]), "[holdmypics]");
    }

    #[test]
    fn test_empty_call() {
        assert_eq!(render_line(&[]), "");
    }

    #[test]
    fn test_string_and_number_substitution() {
        let line = render_line(&[json!("%s has %d items (%f)"), json!("cart"), json!(3.9), json!(1.5)]);
        assert_eq!(line, "cart has 3 items (1.5)");
    }

    #[test]
    fn test_integer_of_non_number() {
        assert_eq!(render_line(&[json!("%i"), json!("x")]), "NaN");
    }

    #[test]
    fn test_object_directive_prints_json() {
        let line = render_line(&[json!("size %o"), json!({"w": 300})]);
        assert_eq!(line, r#"size {"w":300}"#);
    }

    #[test]
    fn test_missing_argument_keeps_directive() {
        assert_eq!(render_line(&[json!("%s and %s"), json!("one")]), "one and %s");
    }

    #[test]
    fn test_escaped_and_unknown_directives() {
        assert_eq!(render_line(&[json!("100%% done %x")]), "100% done %x");
        assert_eq!(render_line(&[json!("trailing %")]), "trailing %");
    }

    #[test]
    fn test_non_string_first_value_is_not_a_format() {
        let line = render_line(&[json!(1), json!("%c"), json!(null), json!([1, 2])]);
        assert_eq!(line, "1 %c null [1,2]");
    }

    #[test]
    fn test_bare_style_directive_adds_no_leading_space() {
        assert_eq!(render_line(&[json!("%c"), json!("color: red;"), json!("msg")]), "msg");
    }
}
