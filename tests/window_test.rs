//! Tests for window scanning over in-memory text

use textscan::matcher::Matcher;
use textscan::window::Window;

#[test]
fn test_scan_config_line() {
    let mut w = Window::new("  timeout = 30  ");
    w.trim();

    let mut key = String::new();
    w.consume_until_any(Some(&mut key), &[' ', '=']);
    assert_eq!(key, "timeout");

    w.trim_start();
    assert_eq!(w.consume_literal(None, "="), 1);
    w.trim_start();

    let mut value = String::new();
    w.consume_while(Some(&mut value), |c| c.is_ascii_digit());
    assert_eq!(value, "30");
    assert!(w.is_empty());
}

#[test]
fn test_split_semicolon_records() {
    let mut w = Window::new("ab;cd;ef");
    let mut records = Vec::new();
    loop {
        let mut field = String::new();
        if w.find(';').is_some() {
            w.consume_until(Some(&mut field), ';');
            w.consume_count(None, 1);
            records.push(field);
        } else {
            w.consume(Some(&mut field));
            records.push(field);
            break;
        }
    }
    assert_eq!(records, vec!["ab", "cd", "ef"]);
    assert!(w.is_empty());
}

#[test]
fn test_empty_fields_between_delimiters() {
    let mut w = Window::new("a;;b");
    let mut first = String::new();
    w.consume_until(Some(&mut first), ';');
    assert_eq!(first, "a");
    w.consume_count(None, 1);

    // Nothing sits before the next delimiter.
    let mut second = String::new();
    assert_eq!(w.consume_until(Some(&mut second), ';'), 0);
    assert_eq!(second, "");
    w.consume_count(None, 1);
    assert_eq!(w.text(), "b");
}

#[test]
fn test_peel_extensions_from_back() {
    let mut w = Window::new("bundle.tar.gz");

    let mut ext = String::new();
    assert_eq!(w.consume_end_until(Some(&mut ext), '.'), 2);
    assert_eq!(ext, "gz");
    assert_eq!(w.consume_end_literal(None, "."), 1);

    let mut next = String::new();
    assert_eq!(w.consume_end_until(Some(&mut next), '.'), 3);
    assert_eq!(next, "tar");
    assert_eq!(w.consume_end_literal(None, "."), 1);

    assert_eq!(w.text(), "bundle");
    assert_eq!(w.offset(), 0);
}

#[test]
fn test_tokenize_identifier_and_number() {
    let mut w = Window::new("count42 = 123");

    let mut ident = String::new();
    assert_eq!(w.consume_while(Some(&mut ident), |c| c.is_alphanumeric()), 7);
    assert_eq!(ident, "count42");

    w.trim_start();
    assert_eq!(w.consume_literal(None, "="), 1);
    w.trim_start();

    let mut number = String::new();
    assert_eq!(w.consume_while(Some(&mut number), |c| c.is_ascii_digit()), 3);
    assert_eq!(number, "123");
    assert!(w.is_empty());
}

#[test]
fn test_request_line_fields() {
    let line = Window::new("GET /index.html HTTP/1.1");

    let mut verb = line.clone();
    let mut out = String::new();
    verb.consume_until(Some(&mut out), ' ');
    assert_eq!(out, "GET");

    let mut rest = line.subwindow_from(4).unwrap();
    let mut path = String::new();
    rest.consume_until(Some(&mut path), ' ');
    assert_eq!(path, "/index.html");
    assert_eq!(rest.text(), " HTTP/1.1");

    // `line` itself is untouched throughout.
    assert_eq!(line.text(), "GET /index.html HTTP/1.1");
}

#[test]
fn test_matcher_reuse_across_windows() {
    let blank = |c: char| c == ' ';
    let spaces = Matcher::While(&blank);

    let mut a = Window::new("   x");
    let mut b = Window::new(" y");
    assert_eq!(a.consume_match(None, &spaces), 3);
    assert_eq!(b.consume_match(None, &spaces), 1);
    assert_eq!(a.text(), "x");
    assert_eq!(b.text(), "y");
}

#[test]
fn test_unicode_scanning() {
    let mut w = Window::new("日本語=にほんご");

    let mut script = String::new();
    assert_eq!(w.consume_until(Some(&mut script), '='), 3);
    assert_eq!(script, "日本語");
    assert_eq!(w.consume_count(None, 1), 1);

    let mut reading = String::new();
    assert_eq!(w.consume(Some(&mut reading)), 4);
    assert_eq!(reading, "にほんご");
}

#[test]
fn test_clones_scan_independently_across_threads() {
    let w = Window::new("alpha beta gamma");
    let mut handles = Vec::new();
    for _ in 0..4 {
        let mut local = w.clone();
        handles.push(std::thread::spawn(move || {
            let mut word = String::new();
            local.consume_until(Some(&mut word), ' ');
            word
        }));
    }
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "alpha");
    }
    assert_eq!(w.text(), "alpha beta gamma");
}

#[test]
fn test_out_of_range_reports_bounds() {
    let w = Window::new("abc");
    let err = w.substring(1, 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "range of 5 at offset 1 out of bounds for length 3"
    );

    let err = Window::with_offset("abc", 9).unwrap_err();
    assert_eq!(err.to_string(), "offset 9 out of bounds for length 3");
}
