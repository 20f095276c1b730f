#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end: option values in, rendered lines out.

use std::io::Cursor;

use clap::Parser;
use pretty_assertions::assert_eq;
use statbar::{run, Bar, Cli, OutputFormat};
use statbar_diagnostic::NullSink;

fn bar(args: &[&str]) -> Bar {
    let argv = std::iter::once("statbar").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();
    Bar::new(cli.to_config(NullSink))
}

fn render(bar: &Bar, input: impl AsRef<[u8]>, format: OutputFormat) -> String {
    let mut out = Vec::new();
    run(bar, Cursor::new(input), &mut out, format).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_text_output_per_window() {
    let bar = bar(&["--heads", "20x10+0+0,14x10+20+0", "--fonts", "mono:10,bold:10"]);
    assert_eq!(bar.windows().len(), 2);

    let out = render(&bar, "{F1cpu} 5%{AR{S1net}ok}\n", OutputFormat::Text);
    assert_eq!(
        out,
        "0: cpu 5%            ok\n\
         1: cpu 5%   netok\n"
    );
}

#[test]
fn test_one_frame_per_input_line() {
    let bar = bar(&["--heads", "8x1+0+0"]);
    let out = render(&bar, "a\n{ARb}\n\nc", OutputFormat::Text);
    assert_eq!(out, "0: a\n0:        b\n0: \n0: c\n");
}

#[test]
fn test_invalid_utf8_line_is_drawn_lossily() {
    let bar = bar(&["--heads", "8x1+0+0"]);
    let out = render(&bar, b"a\n\xffb\nc\n", OutputFormat::Text);
    assert_eq!(out, "0: a\n0: \u{FFFD}b\n0: c\n");
}

#[test]
fn test_crlf_line_endings_are_stripped() {
    let bar = bar(&["--heads", "8x1+0+0"]);
    let out = render(&bar, "a\r\n{ARb}\r\n", OutputFormat::Text);
    assert_eq!(out, "0: a\n0:        b\n");
}

#[test]
fn test_screens_select_windows() {
    let bar = bar(&["--heads", "6x1+0+0,6x1+6+0,6x1+12+0"]);
    let out = render(&bar, "{S-1all}{S2,0two}", OutputFormat::Text);
    assert_eq!(out, "0: alltwo\n1: \n2: alltwo\n");
}

#[test]
fn test_skipped_monitor_has_no_window() {
    let bar = bar(&["--heads", "6x1+0+0,6x1+6+0", "--geometries", ",0x1+0+0"]);
    assert_eq!(bar.windows().len(), 1);
    assert_eq!(bar.windows()[0].head, 1);
    assert_eq!(render(&bar, "x", OutputFormat::Text), "0: x\n");
}

#[test]
fn test_malformed_markup_is_drawn_literally() {
    let bar = bar(&["--heads", "12x1+0+0"]);
    assert_eq!(
        render(&bar, "{Fx}y \\{z}", OutputFormat::Text),
        "0: {Fx}y {z}\n"
    );
}

#[test]
fn test_plan_output_is_json_lines() {
    let bar = bar(&["--heads", "10x16+0+0", "--bg", "0xFF102030"]);
    let out = render(&bar, "{CF0xFFFF0000hot}\nok\n", OutputFormat::Plan);
    let frames: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(frames.len(), 2);

    let first = &frames[0];
    assert_eq!(first["windows"][0]["width"], 10);
    assert_eq!(first["windows"][0]["height"], 16);
    assert_eq!(first["windows"][0]["background"]["blue"], 0x30);

    let op = &first["ops"][0];
    assert_eq!(op["text"], "hot");
    assert_eq!(op["x"], 0);
    assert_eq!(op["width"], 3);
    assert_eq!(op["foreground"]["red"], 0xFF);
    assert_eq!(op["foreground"]["green"], 0);
    assert_eq!(op["background"]["red"], 0x10);

    assert_eq!(frames[1]["ops"][0]["text"], "ok");
    assert_eq!(frames[1]["ops"][0]["foreground"]["green"], 0xFF);
}

#[test]
fn test_bottom_bars_are_planned_at_the_bottom() {
    let bar = bar(&["--bottom", "--heads", "100x50+0+0", "--geometries", "0x10+0+0"]);
    let window = bar.windows()[0];
    assert_eq!(window.rect.y, 40);
    assert_eq!(window.strut.bottom, 10);
    assert_eq!(bar.config().fonts.len(), 1);
}

#[test]
fn test_frame_matches_scanned_pieces() {
    let bar = bar(&["--heads", "30x1+0+0"]);
    let frame = bar.frame("{ARtest1{F1test2}}");
    let texts: Vec<_> = frame.ops.iter().map(|op| (op.text.as_str(), op.x)).collect();
    // The inner scope is placed first, against the right edge.
    assert_eq!(texts, vec![("test2", 25), ("test1", 20)]);
}
