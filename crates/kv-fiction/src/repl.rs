//! The read-evaluate loop.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::FictionResult;
use crate::session::FictionSession;

/// Configuration for the read-evaluate loop.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Lines that end the session.
    pub sentinels: Vec<String>,
    /// Whether to repeat each input line before the reply.
    pub echo: bool,
    /// Printed once before the first command.
    pub start_banner: String,
    /// Printed once when the session ends.
    pub stop_banner: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            sentinels: vec!["завершить".to_string(), "quit".to_string()],
            echo: true,
            start_banner: "Игра начата".to_string(),
            stop_banner: "Завершение игры...".to_string(),
        }
    }
}

impl ReplConfig {
    /// Turn input echo on or off.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Add a line that ends the session.
    pub fn with_sentinel(mut self, line: impl Into<String>) -> Self {
        self.sentinels.push(line.into());
        self
    }

    /// Whether this line ends the session.
    pub fn is_sentinel(&self, line: &str) -> bool {
        self.sentinels.iter().any(|s| s == line)
    }
}

/// How a loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplSummary {
    /// Number of commands answered.
    pub commands: usize,
    /// `true` if a sentinel line ended the run, `false` on end of input.
    pub stopped_by_sentinel: bool,
}

/// Read commands line by line, answer each one, until a sentinel line or
/// end of input.
///
/// Only I/O failures are returned as errors; bad commands are answered.
/// Lines need not be valid UTF-8: the echo shows the raw bytes and the
/// command sees them with invalid sequences replaced.
pub fn run<R: BufRead, W: Write>(
    session: &mut FictionSession,
    config: &ReplConfig,
    mut input: R,
    mut output: W,
) -> FictionResult<ReplSummary> {
    writeln!(output, "{}", config.start_banner)?;

    let mut summary = ReplSummary {
        commands: 0,
        stopped_by_sentinel: false,
    };

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = trim_line_end(&buf);
        let line = String::from_utf8_lossy(raw);

        if config.echo {
            writeln!(output, "Было введено: {}", quote(raw))?;
        }
        if config.is_sentinel(&line) {
            summary.stopped_by_sentinel = true;
            break;
        }

        let reply = session.respond(&line);
        debug!(input = %line, reply = %reply, "answered");
        writeln!(output, "{reply}")?;
        summary.commands += 1;
    }

    writeln!(output, "{}", config.stop_banner)?;
    output.flush()?;
    info!(
        commands = summary.commands,
        sentinel = summary.stopped_by_sentinel,
        "session ended"
    );
    Ok(summary)
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Double-quote a line for the echo. Printable characters are kept as they
/// are; control characters get C-style escapes and bytes that are not UTF-8
/// are shown as `\xNN`.
fn quote(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            push_escaped(&mut out, c);
        }
        for b in chunk.invalid() {
            out.push_str(&format!("\\x{b:02x}"));
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '"' | '\\' => {
            out.push('\\');
            out.push(c);
        }
        c if is_printable(c) => out.push(c),
        '\u{7}' => out.push_str("\\a"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{b}' => out.push_str("\\v"),
        c if (c as u32) < 0x20 || c == '\u{7f}' => out.push_str(&format!("\\x{:02x}", c as u32)),
        c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
        c => out.push_str(&format!("\\U{:08x}", c as u32)),
    }
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let format_or_private = matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{f0000}'..='\u{10ffff}'
    );
    !(c.is_control() || c.is_whitespace() || format_or_private)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kv_core::scenario;

    fn play(input: &str, config: &ReplConfig) -> (String, ReplSummary) {
        let mut session = FictionSession::new(scenario::apartment().unwrap()).unwrap();
        let mut out = Vec::new();
        let summary = run(&mut session, config, input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn echoes_and_answers_each_line() {
        let (out, summary) = play("осмотреться\nзавершить\n", &ReplConfig::default());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "Игра начата",
                "Было введено: \"осмотреться\"",
                "ты находишься на кухне, на столе: чай, надо собрать рюкзак и идти в универ. можно пройти - коридор",
                "Было введено: \"завершить\"",
                "Завершение игры...",
            ]
        );
        assert_eq!(summary.commands, 1);
        assert!(summary.stopped_by_sentinel);
    }

    #[test]
    fn lines_after_sentinel_are_ignored() {
        let (out, summary) = play("quit\nидти коридор\n", &ReplConfig::default());
        assert!(!out.contains("ничего интересного"));
        assert_eq!(summary.commands, 0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (out, summary) = play("летать", &ReplConfig::default());
        assert!(out.contains("неизвестная команда"));
        assert!(out.ends_with("Завершение игры...\n"));
        assert!(!summary.stopped_by_sentinel);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let (out, _) = play("идти коридор\r\n", &ReplConfig::default());
        assert!(out.contains("Было введено: \"идти коридор\"\n"));
        assert!(out.contains("ничего интересного"));
    }

    #[test]
    fn echo_can_be_disabled() {
        let config = ReplConfig::default().with_echo(false);
        let (out, _) = play("летать\n", &config);
        assert_eq!(out, "Игра начата\nнеизвестная команда\nЗавершение игры...\n");
    }

    #[test]
    fn empty_line_is_answered() {
        let (out, summary) = play("\n", &ReplConfig::default().with_echo(false));
        assert!(out.contains("неизвестная команда"));
        assert_eq!(summary.commands, 1);
    }

    #[test]
    fn invalid_utf8_is_answered_not_fatal() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice("осмотреться\n".as_bytes());

        let mut session = FictionSession::new(scenario::apartment().unwrap()).unwrap();
        let mut out = Vec::new();
        let summary = run(&mut session, &ReplConfig::default(), input.as_slice(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Было введено: \"\\xff\\xfe\"\nнеизвестная команда\n"));
        assert!(out.contains("ты находишься на кухне"));
        assert!(out.ends_with("Завершение игры...\n"));
        assert_eq!(summary.commands, 2);
    }

    #[test]
    fn quote_escapes_like_a_string_literal() {
        assert_eq!(quote("осмотреться".as_bytes()), "\"осмотреться\"");
        assert_eq!(quote(b"a\tb\"c\\"), r#""a\tb\"c\\""#);
        assert_eq!(quote(b"\x01\x7f\x07"), r#""\x01\x7f\a""#);
        assert_eq!(quote("\u{a0}\u{200b}".as_bytes()), r#""\u00a0\u200b""#);
        assert_eq!(quote("\u{f0000}".as_bytes()), r#""\U000f0000""#);
        assert_eq!(quote(b"\xe2\x82a"), r#""\xe2\x82a""#);
        assert_eq!(quote("идти  😀".as_bytes()), "\"идти  😀\"");
    }

    #[test]
    fn custom_sentinel() {
        let config = ReplConfig::default().with_sentinel("exit");
        assert!(config.is_sentinel("exit"));
        assert!(config.is_sentinel("завершить"));
        assert!(!config.is_sentinel("завершить "));
    }
}
