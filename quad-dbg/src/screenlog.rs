use std::fmt::{self, Write};
use std::sync::{LazyLock, Mutex};

use log::{Level, Log, Metadata, Record, SetLoggerError};
use macroquad::prelude::{Color, GRAY, GREEN, RED, WHITE, YELLOW};
use macroquad::miniquad::date;

pub(crate) const LOG_CAP: usize = 30;
pub(crate) const LOG_LINE_LIFE: f64 = 3.0;
pub(crate) const LOG_CHARS_PER_LINE: usize = 255;

#[derive(Clone)]
pub(crate) struct LogLine {
    pub(crate) line: String,
    pub(crate) color: Color,
    pub(crate) spawn_time: f64,
}

/// Fixed-capacity ring of the most recent log lines.
pub(crate) struct LogRing {
    cursor: usize,
    lines: [LogLine; LOG_CAP],
}

impl LogRing {
    pub(crate) fn new() -> Self {
        Self {
            cursor: 0,
            lines: std::array::from_fn(|_| LogLine {
                line: String::with_capacity(LOG_CHARS_PER_LINE),
                color: WHITE,
                spawn_time: f64::NEG_INFINITY,
            }),
        }
    }

    pub(crate) fn put(&mut self, msg: &fmt::Arguments, color: Color, time: f64) {
        let cell = &mut self.lines[self.cursor];

        cell.line.clear();
        // Writing into a String can't fail
        let _ = write!(&mut cell.line, "{}", msg);
        if cell.line.len() > LOG_CHARS_PER_LINE {
            let mut end = LOG_CHARS_PER_LINE;
            while !cell.line.is_char_boundary(end) {
                end -= 1;
            }
            cell.line.truncate(end);
        }
        cell.color = color;
        cell.spawn_time = time;

        self.cursor = (self.cursor + 1) % LOG_CAP;
    }

    /// Lines younger than [LOG_LINE_LIFE], oldest first.
    pub(crate) fn live_lines(&self, now: f64) -> impl Iterator<Item = &LogLine> + '_ {
        self.lines[self.cursor..]
            .iter()
            .chain(&self.lines[..self.cursor])
            .filter(move |msg| msg.spawn_time + LOG_LINE_LIFE >= now)
    }
}

pub(crate) static LOG_RING: LazyLock<Mutex<LogRing>> =
    LazyLock::new(|| Mutex::new(LogRing::new()));

#[derive(Clone, Copy, Debug)]
struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => GREEN,
            Level::Debug => WHITE,
            Level::Trace => GRAY,
        };

        // Warnings and errors must reach the terminal even when
        // the window is already gone.
        if record.level() <= Level::Warn {
            eprintln!("[{}] {}", record.level(), record.args());
        }

        if let Ok(mut ring) = LOG_RING.lock() {
            ring.put(record.args(), color, date::now());
        }
    }

    fn flush(&self) { /* NOOP */ }
}

/// Installs the logger feeding the on-screen log. Can only
/// be done once per process.
pub fn init_on_screen_log() -> Result<(), SetLoggerError> {
    log::set_logger(&ON_SCREEN_LOG)
}
