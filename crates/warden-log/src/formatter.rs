use std::io;

use tracing_subscriber::fmt;

use crate::Level;

pub(crate) fn least_verbose(level: Level) {
    let format = fmt::format().without_time().with_target(false).compact();
    let _ = fmt()
        .with_max_level(level)
        .event_format(format)
        .with_writer(io::stderr)
        .try_init();
}

pub(crate) fn verbose(level: Level) {
    let _ = fmt().with_max_level(level).with_writer(io::stderr).try_init();
}

pub(crate) fn very_verbose(level: Level) {
    let _ = fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_thread_ids(true)
        .try_init();
}
