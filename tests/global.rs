//! Tests for the process-wide default logger.
//!
//! One test only: the default instance is shared by every test in this binary.

mod common;

use common::SharedBuf;
use logrotating::{Flags, Level, Logger, Sink, global};
use std::sync::Arc;

#[test]
fn default_instance_lifecycle() {
    let initial = global::default_logger();
    assert_eq!(initial.level(), Level::Info);
    assert_eq!(initial.flags(), Flags::STD);
    assert!(!initial.is_rotatable());

    let buf = SharedBuf::new();
    let replacement = Arc::new(Logger::new(Sink::writer(buf.clone()), 0, Flags::NONE));
    let previous = global::set_default(Arc::clone(&replacement));
    assert!(Arc::ptr_eq(&previous, &initial));
    assert!(Arc::ptr_eq(&global::default_logger(), &replacement));

    global::info("via default");
    global::debug("filtered");
    global::set_level(Level::Debug);
    global::debug("now visible");
    global::warning("careful");
    global::error("broken");
    global::log(Level::Fatal, "not exiting through log");
    assert_eq!(
        buf.contents(),
        "INFO via default\nDEBUG now visible\nWARNING careful\nERROR broken\nFATAL not exiting through log\n"
    );

    global::set_flags(Flags::SHORT_FILE);
    let at = line!() + 1;
    global::info("located");
    assert!(buf.contents().ends_with(&format!("[global.rs:{at}] INFO located\n")));

    let signal = global::panic("stop");
    assert!(signal.line().ends_with("PANIC stop\n"));
}
