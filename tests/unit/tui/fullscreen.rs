use super::*;

#[test]
fn probe_recognizes_xtwinops_terminals() {
    assert!(probe("xterm-256color", ""));
    assert!(probe("xterm", ""));
    assert!(probe("foot", ""));
    assert!(probe("", "WezTerm"));
    assert!(probe("", "iTerm.app"));
}

#[test]
fn probe_rejects_non_xtwinops_terminals() {
    assert!(!probe("dumb", ""));
    assert!(!probe("linux", ""));
    assert!(!probe("screen", ""));
    assert!(!probe("", ""));
}

#[test]
fn unsupported_requests_are_silent_noops() {
    let ops = XtermFullscreen::with_support(false);
    assert!(!ops.supported());
    assert!(ops.request().is_ok());
    assert!(ops.exit().is_ok());
}
