/// Environment variable that turns on debug output.
pub const LOG_ENV_VAR: &str = "REACT_SETUP_LOG";

/// Debug logging to stderr, enabled by `REACT_SETUP_LOG`
pub(crate) fn log_debug(scope: &str, msg: &str) {
    if std::env::var_os(LOG_ENV_VAR).is_some() {
        eprintln!("[DEBUG {}] {}", scope, msg);
    }
}
