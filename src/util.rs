// Console logging helpers. Browser-only: keep calls out of the pure state modules.

pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}
