use std::time::{SystemTime, UNIX_EPOCH};

/// Текущее unix-время в миллисекундах.
///
/// Движок wall-clock сам не читает: операции принимают `now_ms`
/// аргументом, а этот хелпер — для хостов и CLI.
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
