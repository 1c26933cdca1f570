use std::fmt::Debug;

use log::warn;
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

/// Logs a failed browser call. Returns whether it succeeded.
pub fn report<E: Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not {}: {:?}", action, e);
            false
        }
    }
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok())
        .flatten()
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        report(storage.set_item(key, value), &format!("persist {} to local storage", key));
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        report(storage.remove_item(key), &format!("remove {} from local storage", key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_flags_failures() {
        assert!(report::<String>(Ok(()), "remove cortex-user"));
        assert!(!report(Err("QuotaExceededError"), "remove cortex-user"));
    }
}
