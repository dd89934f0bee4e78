#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use sweph::{GeoPosition, Observer};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// 1981-08-22 11:21 UT, the instant used throughout the reference values
pub const REFERENCE_JD: f64 = 2444838.972916667;

/// Observer near Bozeman, Montana
pub fn bozeman() -> GeoPosition {
    GeoPosition::new(-112.183333, 45.45, 1524.0)
}

pub fn bozeman_observer() -> Observer {
    Observer::new(bozeman(), 1013.25, 15.0)
}

/// Runs `f` with `SWEPH_*` variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::apply(changes);
    f()
}

struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let saved = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { saved }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.saved.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
