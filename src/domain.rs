//! Base URL derivation from a document's declared schemes.

use crate::types::{Api, SECURE_SCHEME};

impl Api {
    /// Returns the scheme and host, e.g. `https://api.example.com`.
    ///
    /// Scans `schemes` in order and returns immediately on `https`,
    /// regardless of its position. Without a secure scheme the last scheme
    /// scanned wins (not the first; the scan runs to the end). An empty
    /// scheme list yields `://` plus the host.
    pub fn domain(&self) -> String {
        let mut scheme = "";
        for s in &self.schemes {
            if s == SECURE_SCHEME {
                return format!("{}://{}", s, self.host);
            }
            scheme = s;
        }
        format!("{}://{}", scheme, self.host)
    }
}
