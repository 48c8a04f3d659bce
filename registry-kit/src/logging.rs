//! Log formatting helpers.

use serde::Serialize;
use std::fmt::{self, Debug};

/// Pretty-print a value in log lines as indented JSON.
///
/// ```ignore
/// use registry_kit::Pretty;
/// debug!("seed: {}", Pretty(&seed));
/// ```
///
/// Output starts on a new line. Falls back to `{:#?}` if serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(&self.0) {
            Ok(json) => write!(f, "\n{json}"),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> Debug for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_as_indented_json_on_a_new_line() {
        let out = Pretty(json!({ "identifier": "0001" })).to_string();
        assert_eq!(out, "\n{\n  \"identifier\": \"0001\"\n}");
    }
}
