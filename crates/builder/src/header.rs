//! Copyright header rendering

use elasi_config::constants::{VERSION_TOKEN, YEAR_TOKEN};
use elasi_errors::{ConfigError, Error};
use std::path::Path;
use tokio::fs;

/// Substitute every `#VERSION#` and `#YEAR#` token in `template`.
///
/// Both tokens are replaced in a single pass, so a version string that
/// happens to contain `#YEAR#` is inserted literally.
#[must_use]
pub fn render_copyright_header(template: &str, version: &str, year: i32) -> String {
    let year = year.to_string();
    let mut out = String::with_capacity(template.len() + version.len());
    let mut rest = template;

    loop {
        let next = [(VERSION_TOKEN, version), (YEAR_TOKEN, year.as_str())]
            .into_iter()
            .filter_map(|(token, value)| rest.find(token).map(|at| (at, token, value)))
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, token, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + token.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Read the header template from disk
///
/// # Errors
///
/// Returns a config error if the template is missing or unreadable.
pub async fn load_header_template(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::from_read(&e, path).into())
}
