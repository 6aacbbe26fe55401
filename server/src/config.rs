use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_CLIENT_DIST_DIR: &str = "client/dist";
pub const DEFAULT_BOUNDARY_DIR: &str = "client/dist/geo";
pub const DEFAULT_PUBLIC_ORIGIN: &str = "https://statesidliveinmap.com";

pub const INDEX_FILE: &str = "index.html";
/// Placeholder in `index.html` replaced by share preview tags.
pub const META_MARKER: &str = "<!-- prefmap:meta -->";

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn client_dist_dir() -> PathBuf {
    non_empty_var("CLIENT_DIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CLIENT_DIST_DIR))
}

pub fn boundary_dir() -> PathBuf {
    non_empty_var("BOUNDARY_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BOUNDARY_DIR))
}

/// Origin used for absolute links in preview tags. Must be http(s); trailing
/// slashes are dropped.
pub fn public_origin() -> String {
    non_empty_var("PUBLIC_ORIGIN")
        .filter(|value| value.starts_with("http://") || value.starts_with("https://"))
        .map(|value| value.trim_end_matches('/').to_owned())
        .unwrap_or_else(|| DEFAULT_PUBLIC_ORIGIN.to_owned())
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        temp_env::with_vars_unset(
            ["PORT", "CLIENT_DIST_DIR", "BOUNDARY_DIR", "PUBLIC_ORIGIN"],
            || {
                assert_eq!(server_port(), DEFAULT_SERVER_PORT);
                assert_eq!(client_dist_dir(), PathBuf::from(DEFAULT_CLIENT_DIST_DIR));
                assert_eq!(boundary_dir(), PathBuf::from(DEFAULT_BOUNDARY_DIR));
                assert_eq!(public_origin(), DEFAULT_PUBLIC_ORIGIN);
            },
        );
    }

    #[test]
    fn port_rejects_garbage_and_zero() {
        temp_env::with_var("PORT", Some("8080"), || assert_eq!(server_port(), 8080));
        temp_env::with_var("PORT", Some("0"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT)
        });
        temp_env::with_var("PORT", Some("eighty"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT)
        });
    }

    #[test]
    fn directories_ignore_blank_values() {
        temp_env::with_vars(
            [("CLIENT_DIST_DIR", Some("/srv/app")), ("BOUNDARY_DIR", Some("  "))],
            || {
                assert_eq!(client_dist_dir(), PathBuf::from("/srv/app"));
                assert_eq!(boundary_dir(), PathBuf::from(DEFAULT_BOUNDARY_DIR));
            },
        );
    }

    #[test]
    fn public_origin_is_normalized() {
        temp_env::with_var("PUBLIC_ORIGIN", Some("http://localhost:3000/"), || {
            assert_eq!(public_origin(), "http://localhost:3000");
        });
        temp_env::with_var("PUBLIC_ORIGIN", Some("localhost"), || {
            assert_eq!(public_origin(), DEFAULT_PUBLIC_ORIGIN);
        });
    }
}
