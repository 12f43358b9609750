use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::client::ClientConfig;

/// Default API endpoint; overridable for tests and proxies.
pub(crate) const DEFAULT_URL: &str = "https://listen-api.listennotes.com";

#[derive(Debug, Default, PartialEq)]
struct RcConfig {
    url: Option<String>,
    key: Option<String>,
}

pub(crate) fn load_config(url: Option<String>, key: Option<String>) -> Result<ClientConfig> {
    let mut url = url.or_else(|| std::env::var("LISTENAPI_URL").ok());
    let mut key = key.or_else(|| std::env::var("LISTENAPI_KEY").ok());

    let rc_candidates = rc_candidates();

    if url.is_none() || key.is_none() {
        for rc_path in &rc_candidates {
            if rc_path.exists() {
                let cfg = read_rc(rc_path).with_context(|| {
                    format!("failed to read configuration file {}", rc_path.display())
                })?;

                if url.is_none() {
                    url = cfg.url;
                }
                if key.is_none() {
                    key = cfg.key;
                }
                break;
            }
        }
    }

    let url = url.unwrap_or_else(|| DEFAULT_URL.to_string());

    let key = match key {
        Some(v) => v,
        None => {
            if !rc_candidates.is_empty() {
                bail!(
                    "Missing configuration: key (set LISTENAPI_KEY or put `key:` in one of: {})",
                    rc_candidates
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            bail!("Missing configuration: key (set LISTENAPI_KEY or create .listenapirc)");
        }
    };

    Ok(ClientConfig { url, key })
}

fn read_rc(path: &Path) -> Result<RcConfig> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_rc(&text))
}

fn parse_rc(text: &str) -> RcConfig {
    let mut cfg = RcConfig::default();

    // Support formatting where `key:` is on one line and the token is on
    // the next line.
    let mut pending_key: Option<&str> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(pk) = pending_key {
            // Continuation value line (no colon)
            if !line.contains(':') {
                let v = strip_quotes(line);
                match pk {
                    "url" => cfg.url = Some(v.to_string()),
                    "key" => cfg.key = Some(v.to_string()),
                    _ => {}
                }
                pending_key = None;
                continue;
            }
            pending_key = None;
        }

        if let Some((k, v)) = line.split_once(':') {
            let k = k.trim();
            let v = strip_quotes(v.trim());
            match k {
                "url" => {
                    if !v.is_empty() {
                        cfg.url = Some(v.to_string());
                    } else {
                        pending_key = Some("url");
                    }
                }
                "key" => {
                    if !v.is_empty() {
                        cfg.key = Some(v.to_string());
                    } else {
                        pending_key = Some("key");
                    }
                }
                _ => {}
            }
        }
    }

    cfg
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"') && s.len() >= 2)
        || (s.starts_with('\'') && s.ends_with('\'') && s.len() >= 2)
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn rc_candidates() -> Vec<PathBuf> {
    // Search order:
    // 1) LISTENAPI_RC (explicit)
    // 2) ./.listenapirc (current working directory)
    // 3) ~/.listenapirc
    if let Ok(p) = std::env::var("LISTENAPI_RC") {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(".listenapirc"));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".listenapirc"));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rc_reads_url_and_key() {
        let cfg = parse_rc("url: http://localhost:9000\nkey: abc123\n");
        assert_eq!(cfg.url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cfg.key.as_deref(), Some("abc123"));
    }

    #[test]
    fn parse_rc_strips_quotes_and_skips_comments() {
        let cfg = parse_rc("# my config\nkey: \"abc123\"\nignored: value\n");
        assert_eq!(cfg.key.as_deref(), Some("abc123"));
        assert!(cfg.url.is_none());
    }

    #[test]
    fn parse_rc_accepts_value_on_continuation_line() {
        let cfg = parse_rc("key:\nabc123\n");
        assert_eq!(cfg.key.as_deref(), Some("abc123"));
    }

    #[test]
    fn parse_rc_empty_input_yields_nothing() {
        assert_eq!(parse_rc(""), RcConfig::default());
    }
}
