use anyhow::{Context, Result};
use std::path::PathBuf;

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: lookup("SITE_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist_dir: lookup("SITE_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../dist")),
            assets_dir: lookup("SITE_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.dist_dir.ends_with("dist"));
        assert!(cfg.assets_dir.ends_with("assets"));
        assert!(cfg.index_file().ends_with("dist/index.html"));
    }

    #[test]
    fn env_overrides() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
