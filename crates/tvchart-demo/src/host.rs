// File: crates/tvchart-demo/src/host.rs
// Summary: Render host that writes each figure's payload to `<out_dir>/<title>.json`.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use tvchart_core::{DataBridge, RenderHost};

pub struct JsonDirHost {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonDirHost {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), written: Vec::new() }
    }

    pub fn written(&self) -> &[PathBuf] { &self.written }
}

impl RenderHost for JsonDirHost {
    fn open(&mut self, title: &str, bridge: &DataBridge<'_>) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating {}", self.out_dir.display()))?;
        let path = self.out_dir.join(format!("{}.json", slug(title)));
        let payload = serde_json::to_string_pretty(&bridge.request_data())?;
        std::fs::write(&path, payload).with_context(|| format!("writing {}", path.display()))?;
        info!(title, path = %path.display(), "wrote figure payload");
        self.written.push(path);
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        info!(figures = self.written.len(), dir = %self.out_dir.display(), "all payloads written");
        Ok(())
    }
}

/// File-name-safe version of a window title.
fn slug(title: &str) -> String {
    let s: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let s = s.trim_matches('_').to_string();
    if s.is_empty() { "figure".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn slug_is_file_name_safe() {
        assert_eq!(slug("BTC/USDT 6h"), "btc_usdt_6h");
        assert_eq!(slug("  "), "figure");
    }
}
