// File: crates/tvchart-core/src/bridge.rs
// Summary: Presentation bridge; the pull interface a rendering host uses to fetch figure payloads.

use crate::figure::{Figure, FigurePayload};

/// Read-only handle a rendering host pulls one figure's payload through.
#[derive(Clone, Copy, Debug)]
pub struct DataBridge<'a> {
    figure: &'a Figure,
}

impl<'a> DataBridge<'a> {
    pub fn new(figure: &'a Figure) -> Self { Self { figure } }

    pub fn title(&self) -> &str { self.figure.title() }

    /// Serialize the figure as it is right now. Nothing is cached.
    pub fn request_data(&self) -> FigurePayload { self.figure.serialize() }

    pub fn request_data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.request_data())
    }
}

/// External rendering host (a webview window, a file sink, ...).
///
/// `open` is called once per registered figure, in registration order, with the
/// window title and a bridge the host may pull from; `run` is called once after
/// every figure has been opened.
pub trait RenderHost {
    fn open(&mut self, title: &str, bridge: &DataBridge<'_>) -> anyhow::Result<()>;

    fn run(&mut self) -> anyhow::Result<()> { Ok(()) }
}
