use crate::core::contact::ContactIntent;
use crate::domain::ports::ContactLauncher;
use std::io::Write;
use url::Url;

/// Terminal stand-in for the platform's URL opener: prints what would be opened.
#[derive(Debug)]
pub struct PrintLauncher<W: Write> {
    out: W,
}

impl<W: Write> PrintLauncher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ContactLauncher for PrintLauncher<W> {
    fn launch(&mut self, intent: &ContactIntent, url: &Url) {
        tracing::info!("Opening {} intent: {}", intent.label(), url);
        if let Err(e) = writeln!(self.out, "Opening {}", url) {
            tracing::warn!("Could not write {} intent: {}", intent.label(), e);
        }
    }
}
