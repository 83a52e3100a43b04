use crate::core::contact::ContactIntent;
use url::Url;

/// Gate in front of destructive operations. The core never asks; the session does.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Hands a contact request to the host platform. Fire-and-forget: nothing comes back.
pub trait ContactLauncher {
    fn launch(&mut self, intent: &ContactIntent, url: &Url);
}

/// Always answers the same way; used for `--yes` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
