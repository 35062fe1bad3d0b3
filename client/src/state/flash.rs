//! One-shot notification banner state.
//!
//! Replaces blocking browser alerts: a flash is shown at the top of whatever
//! page is active and stays until dismissed or replaced, so it survives the
//! navigation that usually follows it (register -> login).

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS modifier for the banner.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "flash flash--success",
            Self::Error => "flash flash--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    pub current: Option<Flash>,
}

impl FlashState {
    pub fn success(&mut self, text: &str) {
        self.current = Some(Flash { kind: FlashKind::Success, text: text.to_owned() });
    }

    pub fn error(&mut self, text: &str) {
        self.current = Some(Flash { kind: FlashKind::Error, text: text.to_owned() });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
