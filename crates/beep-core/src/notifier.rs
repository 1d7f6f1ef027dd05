use alloc::string::String;

/// Raw answer of the platform notification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyReply {
    /// Return value of the call, zero means it failed.
    pub ret: usize,
    /// Whatever text the platform attached, even on success.
    pub diagnostic: Option<String>,
}

impl NotifyReply {
    pub fn ok() -> Self {
        Self { ret: 1, diagnostic: None }
    }

    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            ret: 0,
            diagnostic: Some(diagnostic.into()),
        }
    }
}

// Platform-agnostic notification sound facility
pub trait NotifierTrait {
    fn notify(&self, code: u32) -> NotifyReply;
}
