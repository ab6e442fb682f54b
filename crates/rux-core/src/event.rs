#![forbid(unsafe_code)]

//! Host signals.
//!
//! The host toolkit owns focus, pointer and enabled state and delivers
//! changes to controls as [`HostSignal`] values. Controls never poll the
//! host; every state change arrives through one of these variants.

/// A focus, pointer or enablement change delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostSignal {
    /// The pointer moved over the control.
    PointerEntered,
    /// The pointer left the control.
    PointerExited,
    /// The control received keyboard focus.
    GotFocus,
    /// The control lost keyboard focus.
    LostFocus,
    /// The control was enabled (`true`) or disabled (`false`).
    EnabledChanged(bool),
    /// The user tapped or clicked the error hint indicator.
    HintTapped,
}

impl HostSignal {
    /// Short stable name, used in log fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PointerEntered => "pointer_entered",
            Self::PointerExited => "pointer_exited",
            Self::GotFocus => "got_focus",
            Self::LostFocus => "lost_focus",
            Self::EnabledChanged(true) => "enabled",
            Self::EnabledChanged(false) => "disabled",
            Self::HintTapped => "hint_tapped",
        }
    }
}
