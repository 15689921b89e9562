/// Capability probe for the platform the viewer is embedded in.
///
/// Injected into the layout at construction so the zoom policy can branch on
/// form factor without reaching for a global capability registry.
pub trait PlatformProbe {
    /// True on mobile/touch form factors.
    fn is_mobile(&self) -> bool;
}

/// Static form-factor flag, sufficient for hosts that detect capabilities
/// once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFactor {
    pub mobile: bool,
}

impl FormFactor {
    pub const DESKTOP: Self = Self { mobile: false };
    pub const MOBILE: Self = Self { mobile: true };
}

impl PlatformProbe for FormFactor {
    fn is_mobile(&self) -> bool {
        self.mobile
    }
}
