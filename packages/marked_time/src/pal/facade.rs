use std::fmt::Debug;
use std::time::Instant;

#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, Platform, RealPlatform};

/// Selects between the real clock and, in tests, a fake one.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(p) => p.now(),
            #[cfg(test)]
            Self::Fake(p) => p.now(),
        }
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Fake(p) => p.fmt(f),
        }
    }
}
