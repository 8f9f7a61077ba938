//! Handle to the application's current profile

use crate::models::HealthProfile;

/// Where the application keeps its in-memory "current user"
pub trait ProfileStore {
    fn current(&self) -> Option<&HealthProfile>;

    fn replace(&mut self, profile: HealthProfile);
}

/// Simple in-memory holder for the current profile
#[derive(Debug, Clone, Default)]
pub struct CurrentProfile {
    profile: Option<HealthProfile>,
}

impl CurrentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: HealthProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }
}

impl ProfileStore for CurrentProfile {
    fn current(&self) -> Option<&HealthProfile> {
        self.profile.as_ref()
    }

    fn replace(&mut self, profile: HealthProfile) {
        self.profile = Some(profile);
    }
}
