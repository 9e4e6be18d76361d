use crate::pkg::internal::adaptors::profile::spec::{ProfilePatch, UserState};

pub struct ProfileMutator<'a> {
    state: &'a mut UserState,
}

impl<'a> ProfileMutator<'a> {
    pub fn new(state: &'a mut UserState) -> Self {
        ProfileMutator { state }
    }

    /// Shallow merge into the signed-in profile. Does nothing when logged out.
    pub fn update(&mut self, patch: ProfilePatch) -> bool {
        match self.state.profile.as_mut() {
            Some(profile) => {
                profile.merge(patch);
                tracing::info!("profile {} updated", &profile.id);
                true
            }
            None => false,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
    }

    pub fn logout(&mut self) {
        if let Some(profile) = self.state.profile.take() {
            tracing::info!("{} {} logged out", &profile.first_name, &profile.last_name);
        }
        self.state.is_authenticated = false;
    }
}
