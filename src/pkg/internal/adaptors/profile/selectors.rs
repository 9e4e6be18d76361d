use crate::pkg::internal::adaptors::profile::spec::{UserProfile, UserState};

pub struct ProfileSelector<'a> {
    state: &'a UserState,
}

impl<'a> ProfileSelector<'a> {
    pub fn new(state: &'a UserState) -> Self {
        ProfileSelector { state }
    }

    pub fn profile(&self) -> Option<&'a UserProfile> {
        self.state.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&'a str> {
        self.state.error.as_deref()
    }

    pub fn first_name(&self) -> Option<&'a str> {
        self.profile().map(|p| p.first_name.as_str())
    }

    pub fn display_name(&self) -> String {
        match self.profile() {
            Some(p) => format!("{} {}", p.first_name, p.last_name),
            None => "User".into(),
        }
    }

    pub fn initials(&self) -> String {
        match self.profile() {
            Some(p) => p
                .first_name
                .chars()
                .take(1)
                .chain(p.last_name.chars().take(1))
                .collect(),
            None => "U".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::{adaptors::profile::mutators::ProfileMutator, seed};

    #[test]
    #[traced_test]
    fn test_names_signed_in_and_out() {
        let mut state = UserState::signed_in(seed::profile());
        let selector = ProfileSelector::new(&state);
        assert_eq!(selector.display_name(), "Alex Morgan");
        assert_eq!(selector.initials(), "AM");
        assert_eq!(selector.first_name(), Some("Alex"));

        ProfileMutator::new(&mut state).logout();
        let selector = ProfileSelector::new(&state);
        assert_eq!(selector.display_name(), "User");
        assert_eq!(selector.initials(), "U");
        assert!(!selector.is_authenticated());
    }
}
