use crate::pkg::internal::adaptors::security::spec::{
    AlertPreferences, SecurityEvent, SecurityEventKind, SecuritySettings,
};

pub struct SecurityMutator<'a> {
    state: &'a mut SecuritySettings,
}

impl<'a> SecurityMutator<'a> {
    pub fn new(state: &'a mut SecuritySettings) -> Self {
        SecurityMutator { state }
    }

    pub fn record(&mut self, event: SecurityEvent) {
        tracing::info!("security event: {} from {}", event.kind, event.ip);
        self.state.activity.insert(0, event);
    }

    /// Logs a settings change only when the flag actually flips.
    pub fn set_two_factor(&mut self, enabled: bool) -> bool {
        if self.state.two_factor_enabled == enabled {
            return false;
        }
        self.state.two_factor_enabled = enabled;
        self.record(SecurityEvent::local(SecurityEventKind::TwoFactorChanged));
        true
    }

    pub fn set_alerts(&mut self, alerts: AlertPreferences) {
        self.state.alerts = alerts;
    }
}
