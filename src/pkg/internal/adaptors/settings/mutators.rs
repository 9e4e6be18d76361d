use crate::pkg::internal::adaptors::settings::spec::{
    Branding, CompanyInfo, CompanySettings, EmailSettings,
};

/// Each settings card is saved as a whole.
pub struct SettingsMutator<'a> {
    state: &'a mut CompanySettings,
}

impl<'a> SettingsMutator<'a> {
    pub fn new(state: &'a mut CompanySettings) -> Self {
        SettingsMutator { state }
    }

    pub fn save_info(&mut self, info: CompanyInfo) {
        tracing::info!("company information saved for {}", &info.name);
        self.state.info = info;
    }

    pub fn save_branding(&mut self, branding: Branding) {
        tracing::info!("branding saved, primary colour {}", &branding.primary_color);
        self.state.branding = branding;
    }

    pub fn save_email(&mut self, email: EmailSettings) {
        tracing::info!("email settings saved, notifications to {}", &email.notification_email);
        self.state.email = email;
    }
}
