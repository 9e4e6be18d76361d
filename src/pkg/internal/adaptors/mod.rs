pub mod jobs;
pub mod notifications;
pub mod profile;
pub mod security;
pub mod settings;
