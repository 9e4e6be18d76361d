//! Static dataset every session starts from.

use std::net::{IpAddr, Ipv4Addr};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::pkg::internal::adaptors::{
    jobs::spec::{EmploymentType, JobPosting, JobStatus},
    notifications::spec::{Notification, NotificationCategory},
    profile::spec::UserProfile,
    security::spec::{AlertPreferences, SecurityEvent, SecurityEventKind, SecuritySettings},
    settings::spec::{Branding, CompanyInfo, CompanySettings, EmailSettings},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid seed date")
}

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("invalid seed timestamp")
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    department: &str,
    location: &str,
    employment_type: EmploymentType,
    posted_date: NaiveDate,
    status: JobStatus,
    applicant_count: u32,
) -> JobPosting {
    JobPosting {
        id: id.into(),
        title: title.into(),
        department: department.into(),
        location: location.into(),
        employment_type,
        status,
        posted_date,
        applicant_count,
        description: None,
        requirements: None,
    }
}

pub fn jobs() -> Vec<JobPosting> {
    use EmploymentType::*;
    use JobStatus::*;
    vec![
        job("1", "Senior Software Engineer", "Engineering", "Remote", FullTime, date(2025, 4, 15), Active, 24),
        job("2", "Product Manager", "Product", "New York, NY", FullTime, date(2025, 4, 20), Active, 18),
        job("3", "UX Designer", "Design", "San Francisco, CA", FullTime, date(2025, 4, 22), Active, 12),
        job("4", "Marketing Specialist", "Marketing", "Chicago, IL", FullTime, date(2025, 4, 25), Active, 8),
        job("5", "Data Scientist", "Data", "Remote", FullTime, date(2025, 4, 26), Active, 15),
        job("6", "Customer Success Manager", "Customer Success", "Boston, MA", FullTime, date(2025, 4, 28), Active, 6),
        job("7", "Frontend Developer", "Engineering", "Remote", Contract, date(2025, 5, 1), Active, 19),
        job("8", "DevOps Engineer", "Engineering", "Seattle, WA", FullTime, date(2025, 5, 2), Active, 7),
        job("9", "HR Specialist", "Human Resources", "Remote", PartTime, date(2025, 5, 5), Draft, 0),
        job("10", "Content Writer", "Marketing", "Austin, TX", Contract, date(2025, 5, 8), Active, 11),
        job("11", "Sales Development Representative", "Sales", "Denver, CO", FullTime, date(2025, 5, 10), Active, 5),
        job("12", "Backend Developer", "Engineering", "Remote", FullTime, date(2025, 5, 11), Active, 16),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let entry = |id: &str, category, title: &str, message: &str, read, created_at| Notification {
        id: id.into(),
        category,
        title: title.into(),
        message: message.into(),
        read,
        created_at,
    };
    vec![
        entry(
            "1",
            NotificationCategory::Info,
            "New applicant",
            "New application received for Senior Software Engineer",
            false,
            timestamp(2025, 5, 11, 9, 15),
        ),
        entry(
            "2",
            NotificationCategory::Success,
            "Job post published",
            "Your job post for Product Manager has been published",
            false,
            timestamp(2025, 5, 11, 8, 30),
        ),
        entry(
            "3",
            NotificationCategory::Warning,
            "Job post expiring",
            "UX Designer job post will expire in 3 days",
            true,
            timestamp(2025, 5, 10, 14, 45),
        ),
        entry(
            "4",
            NotificationCategory::Error,
            "Security alert",
            "Unusual login attempt from new device",
            true,
            timestamp(2025, 5, 9, 11, 20),
        ),
    ]
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: "1".into(),
        first_name: "Alex".into(),
        last_name: "Morgan".into(),
        email: "alex.morgan@company.com".into(),
        role: "HR Manager".into(),
        department: "Human Resources".into(),
        avatar: Some("https://i.pravatar.cc/150?img=32".into()),
        phone: Some("+1 (555) 123-4567".into()),
        location: Some("New York, NY".into()),
        bio: Some(
            "HR professional with 8+ years of experience in talent acquisition and employee development."
                .into(),
        ),
        join_date: date(2022, 3, 15),
    }
}

pub fn company() -> CompanySettings {
    CompanySettings {
        info: CompanyInfo {
            name: "Acme Corporation".into(),
            industry: "Technology".into(),
            website: "https://acmecorp.com".into(),
            size: "50-200 employees".into(),
            founded: 2010,
            description: "Acme Corporation is a leading technology company specializing in innovative software solutions for businesses of all sizes. With a focus on cutting-edge technology and exceptional customer service, we help organizations streamline their operations and achieve their goals.".into(),
            headquarters: "New York, NY, USA".into(),
        },
        branding: Branding {
            primary_color: "#0f52ba".into(),
            logo: None,
            cover_image: None,
        },
        email: EmailSettings {
            notification_email: "hr@acmecorp.com".into(),
            new_applications: true,
            status_updates: true,
            weekly_report: true,
        },
    }
}

pub fn security() -> SecuritySettings {
    let office = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1));
    let event = |kind, at, ip, location: &str| SecurityEvent {
        kind,
        occurred_at: at,
        ip,
        location: location.into(),
    };
    SecuritySettings {
        two_factor_enabled: false,
        alerts: AlertPreferences::default(),
        activity: vec![
            event(SecurityEventKind::PasswordChanged, timestamp(2025, 5, 10, 0, 0), office, "New York, USA"),
            event(SecurityEventKind::LoginSucceeded, timestamp(2025, 5, 8, 0, 0), office, "New York, USA"),
            event(
                SecurityEventKind::LoginFailed,
                timestamp(2025, 5, 6, 0, 0),
                IpAddr::V4(Ipv4Addr::new(103, 42, 91, 5)),
                "Unknown",
            ),
            event(SecurityEventKind::TwoFactorChanged, timestamp(2025, 4, 22, 0, 0), office, "New York, USA"),
            event(SecurityEventKind::LoginSucceeded, timestamp(2025, 4, 15, 0, 0), office, "New York, USA"),
        ],
    }
}
