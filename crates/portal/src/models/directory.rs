//! Directory record types.
//!
//! Plain records shown on the directory pages. They carry no lifecycle
//! logic; the seeded collections in [`crate::directory`] own them for the
//! process lifetime.

use chrono::{DateTime, NaiveDate, Utc};

use parivar_core::{
    CommitteeMemberId, DonorId, GalleryEventId, MemberId, MemberStatus, NoticeCategory, NoticeId,
    StudentId,
};

/// A registered family member in the directory.
#[derive(Debug, Clone)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub father_name: String,
    pub family_branch: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub occupation: String,
    pub business_category: Option<String>,
    pub company_name: Option<String>,
    pub status: MemberStatus,
    pub is_abroad: bool,
    pub abroad_country: Option<String>,
}

impl Member {
    /// "First Last" for table cells.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter initials for the avatar circle.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        initials.extend(self.first_name.chars().next());
        initials.extend(self.last_name.chars().next());
        initials
    }
}

/// A committee post held by a member.
#[derive(Debug, Clone)]
pub struct CommitteeMember {
    pub id: CommitteeMemberId,
    pub member_id: MemberId,
    pub position: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub responsibilities: Option<String>,
}

/// A recorded donation.
#[derive(Debug, Clone)]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Whole rupees.
    pub amount: i64,
    pub purpose: String,
    pub donation_date: NaiveDate,
    pub payment_method: String,
    pub member_id: Option<MemberId>,
}

/// A notice board entry.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub description: String,
    pub category: NoticeCategory,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A student achievement card.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub standard: String,
    /// Shown with a "%" suffix except for research degrees.
    pub percentage: String,
    pub stream: Option<String>,
    pub year: String,
    pub achievement: Option<String>,
    pub is_award_eligible: bool,
    pub award_type: Option<String>,
    pub member_id: Option<MemberId>,
}

impl Student {
    /// Percentage with its suffix; PhD entries carry a grade, not a percentage.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        if self.standard.contains("PhD") {
            self.percentage.clone()
        } else {
            format!("{}%", self.percentage)
        }
    }
}

/// A photo gallery event card.
#[derive(Debug, Clone)]
pub struct GalleryEvent {
    pub id: GalleryEventId,
    pub title: String,
    pub year: String,
    pub month: String,
    pub photo_count: u32,
    pub image_url: String,
}

/// A dashboard recent-activity entry.
#[derive(Debug, Clone)]
pub struct RecentActivity {
    pub title: String,
    /// Relative label, e.g. "2 days ago".
    pub time: String,
    /// Icon slug picked up by the template.
    pub icon: &'static str,
}

/// Totals shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy)]
pub struct DashboardStats {
    pub total_members: u32,
    pub upcoming_events: u32,
    pub total_students: u32,
    /// Whole rupees.
    pub total_donations: i64,
}
