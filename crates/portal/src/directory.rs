//! Seeded directory collections and their queries.
//!
//! The directory pages render from collections seeded once at startup and
//! held in memory for the process lifetime. Page-level actions ("add
//! donor", "create notice", uploads) are acknowledged but do not mutate
//! these collections; the portal is a read-only window onto the roster.

use chrono::{Datelike, DateTime, Duration, NaiveDate, Utc};

use parivar_core::{
    CommitteeMemberId, DonorId, GalleryEventId, MemberId, MemberStatus, NoticeCategory, NoticeId,
    StudentId,
};

use crate::models::directory::{
    CommitteeMember, DashboardStats, Donor, GalleryEvent, Member, Notice, RecentActivity, Student,
};

/// All directory collections, seeded at startup.
#[derive(Debug, Clone)]
pub struct Directory {
    members: Vec<Member>,
    committee: Vec<CommitteeMember>,
    donors: Vec<Donor>,
    notices: Vec<Notice>,
    students: Vec<Student>,
    gallery: Vec<GalleryEvent>,
    stats: DashboardStats,
}

impl Directory {
    /// Build the seeded directory.
    #[must_use]
    pub fn seed() -> Self {
        let now = Utc::now();
        Self {
            members: seed_members(),
            committee: seed_committee(),
            donors: seed_donors(),
            notices: seed_notices(now),
            students: seed_students(),
            gallery: seed_gallery(),
            stats: DashboardStats {
                total_members: 1247,
                upcoming_events: 8,
                total_students: 156,
                total_donations: 245_000,
            },
        }
    }

    /// Dashboard stat card totals.
    #[must_use]
    pub const fn stats(&self) -> DashboardStats {
        self.stats
    }

    /// Recent-activity feed for the dashboard.
    #[must_use]
    pub fn recent_activity(&self) -> Vec<RecentActivity> {
        vec![
            RecentActivity {
                title: "New member Kiran Bhikadiya registered".to_owned(),
                time: "2 hours ago".to_owned(),
                icon: "user-plus",
            },
            RecentActivity {
                title: "Photos from Diwali celebration uploaded".to_owned(),
                time: "1 day ago".to_owned(),
                icon: "images",
            },
            RecentActivity {
                title: "Student achievement award announced".to_owned(),
                time: "3 days ago".to_owned(),
                icon: "trophy",
            },
        ]
    }

    /// All members, optionally filtered by a case-insensitive search over
    /// first name, last name, and email.
    #[must_use]
    pub fn members(&self, query: Option<&str>) -> Vec<Member> {
        filter_by_query(&self.members, query, |member, q| {
            member.first_name.to_lowercase().contains(q)
                || member.last_name.to_lowercase().contains(q)
                || member.email.to_lowercase().contains(q)
        })
    }

    /// Total number of members in the directory.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Members currently living abroad, optionally filtered by name or
    /// country.
    #[must_use]
    pub fn abroad_members(&self, query: Option<&str>) -> Vec<Member> {
        let abroad: Vec<Member> = self
            .members
            .iter()
            .filter(|m| m.is_abroad)
            .cloned()
            .collect();
        filter_by_query(&abroad, query, |member, q| {
            member.first_name.to_lowercase().contains(q)
                || member.last_name.to_lowercase().contains(q)
                || member
                    .abroad_country
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(q))
        })
    }

    /// Committee posts, optionally filtered by member name or position.
    #[must_use]
    pub fn committee(&self, query: Option<&str>) -> Vec<CommitteeMember> {
        filter_by_query(&self.committee, query, |post, q| {
            post.position.to_lowercase().contains(q)
                || self.member_name(post.member_id).to_lowercase().contains(q)
        })
    }

    /// Resolve a member reference to a display name.
    ///
    /// Dangling references render as "Unknown Member" rather than failing
    /// the page.
    #[must_use]
    pub fn member_name(&self, id: MemberId) -> String {
        self.members
            .iter()
            .find(|m| m.id == id)
            .map_or_else(|| "Unknown Member".to_owned(), Member::full_name)
    }

    /// Donations, optionally filtered by donor name or purpose.
    #[must_use]
    pub fn donors(&self, query: Option<&str>) -> Vec<Donor> {
        filter_by_query(&self.donors, query, |donor, q| {
            donor.name.to_lowercase().contains(q) || donor.purpose.to_lowercase().contains(q)
        })
    }

    /// Sum of the given donations in whole rupees.
    #[must_use]
    pub fn donations_total(donors: &[Donor]) -> i64 {
        donors.iter().map(|d| d.amount).sum()
    }

    /// Sum of the given donations made in `year`.
    #[must_use]
    pub fn donations_total_for_year(donors: &[Donor], year: i32) -> i64 {
        donors
            .iter()
            .filter(|d| d.donation_date.year() == year)
            .map(|d| d.amount)
            .sum()
    }

    /// Notices, newest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = self.notices.clone();
        notices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notices
    }

    /// Students, optionally restricted to one standard.
    #[must_use]
    pub fn students(&self, standard: Option<&str>) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| standard.is_none_or(|want| s.standard == want))
            .cloned()
            .collect()
    }

    /// Distinct standards, in seed order.
    #[must_use]
    pub fn standards(&self) -> Vec<String> {
        let mut standards = Vec::new();
        for student in &self.students {
            if !standards.contains(&student.standard) {
                standards.push(student.standard.clone());
            }
        }
        standards
    }

    /// Gallery events, optionally filtered by year and by a term matched
    /// against the event title.
    #[must_use]
    pub fn gallery(&self, year: Option<&str>, event: Option<&str>) -> Vec<GalleryEvent> {
        self.gallery
            .iter()
            .filter(|g| year.is_none_or(|want| g.year == want))
            .filter(|g| {
                event.is_none_or(|want| g.title.to_lowercase().contains(&want.to_lowercase()))
            })
            .cloned()
            .collect()
    }

    /// Distinct gallery years, newest first.
    #[must_use]
    pub fn gallery_years(&self) -> Vec<String> {
        let mut years: Vec<String> = Vec::new();
        for event in &self.gallery {
            if !years.contains(&event.year) {
                years.push(event.year.clone());
            }
        }
        years.sort();
        years.reverse();
        years
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::seed()
    }
}

fn filter_by_query<T: Clone>(
    items: &[T],
    query: Option<&str>,
    matches: impl Fn(&T, &str) -> bool,
) -> Vec<T> {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => {
            let q = q.to_lowercase();
            items
                .iter()
                .filter(|item| matches(item, &q))
                .cloned()
                .collect()
        }
        None => items.to_vec(),
    }
}

/// Relative age label for a notice, bucketed the way the notice board
/// displays it.
#[must_use]
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created_at).num_days().max(1);
    if days == 1 {
        "1 day ago".to_owned()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 14 {
        "1 week ago".to_owned()
    } else if days < 21 {
        "2 weeks ago".to_owned()
    } else {
        "3 weeks ago".to_owned()
    }
}

// =============================================================================
// Seed Data
// =============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // The seed literals below are all valid calendar dates.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn seed_members() -> Vec<Member> {
    vec![
        Member {
            id: MemberId::new(1),
            first_name: "Ramesh".to_owned(),
            last_name: "Bhikadiya".to_owned(),
            email: "ramesh.bhikadiya@gmail.com".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            date_of_birth: date(1968, 3, 14),
            gender: "Male".to_owned(),
            father_name: "Jivraj Bhikadiya".to_owned(),
            family_branch: "Surat".to_owned(),
            address: "14 Ashirwad Society, Varachha Road".to_owned(),
            city: "Surat".to_owned(),
            state: "Gujarat".to_owned(),
            occupation: "Diamond Merchant".to_owned(),
            business_category: Some("Gems & Jewellery".to_owned()),
            company_name: Some("Shree Krishna Diamonds".to_owned()),
            status: MemberStatus::Active,
            is_abroad: false,
            abroad_country: None,
        },
        Member {
            id: MemberId::new(2),
            first_name: "Asha".to_owned(),
            last_name: "Bhikadiya".to_owned(),
            email: "asha.bhikadiya@gmail.com".to_owned(),
            phone: "+91 98765 43220".to_owned(),
            date_of_birth: date(1975, 8, 2),
            gender: "Female".to_owned(),
            father_name: "Ramesh Bhikadiya".to_owned(),
            family_branch: "Surat".to_owned(),
            address: "14 Ashirwad Society, Varachha Road".to_owned(),
            city: "Surat".to_owned(),
            state: "Gujarat".to_owned(),
            occupation: "Teacher".to_owned(),
            business_category: None,
            company_name: None,
            status: MemberStatus::Active,
            is_abroad: false,
            abroad_country: None,
        },
        Member {
            id: MemberId::new(3),
            first_name: "Mahesh".to_owned(),
            last_name: "Bhikadiya".to_owned(),
            email: "mahesh.b@outlook.com".to_owned(),
            phone: "+91 98765 43230".to_owned(),
            date_of_birth: date(1972, 11, 21),
            gender: "Male".to_owned(),
            father_name: "Jivraj Bhikadiya".to_owned(),
            family_branch: "Amreli".to_owned(),
            address: "B-7 Parivar Residency".to_owned(),
            city: "Amreli".to_owned(),
            state: "Gujarat".to_owned(),
            occupation: "Civil Engineer".to_owned(),
            business_category: Some("Construction".to_owned()),
            company_name: Some("MB Infrastructure".to_owned()),
            status: MemberStatus::Active,
            is_abroad: false,
            abroad_country: None,
        },
        Member {
            id: MemberId::new(4),
            first_name: "Priya".to_owned(),
            last_name: "Bhikadiya".to_owned(),
            email: "priya.bhikadiya@yahoo.com".to_owned(),
            phone: "+1 408 555 0164".to_owned(),
            date_of_birth: date(1990, 5, 9),
            gender: "Female".to_owned(),
            father_name: "Mahesh Bhikadiya".to_owned(),
            family_branch: "Amreli".to_owned(),
            address: "221 Blossom Hill Rd".to_owned(),
            city: "San Jose".to_owned(),
            state: "California".to_owned(),
            occupation: "Software Engineer".to_owned(),
            business_category: None,
            company_name: None,
            status: MemberStatus::Active,
            is_abroad: true,
            abroad_country: Some("USA".to_owned()),
        },
        Member {
            id: MemberId::new(5),
            first_name: "Jignesh".to_owned(),
            last_name: "Bhikadiya".to_owned(),
            email: "jignesh.bk@gmail.com".to_owned(),
            phone: "+44 20 7946 0011".to_owned(),
            date_of_birth: date(1983, 1, 27),
            gender: "Male".to_owned(),
            father_name: "Ramesh Bhikadiya".to_owned(),
            family_branch: "Surat".to_owned(),
            address: "8 Wembley Park Drive".to_owned(),
            city: "London".to_owned(),
            state: "England".to_owned(),
            occupation: "Pharmacist".to_owned(),
            business_category: Some("Healthcare".to_owned()),
            company_name: Some("Wembley Pharmacy".to_owned()),
            status: MemberStatus::Active,
            is_abroad: true,
            abroad_country: Some("UK".to_owned()),
        },
        Member {
            id: MemberId::new(6),
            first_name: "Kiran".to_owned(),
            last_name: "Bhikadiya".to_owned(),
            email: "kiran.bhikadiya@gmail.com".to_owned(),
            phone: "+91 98765 43260".to_owned(),
            date_of_birth: date(1995, 9, 16),
            gender: "Male".to_owned(),
            father_name: "Suresh Bhikadiya".to_owned(),
            family_branch: "Bhavnagar".to_owned(),
            address: "3 Nilkanth Park".to_owned(),
            city: "Bhavnagar".to_owned(),
            state: "Gujarat".to_owned(),
            occupation: "Chartered Accountant".to_owned(),
            business_category: None,
            company_name: None,
            status: MemberStatus::Pending,
            is_abroad: false,
            abroad_country: None,
        },
    ]
}

fn seed_committee() -> Vec<CommitteeMember> {
    vec![
        CommitteeMember {
            id: CommitteeMemberId::new(1),
            member_id: MemberId::new(1),
            position: "President".to_owned(),
            department: "Executive".to_owned(),
            start_date: date(2022, 4, 1),
            end_date: None,
            is_active: true,
            responsibilities: Some("Overall coordination and annual gathering".to_owned()),
        },
        CommitteeMember {
            id: CommitteeMemberId::new(2),
            member_id: MemberId::new(3),
            position: "Treasurer".to_owned(),
            department: "Finance".to_owned(),
            start_date: date(2022, 4, 1),
            end_date: None,
            is_active: true,
            responsibilities: Some("Donation accounts and audits".to_owned()),
        },
        CommitteeMember {
            id: CommitteeMemberId::new(3),
            member_id: MemberId::new(2),
            position: "Secretary".to_owned(),
            department: "Executive".to_owned(),
            start_date: date(2023, 4, 1),
            end_date: None,
            is_active: true,
            responsibilities: Some("Minutes and member correspondence".to_owned()),
        },
        CommitteeMember {
            id: CommitteeMemberId::new(4),
            member_id: MemberId::new(5),
            position: "Events Coordinator".to_owned(),
            department: "Events".to_owned(),
            start_date: date(2021, 4, 1),
            end_date: Some(date(2023, 3, 31)),
            is_active: false,
            responsibilities: None,
        },
    ]
}

fn seed_donors() -> Vec<Donor> {
    vec![
        Donor {
            id: DonorId::new(1),
            name: "Ramesh Bhikadiya".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            email: Some("ramesh.bhikadiya@gmail.com".to_owned()),
            amount: 51_000,
            purpose: "Temple Renovation".to_owned(),
            donation_date: date(2024, 10, 28),
            payment_method: "Bank Transfer".to_owned(),
            member_id: Some(MemberId::new(1)),
        },
        Donor {
            id: DonorId::new(2),
            name: "Mahesh Bhikadiya".to_owned(),
            phone: "+91 98765 43230".to_owned(),
            email: None,
            amount: 25_000,
            purpose: "Education Fund".to_owned(),
            donation_date: date(2024, 6, 15),
            payment_method: "UPI".to_owned(),
            member_id: Some(MemberId::new(3)),
        },
        Donor {
            id: DonorId::new(3),
            name: "Priya Bhikadiya".to_owned(),
            phone: "+1 408 555 0164".to_owned(),
            email: Some("priya.bhikadiya@yahoo.com".to_owned()),
            amount: 1_11_000,
            purpose: "Medical Aid".to_owned(),
            donation_date: date(2023, 12, 3),
            payment_method: "Bank Transfer".to_owned(),
            member_id: Some(MemberId::new(4)),
        },
        Donor {
            id: DonorId::new(4),
            name: "Shree Krishna Diamonds".to_owned(),
            phone: "+91 261 250 1234".to_owned(),
            email: None,
            amount: 21_000,
            purpose: "Annual Gathering".to_owned(),
            donation_date: date(2024, 1, 9),
            payment_method: "Cash".to_owned(),
            member_id: None,
        },
    ]
}

fn seed_notices(now: DateTime<Utc>) -> Vec<Notice> {
    vec![
        Notice {
            id: NoticeId::new(1),
            title: "Annual Family Gathering 2025".to_owned(),
            description: "The annual gathering will be held at Surat on 26 January. \
                          All families are requested to confirm attendance."
                .to_owned(),
            category: NoticeCategory::Event,
            target_date: Some(date(2025, 1, 26)),
            created_at: now - Duration::days(2),
        },
        Notice {
            id: NoticeId::new(2),
            title: "Student Award Applications Open".to_owned(),
            description: "Students scoring above 80% in board exams may apply for the \
                          annual achievement award. Upload marksheets by month end."
                .to_owned(),
            category: NoticeCategory::Achievement,
            target_date: None,
            created_at: now - Duration::days(6),
        },
        Notice {
            id: NoticeId::new(3),
            title: "Temple Renovation Donation Drive".to_owned(),
            description: "Contributions toward the village temple renovation are being \
                          collected through the finance committee."
                .to_owned(),
            category: NoticeCategory::Donation,
            target_date: Some(date(2025, 3, 31)),
            created_at: now - Duration::days(10),
        },
        Notice {
            id: NoticeId::new(4),
            title: "Directory Details Verification".to_owned(),
            description: "Members are requested to verify their directory entries and \
                          report corrections to the secretary."
                .to_owned(),
            category: NoticeCategory::Update,
            target_date: None,
            created_at: now - Duration::days(18),
        },
    ]
}

fn seed_students() -> Vec<Student> {
    vec![
        Student {
            id: StudentId::new(1),
            name: "Kavya Bhikadiya".to_owned(),
            standard: "10th Standard".to_owned(),
            percentage: "94".to_owned(),
            stream: None,
            year: "2024".to_owned(),
            achievement: Some("School topper, mathematics olympiad finalist".to_owned()),
            is_award_eligible: true,
            award_type: Some("Gold Medal".to_owned()),
            member_id: Some(MemberId::new(1)),
        },
        Student {
            id: StudentId::new(2),
            name: "Dev Bhikadiya".to_owned(),
            standard: "12th Science".to_owned(),
            percentage: "91".to_owned(),
            stream: Some("PCM".to_owned()),
            year: "2024".to_owned(),
            achievement: Some("Admitted to NIT Surat".to_owned()),
            is_award_eligible: true,
            award_type: Some("Silver Medal".to_owned()),
            member_id: Some(MemberId::new(3)),
        },
        Student {
            id: StudentId::new(3),
            name: "Riya Bhikadiya".to_owned(),
            standard: "B.Tech".to_owned(),
            percentage: "88".to_owned(),
            stream: Some("Computer Engineering".to_owned()),
            year: "2023".to_owned(),
            achievement: None,
            is_award_eligible: false,
            award_type: None,
            member_id: Some(MemberId::new(4)),
        },
        Student {
            id: StudentId::new(4),
            name: "Nilesh Bhikadiya".to_owned(),
            standard: "PhD (Chemistry)".to_owned(),
            percentage: "A+".to_owned(),
            stream: Some("Organic Chemistry".to_owned()),
            year: "2022".to_owned(),
            achievement: Some("Published in international journal".to_owned()),
            is_award_eligible: true,
            award_type: Some("Special Recognition".to_owned()),
            member_id: None,
        },
    ]
}

fn seed_gallery() -> Vec<GalleryEvent> {
    vec![
        GalleryEvent {
            id: GalleryEventId::new(1),
            title: "Diwali Celebration".to_owned(),
            year: "2024".to_owned(),
            month: "November".to_owned(),
            photo_count: 48,
            image_url: "/static/images/gallery/diwali-2024.jpg".to_owned(),
        },
        GalleryEvent {
            id: GalleryEventId::new(2),
            title: "Annual Family Gathering".to_owned(),
            year: "2024".to_owned(),
            month: "January".to_owned(),
            photo_count: 132,
            image_url: "/static/images/gallery/gathering-2024.jpg".to_owned(),
        },
        GalleryEvent {
            id: GalleryEventId::new(3),
            title: "New Year Celebration".to_owned(),
            year: "2023".to_owned(),
            month: "December".to_owned(),
            photo_count: 27,
            image_url: "/static/images/gallery/new-year-2023.jpg".to_owned(),
        },
        GalleryEvent {
            id: GalleryEventId::new(4),
            title: "Wedding - Jignesh & Meera".to_owned(),
            year: "2023".to_owned(),
            month: "February".to_owned(),
            photo_count: 210,
            image_url: "/static/images/gallery/wedding-2023.jpg".to_owned(),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_member_search_matches_name_and_email() {
        let directory = Directory::seed();
        let by_name = directory.members(Some("priya"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name.first().unwrap().first_name, "Priya");

        let by_email = directory.members(Some("outlook.com"));
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email.first().unwrap().first_name, "Mahesh");

        assert_eq!(
            directory.members(Some("")).len(),
            directory.member_count(),
            "blank query returns everyone"
        );
    }

    #[test]
    fn test_abroad_members() {
        let directory = Directory::seed();
        let abroad = directory.abroad_members(None);
        assert!(abroad.iter().all(|m| m.is_abroad));
        assert_eq!(abroad.len(), 2);

        let uk = directory.abroad_members(Some("uk"));
        assert_eq!(uk.len(), 1);
        assert_eq!(uk.first().unwrap().first_name, "Jignesh");
    }

    #[test]
    fn test_committee_resolves_member_names() {
        let directory = Directory::seed();
        let committee = directory.committee(None);
        assert!(!committee.is_empty());
        assert_eq!(
            directory.member_name(committee.first().unwrap().member_id),
            "Ramesh Bhikadiya"
        );
        assert_eq!(directory.member_name(MemberId::new(999)), "Unknown Member");
    }

    #[test]
    fn test_committee_search_by_position() {
        let directory = Directory::seed();
        let treasurers = directory.committee(Some("treasurer"));
        assert_eq!(treasurers.len(), 1);
        assert_eq!(treasurers.first().unwrap().department, "Finance");
    }

    #[test]
    fn test_donation_totals() {
        let directory = Directory::seed();
        let donors = directory.donors(None);
        assert_eq!(Directory::donations_total(&donors), 208_000);
        assert_eq!(Directory::donations_total_for_year(&donors, 2024), 97_000);
        assert_eq!(Directory::donations_total_for_year(&donors, 2023), 111_000);
    }

    #[test]
    fn test_donor_search_matches_purpose() {
        let directory = Directory::seed();
        let temple = directory.donors(Some("temple"));
        assert_eq!(temple.len(), 1);
        assert_eq!(temple.first().unwrap().name, "Ramesh Bhikadiya");
    }

    #[test]
    fn test_notices_are_newest_first() {
        let directory = Directory::seed();
        let notices = directory.notices();
        assert!(
            notices
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at)
        );
    }

    #[test]
    fn test_students_filter_by_standard() {
        let directory = Directory::seed();
        let tenth = directory.students(Some("10th Standard"));
        assert_eq!(tenth.len(), 1);
        assert_eq!(directory.students(None).len(), 4);
        assert!(directory.standards().contains(&"12th Science".to_owned()));
    }

    #[test]
    fn test_gallery_filters() {
        let directory = Directory::seed();
        assert_eq!(directory.gallery(Some("2024"), None).len(), 2);
        assert_eq!(directory.gallery(None, Some("diwali")).len(), 1);
        assert_eq!(directory.gallery(Some("2023"), Some("wedding")).len(), 1);
        assert_eq!(directory.gallery_years(), vec!["2024", "2023"]);
    }

    #[test]
    fn test_relative_age_buckets() {
        let now = Utc::now();
        let at = |days: i64| now - Duration::days(days);
        assert_eq!(relative_age(at(0), now), "1 day ago");
        assert_eq!(relative_age(at(1), now), "1 day ago");
        assert_eq!(relative_age(at(4), now), "4 days ago");
        assert_eq!(relative_age(at(8), now), "1 week ago");
        assert_eq!(relative_age(at(15), now), "2 weeks ago");
        assert_eq!(relative_age(at(40), now), "3 weeks ago");
    }
}
