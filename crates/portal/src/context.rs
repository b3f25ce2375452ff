//! Per-request view context.
//!
//! Every template receives a [`PageContext`] built from the session's
//! language and identity. It owns the translator and the role's
//! navigation items, so templates never reach into ambient state.

use parivar_core::{Language, Role, i18n};

use crate::models::CurrentUser;

/// A navigation tab in the portal header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Stable identifier, used for active-tab highlighting in tests.
    pub id: &'static str,
    /// English label; translated at render time.
    pub label: &'static str,
    /// Absolute path the tab links to.
    pub path: &'static str,
}

const NAV_DASHBOARD: NavItem = NavItem {
    id: "dashboard",
    label: "Dashboard",
    path: "/",
};
const NAV_MEMBERS: NavItem = NavItem {
    id: "members",
    label: "Members",
    path: "/members",
};
const NAV_GALLERY: NavItem = NavItem {
    id: "gallery",
    label: "Gallery",
    path: "/gallery",
};
const NAV_STUDENTS: NavItem = NavItem {
    id: "students",
    label: "Students",
    path: "/students",
};
const NAV_NOTIFICATIONS: NavItem = NavItem {
    id: "notifications",
    label: "Notifications",
    path: "/notifications",
};
const NAV_NOTICES: NavItem = NavItem {
    id: "notifications",
    label: "Notices",
    path: "/notifications",
};
const NAV_REGISTRATION: NavItem = NavItem {
    id: "registration",
    label: "Registration",
    path: "/registration",
};

/// The fixed navigation item set for a role.
///
/// Members see the notice board under the softer "Notices" label and get
/// the self-service registration tab instead of member administration.
#[must_use]
pub fn nav_for(role: Role) -> Vec<NavItem> {
    match role {
        Role::SuperAdmin => vec![
            NAV_DASHBOARD,
            NAV_MEMBERS,
            NAV_GALLERY,
            NAV_STUDENTS,
            NAV_NOTIFICATIONS,
        ],
        Role::Admin => vec![NAV_DASHBOARD, NAV_MEMBERS, NAV_GALLERY, NAV_STUDENTS],
        Role::Member => vec![
            NAV_DASHBOARD,
            NAV_REGISTRATION,
            NAV_GALLERY,
            NAV_STUDENTS,
            NAV_NOTICES,
        ],
    }
}

/// View context handed to every template.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Active UI language.
    pub lang: Language,
    /// Logged-in identity, if any.
    pub user: Option<CurrentUser>,
    /// Navigation tabs for the identity's role (empty when logged out).
    pub nav: Vec<NavItem>,
    /// Path of the current request, for active-tab highlighting.
    pub path: String,
}

impl PageContext {
    /// Build the context for one request.
    #[must_use]
    pub fn new(lang: Language, user: Option<CurrentUser>, path: &str) -> Self {
        let nav = user.as_ref().map_or_else(Vec::new, |u| nav_for(u.role));
        Self {
            lang,
            user,
            nav,
            path: path.to_owned(),
        }
    }

    /// Translate an English source string into the active language.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.lang, key)
    }

    /// BCP 47 code for the `<html lang>` attribute.
    #[must_use]
    pub const fn lang_code(&self) -> &'static str {
        self.lang.code()
    }

    /// Label for the language toggle button.
    #[must_use]
    pub const fn lang_toggle_label(&self) -> &'static str {
        self.lang.toggle_label()
    }

    /// Header badge text for the logged-in role, empty when logged out.
    #[must_use]
    pub fn role_label(&self) -> &'static str {
        self.user.as_ref().map_or("", |u| u.role.display_name())
    }

    /// CSS class suffix for the role badge color.
    #[must_use]
    pub fn role_badge_class(&self) -> &'static str {
        match self.user.as_ref().map(|u| u.role) {
            Some(Role::SuperAdmin) => "badge-super-admin",
            Some(Role::Admin) => "badge-admin",
            Some(Role::Member) | None => "badge-member",
        }
    }

    /// Display name of the logged-in user, empty when logged out.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(CurrentUser::display_name)
            .unwrap_or_default()
    }

    /// Whether the logged-in role may manage notices.
    #[must_use]
    pub fn can_create_notice(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.role == Role::SuperAdmin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use parivar_core::{Phone, UserId};

    use super::*;

    fn current_user(role: Role) -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            phone: Phone::parse("+91 98765 43210").unwrap(),
            first_name: Some("Asha".to_owned()),
            last_name: Some("Bhikadiya".to_owned()),
            role,
        }
    }

    #[test]
    fn test_super_admin_navigation() {
        let ids: Vec<&str> = nav_for(Role::SuperAdmin).iter().map(|n| n.id).collect();
        assert_eq!(
            ids,
            vec!["dashboard", "members", "gallery", "students", "notifications"]
        );
    }

    #[test]
    fn test_admin_navigation_has_no_notices() {
        let ids: Vec<&str> = nav_for(Role::Admin).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["dashboard", "members", "gallery", "students"]);
    }

    #[test]
    fn test_member_navigation() {
        let items = nav_for(Role::Member);
        let ids: Vec<&str> = items.iter().map(|n| n.id).collect();
        assert_eq!(
            ids,
            vec!["dashboard", "registration", "gallery", "students", "notifications"]
        );
        // Members see the notice board under the "Notices" label.
        assert_eq!(items.last().unwrap().label, "Notices");
    }

    #[test]
    fn test_logged_out_context_has_no_nav() {
        let ctx = PageContext::new(Language::En, None, "/auth/login");
        assert!(ctx.nav.is_empty());
        assert_eq!(ctx.role_label(), "");
        assert_eq!(ctx.display_name(), "");
        assert!(!ctx.can_create_notice());
    }

    #[test]
    fn test_context_translates() {
        let ctx = PageContext::new(Language::Gu, Some(current_user(Role::Member)), "/");
        assert_eq!(ctx.t("Dashboard"), "ડેશબોર્ડ");
        assert_eq!(ctx.lang_code(), "gu");
    }

    #[test]
    fn test_only_super_admin_creates_notices() {
        for (role, expected) in [
            (Role::SuperAdmin, true),
            (Role::Admin, false),
            (Role::Member, false),
        ] {
            let ctx = PageContext::new(Language::En, Some(current_user(role)), "/notifications");
            assert_eq!(ctx.can_create_notice(), expected);
        }
    }

    #[test]
    fn test_role_badge_classes() {
        let ctx = PageContext::new(Language::En, Some(current_user(Role::SuperAdmin)), "/");
        assert_eq!(ctx.role_badge_class(), "badge-super-admin");
        assert_eq!(ctx.role_label(), "Super Admin");
    }
}
