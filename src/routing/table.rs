//! The application route table.
//!
//! Declares every reachable path: authentication screens, the profile
//! subtree (display and edit modes, each with a default "infos" child),
//! workouts, statistics, the administration subtree, and a final
//! catch-all mapped to the not-found view. Built once at startup.

use crate::routing::matcher::RouteTable;
use crate::routing::node::{PropValue, RouteNode};
use crate::routing::tabs::tab_from_path;
use crate::views::ViewName;

fn profile_tab_props(path: &str) -> Vec<(String, PropValue)> {
    vec![("tab".to_string(), PropValue::Text(tab_from_path(path)))]
}

/// Build the full route tree.
///
/// Structural invariants (unique names, default children, catch-all) are
/// checked by `RouteTable::new`; this table upholds them by construction.
pub fn routes() -> RouteTable {
    let roots = vec![
        RouteNode::new("/", "Dashboard", ViewName::Dashboard),
        RouteNode::new("/login", "Login", ViewName::LoginOrRegister)
            .props_static(&[("action", PropValue::text("login"))]),
        RouteNode::new("/register", "Register", ViewName::LoginOrRegister)
            .props_static(&[("action", PropValue::text("register"))]),
        RouteNode::new("/password-reset/sent", "PasswordEmailSent", ViewName::PasswordResetView)
            .props_static(&[("action", PropValue::text("request-sent"))]),
        RouteNode::new("/password-reset/request", "PasswordResetRequest", ViewName::PasswordResetView)
            .props_static(&[("action", PropValue::text("reset-request"))]),
        RouteNode::new("/password-reset/password-updated", "PasswordUpdated", ViewName::PasswordResetView)
            .props_static(&[("action", PropValue::text("password-updated"))]),
        RouteNode::new("/password-reset", "PasswordReset", ViewName::PasswordResetView)
            .props_static(&[("action", PropValue::text("reset"))]),
        RouteNode::new("/profile", "Profile", ViewName::ProfileView)
            .child(
                RouteNode::new("", "UserProfile", ViewName::ProfileDisplay)
                    .props_derived(profile_tab_props)
                    .child(RouteNode::new("", "UserInfos", ViewName::UserInfos))
                    .child(RouteNode::new("preferences", "UserPreferences", ViewName::UserPreferences)),
            )
            .child(
                RouteNode::new("edit", "UserProfileEdition", ViewName::ProfileEdition)
                    .props_derived(profile_tab_props)
                    .child(RouteNode::new("", "UserInfosEdition", ViewName::UserInfosEdition))
                    .child(RouteNode::new("picture", "UserPictureEdition", ViewName::UserPictureEdition))
                    .child(RouteNode::new("preferences", "UserPreferencesEdition", ViewName::UserPreferencesEdition)),
            ),
        RouteNode::new("/statistics", "Statistics", ViewName::StatisticsView),
        RouteNode::new("/workouts", "Workouts", ViewName::WorkoutsView),
        RouteNode::new("/workouts/:workoutId", "Workout", ViewName::Workout)
            .props_static(&[("displaySegment", PropValue::Flag(false))]),
        RouteNode::new("/workouts/:workoutId/edit", "EditWorkout", ViewName::EditWorkout),
        RouteNode::new("/workouts/:workoutId/segment/:segmentId", "WorkoutSegment", ViewName::Workout)
            .props_static(&[("displaySegment", PropValue::Flag(true))]),
        RouteNode::new("/workouts/add", "AddWorkout", ViewName::AddWorkout),
        RouteNode::new("/admin", "Administration", ViewName::AdminView)
            .child(RouteNode::new("", "AdministrationMenu", ViewName::AdminMenu))
            .child(RouteNode::new("application", "ApplicationAdministration", ViewName::AdminApplication))
            .child(
                RouteNode::new("application/edit", "ApplicationAdministrationEdition", ViewName::AdminApplication)
                    .props_static(&[("edition", PropValue::Flag(true))]),
            )
            .child(RouteNode::new("sports", "SportsAdministration", ViewName::AdminSports))
            .child(RouteNode::new("users", "UsersAdministration", ViewName::AdminUsers)),
        RouteNode::new("/*", "not-found", ViewName::NotFoundView),
    ];

    match RouteTable::new(roots) {
        Ok(table) => table,
        Err(err) => unreachable!("static route table is valid by construction: {err}"),
    }
}
