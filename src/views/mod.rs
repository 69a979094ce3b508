//! View modules and lazy loading.
//!
//! # Data Flow
//! ```text
//! RouteMatch (view name)
//!     → loader.rs (cache lookup)
//!     → on miss: async fetch collaborator (code-fetch side effect)
//!     → memoized Arc<ViewModule>, shared by every later navigation
//! ```
//!
//! # Design Decisions
//! - Views are identified by a closed enum, not strings
//! - Loading is keyed per view and runs at most once (load-once-memoize)
//! - Concurrent requests for an in-flight view await the same load
//! - Table construction never touches the loader

pub mod loader;

use serde::{Deserialize, Serialize};

/// Code-split chunk a view ships in. Views in one chunk are fetched
/// together by the fetch collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chunk {
    Main,
    Reset,
    Profile,
    Workouts,
    Admin,
}

/// Every view module the route table can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewName {
    Dashboard,
    LoginOrRegister,
    PasswordResetView,
    ProfileView,
    ProfileDisplay,
    UserInfos,
    UserPreferences,
    ProfileEdition,
    UserInfosEdition,
    UserPictureEdition,
    UserPreferencesEdition,
    StatisticsView,
    WorkoutsView,
    Workout,
    AddWorkout,
    EditWorkout,
    AdminView,
    AdminMenu,
    AdminApplication,
    AdminSports,
    AdminUsers,
    NotFoundView,
}

impl ViewName {
    /// The chunk this view is grouped into.
    pub fn chunk(self) -> Chunk {
        use ViewName::*;
        match self {
            Dashboard | LoginOrRegister | StatisticsView | NotFoundView => Chunk::Main,
            PasswordResetView => Chunk::Reset,
            ProfileView | ProfileDisplay | UserInfos | UserPreferences | ProfileEdition
            | UserInfosEdition | UserPictureEdition | UserPreferencesEdition => Chunk::Profile,
            WorkoutsView | Workout | AddWorkout | EditWorkout => Chunk::Workouts,
            AdminView | AdminMenu | AdminApplication | AdminSports | AdminUsers => Chunk::Admin,
        }
    }
}

/// A resolved, renderable view module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModule {
    pub name: ViewName,
    pub chunk: Chunk,
}

impl ViewModule {
    pub fn new(name: ViewName) -> Self {
        Self {
            name,
            chunk: name.chunk(),
        }
    }
}
