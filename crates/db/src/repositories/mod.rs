pub mod activity_repo;
pub mod line_item_repo;
pub mod lookup_repo;
pub mod progress_repo;
pub mod project_repo;
pub mod session_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use line_item_repo::LineItemRepo;
pub use lookup_repo::LookupRepo;
pub use progress_repo::ProgressRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
