mod guards;
pub use guards::{ProtectedLayout, PublicOnlyLayout};

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod home;
pub use home::Home;

mod browse;
pub use browse::Browse;

mod saved;
pub use saved::Saved;

mod starred;
pub use starred::Starred;

mod notifications;
pub use notifications::Notifications;

mod create_project;
pub use create_project::CreateProject;

mod developer_profile;
pub use developer_profile::DeveloperProfile;

mod project_detail;
pub use project_detail::ProjectDetail;

mod not_found;
pub use not_found::NotFound;
