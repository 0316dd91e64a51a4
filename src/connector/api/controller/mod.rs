pub mod create_controller;
pub mod delete_controller;
pub mod read_controller;
pub mod update_controller;

pub use create_controller::CreateController;
pub use delete_controller::DeleteController;
pub use read_controller::ReadController;
pub use update_controller::UpdateController;
