pub mod route_node_controller;
pub mod user_controller;

pub use route_node_controller::RouteNodeController;
pub use user_controller::UserController;
