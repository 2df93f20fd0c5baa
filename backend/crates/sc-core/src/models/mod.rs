pub mod category;
pub mod deadline;
pub mod new_project_request;
pub mod project_request;
