mod new_project_request;
mod project_request;
