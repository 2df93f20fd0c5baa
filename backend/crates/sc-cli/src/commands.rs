use sc_core::ProjectRequestForm;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the form and send it to the server
    Submit(FormArgs),

    /// Validate the form without sending it
    Validate(FormArgs),

    /// List suggested project categories
    Categories,
}

/// Fields of the project request form.
///
/// Every field is optional on the command line so that a missing value is
/// reported by form validation alongside the other errors.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub project_name: String,

    /// e.g. Physics, Robotics (see `categories`)
    #[arg(long, default_value = "")]
    pub category: String,

    /// What the project should do (at least 20 characters)
    #[arg(long, default_value = "")]
    pub description: String,

    /// Date the project is needed by (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub deadline: String,

    #[arg(long)]
    pub budget: Option<String>,
}

impl From<FormArgs> for ProjectRequestForm {
    fn from(args: FormArgs) -> Self {
        ProjectRequestForm {
            name: args.name,
            email: args.email,
            phone: args.phone,
            project_name: args.project_name,
            category: args.category,
            description: args.description,
            deadline: args.deadline,
            budget: args.budget.filter(|budget| !budget.trim().is_empty()),
        }
    }
}
