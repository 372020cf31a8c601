use serde::Serialize;
use validation::{
    is_checked, is_email, is_present, is_project_role, is_regular_string, is_url, parse_account_url,
    parse_bool, parse_checkbox, parse_input, parse_number, when, Checked, Validate, ValidationError,
    Validator,
};

use crate::form::IssueForm;

pub const ACCOUNT_URL: &str = "Account URL";
pub const NON_COMMERCIAL: &str = "Non-commercial confirmation";
pub const TEAM_APPLICATION: &str = "Team application";
pub const PROJECT_NAME: &str = "Project name";
pub const SHORT_DESCRIPTION: &str = "Short description";
pub const CONTRIBUTORS: &str = "Number of team members/core contributors";
pub const HOMEPAGE_URL: &str = "Homepage URL";
pub const REPOSITORY_URL: &str = "Repository URL";
pub const NAME: &str = "Name";
pub const EMAIL: &str = "Email";
pub const PROJECT_ROLE: &str = "Project role";
pub const PROFILE_URL: &str = "Profile or website";
pub const ADDITIONAL_COMMENTS: &str = "Additional comments";

/// A submitted application with every answer normalized.
#[derive(Debug, Default, Serialize)]
pub struct Application {
    pub account: String,
    pub non_commercial: bool,
    pub team: bool,
    pub project_name: String,
    pub short_description: String,
    pub contributors: Option<u64>,
    pub homepage_url: String,
    pub repository_url: Option<String>,
    pub name: String,
    pub email: String,
    pub project_role: String,
    pub profile_url: Option<String>,
    pub additional_comments: Option<String>,
}

impl Application {
    /// Validate every section of the form, collecting all errors before
    /// giving up.
    pub fn from_form(form: &IssueForm) -> Result<Application, Vec<ValidationError>> {
        let mut checker = Checker::new(form);
        let mut application = Application::default();

        application.account = checker.text(ACCOUNT_URL, &[&is_present, &parse_account_url]);

        let confirmed = checker.text(NON_COMMERCIAL, &[&parse_checkbox, &is_checked]);
        application.non_commercial = confirmed == "true";

        let team = checker.text(TEAM_APPLICATION, &[&parse_checkbox]);
        application.team = checker.typed(TEAM_APPLICATION, &team, parse_bool).unwrap_or(false);

        application.project_name = checker.text(PROJECT_NAME, &[&is_present, &is_regular_string]);
        application.short_description =
            checker.text(SHORT_DESCRIPTION, &[&is_present, &is_regular_string]);

        // A bad team checkbox is already reported; don't pile a member count error on top.
        let require_count = application.team && !checker.validator.has_error(TEAM_APPLICATION);
        let contributors = checker.text(CONTRIBUTORS, &[&when(require_count, is_present)]);
        if !contributors.is_empty() {
            application.contributors = checker.typed(CONTRIBUTORS, &contributors, parse_number);
        }

        application.homepage_url = checker.text(HOMEPAGE_URL, &[&is_present, &is_url]);
        application.repository_url = non_empty(checker.text(REPOSITORY_URL, &[&is_url]));

        application.name = checker.text(NAME, &[&is_present, &is_regular_string]);
        application.email = checker.text(EMAIL, &[&is_present, &is_email]);
        application.project_role = checker.text(PROJECT_ROLE, &[&is_present, &is_project_role]);
        application.profile_url = non_empty(checker.text(PROFILE_URL, &[&is_url]));
        application.additional_comments =
            non_empty(checker.text(ADDITIONAL_COMMENTS, &[&is_regular_string]));

        checker.validator.into_result().map(|_| application)
    }
}

/// Runs one section at a time through its stages and records the first
/// failure of each section.
struct Checker<'a> {
    form: &'a IssueForm,
    validator: Validator,
}

impl<'a> Checker<'a> {
    fn new(form: &'a IssueForm) -> Self {
        Self {
            form,
            validator: Validator::new(),
        }
    }

    /// Returns the cleaned value, or `""` once a stage has rejected it.
    fn text(&mut self, section: &str, stages: &[&dyn Validate]) -> String {
        let mut value = parse_input(self.form.get(section)).unwrap_or_default();

        for stage in stages {
            match stage.validate(&value) {
                Ok(cleaned) => value = cleaned,
                Err(rejection) => {
                    self.validator.reject(section, rejection);
                    return String::new();
                }
            }
        }

        value
    }

    fn typed<T>(&mut self, section: &str, value: &str, parse: fn(&str) -> Checked<T>) -> Option<T> {
        // Sections that already failed have nothing left to parse.
        if self.validator.has_error(section) {
            return None;
        }

        match parse(value) {
            Ok(parsed) => Some(parsed),
            Err(rejection) => {
                self.validator.reject(section, rejection);
                None
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
