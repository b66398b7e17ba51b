// src/infrastructure/notification/templates.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    PickUp,
    AccountCreated,
}

impl EmailTemplate {
    pub const fn name(self) -> &'static str {
        match self {
            Self::PickUp => "pick-up-template",
            Self::AccountCreated => "account-created-template",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::PickUp => include_str!("../../../templates/pick-up-template.html"),
            Self::AccountCreated => {
                include_str!("../../../templates/account-created-template.html")
            }
        }
    }
}

/// Replaces every `#key#` placeholder with its value. Unknown placeholders stay as they are.
pub fn render(template: EmailTemplate, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.source().to_owned(), |body, (key, value)| {
            body.replace(&format!("#{key}#"), value)
        })
}
