use crate::{
    application::{error::ApplicationResult, validation::FieldErrors},
    domain::{
        recipient::{Address, Zipcode},
        shared::{EmailAddress, FullName, required_text},
    },
};

/// Raw recipient fields shared by create and update.
#[derive(Debug, Clone)]
pub struct RecipientInput {
    pub full_name: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub address: String,
    pub zipcode: String,
}

pub(super) struct ValidatedRecipient {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub address: Address,
}

impl RecipientInput {
    pub(super) fn validate(self) -> ApplicationResult<ValidatedRecipient> {
        let full_name = FullName::new(self.full_name);
        let email = EmailAddress::new(self.email);
        let state = required_text("state", self.state);
        let city = required_text("city", self.city);
        let neighborhood = required_text("neighborhood", self.neighborhood);
        let street = required_text("address", self.address);
        let zipcode = Zipcode::new(&self.zipcode);

        FieldErrors::default()
            .check("fullName", &full_name)
            .check("email", &email)
            .check("state", &state)
            .check("city", &city)
            .check("neighborhood", &neighborhood)
            .check("address", &street)
            .check("zipcode", &zipcode)
            .finish()?;

        Ok(ValidatedRecipient {
            full_name: full_name?,
            email: email?,
            address: Address {
                state: state?,
                city: city?,
                neighborhood: neighborhood?,
                street: street?,
                zipcode: zipcode?,
            },
        })
    }
}
