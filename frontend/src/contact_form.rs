use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Sanitary,
    Heating,
    Drainage,
    Solar,
    Emergency,
    Other,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Sanitary,
        ServiceKind::Heating,
        ServiceKind::Drainage,
        ServiceKind::Solar,
        ServiceKind::Emergency,
        ServiceKind::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ServiceKind::Sanitary => "sanitary",
            ServiceKind::Heating => "heating",
            ServiceKind::Drainage => "drainage",
            ServiceKind::Solar => "solar",
            ServiceKind::Emergency => "emergency",
            ServiceKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Sanitary => "Sanitary",
            ServiceKind::Heating => "Heating",
            ServiceKind::Drainage => "Drainage",
            ServiceKind::Solar => "Solar",
            ServiceKind::Emergency => "Emergency",
            ServiceKind::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Phone => "Phone Number",
            ContactField::Service => "Service Required",
            ContactField::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<ServiceKind>,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Service => self.service = ServiceKind::from_value(&value),
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Name,
                message: "Please tell us your name.",
            });
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "We need an email address to reply to.",
            });
        } else if !looks_like_email(email) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "That email address doesn't look right.",
            });
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Please describe your project or issue.",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// First message reported against `field`, for rendering under its input.
pub fn message_for(errors: &[FieldError], field: ContactField) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "John Doe".into());
        form.set(ContactField::Email, "john@example.com".into());
        form.set(ContactField::Message, "Leaking tap in the kitchen".into());
        form
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut form = filled();
        form.set(ContactField::Name, "   ".into());
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, ContactField::Name);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["john", "@example.com", "john@", "a@b@c"] {
            let mut form = filled();
            form.set(ContactField::Email, bad.into());
            assert!(form.validate().is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn message_lookup_picks_the_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            message_for(&errors, ContactField::Email),
            Some("We need an email address to reply to.")
        );
        assert_eq!(message_for(&errors, ContactField::Phone), None);
    }

    #[test]
    fn service_select_maps_to_kind() {
        let mut form = filled();
        form.set(ContactField::Service, "solar".into());
        assert_eq!(form.service, Some(ServiceKind::Solar));
        form.set(ContactField::Service, "".into());
        assert_eq!(form.service, None);
    }

    #[test]
    fn submission_serializes_for_the_log() {
        let mut form = filled();
        form.set(ContactField::Service, "heating".into());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["service"], "heating");
        assert_eq!(json["phone"], "");
    }
}
