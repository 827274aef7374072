use secrecy::Secret;

/// One of the inputs on the sign-up card, named the way the HTML form names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Password,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::FullName, FormField::Email, FormField::Password];

    /// The label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email Address",
            FormField::Password => "Password",
        }
    }
}

/// What the user has typed into the sign-up card so far. Nothing here is validated;
/// see [`check_submission`](super::check_submission) for that.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    full_name: String,
    email: String,
    password: Secret<String>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: Secret::new(String::new()),
        }
    }
}

impl RegistrationForm {
    /// Replaces the value of `field`. Every other field keeps its value.
    pub fn update(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = Secret::new(value),
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}
