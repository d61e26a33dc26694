/// Which contact field holds the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

/// State for the demo contact form. Submitting only flips a notice; nothing
/// is validated or sent anywhere.
#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: ContactField,
    pub submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: ContactField::Name,
            submitted: false,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = ContactForm::new();
        assert_eq!(form.focus, ContactField::Name);
        form.focus_next();
        assert_eq!(form.focus, ContactField::Email);
        form.focus_next();
        assert_eq!(form.focus, ContactField::Message);
        form.focus_next();
        assert_eq!(form.focus, ContactField::Name);
    }

    #[test]
    fn test_edits_land_in_the_focused_field() {
        let mut form = ContactForm::new();
        form.push_char('a');
        form.focus_next();
        form.push_char('b');
        form.pop_char();
        assert_eq!(form.name, "a");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_submit_only_sets_the_notice() {
        let mut form = ContactForm::new();
        form.push_char('x');
        form.submit();
        assert!(form.submitted);
        assert_eq!(form.name, "x", "submitting does not clear anything");
    }
}
