//! Form editing state types.
//!
//! Sign in, register and account forms share one field layout; the lists
//! screen has a single-field name form. Text entry goes through
//! `tui_textarea` so cursor movement and deletion behave like any editor.

use crate::api::{AccountParams, AuthenticatedUser, SignInParams};
use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

const PASSWORD_MASK: char = '•';

/// Build a single-line input holding `text`.
///
pub fn text_input(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::from(vec![text.to_string()]);
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

/// Content of a single-line input.
///
pub fn input_text(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("")
}

/// Specifying which auth form is shown.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormKind {
    SignIn,
    Register,
    Account,
}

/// Specifying form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email address",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm password",
        }
    }
}

impl FormKind {
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            FormKind::SignIn => &[FormField::Email, FormField::Password],
            FormKind::Register | FormKind::Account => &[
                FormField::Name,
                FormField::Email,
                FormField::Password,
                FormField::ConfirmPassword,
            ],
        }
    }
}

/// Sign in, register or account form.
///
#[derive(Debug, Clone)]
pub struct AuthForm {
    kind: FormKind,
    name: TextArea<'static>,
    email: TextArea<'static>,
    password: TextArea<'static>,
    confirm_password: TextArea<'static>,
    focused: usize,
    pub submit_loading: bool,
    pub error: Option<String>,
    /// Account deletion awaiting a second keypress
    pub confirm_delete: bool,
}

impl AuthForm {
    pub fn new(kind: FormKind) -> Self {
        let mut password = TextArea::default();
        password.set_mask_char(PASSWORD_MASK);
        let mut confirm_password = TextArea::default();
        confirm_password.set_mask_char(PASSWORD_MASK);
        AuthForm {
            kind,
            name: TextArea::default(),
            email: TextArea::default(),
            password,
            confirm_password,
            focused: 0,
            submit_loading: false,
            error: None,
            confirm_delete: false,
        }
    }

    /// Account form prefilled with the viewer's details.
    ///
    pub fn account(user: &AuthenticatedUser) -> Self {
        AuthForm {
            name: text_input(&user.name),
            email: text_input(&user.email),
            ..AuthForm::new(FormKind::Account)
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn focused_field(&self) -> FormField {
        let fields = self.kind.fields();
        fields[self.focused.min(fields.len() - 1)]
    }

    pub fn next_field(&mut self) -> &mut Self {
        self.focused = (self.focused + 1) % self.kind.fields().len();
        self
    }

    pub fn previous_field(&mut self) -> &mut Self {
        let len = self.kind.fields().len();
        self.focused = (self.focused + len - 1) % len;
        self
    }

    pub fn input(&self, field: FormField) -> &TextArea<'static> {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut TextArea<'static> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn value(&self, field: FormField) -> String {
        input_text(self.input(field))
    }

    /// Forward a key to the focused field.
    ///
    pub fn handle_key(&mut self, key: KeyEvent) {
        let field = self.focused_field();
        self.input_mut(field).input(key);
    }

    /// Validate and build the sign-in body.
    ///
    pub fn sign_in_params(&self) -> Result<SignInParams, String> {
        self.require(&[FormField::Email, FormField::Password])?;
        Ok(SignInParams {
            email: self.value(FormField::Email).trim().to_string(),
            password: self.value(FormField::Password),
        })
    }

    /// Validate and build the register or account-update body.
    ///
    pub fn account_params(&self) -> Result<AccountParams, String> {
        self.require(&[FormField::Name, FormField::Email, FormField::Password])?;
        if self.value(FormField::Password) != self.value(FormField::ConfirmPassword) {
            return Err("Passwords do not match".to_string());
        }
        Ok(AccountParams {
            name: self.value(FormField::Name).trim().to_string(),
            email: self.value(FormField::Email).trim().to_string(),
            password: self.value(FormField::Password),
        })
    }

    fn require(&self, fields: &[FormField]) -> Result<(), String> {
        match fields
            .iter()
            .find(|field| self.value(**field).trim().is_empty())
        {
            Some(field) => Err(format!("{} is required", field.label())),
            None => Ok(()),
        }
    }
}

/// Specifying what the list name form does on submit.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ListFormMode {
    Create,
    Rename { id: String },
}

/// Name form of the lists screen.
///
#[derive(Debug, Clone)]
pub struct ListForm {
    pub mode: ListFormMode,
    pub name: TextArea<'static>,
    pub submit_loading: bool,
    pub error: Option<String>,
}

impl ListForm {
    pub fn create() -> Self {
        ListForm {
            mode: ListFormMode::Create,
            name: TextArea::default(),
            submit_loading: false,
            error: None,
        }
    }

    pub fn rename(id: &str, name: &str) -> Self {
        ListForm {
            mode: ListFormMode::Rename { id: id.to_string() },
            name: text_input(name),
            submit_loading: false,
            error: None,
        }
    }

    pub fn value(&self) -> String {
        input_text(&self.name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_text(form: &mut AuthForm, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn filled(kind: FormKind, values: &[&str]) -> AuthForm {
        let mut form = AuthForm::new(kind);
        for value in values {
            type_text(&mut form, value);
            form.next_field();
        }
        form
    }

    #[test]
    fn test_field_cycling() {
        let mut form = AuthForm::new(FormKind::SignIn);
        assert_eq!(form.focused_field(), FormField::Email);
        form.next_field();
        assert_eq!(form.focused_field(), FormField::Password);
        form.next_field();
        assert_eq!(form.focused_field(), FormField::Email);
        form.previous_field();
        assert_eq!(form.focused_field(), FormField::Password);
    }

    #[test]
    fn test_sign_in_params() {
        let form = filled(FormKind::SignIn, &["ada@example.com", "secret"]);
        assert_eq!(
            form.sign_in_params(),
            Ok(SignInParams {
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn test_required_fields() {
        let form = filled(FormKind::SignIn, &["ada@example.com"]);
        assert_eq!(
            form.sign_in_params(),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn test_passwords_must_match() {
        let form = filled(
            FormKind::Register,
            &["Ada", "ada@example.com", "secret", "secrets"],
        );
        assert_eq!(
            form.account_params(),
            Err("Passwords do not match".to_string())
        );

        let form = filled(
            FormKind::Register,
            &["Ada", "ada@example.com", "secret", "secret"],
        );
        assert_eq!(form.account_params().unwrap().name, "Ada");
    }

    #[test]
    fn test_account_form_prefilled() {
        let user = AuthenticatedUser {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let form = AuthForm::account(&user);
        assert_eq!(form.kind(), FormKind::Account);
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.value(FormField::Email), "ada@example.com");
        assert_eq!(form.value(FormField::Password), "");
    }

    #[test]
    fn test_list_form_value_trimmed() {
        let form = ListForm::rename("l1", "  Favourites ");
        assert_eq!(form.value(), "Favourites");
        assert_eq!(
            form.mode,
            ListFormMode::Rename {
                id: "l1".to_string()
            }
        );
    }
}
