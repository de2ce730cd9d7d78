use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub usuario: String,
    pub senha: String,
}

impl Credentials {
    /// `None` when either field is blank; the password is taken as typed.
    pub fn new(username: &str, password: &str) -> Option<Self> {
        if username.trim().is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            usuario: username.trim().to_string(),
            senha: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub nova_senha: String,
}
