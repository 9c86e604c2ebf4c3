//! Config form state
//!
//! Text fields, field focus and validation for the create/edit popup.
//! Validation failures and backend save rejections both land in
//! `error` - the form owns its error channel, separate from the global
//! fetch error slot.

use dbdump_client::{ConfigPayload, ConnectionParams, DbConfig, OperationKind};

/// Fields of the config form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    DbType,
    Host,
    Port,
    Username,
    Password,
    Database,
    DumpPath,
    RestorePath,
}

impl FormField {
    const ORDER: [FormField; 9] = [
        Self::Name,
        Self::DbType,
        Self::Host,
        Self::Port,
        Self::Username,
        Self::Password,
        Self::Database,
        Self::DumpPath,
        Self::RestorePath,
    ];

    pub fn all() -> &'static [FormField] {
        &Self::ORDER
    }

    pub fn next(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::DbType => "DB type",
            Self::Host => "Host",
            Self::Port => "Port",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Database => "Database",
            Self::DumpPath => "Dump path",
            Self::RestorePath => "Restore path",
        }
    }
}

/// State of the configuration form popup
#[derive(Debug, Clone, Default)]
pub struct ConfigFormState {
    /// Whether the popup is shown
    pub visible: bool,
    /// Set when editing an existing configuration
    pub editing: Option<i64>,
    /// Operation kind toggle
    pub operation: Option<OperationKind>,
    /// Field currently accepting input
    pub focused: FormField,
    /// Validation or backend save error, owned by the form
    pub error: Option<String>,

    pub name: String,
    pub db_type: String,
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub database: String,
    pub dump_path: String,
    pub restore_path: String,
}

impl ConfigFormState {
    /// Open the form with empty fields for creating a configuration
    pub fn open_blank() -> Self {
        Self {
            visible: true,
            operation: Some(OperationKind::Dump),
            ..Self::default()
        }
    }

    /// Open the form prefilled from an existing configuration
    pub fn open_edit(config: &DbConfig) -> Self {
        Self {
            visible: true,
            editing: Some(config.id),
            operation: Some(config.operation),
            focused: FormField::default(),
            error: None,
            name: config.name.clone(),
            db_type: config.db_type.clone(),
            host: config.params.host.clone(),
            port: config.params.port.to_string(),
            username: config.params.username.clone(),
            password: config.params.password.clone().unwrap_or_default(),
            database: config.params.database.clone(),
            dump_path: config.dump_path.clone().unwrap_or_default(),
            restore_path: config.restore_path.clone().unwrap_or_default(),
        }
    }

    /// Mutable access to the focused field's text
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Name => &mut self.name,
            FormField::DbType => &mut self.db_type,
            FormField::Host => &mut self.host,
            FormField::Port => &mut self.port,
            FormField::Username => &mut self.username,
            FormField::Password => &mut self.password,
            FormField::Database => &mut self.database,
            FormField::DumpPath => &mut self.dump_path,
            FormField::RestorePath => &mut self.restore_path,
        }
    }

    /// Read access to a field's text for rendering
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::DbType => &self.db_type,
            FormField::Host => &self.host,
            FormField::Port => &self.port,
            FormField::Username => &self.username,
            FormField::Password => &self.password,
            FormField::Database => &self.database,
            FormField::DumpPath => &self.dump_path,
            FormField::RestorePath => &self.restore_path,
        }
    }

    /// Validate the fields and build the save payload
    ///
    /// Returns a user-facing message on the first validation failure.
    pub fn draft(&self) -> Result<ConfigPayload, String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.db_type.trim().is_empty() {
            return Err("db type must not be empty".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        let port: u16 = self
            .port
            .trim()
            .parse()
            .map_err(|_| format!("port '{}' is not a number", self.port.trim()))?;
        if self.database.trim().is_empty() {
            return Err("database must not be empty".to_string());
        }

        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Ok(ConfigPayload {
            name: self.name.trim().to_string(),
            db_type: self.db_type.trim().to_string(),
            operation: self.operation.unwrap_or(OperationKind::Dump),
            params: ConnectionParams {
                host: self.host.trim().to_string(),
                port,
                username: self.username.trim().to_string(),
                password: optional(&self.password),
                database: self.database.trim().to_string(),
            },
            dump_path: optional(&self.dump_path),
            restore_path: optional(&self.restore_path),
            run_path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ConfigFormState {
        let mut form = ConfigFormState::open_blank();
        form.name = "staging".into();
        form.db_type = "postgres".into();
        form.host = "db.internal".into();
        form.port = "5432".into();
        form.username = "admin".into();
        form.database = "app".into();
        form
    }

    #[test]
    fn test_draft_valid() {
        let payload = filled_form().draft().unwrap();
        assert_eq!(payload.name, "staging");
        assert_eq!(payload.params.port, 5432);
        assert_eq!(payload.operation, OperationKind::Dump);
        assert!(payload.params.password.is_none());
    }

    #[test]
    fn test_draft_rejects_bad_port() {
        let mut form = filled_form();
        form.port = "54x2".into();
        let err = form.draft().unwrap_err();
        assert!(err.contains("port"));
    }

    #[test]
    fn test_draft_rejects_empty_name() {
        let mut form = filled_form();
        form.name = "  ".into();
        assert!(form.draft().is_err());
    }

    #[test]
    fn test_field_order_wraps() {
        assert_eq!(FormField::RestorePath.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::RestorePath);
    }

    #[test]
    fn test_open_edit_prefills() {
        use dbdump_client::{ConnectionParams, DbConfig};
        let config = DbConfig {
            id: 4,
            name: "prod".into(),
            db_type: "mysql".into(),
            operation: OperationKind::Restore,
            params: ConnectionParams {
                host: "h".into(),
                port: 3306,
                username: "u".into(),
                password: Some("secret".into()),
                database: "d".into(),
            },
            dump_path: None,
            restore_path: Some("/restore".into()),
            run_path: None,
        };
        let form = ConfigFormState::open_edit(&config);
        assert!(form.visible);
        assert_eq!(form.editing, Some(4));
        assert_eq!(form.port, "3306");
        assert_eq!(form.password, "secret");
        assert_eq!(form.restore_path, "/restore");
    }
}
